//! glcache
//!
//! Client-side shadow of fixed-function GL state. Each GL call is compared
//! with the value last sent to the device and dropped if nothing changed.
//!
//! Rust renderers own a `GlContext` per GL context; C hosts link the
//! staticlib and use the `glc_*` exports (feature `system_gl`).
//!
//! Design rule: keep this file thin.

mod ffi;
pub mod render;
pub mod util;

#[cfg(feature = "system_gl")]
pub use ffi::exports::*;
pub use render::cache::GlStateCache;
pub use render::device::recording::{GlCall, RecordingDevice};
pub use render::device::GlDevice;
pub use render::GlContext;
pub use util::config::CacheConfig;
