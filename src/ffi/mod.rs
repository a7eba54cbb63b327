#[cfg(feature = "system_gl")]
pub mod exports;
#[cfg(any(feature = "system_gl", test))]
pub mod types;
