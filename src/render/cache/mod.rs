pub mod bindings;
pub mod caps;
pub mod params;
pub mod pointers;
pub mod slots;

use crate::render::device::GlDevice;
use crate::render::gl::{self, GLenum, GLuint};

use bindings::{BufferBindings, TextureBindings};
use caps::{Capabilities, ClientArrays};
use params::{FixedFunction, PixelStore};
use pointers::Pointers;

/// Client-side shadow of one GL context's state.
///
/// Every category starts at the GL documented defaults, so a cache built for
/// a fresh context agrees with the device before the first call. Not `Sync`:
/// a GL context is driven from one thread.
///
/// Categories are read-only from outside the crate. Buffer bindings in
/// particular only change through `bind_buffer` and `delete_buffers`, which
/// keep the pointer caches in step with the array buffer:
///
/// ```compile_fail
/// let cache = glcache::GlStateCache::new();
/// let _ = cache.buffers;
/// ```
#[derive(Clone, Debug, Default)]
pub struct GlStateCache {
    pub(crate) caps: Capabilities,
    pub(crate) client_arrays: ClientArrays,
    pub(crate) textures: TextureBindings,
    pub(crate) buffers: BufferBindings,
    pub(crate) fixed: FixedFunction,
    pub(crate) pixel_store: PixelStore,
    pub(crate) pointers: Pointers,
}

impl GlStateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn caps(&self) -> &Capabilities {
        &self.caps
    }

    pub fn client_arrays(&self) -> &ClientArrays {
        &self.client_arrays
    }

    pub fn textures(&self) -> &TextureBindings {
        &self.textures
    }

    pub fn buffers(&self) -> &BufferBindings {
        &self.buffers
    }

    pub fn fixed(&self) -> &FixedFunction {
        &self.fixed
    }

    pub fn pixel_store(&self) -> &PixelStore {
        &self.pixel_store
    }

    pub fn pointers(&self) -> &Pointers {
        &self.pointers
    }

    /// Back to the defaults of a freshly created context.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn bind_buffer(&mut self, dev: &mut impl GlDevice, target: GLenum, buffer: GLuint) {
        if self.buffers.bind(dev, target, buffer) && target == gl::ARRAY_BUFFER {
            self.pointers.invalidate();
        }
    }

    pub fn record_bind_buffer(&mut self, target: GLenum, buffer: GLuint) {
        if target == gl::ARRAY_BUFFER && self.buffers.array_buffer() != buffer {
            self.pointers.invalidate();
        }
        self.buffers.record(target, buffer);
    }

    /// Deleting the bound array buffer rebinds it to 0, which moves the
    /// pointers just like an explicit bind would.
    pub fn delete_buffers(&mut self, dev: &mut impl GlDevice, buffers: &[GLuint]) {
        self.forget_buffers(buffers);
        dev.delete_buffers(buffers);
    }

    pub fn forget_buffers(&mut self, buffers: &[GLuint]) {
        let array_buffer = self.buffers.array_buffer();
        self.buffers.forget(buffers);
        if self.buffers.array_buffer() != array_buffer {
            self.pointers.invalidate();
        }
    }
}
