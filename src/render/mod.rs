pub mod cache;
pub mod device;
pub mod gl;

use crate::render::cache::pointers::{PointerKind, PointerState};
use crate::render::cache::{caps, GlStateCache};
use crate::render::device::GlDevice;
use crate::render::gl::{GLenum, GLfloat, GLint, GLpointer, GLsizei, GLuint};
use crate::util::config::CacheConfig;

/// Per-context GL front end used by the rest of the renderer.
///
/// One method per GL entry point. With the cache on, the call goes through
/// `GlStateCache` and only reaches the device on a change; with it off (or
/// the pointer hack on, for pointer calls) the call goes straight to the
/// device. Either way the submitted value is written to the cache, so the
/// cache always holds the last value the device received.
pub struct GlContext<D: GlDevice> {
    device: D,
    cache: GlStateCache,
    config: CacheConfig,
}

impl<D: GlDevice> GlContext<D> {
    /// `device` must be in its freshly created state.
    pub fn new(device: D, config: CacheConfig) -> Self {
        log::debug!(
            "gl state cache: use_cache={} pointer_state_hack={}",
            config.use_cache,
            config.pointer_state_hack
        );
        Self { device, cache: GlStateCache::new(), config }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn cache(&self) -> &GlStateCache {
        &self.cache
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn set_use_cache(&mut self, on: bool) {
        self.config.use_cache = on;
    }

    pub fn set_pointer_state_hack(&mut self, on: bool) {
        self.config.pointer_state_hack = on;
    }

    /// The device context was recreated; it is back at its defaults.
    pub fn context_recreated(&mut self) {
        log::info!("gl context recreated; state cache reset");
        self.cache.reset();
    }

    /// Last submitted current color.
    pub fn color(&self) -> [GLfloat; 4] {
        self.cache.fixed.color()
    }

    #[inline]
    fn cached(&self) -> bool {
        self.config.use_cache
    }

    #[inline]
    fn pointers_cached(&self) -> bool {
        self.config.use_cache && !self.config.pointer_state_hack
    }

    pub fn matrix_mode(&mut self, mode: GLenum) {
        if self.cached() {
            self.cache.fixed.set_matrix_mode(&mut self.device, mode);
        } else {
            self.cache.fixed.record_matrix_mode(mode);
            self.device.matrix_mode(mode);
        }
    }

    pub fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        if self.cached() {
            self.cache.textures.bind(&mut self.device, target, texture);
        } else {
            self.cache.textures.record(target, texture);
            self.device.bind_texture(target, texture);
        }
    }

    pub fn delete_textures(&mut self, textures: &[GLuint]) {
        if self.cached() {
            self.cache.textures.delete(&mut self.device, textures);
        } else {
            self.cache.textures.forget(textures);
            self.device.delete_textures(textures);
        }
    }

    pub fn bind_buffer(&mut self, target: GLenum, buffer: GLuint) {
        if self.cached() {
            self.cache.bind_buffer(&mut self.device, target, buffer);
        } else {
            self.cache.record_bind_buffer(target, buffer);
            self.device.bind_buffer(target, buffer);
        }
    }

    pub fn delete_buffers(&mut self, buffers: &[GLuint]) {
        if self.cached() {
            self.cache.delete_buffers(&mut self.device, buffers);
        } else {
            self.cache.forget_buffers(buffers);
            self.device.delete_buffers(buffers);
        }
    }

    pub fn blend_func(&mut self, sfactor: GLenum, dfactor: GLenum) {
        if self.cached() {
            self.cache.fixed.set_blend_func(&mut self.device, sfactor, dfactor);
        } else {
            self.cache.fixed.record_blend_func(sfactor, dfactor);
            self.device.blend_func(sfactor, dfactor);
        }
    }

    pub fn blend_equation(&mut self, mode: GLenum) {
        if self.cached() {
            self.cache.fixed.set_blend_equation(&mut self.device, mode);
        } else {
            self.cache.fixed.record_blend_equation(mode);
            self.device.blend_equation(mode);
        }
    }

    pub fn enable(&mut self, cap: GLenum) {
        self.set_capability(cap, true);
    }

    pub fn disable(&mut self, cap: GLenum) {
        self.set_capability(cap, false);
    }

    fn set_capability(&mut self, cap: GLenum, enabled: bool) {
        if self.cached() {
            self.cache.caps.set(&mut self.device, cap, enabled);
        } else {
            self.cache.caps.record(cap, enabled);
            if enabled {
                self.device.enable(cap);
            } else {
                self.device.disable(cap);
            }
        }
    }

    pub fn is_enabled(&mut self, cap: GLenum) -> bool {
        if self.cached() {
            self.cache.caps.is_enabled(&mut self.device, cap)
        } else {
            caps::query_device(&mut self.device, cap)
        }
    }

    pub fn enable_client_state(&mut self, array: GLenum) {
        self.set_client_state(array, true);
    }

    pub fn disable_client_state(&mut self, array: GLenum) {
        self.set_client_state(array, false);
    }

    fn set_client_state(&mut self, array: GLenum, enabled: bool) {
        if self.cached() {
            self.cache.client_arrays.set(&mut self.device, array, enabled);
        } else {
            self.cache.client_arrays.record(array, enabled);
            if enabled {
                self.device.enable_client_state(array);
            } else {
                self.device.disable_client_state(array);
            }
        }
    }

    pub fn tex_envi(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        if self.cached() {
            self.cache.fixed.set_tex_envi(&mut self.device, target, pname, param);
        } else {
            self.cache.fixed.record_tex_envi(target, pname, param);
            self.device.tex_envi(target, pname, param);
        }
    }

    pub fn tex_envfv(&mut self, target: GLenum, pname: GLenum, params: &[GLfloat; 4]) {
        if self.cached() {
            self.cache.fixed.set_tex_envfv(&mut self.device, target, pname, params);
        } else {
            self.cache.fixed.record_tex_envfv(target, pname, params);
            self.device.tex_envfv(target, pname, params);
        }
    }

    pub fn color4f(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        let color = [red, green, blue, alpha];
        if self.cached() {
            self.cache.fixed.set_color(&mut self.device, color);
        } else {
            self.cache.fixed.record_color(color);
            self.device.color4f(red, green, blue, alpha);
        }
    }

    pub fn vertex_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        self.set_pointer(PointerKind::Vertex, PointerState::new(size, ty, stride, pointer));
    }

    pub fn color_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        self.set_pointer(PointerKind::Color, PointerState::new(size, ty, stride, pointer));
    }

    pub fn tex_coord_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        self.set_pointer(PointerKind::TexCoord, PointerState::new(size, ty, stride, pointer));
    }

    fn set_pointer(&mut self, kind: PointerKind, state: PointerState) {
        if self.pointers_cached() {
            self.cache.pointers.set(&mut self.device, kind, state);
            return;
        }

        self.cache.pointers.record(kind, state);
        let PointerState { size, ty, stride, pointer } = state;
        match kind {
            PointerKind::Vertex => self.device.vertex_pointer(size, ty, stride, pointer),
            PointerKind::Color => self.device.color_pointer(size, ty, stride, pointer),
            PointerKind::TexCoord => self.device.tex_coord_pointer(size, ty, stride, pointer),
        }
    }

    pub fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        if self.cached() {
            self.cache.pixel_store.set(&mut self.device, pname, param);
        } else {
            self.cache.pixel_store.record(pname, param);
            self.device.pixel_storei(pname, param);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::device::recording::{GlCall, RecordingDevice};

    fn context(config: CacheConfig) -> GlContext<RecordingDevice> {
        GlContext::new(RecordingDevice::new(), config)
    }

    const UNCACHED: CacheConfig = CacheConfig { use_cache: false, pointer_state_hack: false };

    #[test]
    fn cache_off_forwards_every_call() {
        let mut ctx = context(UNCACHED);
        ctx.enable(gl::BLEND);
        ctx.enable(gl::BLEND);
        ctx.matrix_mode(gl::MODELVIEW);
        ctx.matrix_mode(gl::MODELVIEW);
        ctx.bind_texture(gl::TEXTURE_2D, 1);
        ctx.bind_texture(gl::TEXTURE_2D, 1);
        assert_eq!(ctx.device().len(), 6);
    }

    #[test]
    fn color_is_tracked_on_the_uncached_path() {
        let mut ctx = context(UNCACHED);
        ctx.color4f(0.5, 0.25, 1.0, 1.0);
        assert_eq!(ctx.color(), [0.5, 0.25, 1.0, 1.0]);
        assert_eq!(ctx.device().calls(), &[GlCall::Color4f([0.5, 0.25, 1.0, 1.0])]);
    }

    #[test]
    fn reenabling_the_cache_trusts_bypassed_writes() {
        let mut ctx = context(UNCACHED);
        ctx.enable(gl::BLEND);
        ctx.blend_func(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        ctx.set_use_cache(true);
        ctx.device_mut().clear();
        ctx.enable(gl::BLEND);
        ctx.blend_func(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        assert!(ctx.device().is_empty());
    }

    #[test]
    fn pointer_hack_bypasses_only_pointers() {
        let mut ctx = context(CacheConfig { use_cache: true, pointer_state_hack: true });
        let data = [0f32; 8];
        let p = data.as_ptr() as GLpointer;
        ctx.vertex_pointer(2, gl::FLOAT, 0, p);
        ctx.vertex_pointer(2, gl::FLOAT, 0, p);
        ctx.enable(gl::TEXTURE_2D);
        ctx.enable(gl::TEXTURE_2D);
        assert_eq!(ctx.device().len(), 3);
        assert_eq!(ctx.cache().pointers().get(PointerKind::Vertex).map(|s| s.pointer), Some(p));
    }

    #[cfg(not(feature = "ps3"))]
    #[test]
    fn is_enabled_without_cache_queries_device() {
        let mut ctx = context(UNCACHED);
        ctx.enable(gl::FOG);
        assert!(ctx.is_enabled(gl::FOG));
        assert_eq!(ctx.device().last(), Some(&GlCall::IsEnabled(gl::FOG)));
    }

    #[test]
    fn uncached_delete_still_clears_binding() {
        let mut ctx = context(UNCACHED);
        ctx.bind_texture(gl::TEXTURE_2D, 4);
        ctx.delete_textures(&[4]);
        assert_eq!(ctx.cache().textures().get(gl::TEXTURE_2D), Some(0));
    }

    #[test]
    fn context_recreated_forgets_state() {
        let mut ctx = context(CacheConfig::default());
        ctx.enable(gl::SCISSOR_TEST);
        ctx.context_recreated();
        ctx.device_mut().clear();
        ctx.enable(gl::SCISSOR_TEST);
        assert_eq!(ctx.device().calls(), &[GlCall::Enable(gl::SCISSOR_TEST)]);
    }
}
