use crate::render::device::GlDevice;
use crate::render::gl::{GLenum, GLfloat, GLint, GLpointer, GLsizei, GLuint};

#[cfg_attr(all(target_os = "linux", not(feature = "gles")), link(name = "GL"))]
#[cfg_attr(all(target_os = "android", feature = "gles"), link(name = "GLESv1_CM"))]
#[cfg_attr(target_os = "macos", link(name = "OpenGL", kind = "framework"))]
extern "C" {
    fn glEnable(cap: GLenum);
    fn glDisable(cap: GLenum);
    #[cfg(not(feature = "ps3"))]
    fn glIsEnabled(cap: GLenum) -> u8;
    fn glEnableClientState(array: GLenum);
    fn glDisableClientState(array: GLenum);
    fn glBindTexture(target: GLenum, texture: GLuint);
    fn glDeleteTextures(n: GLsizei, textures: *const GLuint);
    fn glBindBuffer(target: GLenum, buffer: GLuint);
    fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint);
    fn glMatrixMode(mode: GLenum);
    fn glBlendFunc(sfactor: GLenum, dfactor: GLenum);
    fn glBlendEquation(mode: GLenum);
    fn glColor4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn glTexEnvi(target: GLenum, pname: GLenum, param: GLint);
    fn glTexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    fn glVertexPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer);
    fn glColorPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer);
    fn glTexCoordPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer);
    fn glPixelStorei(pname: GLenum, param: GLint);
}

/// The platform GL library.
///
/// Safety: the host must have a GL context current on the calling thread for
/// as long as this device is used. Pointer arguments are handed to GL as-is.
pub struct SystemGl {
    _not_send: core::marker::PhantomData<*const ()>,
}

impl SystemGl {
    pub fn new() -> Self {
        Self { _not_send: core::marker::PhantomData }
    }
}

impl Default for SystemGl {
    fn default() -> Self {
        Self::new()
    }
}

impl GlDevice for SystemGl {
    fn enable(&mut self, cap: GLenum) {
        unsafe { glEnable(cap) }
    }

    fn disable(&mut self, cap: GLenum) {
        unsafe { glDisable(cap) }
    }

    #[cfg(not(feature = "ps3"))]
    fn is_enabled(&mut self, cap: GLenum) -> bool {
        unsafe { glIsEnabled(cap) != 0 }
    }

    #[cfg(feature = "ps3")]
    fn is_enabled(&mut self, cap: GLenum) -> bool {
        log::error!("glIsEnabled unsupported on this platform (cap {:#06x})", cap);
        panic!("glIsEnabled unsupported (cap {:#06x})", cap);
    }

    fn enable_client_state(&mut self, array: GLenum) {
        unsafe { glEnableClientState(array) }
    }

    fn disable_client_state(&mut self, array: GLenum) {
        unsafe { glDisableClientState(array) }
    }

    fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        unsafe { glBindTexture(target, texture) }
    }

    fn delete_textures(&mut self, textures: &[GLuint]) {
        unsafe { glDeleteTextures(textures.len() as GLsizei, textures.as_ptr()) }
    }

    fn bind_buffer(&mut self, target: GLenum, buffer: GLuint) {
        unsafe { glBindBuffer(target, buffer) }
    }

    fn delete_buffers(&mut self, buffers: &[GLuint]) {
        unsafe { glDeleteBuffers(buffers.len() as GLsizei, buffers.as_ptr()) }
    }

    fn matrix_mode(&mut self, mode: GLenum) {
        unsafe { glMatrixMode(mode) }
    }

    fn blend_func(&mut self, sfactor: GLenum, dfactor: GLenum) {
        unsafe { glBlendFunc(sfactor, dfactor) }
    }

    fn blend_equation(&mut self, mode: GLenum) {
        unsafe { glBlendEquation(mode) }
    }

    fn color4f(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { glColor4f(red, green, blue, alpha) }
    }

    fn tex_envi(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        unsafe { glTexEnvi(target, pname, param) }
    }

    fn tex_envfv(&mut self, target: GLenum, pname: GLenum, params: &[GLfloat; 4]) {
        unsafe { glTexEnvfv(target, pname, params.as_ptr()) }
    }

    fn vertex_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        unsafe { glVertexPointer(size, ty, stride, pointer) }
    }

    fn color_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        unsafe { glColorPointer(size, ty, stride, pointer) }
    }

    fn tex_coord_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        unsafe { glTexCoordPointer(size, ty, stride, pointer) }
    }

    fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        unsafe { glPixelStorei(pname, param) }
    }
}
