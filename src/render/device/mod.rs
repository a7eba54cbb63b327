pub mod recording;
#[cfg(feature = "system_gl")]
pub mod system;

use crate::render::gl::{GLenum, GLfloat, GLint, GLpointer, GLsizei, GLuint};

/// The GL entry points the state cache sits in front of.
///
/// Design rule: only `render/device/*` can touch platform APIs. Every method
/// is a plain forward with the caller's arguments; none of them can fail.
pub trait GlDevice {
    fn enable(&mut self, cap: GLenum);
    fn disable(&mut self, cap: GLenum);

    /// Ask the device directly. Only reached for capabilities without a slot.
    fn is_enabled(&mut self, cap: GLenum) -> bool;

    fn enable_client_state(&mut self, array: GLenum);
    fn disable_client_state(&mut self, array: GLenum);

    fn bind_texture(&mut self, target: GLenum, texture: GLuint);
    fn delete_textures(&mut self, textures: &[GLuint]);
    fn bind_buffer(&mut self, target: GLenum, buffer: GLuint);
    fn delete_buffers(&mut self, buffers: &[GLuint]);

    fn matrix_mode(&mut self, mode: GLenum);
    fn blend_func(&mut self, sfactor: GLenum, dfactor: GLenum);
    fn blend_equation(&mut self, mode: GLenum);
    fn color4f(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);

    fn tex_envi(&mut self, target: GLenum, pname: GLenum, param: GLint);
    fn tex_envfv(&mut self, target: GLenum, pname: GLenum, params: &[GLfloat; 4]);

    fn vertex_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer);
    fn color_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer);
    fn tex_coord_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer);

    fn pixel_storei(&mut self, pname: GLenum, param: GLint);
}
