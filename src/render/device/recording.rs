use std::collections::HashSet;

use crate::render::device::GlDevice;
use crate::render::gl::{GLenum, GLfloat, GLint, GLpointer, GLsizei, GLuint};

/// One call as it reached the device.
#[derive(Clone, Debug, PartialEq)]
pub enum GlCall {
    Enable(GLenum),
    Disable(GLenum),
    IsEnabled(GLenum),
    EnableClientState(GLenum),
    DisableClientState(GLenum),
    BindTexture(GLenum, GLuint),
    DeleteTextures(Vec<GLuint>),
    BindBuffer(GLenum, GLuint),
    DeleteBuffers(Vec<GLuint>),
    MatrixMode(GLenum),
    BlendFunc(GLenum, GLenum),
    BlendEquation(GLenum),
    Color4f([GLfloat; 4]),
    TexEnvi(GLenum, GLenum, GLint),
    TexEnvfv(GLenum, GLenum, [GLfloat; 4]),
    VertexPointer(GLint, GLenum, GLsizei, usize),
    ColorPointer(GLint, GLenum, GLsizei, usize),
    TexCoordPointer(GLint, GLenum, GLsizei, usize),
    PixelStorei(GLenum, GLint),
}

/// A device that keeps every call it receives.
///
/// Used by the tests to count what the cache lets through, and handy when
/// diffing the call stream of two frames. Pointers are stored as addresses.
#[derive(Default)]
pub struct RecordingDevice {
    calls: Vec<GlCall>,
    enabled: HashSet<GLenum>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn last(&self) -> Option<&GlCall> {
        self.calls.last()
    }

    /// Drop the recorded calls, keeping the device-side enable bookkeeping.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn push(&mut self, call: GlCall) {
        log::trace!("gl call {:?}", call);
        self.calls.push(call);
    }
}

impl GlDevice for RecordingDevice {
    fn enable(&mut self, cap: GLenum) {
        self.enabled.insert(cap);
        self.push(GlCall::Enable(cap));
    }

    fn disable(&mut self, cap: GLenum) {
        self.enabled.remove(&cap);
        self.push(GlCall::Disable(cap));
    }

    fn is_enabled(&mut self, cap: GLenum) -> bool {
        self.push(GlCall::IsEnabled(cap));
        self.enabled.contains(&cap)
    }

    fn enable_client_state(&mut self, array: GLenum) {
        self.push(GlCall::EnableClientState(array));
    }

    fn disable_client_state(&mut self, array: GLenum) {
        self.push(GlCall::DisableClientState(array));
    }

    fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        self.push(GlCall::BindTexture(target, texture));
    }

    fn delete_textures(&mut self, textures: &[GLuint]) {
        self.push(GlCall::DeleteTextures(textures.to_vec()));
    }

    fn bind_buffer(&mut self, target: GLenum, buffer: GLuint) {
        self.push(GlCall::BindBuffer(target, buffer));
    }

    fn delete_buffers(&mut self, buffers: &[GLuint]) {
        self.push(GlCall::DeleteBuffers(buffers.to_vec()));
    }

    fn matrix_mode(&mut self, mode: GLenum) {
        self.push(GlCall::MatrixMode(mode));
    }

    fn blend_func(&mut self, sfactor: GLenum, dfactor: GLenum) {
        self.push(GlCall::BlendFunc(sfactor, dfactor));
    }

    fn blend_equation(&mut self, mode: GLenum) {
        self.push(GlCall::BlendEquation(mode));
    }

    fn color4f(&mut self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.push(GlCall::Color4f([red, green, blue, alpha]));
    }

    fn tex_envi(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        self.push(GlCall::TexEnvi(target, pname, param));
    }

    fn tex_envfv(&mut self, target: GLenum, pname: GLenum, params: &[GLfloat; 4]) {
        self.push(GlCall::TexEnvfv(target, pname, *params));
    }

    fn vertex_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        self.push(GlCall::VertexPointer(size, ty, stride, pointer as usize));
    }

    fn color_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        self.push(GlCall::ColorPointer(size, ty, stride, pointer as usize));
    }

    fn tex_coord_pointer(&mut self, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
        self.push(GlCall::TexCoordPointer(size, ty, stride, pointer as usize));
    }

    fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        self.push(GlCall::PixelStorei(pname, param));
    }
}
