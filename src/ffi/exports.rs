//! C ABI: one `glc_*` function per cached GL entry point.
//!
//! C holds a `GlcContext *` per GL context and must only call these from the
//! thread that has that context current.

use crate::ffi::types::{names_from_raw, vec4_from_raw};
use crate::render::device::system::SystemGl;
use crate::render::gl::{GLenum, GLfloat, GLint, GLpointer, GLsizei, GLuint};
use crate::render::GlContext;
use crate::util::config::cache_config;

/// Opaque handle passed to C.
pub struct GlcContext {
    gl: GlContext<SystemGl>,
}

/// Create the cache for the GL context current on this thread.
#[no_mangle]
pub extern "C" fn glc_context_create() -> *mut GlcContext {
    crate::util::logging::init_logger();
    let gl = GlContext::new(SystemGl::new(), *cache_config());
    Box::into_raw(Box::new(GlcContext { gl }))
}

#[no_mangle]
pub extern "C" fn glc_context_destroy(ctx: *mut GlcContext) {
    if ctx.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(ctx));
    }
}

/// Call after the GL context was lost and recreated.
#[no_mangle]
pub extern "C" fn glc_context_recreated(ctx: *mut GlcContext) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.context_recreated();
}

#[no_mangle]
pub extern "C" fn glc_set_use_cache(ctx: *mut GlcContext, on: bool) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.set_use_cache(on);
}

#[no_mangle]
pub extern "C" fn glc_set_pointer_state_hack(ctx: *mut GlcContext, on: bool) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.set_pointer_state_hack(on);
}

#[no_mangle]
pub extern "C" fn glc_matrix_mode(ctx: *mut GlcContext, mode: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.matrix_mode(mode);
}

#[no_mangle]
pub extern "C" fn glc_bind_texture(ctx: *mut GlcContext, target: GLenum, texture: GLuint) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.bind_texture(target, texture);
}

#[no_mangle]
pub extern "C" fn glc_delete_textures(ctx: *mut GlcContext, n: GLsizei, textures: *const GLuint) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.delete_textures(names_from_raw(n, textures));
}

#[no_mangle]
pub extern "C" fn glc_bind_buffer(ctx: *mut GlcContext, target: GLenum, buffer: GLuint) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.bind_buffer(target, buffer);
}

#[no_mangle]
pub extern "C" fn glc_delete_buffers(ctx: *mut GlcContext, n: GLsizei, buffers: *const GLuint) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.delete_buffers(names_from_raw(n, buffers));
}

#[no_mangle]
pub extern "C" fn glc_blend_func(ctx: *mut GlcContext, sfactor: GLenum, dfactor: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.blend_func(sfactor, dfactor);
}

#[no_mangle]
pub extern "C" fn glc_blend_equation(ctx: *mut GlcContext, mode: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.blend_equation(mode);
}

#[no_mangle]
pub extern "C" fn glc_enable(ctx: *mut GlcContext, cap: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.enable(cap);
}

#[no_mangle]
pub extern "C" fn glc_disable(ctx: *mut GlcContext, cap: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.disable(cap);
}

#[no_mangle]
pub extern "C" fn glc_is_enabled(ctx: *mut GlcContext, cap: GLenum) -> u8 {
    if ctx.is_null() {
        return 0;
    }
    let ctx = unsafe { &mut *ctx };
    if ctx.gl.is_enabled(cap) { 1 } else { 0 }
}

#[no_mangle]
pub extern "C" fn glc_enable_client_state(ctx: *mut GlcContext, array: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.enable_client_state(array);
}

#[no_mangle]
pub extern "C" fn glc_disable_client_state(ctx: *mut GlcContext, array: GLenum) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.disable_client_state(array);
}

#[no_mangle]
pub extern "C" fn glc_tex_envi(ctx: *mut GlcContext, target: GLenum, pname: GLenum, param: GLint) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.tex_envi(target, pname, param);
}

/// Only four-component parameters (`GL_TEXTURE_ENV_COLOR`) go through here.
#[no_mangle]
pub extern "C" fn glc_tex_envfv(ctx: *mut GlcContext, target: GLenum, pname: GLenum, params: *const GLfloat) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    if let Some(params) = vec4_from_raw(params) {
        ctx.gl.tex_envfv(target, pname, &params);
    }
}

#[no_mangle]
pub extern "C" fn glc_color4f(ctx: *mut GlcContext, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.color4f(red, green, blue, alpha);
}

/// Writes the last submitted color into `out[0..4]`.
#[no_mangle]
pub extern "C" fn glc_current_color(ctx: *mut GlcContext, out: *mut GLfloat) {
    if ctx.is_null() || out.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    // Safety: caller provides room for four floats.
    unsafe { core::ptr::write_unaligned(out as *mut [GLfloat; 4], ctx.gl.color()) };
}

#[no_mangle]
pub extern "C" fn glc_vertex_pointer(ctx: *mut GlcContext, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.vertex_pointer(size, ty, stride, pointer);
}

#[no_mangle]
pub extern "C" fn glc_color_pointer(ctx: *mut GlcContext, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.color_pointer(size, ty, stride, pointer);
}

#[no_mangle]
pub extern "C" fn glc_tex_coord_pointer(ctx: *mut GlcContext, size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.tex_coord_pointer(size, ty, stride, pointer);
}

#[no_mangle]
pub extern "C" fn glc_pixel_storei(ctx: *mut GlcContext, pname: GLenum, param: GLint) {
    if ctx.is_null() {
        return;
    }
    let ctx = unsafe { &mut *ctx };
    ctx.gl.pixel_storei(pname, param);
}
