//! GL scalar types and the enum values the cache knows about.
//!
//! Values match the Khronos headers. Only identifiers that have a cache slot,
//! or that tests use to exercise the unmanaged path, are listed here.

use core::ffi::c_void;

pub type GLenum = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLfloat = f32;

/// Client-side vertex data address. Compared by identity, never dereferenced.
pub type GLpointer = *const c_void;

pub const INVALID_ENUM: GLenum = 0x0500;

// Capabilities
pub const ALPHA_TEST: GLenum = 0x0BC0;
pub const DEPTH_TEST: GLenum = 0x0B71;
pub const FOG: GLenum = 0x0B60;
pub const BLEND: GLenum = 0x0BE2;
pub const SCISSOR_TEST: GLenum = 0x0C11;
pub const CULL_FACE: GLenum = 0x0B44;
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_EXTERNAL_OES: GLenum = 0x8D65;
pub const DITHER: GLenum = 0x0BD0;
pub const MULTISAMPLE_ARB: GLenum = 0x809D;
pub const LIGHTING: GLenum = 0x0B50;
pub const STENCIL_TEST: GLenum = 0x0B90;

// Client arrays
pub const VERTEX_ARRAY: GLenum = 0x8074;
pub const NORMAL_ARRAY: GLenum = 0x8075;
pub const COLOR_ARRAY: GLenum = 0x8076;
pub const TEXTURE_COORD_ARRAY: GLenum = 0x8078;

// Matrix modes
pub const MODELVIEW: GLenum = 0x1700;
pub const PROJECTION: GLenum = 0x1701;
pub const TEXTURE: GLenum = 0x1702;

// Blending
pub const ZERO: GLenum = 0;
pub const ONE: GLenum = 1;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const FUNC_ADD: GLenum = 0x8006;
pub const FUNC_SUBTRACT: GLenum = 0x800A;
pub const FUNC_REVERSE_SUBTRACT: GLenum = 0x800B;

// Texture environment
pub const TEXTURE_ENV: GLenum = 0x2300;
pub const TEXTURE_ENV_MODE: GLenum = 0x2200;
pub const TEXTURE_ENV_COLOR: GLenum = 0x2201;
pub const MODULATE: GLenum = 0x2100;
pub const DECAL: GLenum = 0x2101;
pub const REPLACE: GLenum = 0x1E01;
pub const COMBINE: GLenum = 0x8570;

// Data types
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const FLOAT: GLenum = 0x1406;

// Pixel store
pub const UNPACK_ROW_LENGTH: GLenum = 0x0CF2;
pub const UNPACK_ALIGNMENT: GLenum = 0x0CF5;
pub const PACK_ALIGNMENT: GLenum = 0x0D05;

// Buffer targets
pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const PIXEL_PACK_BUFFER_ARB: GLenum = 0x88EB;
pub const PIXEL_UNPACK_BUFFER_ARB: GLenum = 0x88EC;
