use crate::render::gl::{GLfloat, GLsizei, GLuint};

/// Borrow a C `(count, array)` pair of GL names.
pub fn names_from_raw<'a>(n: GLsizei, names: *const GLuint) -> &'a [GLuint] {
    if names.is_null() || n <= 0 {
        return &[];
    }
    // Safety: caller promises `names` points at `n` readable names.
    unsafe { core::slice::from_raw_parts(names, n as usize) }
}

/// Read the four floats behind a C `const GLfloat *params`.
pub fn vec4_from_raw(params: *const GLfloat) -> Option<[GLfloat; 4]> {
    if params.is_null() {
        return None;
    }
    // Safety: caller promises four readable floats.
    Some(unsafe { core::ptr::read_unaligned(params as *const [GLfloat; 4]) })
}
