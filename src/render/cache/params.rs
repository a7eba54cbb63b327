use crate::render::cache::slots::SlotTable;
use crate::render::device::GlDevice;
use crate::render::gl::{self, GLenum, GLfloat, GLint};

/// Float tuples compare by bit pattern so a cache hit means the device would
/// receive exactly the same bytes.
#[inline]
fn same_bits(a: &[GLfloat; 4], b: &[GLfloat; 4]) -> bool {
    (*a).map(f32::to_bits) == (*b).map(f32::to_bits)
}

/// Scalar and small-tuple fixed-function state.
#[derive(Clone, Debug)]
pub struct FixedFunction {
    matrix_mode: GLenum,
    blend_func: (GLenum, GLenum),
    blend_equation: GLenum,
    color: [GLfloat; 4],
    tex_env_mode: GLint,
    tex_env_color: [GLfloat; 4],
}

impl FixedFunction {
    pub fn new() -> Self {
        Self {
            // Unknown until the first call; no real mode compares equal.
            matrix_mode: gl::INVALID_ENUM,
            blend_func: (gl::ONE, gl::ZERO),
            blend_equation: gl::FUNC_ADD,
            color: [1.0; 4],
            tex_env_mode: gl::MODULATE as GLint,
            tex_env_color: [0.0; 4],
        }
    }

    pub fn matrix_mode(&self) -> GLenum {
        self.matrix_mode
    }

    pub fn set_matrix_mode(&mut self, dev: &mut impl GlDevice, mode: GLenum) {
        if mode != self.matrix_mode {
            dev.matrix_mode(mode);
            self.matrix_mode = mode;
        }
    }

    pub fn record_matrix_mode(&mut self, mode: GLenum) {
        self.matrix_mode = mode;
    }

    pub fn blend_func(&self) -> (GLenum, GLenum) {
        self.blend_func
    }

    /// Both factors go out together; a change to either resubmits the pair.
    pub fn set_blend_func(&mut self, dev: &mut impl GlDevice, sfactor: GLenum, dfactor: GLenum) {
        if (sfactor, dfactor) != self.blend_func {
            dev.blend_func(sfactor, dfactor);
            self.blend_func = (sfactor, dfactor);
        }
    }

    pub fn record_blend_func(&mut self, sfactor: GLenum, dfactor: GLenum) {
        self.blend_func = (sfactor, dfactor);
    }

    pub fn blend_equation(&self) -> GLenum {
        self.blend_equation
    }

    pub fn set_blend_equation(&mut self, dev: &mut impl GlDevice, mode: GLenum) {
        if mode != self.blend_equation {
            dev.blend_equation(mode);
            self.blend_equation = mode;
        }
    }

    pub fn record_blend_equation(&mut self, mode: GLenum) {
        self.blend_equation = mode;
    }

    /// Last color submitted to the device, whichever path submitted it.
    pub fn color(&self) -> [GLfloat; 4] {
        self.color
    }

    pub fn set_color(&mut self, dev: &mut impl GlDevice, color: [GLfloat; 4]) {
        if !same_bits(&color, &self.color) {
            let [r, g, b, a] = color;
            dev.color4f(r, g, b, a);
            self.color = color;
        }
    }

    pub fn record_color(&mut self, color: [GLfloat; 4]) {
        self.color = color;
    }

    pub fn tex_env_mode(&self) -> GLint {
        self.tex_env_mode
    }

    pub fn tex_env_color(&self) -> [GLfloat; 4] {
        self.tex_env_color
    }

    /// Only `TEXTURE_ENV_MODE` of `TEXTURE_ENV` is cached.
    ///
    /// On ps3 the texture environment is emulated by a shader that only does
    /// `MODULATE`, so every request is dropped without a device call.
    pub fn set_tex_envi(&mut self, dev: &mut impl GlDevice, target: GLenum, pname: GLenum, param: GLint) {
        if cfg!(feature = "ps3") {
            return;
        }

        if target == gl::TEXTURE_ENV && pname == gl::TEXTURE_ENV_MODE {
            if param != self.tex_env_mode {
                dev.tex_envi(target, pname, param);
                self.tex_env_mode = param;
            }
        } else {
            log::debug!("glTexEnvi unmanaged {:#06x} {:#06x}", target, pname);
            dev.tex_envi(target, pname, param);
        }
    }

    pub fn record_tex_envi(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        if target == gl::TEXTURE_ENV && pname == gl::TEXTURE_ENV_MODE {
            self.tex_env_mode = param;
        }
    }

    /// Only `TEXTURE_ENV_COLOR` of `TEXTURE_ENV` is cached.
    pub fn set_tex_envfv(&mut self, dev: &mut impl GlDevice, target: GLenum, pname: GLenum, params: &[GLfloat; 4]) {
        if target == gl::TEXTURE_ENV && pname == gl::TEXTURE_ENV_COLOR {
            if !same_bits(params, &self.tex_env_color) {
                dev.tex_envfv(target, pname, params);
                self.tex_env_color = *params;
            }
        } else {
            log::debug!("glTexEnvfv unmanaged {:#06x} {:#06x}", target, pname);
            dev.tex_envfv(target, pname, params);
        }
    }

    pub fn record_tex_envfv(&mut self, target: GLenum, pname: GLenum, params: &[GLfloat; 4]) {
        if target == gl::TEXTURE_ENV && pname == gl::TEXTURE_ENV_COLOR {
            self.tex_env_color = *params;
        }
    }
}

impl Default for FixedFunction {
    fn default() -> Self {
        Self::new()
    }
}

const PIXEL_STORE_DEFAULTS: &[(GLenum, GLint)] = &[
    (gl::UNPACK_ALIGNMENT, 4),
    #[cfg(not(feature = "gles"))]
    (gl::UNPACK_ROW_LENGTH, 0),
];

const PIXEL_STORE_SLOTS: usize = PIXEL_STORE_DEFAULTS.len();

/// `glPixelStorei` parameters.
#[derive(Clone, Debug)]
pub struct PixelStore {
    slots: SlotTable<GLint, PIXEL_STORE_SLOTS>,
}

impl PixelStore {
    pub fn new() -> Self {
        Self { slots: SlotTable::from_defaults(PIXEL_STORE_DEFAULTS) }
    }

    pub fn get(&self, pname: GLenum) -> Option<GLint> {
        self.slots.get(pname)
    }

    pub fn set(&mut self, dev: &mut impl GlDevice, pname: GLenum, param: GLint) {
        let Some(state) = self.slots.get_mut(pname) else {
            log::debug!("glPixelStorei unmanaged {:#06x}", pname);
            dev.pixel_storei(pname, param);
            return;
        };

        if *state != param {
            dev.pixel_storei(pname, param);
            *state = param;
            // Row length other than 0 takes a slow upload path on most drivers.
            if pname == gl::UNPACK_ROW_LENGTH && param != 0 {
                log::info!("using GL_UNPACK_ROW_LENGTH {}", param);
            }
        }
    }

    pub fn record(&mut self, pname: GLenum, param: GLint) {
        if let Some(state) = self.slots.get_mut(pname) {
            *state = param;
        }
    }
}

impl Default for PixelStore {
    fn default() -> Self {
        Self::new()
    }
}
