use crate::render::device::GlDevice;
use crate::render::gl::{self, GLenum, GLint, GLpointer, GLsizei};

/// Arguments of one `gl*Pointer` call.
///
/// `pointer` is compared by address: the same data at a new address is new
/// state to GL, and the contents are never read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerState {
    pub size: GLint,
    pub ty: GLenum,
    pub stride: GLsizei,
    pub pointer: GLpointer,
}

impl PointerState {
    pub const DEFAULT: Self = Self { size: 4, ty: gl::FLOAT, stride: 0, pointer: core::ptr::null() };

    pub fn new(size: GLint, ty: GLenum, stride: GLsizei, pointer: GLpointer) -> Self {
        Self { size, ty, stride, pointer }
    }
}

/// Which of the classic arrays a pointer cache feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Vertex,
    Color,
    TexCoord,
}

impl PointerKind {
    fn forward(self, dev: &mut impl GlDevice, s: PointerState) {
        match self {
            PointerKind::Vertex => dev.vertex_pointer(s.size, s.ty, s.stride, s.pointer),
            PointerKind::Color => dev.color_pointer(s.size, s.ty, s.stride, s.pointer),
            PointerKind::TexCoord => dev.tex_coord_pointer(s.size, s.ty, s.stride, s.pointer),
        }
    }
}

/// Remembered vertex, color and texcoord pointers.
///
/// `None` marks a kind whose device state is unknown; whatever is submitted
/// next is forwarded.
#[derive(Clone, Debug)]
pub struct Pointers {
    vertex: Option<PointerState>,
    color: Option<PointerState>,
    tex_coord: Option<PointerState>,
}

impl Pointers {
    pub fn new() -> Self {
        Self {
            vertex: Some(PointerState::DEFAULT),
            color: Some(PointerState::DEFAULT),
            tex_coord: Some(PointerState::DEFAULT),
        }
    }

    /// Last tuple the device received, or `None` after an invalidation.
    pub fn get(&self, kind: PointerKind) -> Option<PointerState> {
        *self.slot(kind)
    }

    fn slot(&self, kind: PointerKind) -> &Option<PointerState> {
        match kind {
            PointerKind::Vertex => &self.vertex,
            PointerKind::Color => &self.color,
            PointerKind::TexCoord => &self.tex_coord,
        }
    }

    fn slot_mut(&mut self, kind: PointerKind) -> &mut Option<PointerState> {
        match kind {
            PointerKind::Vertex => &mut self.vertex,
            PointerKind::Color => &mut self.color,
            PointerKind::TexCoord => &mut self.tex_coord,
        }
    }

    /// Forwards the whole tuple if any field differs.
    pub fn set(&mut self, dev: &mut impl GlDevice, kind: PointerKind, state: PointerState) {
        let slot = self.slot_mut(kind);
        if *slot != Some(state) {
            kind.forward(dev, state);
            *slot = Some(state);
        }
    }

    pub fn record(&mut self, kind: PointerKind, state: PointerState) {
        *self.slot_mut(kind) = Some(state);
    }

    /// Force the next call of every kind through to the device.
    ///
    /// Pointers are offsets into the bound array buffer once one is bound, so
    /// any change of that binding makes the remembered tuples meaningless.
    pub fn invalidate(&mut self) {
        log::trace!("pointer caches invalidated");
        self.vertex = None;
        self.color = None;
        self.tex_coord = None;
    }
}

impl Default for Pointers {
    fn default() -> Self {
        Self::new()
    }
}
