use crate::render::cache::slots::SlotTable;
use crate::render::device::GlDevice;
use crate::render::gl::{self, GLenum, GLuint};

const TEXTURE_TARGETS: &[(GLenum, GLuint)] = &[
    (gl::TEXTURE_2D, 0),
    #[cfg(feature = "texture_external_oes")]
    (gl::TEXTURE_EXTERNAL_OES, 0),
];

const TEXTURE_TARGET_SLOTS: usize = TEXTURE_TARGETS.len();

/// Buffer targets. `ARRAY_BUFFER` stays first: vertex pointers are relative
/// to whatever is bound there.
const BUFFER_TARGETS: &[(GLenum, GLuint)] = &[
    (gl::ARRAY_BUFFER, 0),
    (gl::ELEMENT_ARRAY_BUFFER, 0),
    #[cfg(not(feature = "gles"))]
    (gl::PIXEL_PACK_BUFFER_ARB, 0),
    #[cfg(not(feature = "gles"))]
    (gl::PIXEL_UNPACK_BUFFER_ARB, 0),
];

const BUFFER_TARGET_SLOTS: usize = BUFFER_TARGETS.len();

/// Name bound to each managed texture target; 0 is "none".
#[derive(Clone, Debug)]
pub struct TextureBindings {
    slots: SlotTable<GLuint, TEXTURE_TARGET_SLOTS>,
}

impl TextureBindings {
    pub fn new() -> Self {
        Self { slots: SlotTable::from_defaults(TEXTURE_TARGETS) }
    }

    /// Panics on a target without a slot: callers only bind managed targets,
    /// so a miss means a slot is missing from this build.
    pub fn bind(&mut self, dev: &mut impl GlDevice, target: GLenum, texture: GLuint) {
        let state = managed_slot(self.slots.get_mut(target), "glBindTexture", target);
        if *state != texture {
            dev.bind_texture(target, texture);
            *state = texture;
        }
    }

    pub fn record(&mut self, target: GLenum, texture: GLuint) {
        if let Some(state) = self.slots.get_mut(target) {
            *state = texture;
        }
    }

    /// GL unbinds a deleted texture from every target it was bound to, so
    /// every slot is swept before the delete is forwarded.
    pub fn delete(&mut self, dev: &mut impl GlDevice, textures: &[GLuint]) {
        self.forget(textures);
        dev.delete_textures(textures);
    }

    pub fn forget(&mut self, textures: &[GLuint]) {
        sweep(self.slots.values_mut(), textures);
    }

    pub fn get(&self, target: GLenum) -> Option<GLuint> {
        self.slots.get(target)
    }
}

impl Default for TextureBindings {
    fn default() -> Self {
        Self::new()
    }
}

/// Name bound to each managed buffer target; 0 is "none".
///
/// Writes go through `GlStateCache`, which also resets the pointer caches
/// when the array buffer moves.
#[derive(Clone, Debug)]
pub struct BufferBindings {
    slots: SlotTable<GLuint, BUFFER_TARGET_SLOTS>,
}

impl BufferBindings {
    pub fn new() -> Self {
        Self { slots: SlotTable::from_defaults(BUFFER_TARGETS) }
    }

    /// Same contract as `TextureBindings::bind`. Returns true if the device
    /// saw a bind.
    pub(crate) fn bind(&mut self, dev: &mut impl GlDevice, target: GLenum, buffer: GLuint) -> bool {
        let state = managed_slot(self.slots.get_mut(target), "glBindBuffer", target);
        if *state == buffer {
            return false;
        }
        dev.bind_buffer(target, buffer);
        *state = buffer;
        true
    }

    pub(crate) fn record(&mut self, target: GLenum, buffer: GLuint) {
        if let Some(state) = self.slots.get_mut(target) {
            *state = buffer;
        }
    }

    pub(crate) fn forget(&mut self, buffers: &[GLuint]) {
        sweep(self.slots.values_mut(), buffers);
    }

    pub fn get(&self, target: GLenum) -> Option<GLuint> {
        self.slots.get(target)
    }

    pub fn array_buffer(&self) -> GLuint {
        self.slots.get(gl::ARRAY_BUFFER).unwrap_or(0)
    }
}

impl Default for BufferBindings {
    fn default() -> Self {
        Self::new()
    }
}

fn managed_slot<'a>(slot: Option<&'a mut GLuint>, call: &str, target: GLenum) -> &'a mut GLuint {
    match slot {
        Some(slot) => slot,
        None => {
            log::error!("{} unmanaged target {:#06x}", call, target);
            panic!("{} unmanaged target {:#06x}", call, target);
        }
    }
}

fn sweep<'a>(slots: impl Iterator<Item = &'a mut GLuint>, deleted: &[GLuint]) {
    for slot in slots {
        if *slot != 0 && deleted.contains(&*slot) {
            *slot = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::device::recording::{GlCall, RecordingDevice};
    use crate::util::logging::capture::{has, logs_of};
    use log::Level;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn repeated_bind_forwards_once() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        textures.bind(&mut dev, gl::TEXTURE_2D, 3);
        textures.bind(&mut dev, gl::TEXTURE_2D, 3);
        assert_eq!(dev.calls(), &[GlCall::BindTexture(gl::TEXTURE_2D, 3)]);
        assert_eq!(textures.get(gl::TEXTURE_2D), Some(3));
    }

    #[test]
    fn initial_binding_is_none() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        textures.bind(&mut dev, gl::TEXTURE_2D, 0);
        assert!(dev.is_empty());
    }

    #[test]
    fn delete_resets_bound_slot_and_always_forwards() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        textures.bind(&mut dev, gl::TEXTURE_2D, 5);
        textures.delete(&mut dev, &[9, 5]);
        assert_eq!(textures.get(gl::TEXTURE_2D), Some(0));
        textures.delete(&mut dev, &[5]);
        assert_eq!(
            dev.calls(),
            &[
                GlCall::BindTexture(gl::TEXTURE_2D, 5),
                GlCall::DeleteTextures(vec![9, 5]),
                GlCall::DeleteTextures(vec![5]),
            ]
        );
    }

    #[test]
    fn delete_of_unbound_texture_keeps_binding() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        textures.bind(&mut dev, gl::TEXTURE_2D, 5);
        textures.delete(&mut dev, &[6]);
        assert_eq!(textures.get(gl::TEXTURE_2D), Some(5));
    }

    #[test]
    #[should_panic(expected = "glBindTexture unmanaged target")]
    fn binding_unmanaged_texture_target_is_fatal() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        textures.bind(&mut dev, 0x8513, 1);
    }

    #[cfg(feature = "texture_external_oes")]
    #[test]
    fn delete_sweeps_every_texture_target() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        textures.bind(&mut dev, gl::TEXTURE_2D, 4);
        textures.bind(&mut dev, gl::TEXTURE_EXTERNAL_OES, 4);
        textures.delete(&mut dev, &[4]);
        assert_eq!(textures.get(gl::TEXTURE_2D), Some(0));
        assert_eq!(textures.get(gl::TEXTURE_EXTERNAL_OES), Some(0));
    }

    #[test]
    fn buffer_bind_reports_forwarding() {
        let mut dev = RecordingDevice::new();
        let mut buffers = BufferBindings::new();
        assert!(buffers.bind(&mut dev, gl::ELEMENT_ARRAY_BUFFER, 2));
        assert!(!buffers.bind(&mut dev, gl::ELEMENT_ARRAY_BUFFER, 2));
        assert_eq!(dev.calls(), &[GlCall::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 2)]);
        assert_eq!(buffers.array_buffer(), 0);
    }

    #[test]
    fn buffer_forget_sweeps_all_targets() {
        let mut dev = RecordingDevice::new();
        let mut buffers = BufferBindings::new();
        buffers.bind(&mut dev, gl::ARRAY_BUFFER, 7);
        buffers.bind(&mut dev, gl::ELEMENT_ARRAY_BUFFER, 7);
        dev.clear();
        buffers.forget(&[7]);
        assert_eq!(buffers.array_buffer(), 0);
        assert_eq!(buffers.get(gl::ELEMENT_ARRAY_BUFFER), Some(0));
        assert!(dev.is_empty());
    }

    #[test]
    #[should_panic(expected = "glBindBuffer unmanaged target")]
    fn binding_unmanaged_buffer_target_is_fatal() {
        let mut dev = RecordingDevice::new();
        let mut buffers = BufferBindings::new();
        buffers.bind(&mut dev, 0x8A11, 1);
    }

    #[test]
    fn fatal_bind_logs_error_before_panicking() {
        let mut dev = RecordingDevice::new();
        let mut textures = TextureBindings::new();
        let logs = logs_of(|| {
            let bind = catch_unwind(AssertUnwindSafe(|| textures.bind(&mut dev, 0x8513, 1)));
            assert!(bind.is_err());
        });
        assert!(has(&logs, Level::Error, "glBindTexture unmanaged target 0x8513"));
        assert!(dev.is_empty());
    }
}
