use crate::render::cache::slots::SlotTable;
use crate::render::device::GlDevice;
use crate::render::gl::{self, GLenum};

/// Managed `glEnable` capabilities and their device defaults.
///
/// Dither is the one capability GL starts with enabled.
const CAPABILITY_DEFAULTS: &[(GLenum, bool)] = &[
    (gl::ALPHA_TEST, false),
    (gl::DEPTH_TEST, false),
    (gl::FOG, false),
    (gl::BLEND, false),
    (gl::SCISSOR_TEST, false),
    (gl::CULL_FACE, false),
    (gl::TEXTURE_2D, false),
    #[cfg(feature = "texture_external_oes")]
    (gl::TEXTURE_EXTERNAL_OES, false),
    (gl::DITHER, true),
    #[cfg(not(feature = "gles"))]
    (gl::MULTISAMPLE_ARB, false),
];

const CAPABILITY_SLOTS: usize = CAPABILITY_DEFAULTS.len();

/// Managed `glEnableClientState` arrays. All start disabled.
const CLIENT_ARRAY_DEFAULTS: &[(GLenum, bool)] = &[
    (gl::TEXTURE_COORD_ARRAY, false),
    (gl::COLOR_ARRAY, false),
];

const CLIENT_ARRAY_SLOTS: usize = CLIENT_ARRAY_DEFAULTS.len();

/// Enable/disable state of server-side capabilities.
#[derive(Clone, Debug)]
pub struct Capabilities {
    slots: SlotTable<bool, CAPABILITY_SLOTS>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self { slots: SlotTable::from_defaults(CAPABILITY_DEFAULTS) }
    }

    pub fn is_managed(&self, cap: GLenum) -> bool {
        self.slots.contains(cap)
    }

    pub fn set(&mut self, dev: &mut impl GlDevice, cap: GLenum, enabled: bool) {
        let Some(state) = self.slots.get_mut(cap) else {
            log::debug!("{} unmanaged {:#06x}", enable_name(enabled), cap);
            forward(dev, cap, enabled);
            return;
        };

        if *state != enabled {
            forward(dev, cap, enabled);
            *state = enabled;
        }
    }

    /// Remember a value that reached the device without going through `set`.
    pub fn record(&mut self, cap: GLenum, enabled: bool) {
        if let Some(state) = self.slots.get_mut(cap) {
            *state = enabled;
        }
    }

    /// Cached answer for managed capabilities, a device query otherwise.
    ///
    /// Never changes the cache.
    pub fn is_enabled(&self, dev: &mut impl GlDevice, cap: GLenum) -> bool {
        match self.slots.get(cap) {
            Some(enabled) => enabled,
            None => {
                log::debug!("glIsEnabled unmanaged {:#06x}", cap);
                query_device(dev, cap)
            }
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::new()
    }
}

fn enable_name(enabled: bool) -> &'static str {
    if enabled { "glEnable" } else { "glDisable" }
}

fn forward(dev: &mut impl GlDevice, cap: GLenum, enabled: bool) {
    if enabled {
        dev.enable(cap);
    } else {
        dev.disable(cap);
    }
}

/// Direct `glIsEnabled`, for capabilities the cache can't answer.
#[cfg(not(feature = "ps3"))]
pub(crate) fn query_device(dev: &mut impl GlDevice, cap: GLenum) -> bool {
    dev.is_enabled(cap)
}

#[cfg(feature = "ps3")]
pub(crate) fn query_device(_dev: &mut impl GlDevice, cap: GLenum) -> bool {
    log::error!("glIsEnabled unsupported on this platform (cap {:#06x})", cap);
    panic!("glIsEnabled unsupported (cap {:#06x})", cap);
}

/// Enable/disable state of client-side vertex arrays.
#[derive(Clone, Debug)]
pub struct ClientArrays {
    slots: SlotTable<bool, CLIENT_ARRAY_SLOTS>,
}

impl ClientArrays {
    pub fn new() -> Self {
        Self { slots: SlotTable::from_defaults(CLIENT_ARRAY_DEFAULTS) }
    }

    pub fn set(&mut self, dev: &mut impl GlDevice, array: GLenum, enabled: bool) {
        let Some(state) = self.slots.get_mut(array) else {
            log::debug!("{} unmanaged {:#06x}", client_state_name(enabled), array);
            forward_client(dev, array, enabled);
            return;
        };

        if *state != enabled {
            forward_client(dev, array, enabled);
            *state = enabled;
        }
    }

    pub fn record(&mut self, array: GLenum, enabled: bool) {
        if let Some(state) = self.slots.get_mut(array) {
            *state = enabled;
        }
    }

    pub fn get(&self, array: GLenum) -> Option<bool> {
        self.slots.get(array)
    }
}

impl Default for ClientArrays {
    fn default() -> Self {
        Self::new()
    }
}

fn client_state_name(enabled: bool) -> &'static str {
    if enabled { "glEnableClientState" } else { "glDisableClientState" }
}

fn forward_client(dev: &mut impl GlDevice, array: GLenum, enabled: bool) {
    if enabled {
        dev.enable_client_state(array);
    } else {
        dev.disable_client_state(array);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::device::recording::{GlCall, RecordingDevice};
    use crate::util::logging::capture::{has, logs_of};
    use log::Level;

    #[test]
    fn repeated_enable_forwards_once() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        caps.set(&mut dev, gl::BLEND, true);
        caps.set(&mut dev, gl::BLEND, true);
        assert_eq!(dev.calls(), &[GlCall::Enable(gl::BLEND)]);
    }

    #[test]
    fn enable_then_disable_forwards_both() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        caps.set(&mut dev, gl::DEPTH_TEST, true);
        caps.set(&mut dev, gl::DEPTH_TEST, false);
        assert_eq!(dev.calls(), &[GlCall::Enable(gl::DEPTH_TEST), GlCall::Disable(gl::DEPTH_TEST)]);
    }

    #[test]
    fn every_slot_starts_at_the_device_default() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        for &(cap, default) in CAPABILITY_DEFAULTS {
            assert!(caps.is_managed(cap));
            caps.set(&mut dev, cap, default);
        }
        assert!(dev.is_empty());
    }

    #[test]
    fn dither_starts_enabled() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        assert!(caps.is_enabled(&mut dev, gl::DITHER));
        caps.set(&mut dev, gl::DITHER, true);
        assert!(dev.is_empty());
        caps.set(&mut dev, gl::DITHER, false);
        assert_eq!(dev.calls(), &[GlCall::Disable(gl::DITHER)]);
    }

    #[test]
    fn unmanaged_capability_always_forwards() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        assert!(!caps.is_managed(gl::LIGHTING));
        caps.set(&mut dev, gl::LIGHTING, true);
        caps.set(&mut dev, gl::LIGHTING, true);
        caps.set(&mut dev, gl::LIGHTING, true);
        assert_eq!(dev.len(), 3);
    }

    #[test]
    fn unmanaged_hits_log_debug() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        let mut arrays = ClientArrays::new();
        let logs = logs_of(|| {
            caps.set(&mut dev, gl::LIGHTING, true);
            caps.set(&mut dev, gl::LIGHTING, false);
            arrays.set(&mut dev, gl::NORMAL_ARRAY, true);
        });
        assert!(has(&logs, Level::Debug, "glEnable unmanaged 0x0b50"));
        assert!(has(&logs, Level::Debug, "glDisable unmanaged 0x0b50"));
        assert!(has(&logs, Level::Debug, "glEnableClientState unmanaged 0x8075"));

        let logs = logs_of(|| caps.set(&mut dev, gl::BLEND, true));
        assert!(!logs.iter().any(|(level, _)| *level == Level::Debug));
    }

    #[test]
    fn managed_query_does_not_touch_device() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        caps.set(&mut dev, gl::FOG, true);
        dev.clear();
        assert!(caps.is_enabled(&mut dev, gl::FOG));
        assert!(!caps.is_enabled(&mut dev, gl::CULL_FACE));
        assert!(dev.is_empty());
    }

    #[cfg(not(feature = "ps3"))]
    #[test]
    fn unmanaged_query_asks_device() {
        let mut dev = RecordingDevice::new();
        let mut caps = Capabilities::new();
        caps.set(&mut dev, gl::STENCIL_TEST, true);
        assert!(caps.is_enabled(&mut dev, gl::STENCIL_TEST));
        assert_eq!(dev.last(), Some(&GlCall::IsEnabled(gl::STENCIL_TEST)));
    }

    #[cfg(feature = "ps3")]
    #[test]
    #[should_panic(expected = "glIsEnabled unsupported (cap 0x0b90)")]
    fn unmanaged_query_is_fatal_without_device_query() {
        let mut dev = RecordingDevice::new();
        let caps = Capabilities::new();
        caps.is_enabled(&mut dev, gl::STENCIL_TEST);
    }

    #[cfg(feature = "gles")]
    #[test]
    fn multisample_is_unmanaged_on_gles() {
        assert!(!Capabilities::new().is_managed(gl::MULTISAMPLE_ARB));
    }

    #[test]
    fn client_arrays_cache_managed_and_pass_unmanaged() {
        let mut dev = RecordingDevice::new();
        let mut arrays = ClientArrays::new();
        arrays.set(&mut dev, gl::COLOR_ARRAY, true);
        arrays.set(&mut dev, gl::COLOR_ARRAY, true);
        arrays.set(&mut dev, gl::VERTEX_ARRAY, true);
        arrays.set(&mut dev, gl::VERTEX_ARRAY, true);
        arrays.set(&mut dev, gl::COLOR_ARRAY, false);
        assert_eq!(
            dev.calls(),
            &[
                GlCall::EnableClientState(gl::COLOR_ARRAY),
                GlCall::EnableClientState(gl::VERTEX_ARRAY),
                GlCall::EnableClientState(gl::VERTEX_ARRAY),
                GlCall::DisableClientState(gl::COLOR_ARRAY),
            ]
        );
        assert_eq!(arrays.get(gl::COLOR_ARRAY), Some(false));
        assert_eq!(arrays.get(gl::VERTEX_ARRAY), None);
    }
}
