use core::array;

use crate::render::gl::GLenum;

/// Fixed association list from a GL enum to its remembered value.
///
/// Built from a `&'static [(GLenum, T)]` default table whose entries may be
/// compiled in or out by cargo features. Lookup is a linear scan; the tables
/// hold a handful of entries. An id with no entry is "unmanaged" and the
/// caller falls back to the device.
#[derive(Clone, Debug)]
pub struct SlotTable<T, const N: usize> {
    ids: [GLenum; N],
    values: [T; N],
}

impl<T: Copy, const N: usize> SlotTable<T, N> {
    pub fn from_defaults(defaults: &[(GLenum, T)]) -> Self {
        assert_eq!(defaults.len(), N, "slot table length mismatch");
        Self {
            ids: array::from_fn(|i| defaults[i].0),
            values: array::from_fn(|i| defaults[i].1),
        }
    }

    #[inline]
    fn index_of(&self, id: GLenum) -> Option<usize> {
        self.ids.iter().position(|&slot| slot == id)
    }

    #[inline]
    pub fn get(&self, id: GLenum) -> Option<T> {
        self.index_of(id).map(|i| self.values[i])
    }

    #[inline]
    pub fn get_mut(&mut self, id: GLenum) -> Option<&mut T> {
        match self.index_of(id) {
            Some(i) => Some(&mut self.values[i]),
            None => None,
        }
    }

    pub fn contains(&self, id: GLenum) -> bool {
        self.index_of(id).is_some()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }
}
