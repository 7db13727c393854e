#![forbid(unsafe_code)]

use crate::ItemId;

/// Index of a control in its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub usize);

/// A normalized slider paired with exactly one pooled item.
///
/// The widget itself belongs to the UI toolkit; this is the pool's view of it.
#[derive(Debug, Clone)]
pub struct Control<R> {
    pub(crate) resource: R,
    pub(crate) value: f32,
    pub(crate) visible: bool,
    pub(crate) owner: ItemId,
    pub(crate) label: String,
}

impl<R> Control<R> {
    pub(crate) fn new(resource: R, owner: ItemId, label: String) -> Self {
        Self {
            resource,
            value: 1.0,
            visible: false,
            owner,
            label,
        }
    }

    /// Current value in [0, 1].
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The item this control drives.
    #[inline]
    pub fn owner(&self) -> ItemId {
        self.owner
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn resource(&self) -> &R {
        &self.resource
    }
}
