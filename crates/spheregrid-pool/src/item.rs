#![forbid(unsafe_code)]

use spheregrid_core::animation::OpacityLerp;

use crate::{ControlId, MaterialMode};

/// Index of an item in its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Observable state of a pooled item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Not yet paired with a control. Only seen while the pool is being
    /// built; [`ObjectPool::initialize`](crate::ObjectPool::initialize) pairs
    /// every item before returning, so a live pool never reports it.
    Hidden,
    /// Ready but not part of the active set.
    Inactive,
    /// Visible at full opacity.
    ActiveOpaque,
    /// Visible and partially transparent.
    ActiveFading,
    /// Active, but opacity is zero so the visual element is suppressed.
    /// The paired control stays visible.
    ActiveZero,
}

/// One visual element in the pool.
#[derive(Debug, Clone)]
pub struct PooledItem<R> {
    pub(crate) resource: R,
    pub(crate) visible: bool,
    pub(crate) ready: bool,
    pub(crate) opacity_zero: bool,
    pub(crate) control: Option<ControlId>,
    pub(crate) opacity: f32,
    pub(crate) material: MaterialMode,
    pub(crate) transition: Option<OpacityLerp>,
}

impl<R> PooledItem<R> {
    pub(crate) fn new(resource: R) -> Self {
        Self {
            resource,
            visible: false,
            ready: false,
            opacity_zero: false,
            control: None,
            opacity: 1.0,
            material: MaterialMode::Opaque,
            transition: None,
        }
    }

    pub fn state(&self) -> ItemState {
        if !self.ready {
            ItemState::Hidden
        } else if self.opacity_zero {
            ItemState::ActiveZero
        } else if !self.visible {
            ItemState::Inactive
        } else if self.opacity >= 1.0 {
            ItemState::ActiveOpaque
        } else {
            ItemState::ActiveFading
        }
    }

    /// Whether the visual element is currently shown.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether the zero-opacity latch is set.
    #[inline]
    pub fn is_opacity_zero(&self) -> bool {
        self.opacity_zero
    }

    #[inline]
    pub fn control(&self) -> Option<ControlId> {
        self.control
    }

    /// Last rendered alpha.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn material(&self) -> MaterialMode {
        self.material
    }

    /// The in-flight opacity transition, if any.
    #[inline]
    pub fn transition(&self) -> Option<&OpacityLerp> {
        self.transition.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> &R {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaired_item_is_hidden() {
        let item = PooledItem::new(0usize);
        assert_eq!(item.state(), ItemState::Hidden);
    }

    #[test]
    fn ready_item_follows_visibility_and_opacity() {
        let mut item = PooledItem::new(0usize);
        item.ready = true;
        item.control = Some(ControlId(0));
        assert_eq!(item.state(), ItemState::Inactive);

        item.visible = true;
        assert_eq!(item.state(), ItemState::ActiveOpaque);
        item.opacity = 0.4;
        assert_eq!(item.state(), ItemState::ActiveFading);

        item.visible = false;
        item.opacity_zero = true;
        assert_eq!(item.state(), ItemState::ActiveZero);
    }
}
