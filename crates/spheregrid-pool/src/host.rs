#![forbid(unsafe_code)]

//! Scene collaborator for pooled items.

use serde::{Deserialize, Serialize};
use spheregrid_core::geometry::{Vec2, Vec3};

/// How an item's material is blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaterialMode {
    /// Fully opaque; alpha is ignored by the renderer.
    #[default]
    Opaque,
    /// Alpha-blended.
    Fade,
}

/// Engine-side operations on pooled resources.
///
/// `Item` and `Control` are whatever handles the engine hands out from the
/// pool factories; the pool stores them and passes them back here.
pub trait SceneHost {
    type Item;
    type Control;

    /// Show or hide the visual element.
    fn set_item_active(&mut self, item: &Self::Item, active: bool);

    /// Show or hide the paired control widget.
    fn set_control_active(&mut self, control: &Self::Control, active: bool);

    /// Reflect a new value on the control widget.
    fn set_control_value(&mut self, control: &Self::Control, value: f32);

    fn set_material(&mut self, item: &Self::Item, mode: MaterialMode);

    /// Set the alpha channel of the item's material color.
    fn set_alpha(&mut self, item: &Self::Item, alpha: f32);

    /// Set the node position and local scale.
    fn set_transform(&mut self, item: &Self::Item, position: Vec2, scale: Vec3);
}
