#![forbid(unsafe_code)]

use spheregrid_core::geometry::{Size, Vec2, Vec3};
use spheregrid_layout::{CanvasHost, PanelInsets, ViewportHost};
use spheregrid_pool::{MaterialMode, SceneHost};

/// Pixels per scene unit for the default camera.
const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;

/// Recorded state of one visual item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRecord {
    pub active: bool,
    pub material: MaterialMode,
    pub alpha: f32,
    pub position: Vec2,
    pub scale: Vec3,
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self {
            active: true,
            material: MaterialMode::Opaque,
            alpha: 1.0,
            position: Vec2::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Recorded state of one control widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRecord {
    pub active: bool,
    pub value: f32,
}

impl Default for ControlRecord {
    fn default() -> Self {
        Self {
            active: true,
            value: 1.0,
        }
    }
}

/// In-memory engine stand-in. Item and control handles are indices.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub viewport: Size,
    pub footprint: Size,
    pub pixels_per_unit: f32,
    pub canvas_changed: bool,
    pub insets: Option<PanelInsets>,
    pub items: Vec<ItemRecord>,
    pub controls: Vec<ControlRecord>,
    /// Number of `set_transform` calls, for recompute assertions.
    pub transform_writes: usize,
}

impl HeadlessHost {
    /// A host with room for `capacity` items and a 50px reference footprint.
    ///
    /// Records start "active" the way freshly instantiated engine objects do;
    /// the pool hides them during initialization.
    #[must_use]
    pub fn new(capacity: usize, viewport: Size) -> Self {
        Self {
            viewport,
            footprint: Size::new(50.0, 50.0),
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            canvas_changed: false,
            insets: None,
            items: vec![ItemRecord::default(); capacity],
            controls: vec![ControlRecord::default(); capacity],
            transform_writes: 0,
        }
    }

    /// Resize the window: viewport and canvas change together.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.canvas_changed = true;
    }

    /// Item handle factory for the pool.
    pub fn item_factory(&self) -> impl FnMut(usize) -> Option<usize> + use<> {
        let capacity = self.items.len();
        move |i| (i < capacity).then_some(i)
    }

    /// Control handle factory for the pool.
    pub fn control_factory(&self) -> impl FnMut(usize, &str) -> Option<usize> + use<> {
        let capacity = self.controls.len();
        move |i, _label| (i < capacity).then_some(i)
    }

    /// Indices of items whose visual element is shown.
    #[must_use]
    pub fn visible_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.active.then_some(i))
            .collect()
    }

    /// Indices of controls that are shown.
    #[must_use]
    pub fn visible_controls(&self) -> Vec<usize> {
        self.controls
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.active.then_some(i))
            .collect()
    }
}

impl SceneHost for HeadlessHost {
    type Item = usize;
    type Control = usize;

    fn set_item_active(&mut self, item: &usize, active: bool) {
        if let Some(record) = self.items.get_mut(*item) {
            record.active = active;
        }
    }

    fn set_control_active(&mut self, control: &usize, active: bool) {
        if let Some(record) = self.controls.get_mut(*control) {
            record.active = active;
        }
    }

    fn set_control_value(&mut self, control: &usize, value: f32) {
        if let Some(record) = self.controls.get_mut(*control) {
            record.value = value;
        }
    }

    fn set_material(&mut self, item: &usize, mode: MaterialMode) {
        if let Some(record) = self.items.get_mut(*item) {
            record.material = mode;
        }
    }

    fn set_alpha(&mut self, item: &usize, alpha: f32) {
        if let Some(record) = self.items.get_mut(*item) {
            record.alpha = alpha;
        }
    }

    fn set_transform(&mut self, item: &usize, position: Vec2, scale: Vec3) {
        self.transform_writes += 1;
        if let Some(record) = self.items.get_mut(*item) {
            record.position = position;
            record.scale = scale;
        }
    }
}

impl ViewportHost for HeadlessHost {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn reference_footprint(&self) -> Size {
        self.footprint
    }

    fn screen_to_world(&self, point: Vec2) -> Vec2 {
        let ppu = if self.pixels_per_unit > 0.0 {
            self.pixels_per_unit
        } else {
            DEFAULT_PIXELS_PER_UNIT
        };
        Vec2::new(
            (point.x - self.viewport.width / 2.0) / ppu,
            (point.y - self.viewport.height / 2.0) / ppu,
        )
    }
}

impl CanvasHost for HeadlessHost {
    fn canvas_width(&self) -> f32 {
        self.viewport.width
    }

    fn take_canvas_changed(&mut self) -> bool {
        std::mem::take(&mut self.canvas_changed)
    }

    fn set_panel_insets(&mut self, insets: PanelInsets) {
        self.insets = Some(insets);
    }
}
