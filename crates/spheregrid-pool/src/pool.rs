#![forbid(unsafe_code)]

//! Fixed-capacity pool and the per-item opacity state machine.
//!
//! # Invariants
//!
//! 1. Capacity is fixed at initialization; items are never added or removed.
//! 2. Item `i` is paired with control `i`; the pairing never changes.
//! 3. After `set_active_count(n)` exactly the controls `[0, n)` are visible,
//!    and every item outside `[0, n)` is hidden.
//! 4. An item latched at zero opacity keeps its visual element hidden while
//!    its control stays visible.
//! 5. At most one opacity transition runs per item; starting another cancels
//!    the first.
//!
//! # Failure Modes
//!
//! - Zero capacity or a factory returning `None`: [`PoolError`] at
//!   initialization.
//! - Active count above capacity: ignored, previous state kept.
//! - Non-finite control values: ignored.

use std::time::Duration;

use spheregrid_core::animation::{Animation, OpacityLerp, OpacityTarget};

use crate::{Control, ControlId, ItemId, MaterialMode, PoolError, PooledItem, SceneHost};

/// Length of a click-triggered opacity transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_secs(1);

/// Value written before fading in an item whose opacity is zero, so
/// reactivation does not immediately re-latch the zero state.
pub const DEFAULT_RESUME_FLOOR: f32 = 0.01;

/// Pre-allocated items paired 1:1 with controls.
#[derive(Debug, Clone)]
pub struct ObjectPool<I, C> {
    items: Vec<PooledItem<I>>,
    controls: Vec<Control<C>>,
    active_count: usize,
    transition_duration: Duration,
    resume_floor: f32,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<I, C> ObjectPool<I, C> {
    /// Allocate `capacity` items and controls and pair them.
    ///
    /// Control `i` is labelled `"Sphere {i + 1}"`. Every item and control is
    /// hidden on the host before being marked ready.
    pub fn initialize<H>(
        capacity: usize,
        mut item_factory: impl FnMut(usize) -> Option<I>,
        mut control_factory: impl FnMut(usize, &str) -> Option<C>,
        host: &mut H,
    ) -> Result<Self, PoolError>
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        if capacity == 0 {
            return Err(PoolError::ZeroCapacity);
        }

        let mut items = Vec::with_capacity(capacity);
        let mut controls = Vec::with_capacity(capacity);
        for index in 0..capacity {
            let label = format!("Sphere {}", index + 1);
            let item = item_factory(index).ok_or(PoolError::MissingItem { index })?;
            let control =
                control_factory(index, &label).ok_or(PoolError::MissingControl { index })?;

            let mut item = PooledItem::new(item);
            let control = Control::new(control, ItemId(index), label);
            item.control = Some(ControlId(index));

            host.set_item_active(&item.resource, false);
            host.set_control_active(&control.resource, false);
            item.ready = true;

            items.push(item);
            controls.push(control);
        }

        tracing::info!(target: "spheregrid.pool", capacity, "pool initialized");
        Ok(Self {
            items,
            controls,
            active_count: 0,
            transition_duration: DEFAULT_TRANSITION,
            resume_floor: DEFAULT_RESUME_FLOOR,
        })
    }

    /// Set the length of click-triggered transitions (builder pattern).
    #[must_use]
    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Set the resume floor used when fading in from zero (builder pattern).
    #[must_use]
    pub fn resume_floor(mut self, floor: f32) -> Self {
        self.resume_floor = floor;
        self
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl<I, C> ObjectPool<I, C> {
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Number of items in the active set.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&PooledItem<I>> {
        self.items.get(id.0)
    }

    #[must_use]
    pub fn control(&self, id: ControlId) -> Option<&Control<C>> {
        self.controls.get(id.0)
    }

    /// The control paired with `id`.
    #[must_use]
    pub fn control_of(&self, id: ItemId) -> Option<&Control<C>> {
        self.item(id)
            .and_then(|item| item.control)
            .and_then(|c| self.control(c))
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &PooledItem<I>)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    pub fn controls(&self) -> impl Iterator<Item = (ControlId, &Control<C>)> {
        self.controls
            .iter()
            .enumerate()
            .map(|(i, control)| (ControlId(i), control))
    }

    /// Items whose control is visible, in pool order.
    ///
    /// This includes items latched at zero opacity: they keep their grid cell.
    pub fn active_items(&self) -> impl Iterator<Item = (ItemId, &PooledItem<I>)> {
        self.items().filter(|(_, item)| {
            item.control
                .and_then(|c| self.controls.get(c.0))
                .is_some_and(|c| c.visible)
        })
    }

    /// Number of items with a visible visual element.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }

    /// Number of visible controls.
    #[must_use]
    pub fn visible_control_count(&self) -> usize {
        self.controls.iter().filter(|c| c.visible).count()
    }

    /// Number of items with an opacity transition in flight.
    #[must_use]
    pub fn transitions_in_flight(&self) -> usize {
        self.items.iter().filter(|item| item.transition.is_some()).count()
    }
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

impl<I, C> ObjectPool<I, C> {
    /// Make items `[0, n)` active and every other item inactive.
    ///
    /// The whole pool is torn down first: zero-opacity latches are cleared,
    /// transitions cancelled, every control hidden and every visible item
    /// deactivated. Returns `false` when `n` equals the current count or
    /// exceeds capacity; the pool is left untouched in both cases.
    pub fn set_active_count<H>(&mut self, n: usize, host: &mut H) -> bool
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        if n == self.active_count {
            return false;
        }
        if n > self.capacity() {
            tracing::warn!(
                target: "spheregrid.pool",
                requested = n,
                capacity = self.capacity(),
                "active count exceeds capacity; ignored"
            );
            return false;
        }

        for i in 0..self.items.len() {
            if let Some(mut transition) = self.items[i].transition.take() {
                transition.cancel();
            }
            self.items[i].opacity_zero = false;
            if let Some(c) = self.items[i].control {
                self.hide_control(c, host);
            }
            self.deactivate_item(i, host);
        }
        for i in 0..n {
            self.activate_item(i, host);
        }

        tracing::debug!(
            target: "spheregrid.pool",
            previous = self.active_count,
            active = n,
            "pool reset"
        );
        self.active_count = n;
        true
    }

    fn hide_control<H>(&mut self, id: ControlId, host: &mut H)
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let Some(control) = self.controls.get_mut(id.0) else {
            return;
        };
        control.visible = false;
        host.set_control_active(&control.resource, false);
    }

    /// Show the visual element and run its enable transition.
    fn activate_item<H>(&mut self, i: usize, host: &mut H)
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let item = &mut self.items[i];
        if item.visible {
            return;
        }
        item.visible = true;
        host.set_item_active(&item.resource, true);

        if !item.ready {
            return;
        }
        let Some(c) = item.control else {
            return;
        };
        let control = &mut self.controls[c.0];
        control.visible = true;
        host.set_control_active(&control.resource, true);

        let value = control.value;
        if value == 0.0 {
            self.items[i].opacity_zero = true;
            self.deactivate_item(i, host);
        } else {
            self.render_opacity(i, value, host);
        }
    }

    /// Hide the visual element; hide the control too unless the item is
    /// latched at zero opacity.
    fn deactivate_item<H>(&mut self, i: usize, host: &mut H)
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let item = &mut self.items[i];
        if !item.visible {
            return;
        }
        item.visible = false;
        host.set_item_active(&item.resource, false);

        if !item.opacity_zero {
            if let Some(c) = item.control {
                self.hide_control(c, host);
            }
        }
    }

    fn render_opacity<H>(&mut self, i: usize, value: f32, host: &mut H)
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let item = &mut self.items[i];
        let material = if value == 1.0 {
            MaterialMode::Opaque
        } else {
            MaterialMode::Fade
        };
        if item.material != material {
            item.material = material;
            host.set_material(&item.resource, material);
        }
        item.opacity = value;
        host.set_alpha(&item.resource, value);
    }
}

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

impl<I, C> ObjectPool<I, C> {
    /// Write a control value and run the owner's value-change transition.
    ///
    /// The value is clamped to [0, 1]. Writing the current value is a no-op.
    /// The transition only runs while the control is visible; a hidden
    /// control just stores the value for its next activation.
    pub fn set_value<H>(&mut self, id: ControlId, value: f32, host: &mut H) -> bool
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        if !value.is_finite() {
            return false;
        }
        let value = value.clamp(0.0, 1.0);
        let Some(control) = self.controls.get_mut(id.0) else {
            return false;
        };
        if control.value == value {
            return false;
        }
        control.value = value;
        host.set_control_value(&control.resource, value);

        let owner = control.owner.0;
        if control.visible && self.items[owner].ready {
            self.on_value_changed(owner, value, host);
        }
        true
    }

    /// Write the control paired with `item`.
    pub fn set_item_value<H>(&mut self, item: ItemId, value: f32, host: &mut H) -> bool
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        match self.item(item).and_then(|it| it.control) {
            Some(c) => self.set_value(c, value, host),
            None => false,
        }
    }

    /// Write `value` into every visible control. Returns how many changed.
    pub fn set_all_values<H>(&mut self, value: f32, host: &mut H) -> usize
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let mut changed = 0;
        for c in 0..self.controls.len() {
            if self.controls[c].visible && self.set_value(ControlId(c), value, host) {
                changed += 1;
            }
        }
        changed
    }

    fn on_value_changed<H>(&mut self, i: usize, value: f32, host: &mut H)
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        if value == 0.0 {
            let item = &mut self.items[i];
            item.opacity = 0.0;
            item.opacity_zero = true;
            self.deactivate_item(i, host);
        } else {
            self.items[i].opacity_zero = false;
            self.activate_item(i, host);
            self.render_opacity(i, value, host);
        }
    }
}

// ---------------------------------------------------------------------------
// Timed transitions
// ---------------------------------------------------------------------------

impl<I, C> ObjectPool<I, C> {
    /// Start a timed fade on `item`.
    ///
    /// Values below one half fade to 1, values above fade to 0, exactly one
    /// half does nothing. An item hidden at zero opacity is first nudged to
    /// the resume floor and reactivated. A transition already in flight is
    /// cancelled and restarted from the current value.
    pub fn start_transition<H>(&mut self, item: ItemId, host: &mut H) -> bool
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let i = item.0;
        let Some(c) = self.items.get(i).filter(|it| it.ready).and_then(|it| it.control) else {
            return false;
        };
        if !self.controls[c.0].visible {
            return false;
        }
        let Some(target) = OpacityTarget::toward(self.controls[c.0].value) else {
            tracing::trace!(target: "spheregrid.pool", item = i, "transition skipped at midpoint");
            return false;
        };

        if target == OpacityTarget::Opaque && !self.items[i].visible {
            let floor = self.resume_floor;
            self.set_value(c, floor, host);
            self.activate_item(i, host);
        }

        if let Some(mut previous) = self.items[i].transition.take() {
            previous.cancel();
        }
        let start = self.controls[c.0].value;
        self.items[i].transition = Some(OpacityLerp::to_target(
            start,
            target,
            self.transition_duration,
        ));
        tracing::trace!(
            target: "spheregrid.pool",
            item = i,
            start,
            end = target.value(),
            "transition started"
        );
        true
    }

    /// Start a transition on every item whose control is visible.
    pub fn start_all_transitions<H>(&mut self, host: &mut H) -> usize
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let mut started = 0;
        for i in 0..self.items.len() {
            let visible = self.items[i]
                .control
                .is_some_and(|c| self.controls[c.0].visible);
            if visible && self.start_transition(ItemId(i), host) {
                started += 1;
            }
        }
        started
    }

    /// Cancel the transition on `item`. Returns `true` if one was running.
    pub fn cancel_transition(&mut self, item: ItemId) -> bool {
        match self.items.get_mut(item.0).and_then(|it| it.transition.take()) {
            Some(mut transition) => {
                transition.cancel();
                true
            }
            None => false,
        }
    }

    /// Advance every in-flight transition by `dt` and write the sampled value
    /// back into its control. Returns how many transitions were advanced.
    pub fn tick<H>(&mut self, dt: Duration, host: &mut H) -> usize
    where
        H: SceneHost<Item = I, Control = C> + ?Sized,
    {
        let mut advanced = 0;
        for i in 0..self.items.len() {
            let Some(mut transition) = self.items[i].transition.take() else {
                continue;
            };
            if transition.is_cancelled() {
                continue;
            }
            transition.tick(dt);
            advanced += 1;
            let value = transition.value();
            if !transition.is_complete() {
                self.items[i].transition = Some(transition);
            }
            if let Some(c) = self.items[i].control {
                self.set_value(c, value, host);
            }
        }
        advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemState;
    use spheregrid_core::geometry::{Vec2, Vec3};

    #[derive(Default)]
    struct Recorder {
        items: Vec<bool>,
        controls: Vec<bool>,
        values: Vec<f32>,
        materials: Vec<MaterialMode>,
        alphas: Vec<f32>,
        transforms: usize,
    }

    impl Recorder {
        fn with_capacity(n: usize) -> Self {
            Self {
                items: vec![true; n],
                controls: vec![true; n],
                values: vec![1.0; n],
                materials: vec![MaterialMode::Opaque; n],
                alphas: vec![1.0; n],
                transforms: 0,
            }
        }
    }

    impl SceneHost for Recorder {
        type Item = usize;
        type Control = usize;

        fn set_item_active(&mut self, item: &usize, active: bool) {
            self.items[*item] = active;
        }

        fn set_control_active(&mut self, control: &usize, active: bool) {
            self.controls[*control] = active;
        }

        fn set_control_value(&mut self, control: &usize, value: f32) {
            self.values[*control] = value;
        }

        fn set_material(&mut self, item: &usize, mode: MaterialMode) {
            self.materials[*item] = mode;
        }

        fn set_alpha(&mut self, item: &usize, alpha: f32) {
            self.alphas[*item] = alpha;
        }

        fn set_transform(&mut self, _item: &usize, _position: Vec2, _scale: Vec3) {
            self.transforms += 1;
        }
    }

    fn pool(n: usize) -> (ObjectPool<usize, usize>, Recorder) {
        let mut host = Recorder::with_capacity(n);
        let pool = ObjectPool::initialize(n, Some, |i, _| Some(i), &mut host).expect("pool");
        (pool, host)
    }

    const SEC_1: Duration = Duration::from_secs(1);
    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn initialize_pairs_and_hides() {
        let (pool, host) = pool(4);
        assert_eq!(pool.capacity(), 4);
        for (id, item) in pool.items() {
            assert!(item.is_ready());
            assert!(!item.is_visible());
            assert_eq!(item.state(), ItemState::Inactive);
            let control = pool.control_of(id).expect("paired");
            assert_eq!(control.owner(), id);
            assert_eq!(control.label(), format!("Sphere {}", id.0 + 1));
        }
        assert!(host.items.iter().all(|v| !v));
        assert!(host.controls.iter().all(|v| !v));
    }

    #[test]
    fn initialize_rejects_bad_setup() {
        let mut host = Recorder::with_capacity(3);
        let err = ObjectPool::<usize, usize>::initialize(0, Some, |i, _| Some(i), &mut host)
            .expect_err("zero capacity");
        assert_eq!(err, PoolError::ZeroCapacity);

        let err = ObjectPool::initialize(
            3,
            |i| (i != 1).then_some(i),
            |i, _| Some(i),
            &mut host,
        )
        .expect_err("missing item");
        assert_eq!(err, PoolError::MissingItem { index: 1 });

        let err = ObjectPool::initialize(3, Some, |i, _| (i != 2).then_some(i), &mut host)
            .expect_err("missing control");
        assert_eq!(err, PoolError::MissingControl { index: 2 });
    }

    #[test]
    fn activation_shows_prefix() {
        let (mut pool, mut host) = pool(10);
        assert!(pool.set_active_count(4, &mut host));
        assert_eq!(pool.active_count(), 4);
        for i in 0..10 {
            assert_eq!(host.items[i], i < 4, "item {i}");
            assert_eq!(host.controls[i], i < 4, "control {i}");
        }
        assert_eq!(pool.active_items().count(), 4);
    }

    #[test]
    fn same_count_is_noop() {
        let (mut pool, mut host) = pool(5);
        pool.set_active_count(3, &mut host);
        assert!(!pool.set_active_count(3, &mut host));
    }

    #[test]
    fn out_of_range_count_is_ignored() {
        let (mut pool, mut host) = pool(5);
        pool.set_active_count(2, &mut host);
        assert!(!pool.set_active_count(6, &mut host));
        assert_eq!(pool.active_count(), 2);
        assert_eq!(pool.visible_count(), 2);
    }

    #[test]
    fn fade_value_sets_material_and_alpha() {
        let (mut pool, mut host) = pool(3);
        pool.set_active_count(3, &mut host);
        assert!(pool.set_value(ControlId(1), 0.3, &mut host));
        let item = pool.item(ItemId(1)).expect("item");
        assert_eq!(item.state(), ItemState::ActiveFading);
        assert_eq!(item.material(), MaterialMode::Fade);
        assert_eq!(host.materials[1], MaterialMode::Fade);
        assert!((host.alphas[1] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn zero_hides_item_but_keeps_control() {
        let (mut pool, mut host) = pool(3);
        pool.set_active_count(3, &mut host);
        pool.set_value(ControlId(0), 0.3, &mut host);
        pool.set_value(ControlId(0), 0.0, &mut host);

        let item = pool.item(ItemId(0)).expect("item");
        assert_eq!(item.state(), ItemState::ActiveZero);
        assert!(!host.items[0]);
        assert!(host.controls[0]);
        assert_eq!(pool.control(ControlId(0)).map(Control::value), Some(0.0));
        assert_eq!(pool.active_items().count(), 3, "zeroed item keeps its cell");
    }

    #[test]
    fn one_restores_opaque() {
        let (mut pool, mut host) = pool(2);
        pool.set_active_count(2, &mut host);
        pool.set_value(ControlId(0), 0.0, &mut host);
        pool.set_value(ControlId(0), 1.0, &mut host);
        let item = pool.item(ItemId(0)).expect("item");
        assert_eq!(item.state(), ItemState::ActiveOpaque);
        assert_eq!(host.materials[0], MaterialMode::Opaque);
        assert_eq!(host.alphas[0], 1.0);
        assert!(host.items[0]);
    }

    #[test]
    fn reactivating_zeroed_item_relatches() {
        let (mut pool, mut host) = pool(4);
        pool.set_active_count(4, &mut host);
        pool.set_value(ControlId(1), 0.0, &mut host);
        pool.set_active_count(2, &mut host);

        let item = pool.item(ItemId(1)).expect("item");
        assert_eq!(item.state(), ItemState::ActiveZero);
        assert!(!host.items[1]);
        assert!(host.controls[1]);
        assert!(!host.controls[2]);
        assert!(!host.controls[3]);
    }

    #[test]
    fn shrinking_clears_zero_latch_outside_range() {
        let (mut pool, mut host) = pool(4);
        pool.set_active_count(4, &mut host);
        pool.set_value(ControlId(3), 0.0, &mut host);
        pool.set_active_count(2, &mut host);
        let item = pool.item(ItemId(3)).expect("item");
        assert_eq!(item.state(), ItemState::Inactive);
        assert!(!host.controls[3]);
    }

    #[test]
    fn hidden_control_stores_value_only() {
        let (mut pool, mut host) = pool(3);
        pool.set_active_count(1, &mut host);
        assert!(pool.set_value(ControlId(2), 0.4, &mut host));
        assert!(!host.items[2]);
        assert_eq!(pool.item(ItemId(2)).map(PooledItem::state), Some(ItemState::Inactive));
    }

    #[test]
    fn values_are_clamped() {
        let (mut pool, mut host) = pool(1);
        pool.set_active_count(1, &mut host);
        pool.set_value(ControlId(0), -3.0, &mut host);
        assert_eq!(pool.control(ControlId(0)).map(Control::value), Some(0.0));
        assert!(!pool.set_value(ControlId(0), f32::NAN, &mut host));
    }

    #[test]
    fn transition_fades_out_and_snaps() {
        let (mut pool, mut host) = pool(2);
        pool.set_active_count(2, &mut host);
        assert!(pool.start_transition(ItemId(0), &mut host));

        let mut prev = 1.0;
        for _ in 0..9 {
            pool.tick(MS_100, &mut host);
            let v = host.values[0];
            assert!(v < prev);
            prev = v;
        }
        pool.tick(MS_100, &mut host);
        assert_eq!(pool.control(ControlId(0)).map(Control::value), Some(0.0));
        assert_eq!(pool.transitions_in_flight(), 0);
        assert!(!host.items[0]);
        assert!(host.controls[0]);
    }

    #[test]
    fn transition_resumes_from_zero() {
        let (mut pool, mut host) = pool(1);
        pool.set_active_count(1, &mut host);
        pool.set_value(ControlId(0), 0.0, &mut host);
        assert!(!host.items[0]);

        assert!(pool.start_transition(ItemId(0), &mut host));
        assert!(host.items[0], "floor write reactivates the item");
        let start = pool.item(ItemId(0)).and_then(|i| i.transition()).map(|t| t.start());
        assert_eq!(start, Some(DEFAULT_RESUME_FLOOR));

        pool.tick(SEC_1, &mut host);
        let item = pool.item(ItemId(0)).expect("item");
        assert_eq!(item.state(), ItemState::ActiveOpaque);
        assert_eq!(host.materials[0], MaterialMode::Opaque);
    }

    #[test]
    fn midpoint_does_not_start() {
        let (mut pool, mut host) = pool(1);
        pool.set_active_count(1, &mut host);
        pool.set_value(ControlId(0), 0.5, &mut host);
        assert!(!pool.start_transition(ItemId(0), &mut host));
        assert_eq!(pool.transitions_in_flight(), 0);
    }

    #[test]
    fn restart_replaces_running_transition() {
        let (mut pool, mut host) = pool(1);
        pool.set_active_count(1, &mut host);
        pool.set_value(ControlId(0), 0.2, &mut host);
        pool.start_transition(ItemId(0), &mut host);
        pool.tick(Duration::from_millis(500), &mut host);
        // 0.2 -> 1.0 halfway: 0.6, now above one half so the restart fades out.
        pool.start_transition(ItemId(0), &mut host);
        let t = pool.item(ItemId(0)).and_then(|i| i.transition()).cloned().expect("running");
        assert!((t.start() - 0.6).abs() < 1e-5);
        assert_eq!(t.end(), 0.0);
        assert_eq!(pool.transitions_in_flight(), 1);
    }

    #[test]
    fn reset_cancels_transitions() {
        let (mut pool, mut host) = pool(3);
        pool.set_active_count(3, &mut host);
        assert_eq!(pool.start_all_transitions(&mut host), 3);
        pool.tick(MS_100, &mut host);
        pool.set_active_count(1, &mut host);
        assert_eq!(pool.transitions_in_flight(), 0);
        let before = host.values.clone();
        pool.tick(SEC_1, &mut host);
        assert_eq!(host.values, before);
    }

    #[test]
    fn cancel_transition_reports_running() {
        let (mut pool, mut host) = pool(1);
        pool.set_active_count(1, &mut host);
        pool.start_transition(ItemId(0), &mut host);
        assert!(pool.cancel_transition(ItemId(0)));
        assert!(!pool.cancel_transition(ItemId(0)));
    }

    #[test]
    fn inactive_items_do_not_transition() {
        let (mut pool, mut host) = pool(3);
        pool.set_active_count(1, &mut host);
        assert!(!pool.start_transition(ItemId(2), &mut host));
        assert_eq!(pool.start_all_transitions(&mut host), 1);
    }

    #[test]
    fn master_value_reaches_visible_controls_only() {
        let (mut pool, mut host) = pool(5);
        pool.set_active_count(3, &mut host);
        assert_eq!(pool.set_all_values(0.25, &mut host), 3);
        assert_eq!(pool.control(ControlId(4)).map(Control::value), Some(1.0));
        assert!((host.alphas[2] - 0.25).abs() < 1e-6);
    }
}
