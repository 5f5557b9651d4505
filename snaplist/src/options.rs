use alloc::rc::Rc;

use crate::{Animation, Axis, Easing, SnapAnchor, SnapListError};

/// Fired with the index the list settles on (or is asked to focus).
///
/// Fires on every gesture end and every explicit focus request, even when the index is
/// unchanged. Callers wanting change-only notifications dedupe themselves.
pub type OnItemFocusCallback = Rc<dyn Fn(usize)>;

/// Fired when a gesture ends within the end-of-list tolerance of the maximum offset.
///
/// Re-fires on every subsequent gesture end while the list stays at the end.
pub type OnReachEndCallback = Rc<dyn Fn()>;

/// Configuration for [`crate::SnapList`].
///
/// Cheap to clone: callbacks are stored in `Rc`s, so hosts can tweak a field and hand the
/// result to `SnapList::set_options`.
pub struct SnapListOptions {
    /// Along-axis footprint of one item including its spacing. The unit of snapping.
    ///
    /// Must match the rendered item size exactly, or snapping drifts.
    pub item_pitch: f32,
    /// Number of items. Used to clamp focus indices and to size the content.
    ///
    /// Snapping is exact for indices below [`MAX_EXACT_INDEX`](crate::geometry::MAX_EXACT_INDEX);
    /// larger lists still work but may settle one item off.
    pub item_count: usize,
    pub axis: Axis,
    /// When set, index `0` sits at the visual end of the axis.
    pub reversed: bool,
    pub animation: Animation,
    /// Whether item taps request focus on the tapped item.
    pub auto_focus_on_tap: bool,
    pub anchor: SnapAnchor,
    /// Item focused (by a jump, without animation) on the first layout with a non-zero viewport.
    pub initial_index: Option<usize>,
    /// Distance before the maximum offset at which a gesture end counts as "end of list".
    ///
    /// Defaults to half an item pitch, so the notification fires once the last item rests
    /// on the anchor.
    pub end_of_list_tolerance: Option<f32>,
    /// Emit `on_item_focus` while scrolling whenever the nearest index changes, not only
    /// when a gesture ends.
    pub update_on_scroll: bool,
    pub on_item_focus: Option<OnItemFocusCallback>,
    pub on_reach_end: Option<OnReachEndCallback>,
}

impl Clone for SnapListOptions {
    fn clone(&self) -> Self {
        Self {
            item_pitch: self.item_pitch,
            item_count: self.item_count,
            axis: self.axis,
            reversed: self.reversed,
            animation: self.animation,
            auto_focus_on_tap: self.auto_focus_on_tap,
            anchor: self.anchor,
            initial_index: self.initial_index,
            end_of_list_tolerance: self.end_of_list_tolerance,
            update_on_scroll: self.update_on_scroll,
            on_item_focus: self.on_item_focus.clone(),
            on_reach_end: self.on_reach_end.clone(),
        }
    }
}

impl SnapListOptions {
    /// Creates options with the given item pitch and defaults for everything else.
    ///
    /// Validation happens when the options are handed to a [`crate::SnapList`].
    pub fn new(item_pitch: f32) -> Self {
        Self {
            item_pitch,
            item_count: 0,
            axis: Axis::Horizontal,
            reversed: false,
            animation: Animation::default(),
            auto_focus_on_tap: true,
            anchor: SnapAnchor::Middle,
            initial_index: None,
            end_of_list_tolerance: None,
            update_on_scroll: false,
            on_item_focus: None,
            on_reach_end: None,
        }
    }

    pub fn validate(&self) -> Result<(), SnapListError> {
        if !self.item_pitch.is_finite() || self.item_pitch <= 0.0 {
            return Err(SnapListError::InvalidItemPitch(self.item_pitch));
        }
        if self.animation.duration_ms == 0 {
            return Err(SnapListError::InvalidAnimationDuration);
        }
        if let Some(tolerance) = self.end_of_list_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(SnapListError::InvalidEndOfListTolerance(tolerance));
            }
        }
        Ok(())
    }

    /// The effective end-of-list tolerance.
    pub fn end_of_list_tolerance(&self) -> f32 {
        self.end_of_list_tolerance.unwrap_or(self.item_pitch / 2.0)
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation.easing = easing;
        self
    }

    pub fn with_auto_focus_on_tap(mut self, auto_focus_on_tap: bool) -> Self {
        self.auto_focus_on_tap = auto_focus_on_tap;
        self
    }

    pub fn with_anchor(mut self, anchor: SnapAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_initial_index(mut self, initial_index: Option<usize>) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_end_of_list_tolerance(mut self, tolerance: Option<f32>) -> Self {
        self.end_of_list_tolerance = tolerance;
        self
    }

    pub fn with_update_on_scroll(mut self, update_on_scroll: bool) -> Self {
        self.update_on_scroll = update_on_scroll;
        self
    }

    pub fn with_on_item_focus(
        mut self,
        on_item_focus: Option<impl Fn(usize) + 'static>,
    ) -> Self {
        self.on_item_focus = on_item_focus.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_reach_end(
        mut self,
        on_reach_end: Option<impl Fn() + 'static>,
    ) -> Self {
        self.on_reach_end = on_reach_end.map(|f| Rc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for SnapListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SnapListOptions")
            .field("item_pitch", &self.item_pitch)
            .field("item_count", &self.item_count)
            .field("axis", &self.axis)
            .field("reversed", &self.reversed)
            .field("animation", &self.animation)
            .field("auto_focus_on_tap", &self.auto_focus_on_tap)
            .field("anchor", &self.anchor)
            .field("initial_index", &self.initial_index)
            .field("end_of_list_tolerance", &self.end_of_list_tolerance)
            .field("update_on_scroll", &self.update_on_scroll)
            .finish_non_exhaustive()
    }
}
