use snaplist::{
    FocusHandle, ScrollMetrics, ScrollSurface, SnapList, SnapListError, SnapListOptions,
};

use crate::{GestureTracker, TweenSurface};

/// A framework-neutral controller that wraps a `snaplist::SnapList` and provides the common
/// frame-loop workflow (gesture-end detection, tween-driven snapping).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_extent` after layout
/// - `on_pointer_down` / `on_pointer_up` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick
///
/// `tick` issues the scroll commands queued by earlier events, advances the snap tween
/// and settles the list once a gesture has ended. Apply the returned offset to the real
/// scroll container (if any).
#[derive(Debug)]
pub struct Controller {
    list: SnapList<TweenSurface>,
    gesture: GestureTracker,
}

impl Controller {
    pub fn new(options: SnapListOptions) -> Result<Self, SnapListError> {
        Ok(Self::from_list(SnapList::new(options, TweenSurface::default())?))
    }

    pub fn from_list(list: SnapList<TweenSurface>) -> Self {
        Self {
            list,
            gesture: GestureTracker::default(),
        }
    }

    /// Sets how long scrolling must be idle (after pointer release) before a gesture ends.
    pub fn with_idle_ms(mut self, idle_ms: u64) -> Self {
        self.gesture = GestureTracker::new(idle_ms);
        self
    }

    pub fn list(&self) -> &SnapList<TweenSurface> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SnapList<TweenSurface> {
        &mut self.list
    }

    pub fn into_list(self) -> SnapList<TweenSurface> {
        self.list
    }

    pub fn handle(&self) -> FocusHandle {
        self.list.handle()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.list.surface().scroll_offset()
    }

    /// Whether a snap is queued or in flight.
    pub fn is_animating(&self) -> bool {
        self.list.pending_scroll().is_some() || self.list.surface().is_animating()
    }

    /// Whether a user gesture is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.gesture.is_scrolling()
    }

    pub fn on_viewport_extent(&mut self, extent: f32) {
        self.list.on_viewport_extent(extent);
    }

    pub fn on_viewport_size(&mut self, width: f32, height: f32) {
        self.list.on_viewport_size(width, height);
    }

    /// The user grabbed the list: any running snap animation stops where it is and a
    /// snap that was queued but not yet issued is dropped.
    pub fn on_pointer_down(&mut self) {
        self.list.cancel_pending();
        self.list.surface_mut().cancel_animation();
        self.gesture.on_pointer_down();
    }

    pub fn on_pointer_up(&mut self, now_ms: u64) {
        self.gesture.on_pointer_up(now_ms);
    }

    /// Call this when the UI reports a user scroll (wheel/drag/fling frame).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset: f32, now_ms: u64) {
        self.list.surface_mut().set_scroll_offset(offset);
        self.list.on_scroll(offset);
        self.gesture.on_scroll_event(now_ms);
    }

    pub fn on_item_tap(&mut self, index: usize) -> bool {
        self.list.on_item_tap(index)
    }

    pub fn focus_to_item(&mut self, index: usize) -> bool {
        self.list.focus_to_item(index)
    }

    /// Advances the controller.
    ///
    /// Returns the new scroll offset when the surface moved during this tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let issued = self.list.tick(now_ms).is_some();
        let animated = self.list.surface_mut().tick(now_ms).is_some();
        let moved = issued || animated;
        if moved {
            let offset = self.list.surface().scroll_offset();
            self.list.on_scroll(offset);
        }

        if self.gesture.poll(now_ms) {
            let metrics = ScrollMetrics::new(
                self.list.surface().scroll_offset(),
                self.list.max_scroll_offset(),
            );
            atrace!(
                offset = metrics.offset,
                max_offset = metrics.max_offset,
                "settling after gesture"
            );
            // Queued here, issued on the next tick.
            self.list.on_scroll_gesture_end(metrics);
        }

        moved.then(|| self.list.surface().scroll_offset())
    }

    /// Tears the controller down, releasing the surface.
    pub fn dispose(self) -> TweenSurface {
        self.list.dispose()
    }
}
