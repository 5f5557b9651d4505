/// Synthesizes "scroll gesture ended" events from raw pointer and scroll input.
///
/// A gesture starts with the first scroll event and ends once the pointer is released and
/// no scroll event has arrived for `idle_ms` (covering fling/momentum tails). Hosts that
/// have a native scroll-end event can skip this type and call
/// `SnapList::on_scroll_gesture_end` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureTracker {
    idle_ms: u64,
    pointer_down: bool,
    is_scrolling: bool,
    last_event_ms: Option<u64>,
}

impl GestureTracker {
    pub const DEFAULT_IDLE_MS: u64 = 150;

    pub fn new(idle_ms: u64) -> Self {
        Self {
            idle_ms,
            pointer_down: false,
            is_scrolling: false,
            last_event_ms: None,
        }
    }

    pub fn idle_ms(&self) -> u64 {
        self.idle_ms
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn on_pointer_down(&mut self) {
        self.pointer_down = true;
    }

    pub fn on_pointer_up(&mut self, now_ms: u64) {
        self.pointer_down = false;
        if self.is_scrolling {
            let last = self.last_event_ms.unwrap_or(now_ms);
            self.last_event_ms = Some(last.max(now_ms));
        }
    }

    pub fn on_scroll_event(&mut self, now_ms: u64) {
        self.is_scrolling = true;
        self.last_event_ms = Some(now_ms);
    }

    /// Drops any gesture in progress without reporting its end.
    pub fn reset(&mut self) {
        self.is_scrolling = false;
        self.last_event_ms = None;
    }

    /// Returns `true` exactly once per gesture, on the first poll after it ended.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling || self.pointer_down {
            return false;
        }
        let Some(last) = self.last_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.idle_ms {
            return false;
        }
        adebug!(last_event_ms = last, now_ms, "scroll gesture ended");
        self.reset();
        true
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IDLE_MS)
    }
}
