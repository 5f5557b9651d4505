use snaplist::{Animation, ScrollSurface};

use crate::Tween;

/// A [`ScrollSurface`] that animates by sampling a [`Tween`] on every frame.
///
/// Useful for hosts without a native animated scroll: call `tick(now_ms)` each frame and
/// apply the returned offset to the real scroll container (if any).
#[derive(Clone, Debug, Default)]
pub struct TweenSurface {
    offset: f32,
    tween: Option<Tween>,
}

impl TweenSurface {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            tween: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<Tween> {
        self.tween
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the user moves the scroll position (wheel/drag).
    ///
    /// This cancels any active tween.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.cancel_animation();
        self.offset = offset;
    }

    /// Advances the active tween.
    ///
    /// Returns the new offset while a tween is running (including the frame it finishes
    /// on), otherwise `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            atrace!(offset = self.offset, now_ms, "tween finished");
            self.tween = None;
        }
        Some(self.offset)
    }
}

impl ScrollSurface for TweenSurface {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn animate_to(&mut self, offset: f32, animation: Animation, now_ms: u64) {
        let tween = match self.tween {
            // A running tween is replaced from wherever it currently is.
            Some(mut running) => {
                running.retarget(now_ms, offset, animation.duration_ms);
                running.easing = animation.easing;
                running
            }
            None => Tween::new(
                self.offset,
                offset,
                now_ms,
                animation.duration_ms,
                animation.easing,
            ),
        };
        atrace!(from = tween.from, to = offset, now_ms, "tween started");
        self.tween = Some(tween);
    }

    fn jump_to(&mut self, offset: f32) {
        self.tween = None;
        self.offset = offset;
    }
}
