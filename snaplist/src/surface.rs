use crate::Animation;

/// The scrollable surface a [`crate::SnapList`] drives.
///
/// Implemented by the host's scroll container (or by `snaplist_adapter::TweenSurface` for
/// frame-loop integrations). The list only calls into it from `SnapList::tick`, never from
/// inside its own scroll notification handlers.
pub trait ScrollSurface {
    /// Current scroll position along the list axis.
    fn scroll_offset(&self) -> f32;

    /// Animates from the current position to `offset`.
    ///
    /// Must replace any animation already in flight; a newer target always wins.
    fn animate_to(&mut self, offset: f32, animation: Animation, now_ms: u64);

    /// Moves to `offset` immediately.
    fn jump_to(&mut self, offset: f32);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_offset(&self) -> f32 {
        (**self).scroll_offset()
    }

    fn animate_to(&mut self, offset: f32, animation: Animation, now_ms: u64) {
        (**self).animate_to(offset, animation, now_ms);
    }

    fn jump_to(&mut self, offset: f32) {
        (**self).jump_to(offset);
    }
}
