use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::geometry::{self, Geometry};
use crate::{
    Axis, ItemSlot, ScrollCommand, ScrollKind, ScrollMetrics, ScrollSurface, SnapAnchor,
    SnapListError, SnapListOptions,
};

/// A headless snap-to-item controller.
///
/// This type translates continuous scroll state into a discrete focus index and focus
/// requests back into animated scroll commands:
/// - It does not render anything and does not own item data.
/// - Your host reports viewport size, scroll samples, gesture ends and item taps.
/// - Scroll commands are deferred: they are queued by the event handlers and issued on the
///   [`ScrollSurface`] by the next [`SnapList::tick`], never from inside a handler.
///
/// External code that needs to move the focus holds a [`FocusHandle`] (see
/// [`SnapList::handle`]); the list stays the sole owner of the surface.
#[derive(Debug)]
pub struct SnapList<S> {
    shared: Rc<RefCell<Shared>>,
    surface: S,
}

#[derive(Debug)]
struct Shared {
    options: SnapListOptions,
    viewport_extent: f32,
    scroll_offset: f32,
    pending: Option<ScrollCommand>,
    // Last index emitted by live-scroll tracking or a settle/focus request.
    last_index: Option<usize>,
    initial_applied: bool,
}

/// Notifications collected while `Shared` is borrowed, dispatched once the borrow ends so
/// callbacks may call back into a [`FocusHandle`].
#[derive(Default)]
struct Outbox {
    reached_end: bool,
    focused: Option<usize>,
}

impl Shared {
    fn geometry(&self) -> Geometry {
        Geometry::new(
            self.viewport_extent,
            self.options.item_pitch,
            self.options.anchor,
        )
    }

    fn queue(&mut self, command: ScrollCommand) {
        if let Some(_prev) = self.pending.replace(command) {
            strace!(
                superseded = _prev.offset,
                offset = command.offset,
                "scroll command superseded"
            );
        }
    }

    fn focus_to_item(&mut self, index: usize, out: &mut Outbox) -> bool {
        let count = self.options.item_count;
        if count == 0 {
            sdebug!(index, "focus_to_item ignored: list is empty");
            return false;
        }
        let clamped = index.min(count - 1);
        if clamped != index {
            swarn!(index, count, "focus_to_item: index out of range, clamped");
        }
        out.focused = Some(clamped);
        self.last_index = Some(clamped);
        self.queue(ScrollCommand {
            offset: geometry::offset_for_index(clamped, self.options.item_pitch),
            kind: ScrollKind::Animate,
        });
        true
    }

    fn apply_initial_index(&mut self, out: &mut Outbox) {
        if self.initial_applied || self.viewport_extent <= 0.0 {
            return;
        }
        let Some(initial) = self.options.initial_index else {
            return;
        };
        let count = self.options.item_count;
        if count == 0 {
            return;
        }
        let index = initial.min(count - 1);
        sdebug!(index, "applying initial index");
        self.initial_applied = true;
        self.last_index = Some(index);
        out.focused = Some(index);
        self.queue(ScrollCommand {
            offset: geometry::offset_for_index(index, self.options.item_pitch),
            kind: ScrollKind::Jump,
        });
    }
}

fn dispatch(shared: &RefCell<Shared>, out: Outbox) {
    if !out.reached_end && out.focused.is_none() {
        return;
    }
    let (on_reach_end, on_item_focus) = {
        let s = shared.borrow();
        (
            s.options.on_reach_end.clone(),
            s.options.on_item_focus.clone(),
        )
    };
    if out.reached_end {
        if let Some(cb) = on_reach_end {
            cb();
        }
    }
    if let Some(index) = out.focused {
        if let Some(cb) = on_item_focus {
            cb(index);
        }
    }
}

impl<S: ScrollSurface> SnapList<S> {
    /// Creates a list controller driving `surface`.
    ///
    /// Fails when the options are invalid (e.g. a non-positive item pitch).
    pub fn new(options: SnapListOptions, surface: S) -> Result<Self, SnapListError> {
        options.validate()?;
        sdebug!(
            item_pitch = options.item_pitch,
            item_count = options.item_count,
            "SnapList::new"
        );
        Ok(Self {
            shared: Rc::new(RefCell::new(Shared {
                options,
                viewport_extent: 0.0,
                scroll_offset: 0.0,
                pending: None,
                last_index: None,
                initial_applied: false,
            })),
            surface,
        })
    }

    /// Returns a handle external code can use to move the focus.
    pub fn handle(&self) -> FocusHandle {
        FocusHandle {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn options(&self) -> SnapListOptions {
        self.shared.borrow().options.clone()
    }

    /// Replaces the configuration wholesale.
    ///
    /// Invalid options are rejected and the current configuration is kept.
    pub fn set_options(&mut self, options: SnapListOptions) -> Result<(), SnapListError> {
        options.validate()?;
        strace!(
            item_pitch = options.item_pitch,
            item_count = options.item_count,
            "SnapList::set_options"
        );
        let mut out = Outbox::default();
        {
            let mut s = self.shared.borrow_mut();
            s.options = options;
            s.apply_initial_index(&mut out);
        }
        dispatch(&self.shared, out);
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut SnapListOptions),
    ) -> Result<(), SnapListError> {
        let mut next = self.options();
        f(&mut next);
        self.set_options(next)
    }

    /// Updates the item count (e.g. after more items were loaded).
    pub fn set_item_count(&mut self, item_count: usize) {
        let mut out = Outbox::default();
        {
            let mut s = self.shared.borrow_mut();
            if s.options.item_count == item_count {
                return;
            }
            s.options.item_count = item_count;
            s.apply_initial_index(&mut out);
        }
        dispatch(&self.shared, out);
    }

    pub fn item_pitch(&self) -> f32 {
        self.shared.borrow().options.item_pitch
    }

    pub fn item_count(&self) -> usize {
        self.shared.borrow().options.item_count
    }

    pub fn axis(&self) -> Axis {
        self.shared.borrow().options.axis
    }

    pub fn reversed(&self) -> bool {
        self.shared.borrow().options.reversed
    }

    pub fn anchor(&self) -> SnapAnchor {
        self.shared.borrow().options.anchor
    }

    pub fn viewport_extent(&self) -> f32 {
        self.shared.borrow().viewport_extent
    }

    /// The last scroll sample reported through `on_scroll` or `on_scroll_gesture_end`.
    pub fn scroll_offset(&self) -> f32 {
        self.shared.borrow().scroll_offset
    }

    /// Reports the along-axis viewport extent after a layout pass.
    ///
    /// Geometry is derived from this value on every query. Negative or non-finite extents
    /// are treated as `0`.
    pub fn on_viewport_extent(&mut self, extent: f32) {
        let extent = if extent.is_finite() {
            extent.max(0.0)
        } else {
            0.0
        };
        let mut out = Outbox::default();
        {
            let mut s = self.shared.borrow_mut();
            if s.viewport_extent != extent {
                strace!(extent, "on_viewport_extent");
                s.viewport_extent = extent;
            }
            s.apply_initial_index(&mut out);
        }
        dispatch(&self.shared, out);
    }

    /// Reports the viewport size; the along-axis component is picked by the configured axis.
    pub fn on_viewport_size(&mut self, width: f32, height: f32) {
        let extent = self.axis().main(width, height);
        self.on_viewport_extent(extent);
    }

    pub fn geometry(&self) -> Geometry {
        self.shared.borrow().geometry()
    }

    pub fn leading_inset(&self) -> f32 {
        self.geometry().leading_inset()
    }

    pub fn trailing_inset(&self) -> f32 {
        self.geometry().trailing_inset()
    }

    pub fn content_extent(&self) -> f32 {
        let s = self.shared.borrow();
        s.geometry().content_extent(s.options.item_count)
    }

    pub fn max_scroll_offset(&self) -> f32 {
        let s = self.shared.borrow();
        s.geometry().max_scroll_offset(s.options.item_count)
    }

    /// Where the rendering collaborator should place item `index` along the axis.
    pub fn item_slot(&self, index: usize) -> Option<ItemSlot> {
        let s = self.shared.borrow();
        s.geometry()
            .item_slot(index, s.options.item_count, s.options.reversed)
    }

    /// Distance of item `index` from the snap anchor at the current scroll offset, in pitches.
    pub fn focus_distance(&self, index: usize) -> f32 {
        let s = self.shared.borrow();
        geometry::focus_distance(s.scroll_offset, index, s.options.item_pitch)
    }

    /// The index nearest to the snap anchor at the current scroll offset.
    pub fn nearest_index(&self) -> Option<usize> {
        let s = self.shared.borrow();
        geometry::snap_index(
            s.scroll_offset,
            s.options.item_pitch,
            s.options.item_count,
        )
    }

    /// Records a live scroll sample.
    ///
    /// With `update_on_scroll`, this emits `on_item_focus` whenever the nearest index
    /// changes. It never issues scroll commands.
    pub fn on_scroll(&mut self, offset: f32) {
        let mut out = Outbox::default();
        {
            let mut s = self.shared.borrow_mut();
            s.scroll_offset = offset;
            if s.options.update_on_scroll {
                let index =
                    geometry::snap_index(offset, s.options.item_pitch, s.options.item_count);
                if index.is_some() && index != s.last_index {
                    strace!(offset, ?index, "nearest index changed while scrolling");
                    s.last_index = index;
                    out.focused = index;
                }
            }
        }
        dispatch(&self.shared, out);
    }

    /// Settles the list after a drag/fling ends.
    ///
    /// Emits `on_reach_end` when `metrics.offset` is within the end-of-list tolerance of
    /// `metrics.max_offset`, then `on_item_focus` with the target index, then queues an
    /// animated scroll to that index. Both notifications fire on every call, even when the
    /// index did not change. Does nothing for an empty list.
    pub fn on_scroll_gesture_end(&mut self, metrics: ScrollMetrics) {
        let mut out = Outbox::default();
        {
            let mut s = self.shared.borrow_mut();
            s.scroll_offset = metrics.offset;
            let pitch = s.options.item_pitch;
            let Some(index) = geometry::snap_index(metrics.offset, pitch, s.options.item_count)
            else {
                sdebug!(offset = metrics.offset, "gesture end ignored: list is empty");
                return;
            };
            out.reached_end = geometry::is_end_of_list(
                metrics.offset,
                metrics.max_offset,
                s.options.end_of_list_tolerance(),
            );
            sdebug!(
                offset = metrics.offset,
                max_offset = metrics.max_offset,
                index,
                reached_end = out.reached_end,
                "on_scroll_gesture_end"
            );
            out.focused = Some(index);
            s.last_index = Some(index);
            s.queue(ScrollCommand {
                offset: geometry::offset_for_index(index, pitch),
                kind: ScrollKind::Animate,
            });
        }
        dispatch(&self.shared, out);
    }

    /// Focuses item `index`: emits `on_item_focus` and queues an animated scroll to it.
    ///
    /// Out-of-range indices are clamped to the last item; an empty list is left alone.
    /// Repeated calls with the same index are not suppressed.
    ///
    /// Returns `true` when a scroll was queued.
    pub fn focus_to_item(&mut self, index: usize) -> bool {
        let mut out = Outbox::default();
        let queued = self.shared.borrow_mut().focus_to_item(index, &mut out);
        dispatch(&self.shared, out);
        queued
    }

    /// Handles a tap on item `index`.
    ///
    /// Returns `false` (and does nothing) unless `auto_focus_on_tap` is enabled, in which
    /// case tap handling is left to the caller.
    pub fn on_item_tap(&mut self, index: usize) -> bool {
        if !self.shared.borrow().options.auto_focus_on_tap {
            return false;
        }
        self.focus_to_item(index);
        true
    }

    /// Queues an animated scroll to `offset`, replacing any command not yet issued.
    pub fn animate_to(&mut self, offset: f32) {
        self.shared.borrow_mut().queue(ScrollCommand {
            offset,
            kind: ScrollKind::Animate,
        });
    }

    /// The command the next `tick` will issue, if any.
    pub fn pending_scroll(&self) -> Option<ScrollCommand> {
        self.shared.borrow().pending
    }

    /// Drops the command the next `tick` would issue, returning it.
    ///
    /// Hosts call this when the user grabs the list so a queued snap never starts under
    /// the pointer.
    pub fn cancel_pending(&mut self) -> Option<ScrollCommand> {
        let dropped = self.shared.borrow_mut().pending.take();
        if let Some(_command) = dropped {
            strace!(offset = _command.offset, "pending scroll command cancelled");
        }
        dropped
    }

    /// Issues the pending scroll command (if any) on the surface.
    ///
    /// Call this on the host's next event-loop turn after handling input, outside of any
    /// scroll notification callback. Returns the issued command.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        let (command, animation) = {
            let mut s = self.shared.borrow_mut();
            (s.pending.take()?, s.options.animation)
        };
        strace!(offset = command.offset, now_ms, "issuing scroll command");
        match command.kind {
            ScrollKind::Animate => self.surface.animate_to(command.offset, animation, now_ms),
            ScrollKind::Jump => self.surface.jump_to(command.offset),
        }
        Some(command)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tears the list down and hands the surface back.
    ///
    /// Any pending command is dropped and outstanding [`FocusHandle`]s become detached.
    pub fn dispose(self) -> S {
        sdebug!(
            dropped_pending = self.shared.borrow().pending.is_some(),
            "SnapList::dispose"
        );
        self.surface
    }
}

/// A cloneable handle that lets external code move the focus of a [`SnapList`].
///
/// The handle does not keep the list alive. Using it after the list was disposed or
/// dropped is a programming error: debug builds panic, release builds ignore the call.
#[derive(Clone, Debug)]
pub struct FocusHandle {
    shared: Weak<RefCell<Shared>>,
}

impl FocusHandle {
    /// Same as [`SnapList::focus_to_item`].
    pub fn focus_to_item(&self, index: usize) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            swarn!(index, "FocusHandle used after the list was torn down");
            if cfg!(debug_assertions) {
                panic!(
                    "FocusHandle::focus_to_item called after the list was torn down (index={index})"
                );
            }
            return false;
        };
        let mut out = Outbox::default();
        let queued = shared.borrow_mut().focus_to_item(index, &mut out);
        dispatch(&shared, out);
        queued
    }

    /// Whether the list this handle points to is still alive.
    pub fn is_attached(&self) -> bool {
        self.shared.strong_count() > 0
    }
}
