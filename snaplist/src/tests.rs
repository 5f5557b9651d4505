use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SurfaceCall {
    Animate(f32, Animation, u64),
    Jump(f32),
}

#[derive(Debug, Default)]
struct RecordingSurface {
    offset: f32,
    calls: Vec<SurfaceCall>,
}

impl ScrollSurface for RecordingSurface {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn animate_to(&mut self, offset: f32, animation: Animation, now_ms: u64) {
        self.calls.push(SurfaceCall::Animate(offset, animation, now_ms));
        self.offset = offset;
    }

    fn jump_to(&mut self, offset: f32) {
        self.calls.push(SurfaceCall::Jump(offset));
        self.offset = offset;
    }
}

#[derive(Clone, Default)]
struct Events {
    focused: Rc<RefCell<Vec<usize>>>,
    reached_end: Rc<Cell<usize>>,
}

impl Events {
    fn attach(&self, options: SnapListOptions) -> SnapListOptions {
        let focused = Rc::clone(&self.focused);
        let reached_end = Rc::clone(&self.reached_end);
        options
            .with_on_item_focus(Some(move |i| focused.borrow_mut().push(i)))
            .with_on_reach_end(Some(move || reached_end.set(reached_end.get() + 1)))
    }

    fn focused(&self) -> Vec<usize> {
        self.focused.borrow().clone()
    }

    fn reached_end(&self) -> usize {
        self.reached_end.get()
    }
}

fn list_with_events(options: SnapListOptions) -> (SnapList<RecordingSurface>, Events) {
    let events = Events::default();
    let list = SnapList::new(events.attach(options), RecordingSurface::default()).unwrap();
    (list, events)
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn target_index_stays_until_half_pitch_is_passed() {
    assert_eq!(target_index(0.0, 110.0), 0);
    assert_eq!(target_index(54.0, 110.0), 0);
    assert_eq!(target_index(55.0, 110.0), 0);
    assert_eq!(target_index(56.0, 110.0), 1);
    assert_eq!(target_index(165.0, 110.0), 1);
    assert_eq!(target_index(166.0, 110.0), 2);
}

#[test]
fn target_index_tolerates_overscroll() {
    assert_eq!(target_index(-40.0, 100.0), 0);
    assert_eq!(target_index(-60.0, 100.0), -1);
    assert_eq!(target_index(-250.0, 100.0), -3);
    assert_eq!(target_index(f32::NAN, 100.0), 0);

    assert_eq!(snap_index(-250.0, 100.0, 10), Some(0));
    assert_eq!(snap_index(5_000.0, 100.0, 10), Some(9));
    assert_eq!(snap_index(250.0, 100.0, 0), None);
}

#[test]
fn property_offset_index_roundtrip() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..2_000 {
        let pitch = rng.gen_f32(1.0, 500.0);
        let index = rng.gen_range_usize(0, 100_000);
        let offset = offset_for_index(index, pitch);
        assert_eq!(
            target_index(offset, pitch),
            index as isize,
            "pitch={pitch} index={index} offset={offset}"
        );
        assert_eq!(snap_index(offset, pitch, 100_000), Some(index));
    }
}

#[test]
fn roundtrip_holds_up_to_max_exact_index() {
    let top = geometry::MAX_EXACT_INDEX - 1;
    let mut rng = Lcg::new(0x21);
    for pitch in [1.0_f32, 0.37, 3.0, 57.3, 110.0, 4096.0] {
        for index in (top - 64..=top).chain((0..64).map(|_| rng.gen_range_usize(0, top))) {
            let offset = offset_for_index(index, pitch);
            assert_eq!(
                target_index(offset, pitch),
                index as isize,
                "pitch={pitch} index={index}"
            );
        }
    }
}

#[test]
fn property_snap_target_is_nearest_slot() {
    let mut rng = Lcg::new(42);
    for _ in 0..2_000 {
        let pitch = rng.gen_f32(10.0, 300.0);
        let count = rng.gen_range_usize(1, 50);
        let offset = rng.gen_f32(-pitch, pitch * count as f32 + pitch);

        let index = snap_index(offset, pitch, count).unwrap();
        assert!(index < count);

        // Within the list, no other slot is strictly closer than the target.
        let clamped = offset.clamp(0.0, offset_for_index(count - 1, pitch));
        let d = (clamped - offset_for_index(index, pitch)).abs();
        for other in 0..count {
            let od = (clamped - offset_for_index(other, pitch)).abs();
            assert!(d <= od + 1e-2, "offset={offset} index={index} other={other}");
        }
    }
}

#[test]
fn end_of_list_threshold_is_half_pitch_before_max() {
    assert!(!is_end_of_list(945.0, 1000.0, 55.0 - 0.5));
    assert!(!is_end_of_list(944.9, 1000.0, 55.0));
    assert!(is_end_of_list(945.0, 1000.0, 55.0));
    assert!(is_end_of_list(1020.0, 1000.0, 55.0));
}

#[test]
fn gesture_end_emits_reach_end_only_past_threshold() {
    let (mut list, events) = list_with_events(SnapListOptions::new(110.0).with_item_count(20));

    list.on_scroll_gesture_end(ScrollMetrics::new(944.0, 1000.0));
    assert_eq!(events.reached_end(), 0);

    list.on_scroll_gesture_end(ScrollMetrics::new(946.0, 1000.0));
    assert_eq!(events.reached_end(), 1);

    // Staying at the end re-fires on every gesture end.
    list.on_scroll_gesture_end(ScrollMetrics::new(1000.0, 1000.0));
    assert_eq!(events.reached_end(), 2);
}

#[test]
fn gesture_end_exactly_at_threshold_reaches_end() {
    // 945 == 1000 - 110 / 2: the comparison is inclusive.
    let (mut list, events) = list_with_events(SnapListOptions::new(110.0).with_item_count(20));
    list.on_scroll_gesture_end(ScrollMetrics::new(945.0, 1000.0));
    assert_eq!(events.reached_end(), 1);
    assert_eq!(events.focused(), [9]);

    list.on_scroll_gesture_end(ScrollMetrics::new(944.99, 1000.0));
    assert_eq!(events.reached_end(), 1);
}

#[test]
fn end_of_list_tolerance_can_be_overridden() {
    let (mut list, events) = list_with_events(
        SnapListOptions::new(110.0)
            .with_item_count(20)
            .with_end_of_list_tolerance(Some(0.0)),
    );
    list.on_scroll_gesture_end(ScrollMetrics::new(990.0, 1000.0));
    assert_eq!(events.reached_end(), 0);
    list.on_scroll_gesture_end(ScrollMetrics::new(1000.0, 1000.0));
    assert_eq!(events.reached_end(), 1);
}

#[test]
fn geometry_insets_follow_viewport_changes() {
    let mut list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(10),
        RecordingSurface::default(),
    )
    .unwrap();

    list.on_viewport_extent(300.0);
    assert!(approx_eq(list.leading_inset(), 100.0));
    assert!(approx_eq(list.trailing_inset(), 100.0));

    // Rotation / resize: re-derived, not cached.
    list.on_viewport_extent(640.0);
    assert!(approx_eq(list.leading_inset(), 270.0));
    assert!(approx_eq(list.trailing_inset(), 270.0));
    assert!(approx_eq(list.geometry().viewport_extent, 640.0));
}

#[test]
fn property_leading_inset_is_half_viewport_minus_half_pitch() {
    let mut rng = Lcg::new(7);
    let mut list =
        SnapList::new(SnapListOptions::new(80.0), RecordingSurface::default()).unwrap();
    for _ in 0..500 {
        let v = rng.gen_f32(0.0, 4_000.0);
        list.on_viewport_extent(v);
        assert!(approx_eq(list.leading_inset(), v / 2.0 - 40.0), "v={v}");
    }
}

#[test]
fn viewport_size_uses_the_configured_axis() {
    let mut list = SnapList::new(
        SnapListOptions::new(50.0).with_axis(Axis::Vertical),
        RecordingSurface::default(),
    )
    .unwrap();
    list.on_viewport_size(800.0, 200.0);
    assert!(approx_eq(list.viewport_extent(), 200.0));
    assert!(approx_eq(list.leading_inset(), 75.0));

    list.on_viewport_extent(-5.0);
    assert_eq!(list.viewport_extent(), 0.0);
}

#[test]
fn anchors_shift_the_insets() {
    let g = Geometry::new(300.0, 100.0, SnapAnchor::Start);
    assert!(approx_eq(g.leading_inset(), 0.0));
    assert!(approx_eq(g.trailing_inset(), 200.0));

    let g = Geometry::new(300.0, 100.0, SnapAnchor::End);
    assert!(approx_eq(g.leading_inset(), 200.0));
    assert!(approx_eq(g.trailing_inset(), 0.0));

    // Every anchor can reach the last item exactly.
    for anchor in [SnapAnchor::Start, SnapAnchor::Middle, SnapAnchor::End] {
        let g = Geometry::new(300.0, 100.0, anchor);
        assert!(approx_eq(g.max_scroll_offset(10), 900.0), "{anchor:?}");
        assert!(approx_eq(g.max_scroll_offset(0), 0.0), "{anchor:?}");
    }
}

#[test]
fn item_slots_respect_reversed_order() {
    let g = Geometry::new(300.0, 100.0, SnapAnchor::Middle);
    assert!(approx_eq(g.content_extent(10), 1200.0));

    let first = g.item_slot(0, 10, false).unwrap();
    assert!(approx_eq(first.start, 100.0));
    assert!(approx_eq(first.center(), 150.0));

    let first_rev = g.item_slot(0, 10, true).unwrap();
    assert!(approx_eq(first_rev.start, 1000.0));
    assert!(approx_eq(first_rev.end(), 1100.0));

    let last_rev = g.item_slot(9, 10, true).unwrap();
    assert!(approx_eq(last_rev.start, 100.0));

    assert_eq!(g.item_slot(10, 10, false), None);
}

#[test]
fn scenario_ten_items_in_three_hundred_viewport() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0).with_item_count(10));
    list.on_viewport_extent(300.0);
    assert!(approx_eq(list.leading_inset(), 100.0));

    let max = list.max_scroll_offset();
    assert!(approx_eq(max, 900.0));
    list.on_scroll_gesture_end(ScrollMetrics::new(250.0, max));

    assert_eq!(events.focused(), [2]);
    assert_eq!(events.reached_end(), 0);
    assert_eq!(
        list.pending_scroll(),
        Some(ScrollCommand {
            offset: 200.0,
            kind: ScrollKind::Animate,
        })
    );
}

#[test]
fn gesture_end_emits_focus_even_when_unchanged() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0).with_item_count(10));
    list.on_scroll_gesture_end(ScrollMetrics::new(200.0, 900.0));
    list.tick(0);
    list.on_scroll_gesture_end(ScrollMetrics::new(210.0, 900.0));
    assert_eq!(events.focused(), [2, 2]);
    assert_eq!(list.tick(16).map(|c| c.offset), Some(200.0));
}

#[test]
fn scroll_commands_are_deferred_until_tick() {
    let anim = Animation::new(250, Easing::SmoothStep);
    let mut list = SnapList::new(
        SnapListOptions::new(100.0)
            .with_item_count(10)
            .with_animation(anim),
        RecordingSurface::default(),
    )
    .unwrap();

    list.on_scroll_gesture_end(ScrollMetrics::new(330.0, 900.0));
    assert!(list.surface().calls.is_empty());

    let issued = list.tick(1_000).unwrap();
    assert!(approx_eq(issued.offset, 300.0));
    assert_eq!(
        list.surface().calls,
        [SurfaceCall::Animate(300.0, anim, 1_000)]
    );

    // Nothing pending: tick is a no-op.
    assert_eq!(list.tick(1_016), None);
    assert_eq!(list.surface().calls.len(), 1);
}

#[test]
fn latest_scroll_command_wins() {
    let mut list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(10),
        RecordingSurface::default(),
    )
    .unwrap();

    list.focus_to_item(1);
    list.on_scroll_gesture_end(ScrollMetrics::new(640.0, 900.0));
    list.focus_to_item(4);

    list.tick(5);
    assert_eq!(list.surface().calls.len(), 1);
    assert!(matches!(
        list.surface().calls[0],
        SurfaceCall::Animate(o, _, 5) if approx_eq(o, 400.0)
    ));
}

#[test]
fn cancel_pending_drops_the_queued_command() {
    let mut list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(10),
        RecordingSurface::default(),
    )
    .unwrap();

    assert_eq!(list.cancel_pending(), None);

    list.on_scroll_gesture_end(ScrollMetrics::new(230.0, 900.0));
    let dropped = list.cancel_pending().unwrap();
    assert!(approx_eq(dropped.offset, 200.0));
    assert_eq!(dropped.kind, ScrollKind::Animate);
    assert_eq!(list.pending_scroll(), None);

    assert_eq!(list.tick(0), None);
    assert!(list.surface().calls.is_empty());
}

#[test]
fn focus_to_item_twice_is_not_suppressed() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0).with_item_count(10));

    assert!(list.focus_to_item(3));
    list.tick(0);
    assert!(list.focus_to_item(3));
    list.tick(16);

    assert_eq!(events.focused(), [3, 3]);
    assert_eq!(list.surface().calls.len(), 2);
    assert_eq!(events.reached_end(), 0);
}

#[test]
fn focus_to_item_clamps_out_of_range_indices() {
    let (mut list, events) = list_with_events(SnapListOptions::new(50.0).with_item_count(4));
    assert!(list.focus_to_item(99));
    assert_eq!(events.focused(), [3]);
    assert_eq!(list.pending_scroll().map(|c| c.offset), Some(150.0));
}

#[test]
fn empty_list_is_a_silent_noop() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0));
    list.on_viewport_extent(300.0);

    assert!(!list.focus_to_item(0));
    assert!(!list.handle().focus_to_item(3));
    list.on_scroll_gesture_end(ScrollMetrics::new(0.0, 0.0));
    list.on_scroll(120.0);

    assert!(events.focused().is_empty());
    assert_eq!(events.reached_end(), 0);
    assert_eq!(list.tick(0), None);
    assert!(list.surface().calls.is_empty());
}

#[test]
fn item_count_can_grow_after_construction() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0));
    list.set_item_count(5);
    assert_eq!(list.item_count(), 5);
    assert!(list.focus_to_item(10));
    assert_eq!(events.focused(), [4]);
}

#[test]
fn item_tap_focuses_only_when_enabled() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0).with_item_count(10));
    assert!(list.on_item_tap(6));
    assert_eq!(events.focused(), [6]);

    let (mut list, events) = list_with_events(
        SnapListOptions::new(100.0)
            .with_item_count(10)
            .with_auto_focus_on_tap(false),
    );
    assert!(!list.on_item_tap(6));
    assert!(events.focused().is_empty());
    assert_eq!(list.pending_scroll(), None);
}

#[test]
fn focus_handle_drives_the_list() {
    let (mut list, events) = list_with_events(SnapListOptions::new(120.0).with_item_count(8));
    let handle = list.handle();
    let other = handle.clone();

    assert!(handle.is_attached());
    assert!(handle.focus_to_item(5));
    assert!(other.focus_to_item(2));
    assert_eq!(events.focused(), [5, 2]);

    list.tick(0);
    assert_eq!(
        list.surface().calls,
        [SurfaceCall::Animate(240.0, Animation::default(), 0)]
    );
}

#[test]
fn callbacks_may_reenter_through_the_handle() {
    let slot: Rc<RefCell<Option<FocusHandle>>> = Rc::new(RefCell::new(None));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let slot_cb = Rc::clone(&slot);
    let seen_cb = Rc::clone(&seen);

    let options = SnapListOptions::new(100.0)
        .with_item_count(10)
        .with_on_item_focus(Some(move |i: usize| {
            seen_cb.borrow_mut().push(i);
            // Redirect focus requests for the first item to the second one.
            if i == 0 {
                if let Some(h) = slot_cb.borrow().as_ref() {
                    h.focus_to_item(1);
                }
            }
        }));
    let mut list = SnapList::new(options, RecordingSurface::default()).unwrap();
    *slot.borrow_mut() = Some(list.handle());

    list.focus_to_item(0);
    assert_eq!(*seen.borrow(), [0, 1]);
    assert_eq!(list.pending_scroll().map(|c| c.offset), Some(100.0));
}

#[test]
fn dispose_releases_the_surface_and_detaches_handles() {
    let mut list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(3),
        RecordingSurface::default(),
    )
    .unwrap();
    let handle = list.handle();
    list.focus_to_item(2);
    list.tick(0);
    list.focus_to_item(1);

    let surface = list.dispose();
    assert_eq!(surface.calls.len(), 1);
    assert!(!handle.is_attached());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "torn down")]
fn focus_handle_after_teardown_panics_in_debug() {
    let list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(3),
        RecordingSurface::default(),
    )
    .unwrap();
    let handle = list.handle();
    drop(list);
    handle.focus_to_item(1);
}

#[test]
fn invalid_options_are_rejected() {
    let err = SnapList::new(SnapListOptions::new(0.0), RecordingSurface::default()).unwrap_err();
    assert_eq!(err, SnapListError::InvalidItemPitch(0.0));

    assert!(matches!(
        SnapListOptions::new(f32::NAN).validate(),
        Err(SnapListError::InvalidItemPitch(_))
    ));
    assert_eq!(
        SnapListOptions::new(-3.0).validate(),
        Err(SnapListError::InvalidItemPitch(-3.0))
    );
    assert_eq!(
        SnapListOptions::new(10.0).with_duration_ms(0).validate(),
        Err(SnapListError::InvalidAnimationDuration)
    );
    assert_eq!(
        SnapListOptions::new(10.0)
            .with_end_of_list_tolerance(Some(-1.0))
            .validate(),
        Err(SnapListError::InvalidEndOfListTolerance(-1.0))
    );
}

#[test]
fn set_options_validates_and_keeps_previous_on_error() {
    let mut list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(3),
        RecordingSurface::default(),
    )
    .unwrap();
    assert!(list.update_options(|o| o.item_pitch = -1.0).is_err());
    assert_eq!(list.item_pitch(), 100.0);

    list.update_options(|o| {
        o.item_pitch = 60.0;
        o.reversed = true;
    })
    .unwrap();
    assert_eq!(list.item_pitch(), 60.0);
    assert!(list.reversed());
    list.focus_to_item(2);
    assert_eq!(list.pending_scroll().map(|c| c.offset), Some(120.0));
}

#[test]
fn initial_index_jumps_once_on_first_layout() {
    let (mut list, events) = list_with_events(
        SnapListOptions::new(100.0)
            .with_item_count(10)
            .with_initial_index(Some(4)),
    );
    // No layout yet.
    assert_eq!(list.pending_scroll(), None);

    list.on_viewport_extent(300.0);
    assert_eq!(events.focused(), [4]);
    list.tick(0);
    assert_eq!(list.surface().calls, [SurfaceCall::Jump(400.0)]);

    list.on_viewport_extent(500.0);
    assert_eq!(events.focused(), [4]);
    assert_eq!(list.pending_scroll(), None);
}

#[test]
fn initial_index_waits_for_items() {
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0).with_initial_index(Some(2)));
    list.on_viewport_extent(300.0);
    assert!(events.focused().is_empty());

    list.set_item_count(6);
    assert_eq!(events.focused(), [2]);
    assert_eq!(
        list.pending_scroll(),
        Some(ScrollCommand {
            offset: 200.0,
            kind: ScrollKind::Jump,
        })
    );
}

#[test]
fn update_on_scroll_reports_index_changes_only() {
    let (mut list, events) = list_with_events(
        SnapListOptions::new(100.0)
            .with_item_count(10)
            .with_update_on_scroll(true),
    );
    for offset in [0.0, 20.0, 49.0, 51.0, 90.0, 160.0, 151.0, 140.0] {
        list.on_scroll(offset);
    }
    assert_eq!(events.focused(), [0, 1, 2, 1]);
    assert_eq!(list.pending_scroll(), None);

    // Disabled by default.
    let (mut list, events) = list_with_events(SnapListOptions::new(100.0).with_item_count(10));
    list.on_scroll(500.0);
    assert!(events.focused().is_empty());
    assert_eq!(list.nearest_index(), Some(5));
}

#[test]
fn focus_distance_measures_pitches_from_anchor() {
    let mut list = SnapList::new(
        SnapListOptions::new(100.0).with_item_count(10),
        RecordingSurface::default(),
    )
    .unwrap();
    list.on_scroll(250.0);
    assert!(approx_eq(list.focus_distance(2), 0.5));
    assert!(approx_eq(list.focus_distance(3), 0.5));
    assert!(approx_eq(list.focus_distance(0), 2.5));
    assert!(approx_eq(focus_distance(0.0, 0, 100.0), 0.0));
}

#[test]
fn easing_curves_hit_endpoints_and_are_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert!(approx_eq(easing.sample(0.0), 0.0), "{easing:?}");
        assert!(approx_eq(easing.sample(1.0), 1.0), "{easing:?}");
        assert!(approx_eq(easing.sample(2.0), 1.0), "{easing:?}");
        let mut last = 0.0;
        for step in 0..=100 {
            let v = easing.sample(step as f32 / 100.0);
            assert!(v + 1e-6 >= last, "{easing:?} step={step}");
            last = v;
        }
    }
    assert_eq!(Animation::default().duration_ms, 300);
}

#[test]
fn example_basic_smoke() {
    let (mut list, events) = list_with_events(SnapListOptions::new(110.0).with_item_count(25));
    list.on_viewport_extent(390.0);
    let max = list.max_scroll_offset();

    let mut now_ms = 0u64;
    for drag_end in [30.0, 170.0, 600.0, max] {
        list.on_scroll(drag_end);
        list.on_scroll_gesture_end(ScrollMetrics::new(drag_end, max));
        now_ms += 16;
        let issued = list.tick(now_ms).unwrap();
        assert!(approx_eq(list.surface().scroll_offset(), issued.offset));
    }
    assert_eq!(events.focused(), [0, 2, 5, 24]);
    assert_eq!(events.reached_end(), 1);
}
