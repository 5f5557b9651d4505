use snaplist::{Easing, SnapListOptions};
use snaplist_adapter::Controller;

fn main() -> Result<(), snaplist::SnapListError> {
    // Example: a frame-loop controller settling a carousel after a drag, without holding any
    // UI objects.
    //
    // An adapter would:
    // - forward pointer and scroll events from the UI
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    let options = SnapListOptions::new(120.0)
        .with_item_count(50)
        .with_easing(Easing::SmoothStep)
        .with_on_item_focus(Some(|i| println!("focused item {i}")));
    let mut c = Controller::new(options)?;
    c.on_viewport_size(400.0, 800.0);

    // Drag from 0 to 1000 over ~10 frames, then release.
    let mut now_ms = 0u64;
    c.on_pointer_down();
    for step in 1..=10 {
        now_ms += 16;
        c.on_scroll(step as f32 * 100.0, now_ms);
    }
    c.on_pointer_up(now_ms);

    while c.is_scrolling() || c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} off={off}");
            }
        }
    }

    println!(
        "settled: off={} index={:?}",
        c.scroll_offset(),
        c.list().nearest_index()
    );
    Ok(())
}
