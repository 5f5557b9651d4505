// Example: minimal usage with a hand-written scroll surface.
use snaplist::{Animation, ScrollMetrics, ScrollSurface, SnapList, SnapListOptions};

#[derive(Default)]
struct PrintSurface {
    offset: f32,
}

impl ScrollSurface for PrintSurface {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn animate_to(&mut self, offset: f32, animation: Animation, now_ms: u64) {
        println!(
            "animate {} -> {offset} over {}ms ({:?}) at t={now_ms}",
            self.offset, animation.duration_ms, animation.easing
        );
        self.offset = offset;
    }

    fn jump_to(&mut self, offset: f32) {
        println!("jump {} -> {offset}", self.offset);
        self.offset = offset;
    }
}

fn main() -> Result<(), snaplist::SnapListError> {
    let options = SnapListOptions::new(110.0)
        .with_item_count(25)
        .with_on_item_focus(Some(|i| println!("focused item {i}")))
        .with_on_reach_end(Some(|| println!("reached end")));
    let mut list = SnapList::new(options, PrintSurface::default())?;
    list.on_viewport_extent(390.0);

    println!(
        "leading_inset={} content_extent={} max_scroll_offset={}",
        list.leading_inset(),
        list.content_extent(),
        list.max_scroll_offset()
    );

    // A drag that stops between items 1 and 2.
    list.on_scroll(210.0);
    list.on_scroll_gesture_end(ScrollMetrics::new(210.0, list.max_scroll_offset()));
    list.tick(0);

    // External code focuses through a handle.
    let handle = list.handle();
    handle.focus_to_item(5);
    list.tick(16);

    // A fling that lands near the end.
    let max = list.max_scroll_offset();
    list.on_scroll(max - 20.0);
    list.on_scroll_gesture_end(ScrollMetrics::new(max - 20.0, max));
    list.tick(32);

    if let Some(slot) = list.item_slot(24) {
        println!("last item occupies {}..{}", slot.start, slot.end());
    }

    let surface = list.dispose();
    println!("final offset={}", surface.offset);
    Ok(())
}
