// Example: a minimal host and an animated scroll-to driven by a manual frame loop.
use scrollbox::{
    Axis, Easing, HandleLayout, ScrollBox, ScrollBoxOptions, ScrollRequest, Surface, Vec2,
    Viewport,
};

#[derive(Debug, Default)]
struct TextPane {
    offset: Vec2,
    lines: usize,
    rows: usize,
    handle: HandleLayout,
}

impl Viewport for TextPane {
    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn client_extent(&self) -> Vec2 {
        Vec2::new(80.0, self.rows as f64)
    }

    fn content_extent(&self) -> Vec2 {
        Vec2::new(80.0, self.lines as f64)
    }
}

impl Surface for TextPane {
    type Capture = ();

    fn track_extent(&self, _axis: Axis) -> f64 {
        self.rows as f64
    }

    fn place_handle(&mut self, axis: Axis, layout: HandleLayout) {
        if axis == Axis::Y {
            self.handle = layout;
        }
    }

    fn capture_pointer(&mut self, _axis: Axis) {}
}

fn main() {
    let pane = TextPane {
        lines: 1_000,
        rows: 40,
        ..TextPane::default()
    };
    let options = ScrollBoxOptions::new().with_easing(Easing::SmoothStep);
    let mut sb = ScrollBox::with_host(options, pane, 0);
    println!("scroll_max={:?}", sb.scroll_max());

    sb.scroll_to(ScrollRequest::y(500.0).with_duration_ms(200), 0);
    let mut now_ms = 0u64;
    while sb.is_animating() {
        now_ms += 16;
        sb.frame(now_ms);
        let Some(pane) = sb.host() else { break };
        if now_ms.is_multiple_of(48) {
            println!(
                "t={now_ms} y={} handle={:.1}+{:.1}",
                pane.offset.y, pane.handle.position, pane.handle.extent
            );
        }
    }

    sb.scroll_to_end(now_ms);
    println!("done: state={:?}", sb.state());
}
