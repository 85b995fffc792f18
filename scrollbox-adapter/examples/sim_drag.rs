use scrollbox::{Axis, FastTrack, PointerTarget, ScrollBoxOptions, Vec2};
use scrollbox_adapter::{Controller, Key, KeyInput, SimHost, SimScheduler, WheelInput};

fn main() {
    // Example: driving a scroll box from raw UI events against an in-memory host.
    //
    // A real adapter would:
    // - forward wheel/key/pointer events to the controller and prevent default when it returns true
    // - call on_frame(now_ms) from every scheduled frame callback
    // - render tracks and handles from the layouts the host receives
    let host = SimHost::new(Vec2::new(320.0, 240.0), Vec2::new(320.0, 2_400.0));
    let options = ScrollBoxOptions::new().with_fast_track(FastTrack::Paging);
    let mut sched = SimScheduler::new();
    let mut c = Controller::new(options);
    c.mount(host, &mut sched, 0);

    c.on_wheel(
        &WheelInput {
            delta_y: 90.0,
            ..WheelInput::default()
        },
        10,
    );
    c.on_key_down(&KeyInput::new(Key::PageDown), 20);
    println!("after wheel+key: {:?}", c.scroll_box().current());

    let handle = c.scroll_box().handle(Axis::Y);
    c.on_pointer_down(Axis::Y, PointerTarget::Handle, handle.position + 4.0, 30);
    for (i, pointer) in [60.0, 90.0, 120.0].into_iter().enumerate() {
        c.on_pointer_move(pointer + 4.0, 40 + i as u64 * 16);
        println!("drag pointer={pointer} y={}", c.scroll_box().current().y);
    }
    c.on_pointer_up();

    c.on_pointer_down(Axis::Y, PointerTarget::Track, 230.0, 100);
    let mut now_ms = 100;
    while c.scroll_box().is_animating() {
        now_ms += 16;
        c.on_frame(&mut sched, now_ms);
    }
    println!(
        "paged to y={} after {} frames",
        c.scroll_box().current().y,
        c.frame_loop().ticks()
    );

    let host = c.unmount();
    println!(
        "unmounted: captures={:?} loop_running={}",
        host.map(|h| h.active_captures()),
        c.on_frame(&mut sched, now_ms + 16)
    );
}
