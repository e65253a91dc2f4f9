use vizij_carousel_core::{
    CarouselEvent, CarouselHandle, CarouselOptions, ChildNode, Env, GroupBus, ManualClock,
    Navigation, Rect, Settings, SlideSpec, StaticLayout,
};

fn mount(settings: Settings, children: Vec<ChildNode>) -> (CarouselHandle, ManualClock) {
    let clock = ManualClock::new();
    let env = Env::new(clock.clone(), StaticLayout::new(Rect::new(300.0, 100.0)))
        .with_bus(GroupBus::new());
    let handle = CarouselHandle::new(
        CarouselOptions {
            settings,
            group: None,
        },
        env,
    )
    .unwrap();
    handle.borrow_mut().set_children(&children);
    handle.mount();
    (handle, clock)
}

fn plain(n: usize) -> Vec<ChildNode> {
    vec![ChildNode::Slide(SlideSpec::default()); n]
}

fn auto(play_speed: u32) -> Settings {
    Settings {
        auto_play: true,
        play_speed,
        ..Default::default()
    }
}

#[test]
fn advances_one_slide_per_interval() {
    let (h, clock) = mount(auto(1000), plain(3));
    assert_eq!(h.borrow().auto_play_deadline(), Some(1000.0));

    clock.set(1000.0);
    assert_eq!(h.borrow_mut().advance(), 3);
    assert_eq!(h.borrow().current_slide(), 1.0);
    assert!(h.borrow().is_initialized());
    assert_eq!(h.borrow().auto_play_deadline(), Some(2000.0));
}

#[test]
fn wraps_to_first_slide_when_finite() {
    let (h, clock) = mount(auto(1000), plain(3));
    // 1000 -> 1, 2000 -> 2, 3000 -> 0, 4000 -> 1, 5000 -> 2
    clock.set(5000.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 2.0);

    let events = h.borrow_mut().take_events();
    let targets: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            CarouselEvent::Slide { current_slide, .. } => Some(*current_slide),
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
}

#[test]
fn large_jump_matches_fine_ticks() {
    let (coarse, coarse_clock) = mount(auto(700), plain(4));
    let (fine, fine_clock) = mount(auto(700), plain(4));
    coarse_clock.set(9000.0);
    coarse.borrow_mut().advance();
    for _ in 0..90 {
        fine_clock.advance(100.0);
        fine.borrow_mut().advance();
    }
    assert_eq!(
        coarse.borrow().current_slide(),
        fine.borrow().current_slide()
    );
    assert_eq!(
        coarse.borrow_mut().take_events(),
        fine.borrow_mut().take_events()
    );
}

#[test]
fn infinite_scroll_keeps_moving_forward() {
    let (h, clock) = mount(
        Settings {
            infinite_scroll: true,
            ..auto(1000)
        },
        plain(3),
    );
    clock.set(3000.0);
    h.borrow_mut().advance();
    // 1, 2, 3 -> settles to 0
    assert_eq!(h.borrow().current_slide(), 3.0);
    clock.set(3300.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 0.0);
}

#[test]
fn hover_and_focus_pause_without_advancing() {
    let (h, clock) = mount(auto(1000), plain(3));
    h.borrow_mut().set_hover(true);
    clock.set(1000.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 0.0);
    assert_eq!(h.borrow().auto_play_deadline(), Some(2000.0));

    h.borrow_mut().set_hover(false);
    h.borrow_mut().set_focus(true);
    clock.set(2000.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 0.0);

    h.borrow_mut().set_focus(false);
    clock.set(3000.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 1.0);
}

#[test]
fn hover_without_hover_pause_keeps_playing() {
    let (h, clock) = mount(
        Settings {
            hover_pause: false,
            ..auto(1000)
        },
        plain(3),
    );
    h.borrow_mut().set_hover(true);
    clock.set(1000.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 1.0);
}

#[test]
fn per_slide_durations_override_play_speed() {
    let children = vec![
        ChildNode::Slide(SlideSpec {
            duration: Some(500),
            ..Default::default()
        }),
        ChildNode::Slide(SlideSpec::default()),
        ChildNode::Slide(SlideSpec {
            duration: Some(4000),
            ..Default::default()
        }),
    ];
    let (h, clock) = mount(auto(1000), children);
    assert_eq!(h.borrow().auto_play_deadline(), Some(500.0));

    clock.set(500.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 1.0);
    assert_eq!(h.borrow().auto_play_deadline(), Some(1500.0));

    clock.set(1500.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 2.0);
    assert_eq!(h.borrow().auto_play_deadline(), Some(5500.0));
}

#[test]
fn toggling_auto_play_stops_and_restarts() {
    let (h, clock) = mount(Settings::default(), plain(3));
    assert!(!h.borrow().is_auto_playing());

    clock.set(400.0);
    h.borrow_mut().set_auto_play(true);
    assert_eq!(h.borrow().auto_play_deadline(), Some(2400.0));

    h.borrow_mut().set_auto_play(false);
    assert!(!h.borrow().is_auto_playing());
    clock.set(10_000.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 0.0);
}

#[test]
fn navigation_click_restarts_timer() {
    let (h, clock) = mount(auto(1000), plain(3));
    clock.set(700.0);
    h.borrow_mut().advance();
    let nav = Navigation::new(h.clone());
    assert!(nav.slide_next());
    assert_eq!(h.borrow().auto_play_deadline(), Some(1700.0));
}

#[test]
fn unmount_stops_timers() {
    let (h, clock) = mount(auto(1000), plain(3));
    h.unmount();
    clock.set(5000.0);
    assert_eq!(h.borrow_mut().advance(), 0);
    assert_eq!(h.borrow().current_slide(), 0.0);
    assert_eq!(h.borrow().next_deadline(), None);
}
