use vizij_carousel_core::{
    CarouselEvent, CarouselHandle, CarouselOptions, ChildNode, Env, GroupBus, ManualClock, Rect,
    Settings, SlideBounds, SlideSpec, StaticLayout,
};

fn slides(n: usize) -> Vec<ChildNode> {
    (0..n)
        .map(|i| {
            ChildNode::Slide(SlideSpec {
                content: Some(format!("slide {i}")),
                ..Default::default()
            })
        })
        .collect()
}

fn mount(settings: Settings, n: usize) -> (CarouselHandle, ManualClock) {
    let clock = ManualClock::new();
    let env = Env::new(clock.clone(), StaticLayout::new(Rect::new(500.0, 200.0)))
        .with_bus(GroupBus::new());
    let handle = CarouselHandle::new(
        CarouselOptions {
            settings,
            group: None,
        },
        env,
    )
    .unwrap();
    handle.borrow_mut().set_children(&slides(n));
    handle.mount();
    (handle, clock)
}

/// Let every pending transition finish.
fn settle(handle: &CarouselHandle, clock: &ManualClock) {
    let transition = f64::from(handle.borrow().config().transition);
    clock.advance(transition);
    handle.borrow_mut().advance();
}

#[test]
fn slide_next_moves_one_and_clamps_at_last_index() {
    let (h, clock) = mount(Settings::default(), 5);
    settle(&h, &clock);
    assert_eq!(h.borrow().current_slide(), 0.0);

    assert!(h.borrow_mut().slide_next());
    assert_eq!(h.borrow().current_slide(), 1.0);
    settle(&h, &clock);
    assert_eq!(h.borrow().current_slide(), 1.0);

    for _ in 0..4 {
        h.borrow_mut().slide_next();
        settle(&h, &clock);
    }
    assert_eq!(h.borrow().current_slide(), 4.0);
}

#[test]
fn slide_to_current_index_or_while_sliding_is_a_no_op() {
    let (h, clock) = mount(Settings::default(), 5);
    settle(&h, &clock);
    h.borrow_mut().take_events();

    assert!(!h.borrow_mut().slide_to(0.0, true));
    assert!(h.borrow_mut().take_events().is_empty());

    assert!(h.borrow_mut().slide_to(2.0, true));
    assert!(!h.borrow_mut().slide_to(3.0, true));
    assert_eq!(h.borrow().current_slide(), 2.0);
    let events = h.borrow_mut().take_events();
    assert_eq!(events.len(), 2);
}

#[test]
fn before_slide_precedes_slide_and_settle_is_silent() {
    let (h, clock) = mount(Settings::default(), 5);
    settle(&h, &clock);
    h.borrow_mut().take_events();

    h.borrow_mut().slide_to(3.0, true);
    let events = h.borrow_mut().take_events();
    assert_eq!(
        events,
        vec![
            CarouselEvent::BeforeSlide {
                current_slide: Some(0.0),
                slide_to: 3.0
            },
            CarouselEvent::Slide {
                current_slide: 3.0,
                slide_from: Some(0.0)
            },
        ]
    );
    settle(&h, &clock);
    assert!(h.borrow_mut().take_events().is_empty());
    assert!(!h.borrow().is_sliding());
}

#[test]
fn after_slide_comes_from_the_render_layer() {
    let (h, clock) = mount(Settings::default(), 5);
    settle(&h, &clock);
    h.borrow_mut().slide_next();
    h.borrow_mut().on_transition_end();
    assert!(!h.borrow().is_sliding());
    let events = h.borrow_mut().take_events();
    assert_eq!(
        events.last(),
        Some(&CarouselEvent::AfterSlide { current_slide: 1.0 })
    );
}

#[test]
fn infinite_scroll_wraps_after_transition() {
    let (h, clock) = mount(
        Settings {
            infinite_scroll: true,
            ..Default::default()
        },
        5,
    );
    settle(&h, &clock);
    h.borrow_mut().slide_prev();
    assert_eq!(h.borrow().current_slide(), -1.0);
    assert_eq!(h.borrow().normalized_current(), 4.0);
    settle(&h, &clock);
    assert_eq!(h.borrow().current_slide(), 4.0);

    h.borrow_mut().slide_next();
    assert_eq!(h.borrow().current_slide(), 5.0);
    settle(&h, &clock);
    assert_eq!(h.borrow().current_slide(), 0.0);
}

#[test]
fn trimmed_range_clamps_targets() {
    let (h, clock) = mount(
        Settings {
            items_to_show: 3.0,
            center_mode: true,
            trim_white_space: true,
            ..Default::default()
        },
        5,
    );
    // initial slide 0 is clamped to trimStart
    assert_eq!(h.borrow().current_slide(), 1.0);
    settle(&h, &clock);
    h.borrow_mut().slide_to(10.0, true);
    assert_eq!(h.borrow().current_slide(), 3.0);
    settle(&h, &clock);
    h.borrow_mut().slide_to(-4.0, true);
    assert_eq!(h.borrow().current_slide(), 1.0);
}

#[test]
fn centered_bounds_around_current() {
    let (h, clock) = mount(
        Settings {
            items_to_show: 3.0,
            center_mode: true,
            ..Default::default()
        },
        7,
    );
    settle(&h, &clock);
    h.borrow_mut().slide_to(4.0, true);
    assert_eq!(
        h.borrow().slide_bounds(),
        SlideBounds {
            lower: 3.0,
            upper: 5.0
        }
    );
}

#[test]
fn slide_classification() {
    let (h, clock) = mount(
        Settings {
            items_to_show: 2.0,
            initial_slide: 1,
            ..Default::default()
        },
        5,
    );
    settle(&h, &clock);
    let c = h.borrow();
    assert!(c.slide_state(0).is_prev);
    assert!(c.slide_state(1).is_active && c.slide_state(1).is_current);
    assert!(c.slide_state(2).is_active && !c.slide_state(2).is_current);
    assert!(c.slide_state(3).is_next);
    assert_eq!(c.slide_state(4), Default::default());
}

#[test]
fn empty_carousel_stays_at_zero() {
    let (h, clock) = mount(Settings::default(), 0);
    settle(&h, &clock);
    let c = h.borrow();
    assert_eq!(c.normalized_current(), 0.0);
    assert_eq!(c.live_region_text(), "Item 1 of 0");
}

#[test]
fn render_tree_lists_clones_and_live_region() {
    let (h, clock) = mount(
        Settings {
            infinite_scroll: true,
            ..Default::default()
        },
        5,
    );
    settle(&h, &clock);
    let tree = h.borrow().render();
    assert!(tree.has_class("carousel"));

    let mut slides = Vec::new();
    tree.find_all_by_class("carousel-slide", &mut slides);
    assert_eq!(slides.len(), 15);
    let clones = slides.iter().filter(|s| s.has_class("is-clone")).count();
    assert_eq!(clones, 10);
    assert_eq!(slides[0].key.as_deref(), Some("before_0"));
    assert_eq!(slides[14].key.as_deref(), Some("after_9"));

    let active = slides
        .iter()
        .find(|s| s.has_class("is-current"))
        .unwrap();
    assert_eq!(active.attrs["data-index"], "0");
    assert_eq!(active.attrs["aria-hidden"], "false");
    assert_eq!(active.style.as_deref(), Some("width: 500px"));

    let track = tree.find_by_class("carousel-track").unwrap();
    assert_eq!(
        track.style.as_deref(),
        Some("transform: translate(-2500px, 0);")
    );

    let live = tree.find_by_class("carousel-liveregion").unwrap();
    assert_eq!(live.text.as_deref(), Some("Item 1 of 5"));
}

#[test]
fn vertical_track_uses_height() {
    let (h, clock) = mount(
        Settings {
            vertical: true,
            items_to_show: 2.0,
            ..Default::default()
        },
        4,
    );
    settle(&h, &clock);
    h.borrow_mut().slide_next();
    let c = h.borrow();
    assert_eq!(c.slide_length(), 100.0);
    assert_eq!(c.track_transform(), "transform: translate(0, -100px);");
    assert!(c.render().has_class("is-vertical"));
}
