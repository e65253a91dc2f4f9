use vizij_carousel_core::{
    CarouselError, CarouselEvent, CarouselHandle, CarouselOptions, ChildNode, Env, GroupBus,
    ManualClock, Rect, Settings, StaticLayout,
};
use vizij_test_fixtures::{children, settings};

fn build(settings: Settings, layout: StaticLayout) -> CarouselHandle {
    let env = Env::new(ManualClock::new(), layout).with_bus(GroupBus::new());
    let h = CarouselHandle::new(
        CarouselOptions {
            settings,
            group: None,
        },
        env,
    )
    .unwrap();
    let slides: Vec<ChildNode> = children::load("five-slides").unwrap();
    h.borrow_mut().set_children(&slides);
    h
}

fn responsive() -> Settings {
    Settings::from_json(&settings::json("responsive").unwrap()).unwrap()
}

#[test]
fn widest_matching_breakpoint_applies_alone() {
    let layout = StaticLayout::new(Rect::new(400.0, 100.0)).with_viewport(500.0);
    let h = build(responsive(), layout.clone());
    h.mount();
    assert_eq!(h.borrow().config().items_to_show, 1.0);
    assert_eq!(h.borrow().matched_breakpoint(), None);

    layout.set_viewport_width(800.0);
    h.borrow_mut().update();
    assert_eq!(h.borrow().config().items_to_show, 2.0);
    assert_eq!(h.borrow().matched_breakpoint(), Some(600));
    assert!(!h.borrow().config().center_mode);

    layout.set_viewport_width(1200.0);
    h.borrow_mut().update();
    assert_eq!(h.borrow().config().items_to_show, 4.0);
    assert!(h.borrow().config().center_mode);

    layout.set_viewport_width(500.0);
    h.borrow_mut().update();
    assert_eq!(h.borrow().config().items_to_show, 1.0);
    assert!(!h.borrow().config().center_mode);
}

#[test]
fn resolution_is_idempotent_for_a_fixed_viewport() {
    let layout = StaticLayout::new(Rect::new(400.0, 100.0)).with_viewport(900.0);
    let h = build(responsive(), layout);
    h.mount();
    let first = h.borrow().config().clone();
    h.borrow_mut().update();
    h.borrow_mut().restart();
    assert_eq!(h.borrow().config(), &first);
}

#[test]
fn updated_event_reports_sizes_and_effective_settings() {
    let layout = StaticLayout::new(Rect::new(400.0, 100.0)).with_viewport(700.0);
    let h = build(responsive(), layout.clone());
    h.mount();
    let events = h.borrow_mut().take_events();
    match &events[0] {
        CarouselEvent::Updated {
            container_width,
            container_height,
            slide_width,
            slide_height,
            settings,
        } => {
            assert_eq!(*container_width, 400.0);
            assert_eq!(*container_height, 100.0);
            assert_eq!(*slide_width, 200.0);
            assert_eq!(*slide_height, 50.0);
            assert_eq!(settings.items_to_show, 2.0);
        }
        other => panic!("expected updated, got {other:?}"),
    }

    layout.set_container(Rect::new(800.0, 100.0));
    h.borrow_mut().update();
    assert_eq!(h.borrow().slide_size(), Rect::new(400.0, 50.0));
}

#[test]
fn trimming_is_recomputed_on_update() {
    let mut s: Settings = settings::load("centered-trim").unwrap();
    s.breakpoints.insert(
        1000,
        serde_json::from_str(r#"{ "itemsToShow": 1 }"#).unwrap(),
    );
    let layout = StaticLayout::new(Rect::new(300.0, 100.0)).with_viewport(500.0);
    let h = build(s, layout.clone());
    h.mount();
    assert_eq!((h.borrow().trim_start(), h.borrow().trim_end()), (1.0, 2.0));

    layout.set_viewport_width(1200.0);
    h.borrow_mut().update();
    assert_eq!((h.borrow().trim_start(), h.borrow().trim_end()), (0.0, 1.0));
}

#[test]
fn invalid_breakpoint_is_rejected_at_construction() {
    let err = Settings::from_json(&settings::json("invalid-breakpoint").unwrap()).unwrap_err();
    assert_eq!(
        err,
        CarouselError::Breakpoint {
            min_width: 768,
            source: Box::new(CarouselError::InvalidItemsToShow { value: 0.0 }),
        }
    );

    let bad: Settings = settings::load("invalid-breakpoint").unwrap();
    let env = Env::new(ManualClock::new(), StaticLayout::default());
    let result = CarouselHandle::new(
        CarouselOptions {
            settings: bad,
            group: None,
        },
        env,
    );
    assert!(result.is_err());
}

#[test]
fn malformed_settings_json_is_a_parse_error() {
    let err = Settings::from_json(r#"{ "itemsToShow": "many" }"#).unwrap_err();
    assert!(matches!(err, CarouselError::SettingsParse { .. }));
}

#[test]
fn default_fixture_matches_default_settings() {
    let s = Settings::from_json(&settings::json("default").unwrap()).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn rtl_is_detected_only_when_unset() {
    let layout = StaticLayout::new(Rect::new(300.0, 100.0)).with_rtl(true);
    let auto = build(Settings::default(), layout.clone());
    auto.mount();
    assert!(auto.borrow().config().is_rtl());
    assert!(auto.borrow().render().has_class("is-rtl"));

    let explicit = build(
        Settings {
            rtl: Some(false),
            ..Default::default()
        },
        layout,
    );
    explicit.mount();
    assert!(!explicit.borrow().config().is_rtl());
}

#[test]
fn grouped_children_flatten_one_level() {
    let nodes: Vec<ChildNode> = children::load("grouped").unwrap();
    let h = build(Settings::default(), StaticLayout::new(Rect::new(300.0, 100.0)));
    h.borrow_mut().set_children(&nodes);
    let keys: Vec<_> = h.borrow().items().iter().map(|s| s.key.clone()).collect();
    assert_eq!(keys, vec!["intro", "a", "b", "outro"]);
    let indices: Vec<_> = h.borrow().items().iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn infinite_autoplay_fixture_runs() {
    let s: Settings = settings::load("infinite-autoplay").unwrap();
    let clock = ManualClock::new();
    let env = Env::new(clock.clone(), StaticLayout::new(Rect::new(300.0, 100.0)))
        .with_bus(GroupBus::new());
    let h = CarouselHandle::new(
        CarouselOptions {
            settings: s,
            group: None,
        },
        env,
    )
    .unwrap();
    let durations: Vec<ChildNode> = children::load("durations").unwrap();
    h.borrow_mut().set_children(&durations);
    h.mount();
    assert_eq!(h.borrow().auto_play_deadline(), Some(500.0));
    assert_eq!(h.borrow().track_slides().len(), 9);
    clock.set(500.0);
    h.borrow_mut().advance();
    assert_eq!(h.borrow().current_slide(), 1.0);
}
