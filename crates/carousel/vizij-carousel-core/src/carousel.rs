//! Carousel core: slide-index state machine, responsive configuration,
//! pointer/keyboard/wheel input and auto-play scheduling.
//!
//! The core owns every piece of mutable state. Addons read it through a
//! [`CarouselHandle`](crate::CarouselHandle) and send commands back through the
//! same handle. Timers are deadlines against the injected [`Clock`]; the host calls
//! [`Carousel::advance`] to fire whatever is due.

use std::fmt;
use std::rc::Rc;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::bus::{GroupBus, SubscriptionId};
use crate::clock::Clock;
use crate::config::Settings;
use crate::error::CarouselError;
use crate::geometry::{self, SlideBounds, TrackAxis};
use crate::index::{get_in_range, normalize_slide_index, sign};
use crate::input::{Key, Listeners, Point, PointerDown, PointerKind, WheelInput};
use crate::layout::{LayoutProvider, Rect};
use crate::outputs::{CarouselEvent, Outputs};
use crate::render::RenderNode;
use crate::slides::{self, ChildNode, SlideItem, SlideState};
use crate::timer::Timer;

/// Construction options: settings plus an optional sync group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselOptions {
    pub settings: Settings,
    pub group: Option<String>,
}

/// Injected collaborators.
#[derive(Clone)]
pub struct Env {
    pub clock: Rc<dyn Clock>,
    pub layout: Rc<dyn LayoutProvider>,
    pub bus: GroupBus,
}

impl Env {
    /// Environment on the thread's shared group bus.
    pub fn new(clock: impl Clock + 'static, layout: impl LayoutProvider + 'static) -> Self {
        Self {
            clock: Rc::new(clock),
            layout: Rc::new(layout),
            bus: GroupBus::shared(),
        }
    }

    pub fn with_bus(mut self, bus: GroupBus) -> Self {
        self.bus = bus;
        self
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug)]
struct DragSession {
    kind: PointerKind,
    start: Point,
}

#[derive(Clone, Copy, Debug)]
struct PendingSettle {
    at: f64,
    index: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Settle,
    Loaded,
    AutoPlay,
}

#[derive(Debug)]
pub struct Carousel {
    // Configuration
    defaults: Settings,
    config: Settings,
    matched_breakpoint: Option<u32>,
    pub(crate) group: Option<String>,
    pub(crate) env: Env,
    pub(crate) subscription: Option<SubscriptionId>,

    // Slides
    items: Vec<SlideItem>,

    // State
    current_slide: Option<f64>,
    trim_start: f64,
    trim_end: f64,
    container: Rect,
    slide: Rect,
    delta: Point,
    drag: Option<DragSession>,
    is_dragging: bool,
    is_sliding: bool,
    is_hover: bool,
    is_focus: bool,
    initialized: bool,
    mounted: bool,

    // Scheduling
    settle: Option<PendingSettle>,
    loaded_at: Option<f64>,
    autoplay: Option<Timer>,
    last_scroll_time: Option<f64>,
    tick_time: Option<f64>,
    listeners: Listeners,

    outputs: Outputs,
}

impl Carousel {
    /// Validate `options` and build an unmounted carousel.
    pub fn new(options: CarouselOptions, env: Env) -> Result<Self, CarouselError> {
        options.settings.validate()?;
        Ok(Self {
            config: options.settings.clone(),
            defaults: options.settings,
            matched_breakpoint: None,
            group: options.group.filter(|g| !g.is_empty()),
            env,
            subscription: None,
            items: Vec::new(),
            current_slide: None,
            trim_start: 0.0,
            trim_end: 1.0,
            container: Rect::default(),
            slide: Rect::default(),
            delta: Point::ZERO,
            drag: None,
            is_dragging: false,
            is_sliding: false,
            is_hover: false,
            is_focus: false,
            initialized: false,
            mounted: false,
            settle: None,
            loaded_at: None,
            autoplay: None,
            last_scroll_time: None,
            tick_time: None,
            listeners: Listeners::default(),
            outputs: Outputs::default(),
        })
    }

    /// Replace the child list. Slides are re-indexed from 0.
    pub fn set_children(&mut self, children: &[ChildNode]) {
        self.items = slides::flatten_children(children);
        trace!("carousel: {} slides", self.items.len());
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Attach to the host: detect direction, measure, move to the initial slide
    /// (announcing it to the group) and schedule `loaded`.
    ///
    /// Group subscription is wired by [`CarouselHandle::mount`](crate::CarouselHandle::mount).
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.init_events();
        self.update();
        let initial = self.config.initial_slide as f64;
        self.slide_to(initial, true);
        if self.config.auto_play {
            self.init_auto_play();
        }
        self.loaded_at = Some(self.now() + f64::from(self.config.transition));
        debug!("carousel mounted with {} slides", self.items.len());
    }

    /// Detach: stop auto-play, drop listeners and the group subscription.
    /// Pending timers are ignored from here on.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.listeners = Listeners::default();
        self.drag = None;
        self.is_dragging = false;
        if let Some(timer) = self.autoplay.as_mut() {
            timer.stop();
        }
        self.detach_group();
        debug!("carousel unmounted");
    }

    fn init_events(&mut self) {
        if self.defaults.rtl.is_none() {
            self.defaults.rtl = Some(self.env.layout.is_rtl());
        }
        self.config = self.defaults.clone();
        self.listeners = Listeners {
            resize: true,
            keydown: self.config.keys_control,
            wheel: self.config.wheel_control,
            drag: None,
        };
        if self.config.wheel_control {
            self.last_scroll_time = Some(self.now());
        }
    }

    pub(crate) fn detach_group(&mut self) {
        if let (Some(group), Some(id)) = (self.group.as_deref(), self.subscription.take()) {
            self.env.bus.unsubscribe(group, id);
        }
    }

    // ---------------------------------------------------------------------
    // Updating
    // ---------------------------------------------------------------------

    /// Re-resolve breakpoints, re-measure and recompute trimming. Emits `updated`.
    pub fn update(&mut self) {
        if !self.defaults.breakpoints.is_empty() {
            self.update_config();
        }
        self.update_width();
        self.update_trim();
        self.outputs.push_event(CarouselEvent::Updated {
            container_width: self.container.width,
            container_height: self.container.height,
            slide_width: self.slide.width,
            slide_height: self.slide.height,
            settings: self.config.clone(),
        });
    }

    /// Alias for [`update`](Self::update), kept for hosts that re-layout explicitly.
    pub fn restart(&mut self) {
        self.update();
    }

    fn update_config(&mut self) {
        let layout = Rc::clone(&self.env.layout);
        let (config, matched) = self
            .defaults
            .resolve(|min_width| layout.matches_min_width(min_width));
        self.config = config;
        self.matched_breakpoint = matched;
    }

    fn update_width(&mut self) {
        self.container = self.env.layout.measure();
        let n = self.config.items_to_show;
        self.slide = Rect {
            width: self.container.width / n,
            height: self.container.height / n,
        };
    }

    fn update_trim(&mut self) {
        let (start, end) = geometry::trim_range(&self.config);
        self.trim_start = start;
        self.trim_end = end;
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Move to `target`. Returns false when the call was a no-op.
    ///
    /// `is_group_source` marks a locally originated move that should be mirrored to
    /// the rest of the group; moves received from the group pass false.
    pub fn slide_to(&mut self, target: f64, is_group_source: bool) -> bool {
        if self.is_sliding || self.current_slide == Some(target) {
            trace!("carousel: slide_to({target}) ignored");
            return false;
        }
        let index = if self.config.infinite_scroll {
            target
        } else {
            get_in_range(target, self.trim_start, self.max_index())
        };
        self.outputs.push_event(CarouselEvent::BeforeSlide {
            current_slide: self.current_slide,
            slide_to: index,
        });
        let previous = self.current_slide;
        if is_group_source {
            if let Some(group) = self.group.clone() {
                self.env.bus.publish(&group, self.subscription, target);
            }
        }
        self.current_slide = Some(index);
        self.is_sliding = true;
        self.settle = Some(PendingSettle {
            at: self.now() + f64::from(self.config.transition),
            index,
        });
        debug!("carousel: slide {previous:?} -> {index}");
        self.outputs.push_event(CarouselEvent::Slide {
            current_slide: index,
            slide_from: previous,
        });
        true
    }

    pub fn slide_next(&mut self) -> bool {
        let step = f64::from(self.config.items_to_slide);
        self.slide_to(self.current_slide() + step, true)
    }

    pub fn slide_prev(&mut self) -> bool {
        let step = f64::from(self.config.items_to_slide);
        self.slide_to(self.current_slide() - step, true)
    }

    /// Render-layer signal that the track transition finished.
    pub fn on_transition_end(&mut self) {
        self.is_sliding = false;
        self.outputs.push_event(CarouselEvent::AfterSlide {
            current_slide: self.current_slide(),
        });
    }

    /// Toggle auto-play and restart the timer if the flag changed.
    pub fn set_auto_play(&mut self, on: bool) {
        if self.defaults.auto_play == on && self.config.auto_play == on {
            return;
        }
        self.defaults.auto_play = on;
        self.config.auto_play = on;
        self.restart_timer();
    }

    pub fn set_hover(&mut self, hover: bool) {
        self.is_hover = hover;
    }

    pub fn set_focus(&mut self, focus: bool) {
        self.is_focus = focus;
    }

    // ---------------------------------------------------------------------
    // Auto-play
    // ---------------------------------------------------------------------

    fn init_auto_play(&mut self) {
        let timeout = self.current_slide_timeout();
        self.autoplay = Some(Timer::new(self.now(), timeout));
    }

    /// Recreate or reset the auto-play timer according to the current flag.
    pub fn restart_timer(&mut self) {
        let now = self.now();
        let timeout = self.current_slide_timeout();
        let auto_play = self.config.auto_play;
        let Some(timer) = self.autoplay.as_mut() else {
            if auto_play && self.mounted {
                self.init_auto_play();
            }
            return;
        };
        timer.stop();
        if auto_play {
            timer.set(now, Some(timeout));
        }
    }

    /// Delay before the next auto-play step: the current slide's own duration or
    /// the global play speed.
    pub fn current_slide_timeout(&self) -> f64 {
        let idx = normalize_slide_index(self.current_slide(), self.items.len()).floor() as usize;
        self.items
            .get(idx)
            .and_then(|s| s.duration)
            .filter(|d| *d > 0)
            .map_or(f64::from(self.config.play_speed), f64::from)
    }

    fn on_auto_play_tick(&mut self) {
        let paused = self.is_sliding
            || self.is_dragging
            || (self.is_hover && self.config.hover_pause)
            || self.is_focus
            || !self.config.auto_play;
        if !paused {
            if !self.config.infinite_scroll && self.current_slide() >= self.max_index() {
                self.slide_to(0.0, true);
            } else {
                self.slide_next();
            }
        }
        let now = self.now();
        let timeout = self.current_slide_timeout();
        if let Some(timer) = self.autoplay.as_mut() {
            timer.set(now, Some(timeout));
        }
    }

    // ---------------------------------------------------------------------
    // Scheduling
    // ---------------------------------------------------------------------

    fn now(&self) -> f64 {
        self.tick_time.unwrap_or_else(|| self.env.clock.now_ms())
    }

    /// Earliest pending deadline, for hosts that schedule their own wake-up.
    pub fn next_deadline(&self) -> Option<f64> {
        if !self.mounted {
            return None;
        }
        self.pending().map(|(at, _)| at)
    }

    fn pending(&self) -> Option<(f64, Task)> {
        let candidates = [
            (self.settle.map(|s| s.at), Task::Settle),
            (self.loaded_at, Task::Loaded),
            (self.autoplay.as_ref().and_then(Timer::deadline), Task::AutoPlay),
        ];
        let mut best: Option<(f64, Task)> = None;
        for (at, task) in candidates {
            if let Some(at) = at {
                if best.map_or(true, |(b, _)| at < b) {
                    best = Some((at, task));
                }
            }
        }
        best
    }

    /// Fire every timer due at the clock's current time, in deadline order.
    /// Returns the number of timers fired.
    pub fn advance(&mut self) -> usize {
        if !self.mounted {
            return 0;
        }
        let now = self.env.clock.now_ms();
        let mut fired = 0;
        while let Some((at, task)) = self.pending().filter(|(at, _)| *at <= now) {
            self.tick_time = Some(at);
            match task {
                Task::Settle => {
                    if let Some(settle) = self.settle.take() {
                        self.is_sliding = false;
                        self.current_slide =
                            Some(normalize_slide_index(settle.index, self.items.len()));
                    }
                }
                Task::Loaded => {
                    self.loaded_at = None;
                    self.initialized = true;
                    self.outputs.push_event(CarouselEvent::Loaded);
                }
                Task::AutoPlay => {
                    if let Some(timer) = self.autoplay.as_mut() {
                        timer.fire_if_due(at);
                    }
                    self.on_auto_play_tick();
                }
            }
            fired += 1;
        }
        self.tick_time = None;
        fired
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    /// Start a drag. Mouse drags only start on the primary button.
    pub fn pointer_down(&mut self, down: PointerDown) {
        let allowed = match down.kind {
            PointerKind::Mouse => self.config.mouse_drag && down.button == 0,
            PointerKind::Touch => self.config.touch_drag,
        };
        if !allowed || !self.mounted {
            return;
        }
        self.drag = Some(DragSession {
            kind: down.kind,
            start: Point::new(down.x, down.y),
        });
        self.is_dragging = true;
        self.listeners.drag = Some(down.kind);
    }

    /// Track a drag. Returns true when the host should prevent the default action.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        if self.is_sliding {
            return false;
        }
        let Some(drag) = self.drag else {
            return false;
        };
        let dx = at.x - drag.start.x;
        let dy = at.y - drag.start.y;
        if self.is_invalid_direction(dx, dy) {
            trace!("carousel: cross-axis drag ignored ({dx}, {dy})");
            return false;
        }
        self.delta = Point::new(dx, dy);
        drag.kind == PointerKind::Mouse
    }

    fn is_invalid_direction(&self, dx: f64, dy: f64) -> bool {
        if self.config.vertical {
            dy.abs() <= dx.abs()
        } else {
            dx.abs() <= dy.abs()
        }
    }

    /// Finish a drag and commit the dragged distance as whole slides.
    pub fn pointer_up(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.is_dragging = false;
        self.listeners.drag = None;
        let tuning = self.config.tuning;
        let tolerance = if self.config.short_drag {
            tuning.short_drag_tolerance
        } else {
            tuning.long_drag_tolerance
        };
        let (delta, length, flip) = if self.config.vertical {
            (self.delta.y, self.slide.height, 1.0)
        } else {
            let flip = if self.config.is_rtl() { -1.0 } else { 1.0 };
            (self.delta.x, self.slide.width, flip)
        };
        let direction = flip * sign(delta);
        let dragged = geometry::dragged_slides(delta, length, tolerance);
        self.slide_to(self.current_slide() - direction * dragged, true);
        self.delta = Point::ZERO;
        self.restart_timer();
    }

    /// Keyboard navigation along the sliding axis. Returns true for every arrow
    /// key so the host suppresses page scrolling while the carousel has focus.
    pub fn key_down(&mut self, key: Key) -> bool {
        if !self.config.keys_control {
            return false;
        }
        let (prev, next) = if self.config.vertical {
            (Key::ArrowUp, Key::ArrowDown)
        } else if self.config.is_rtl() {
            (Key::ArrowRight, Key::ArrowLeft)
        } else {
            (Key::ArrowLeft, Key::ArrowRight)
        };
        if key == prev {
            self.slide_prev();
        } else if key == next {
            self.slide_next();
        }
        key.is_arrow()
    }

    /// Wheel navigation, throttled. Returns true when the host should prevent scrolling.
    pub fn wheel(&mut self, input: WheelInput) -> bool {
        if !self.config.wheel_control {
            return false;
        }
        let now = self.now();
        if let Some(last) = self.last_scroll_time {
            if now - last < self.config.tuning.wheel_throttle_ms {
                trace!("carousel: wheel throttled");
                return true;
            }
        }
        self.last_scroll_time = Some(now);
        let value = input.value();
        if value < 0.0 {
            self.slide_next();
        } else if value > 0.0 {
            self.slide_prev();
        }
        true
    }

    // ---------------------------------------------------------------------
    // Derived state
    // ---------------------------------------------------------------------

    /// Raw current index; `0` before the first slide.
    #[inline]
    pub fn current_slide(&self) -> f64 {
        self.current_slide.unwrap_or(0.0)
    }

    /// Current index wrapped into `[0, slides_count)`.
    pub fn normalized_current(&self) -> f64 {
        normalize_slide_index(self.current_slide(), self.items.len())
    }

    #[inline]
    pub fn slides_count(&self) -> usize {
        self.items.len()
    }

    /// Last reachable index without infinite scroll.
    pub fn max_index(&self) -> f64 {
        self.items.len() as f64 - self.trim_end
    }

    pub fn slide_bounds(&self) -> SlideBounds {
        geometry::slide_bounds(
            self.current_slide(),
            self.config.items_to_show,
            self.config.center_mode,
        )
    }

    pub fn slide_state(&self, index: i64) -> SlideState {
        slides::classify(
            index,
            self.slide_bounds(),
            self.config.items_to_slide,
            self.current_slide(),
        )
    }

    pub fn slide_length(&self) -> f64 {
        if self.config.vertical {
            self.slide.height
        } else {
            self.slide.width
        }
    }

    pub fn container_length(&self) -> f64 {
        if self.config.vertical {
            self.container.height
        } else {
            self.container.width
        }
    }

    pub fn track_translate(&self) -> f64 {
        geometry::track_translate(&TrackAxis {
            drag_delta: if self.config.vertical {
                self.delta.y
            } else {
                self.delta.x
            },
            slide_length: self.slide_length(),
            container_length: self.container_length(),
            current: self.current_slide(),
            slides_count: self.items.len(),
            rtl: self.config.is_rtl(),
            infinite_scroll: self.config.infinite_scroll,
            center_mode: self.config.center_mode,
        })
    }

    pub fn track_transform(&self) -> String {
        let t = self.track_translate();
        if self.config.vertical {
            format!("transform: translate(0, {t}px);")
        } else {
            format!("transform: translate({t}px, 0);")
        }
    }

    pub fn track_transition(&self) -> String {
        if self.initialized && self.is_sliding {
            format!("transition: {}ms", self.config.transition)
        } else {
            String::new()
        }
    }

    pub fn live_region_text(&self) -> String {
        format!(
            "Item {} of {}",
            self.current_slide() + 1.0,
            self.items.len()
        )
    }

    /// Slides as laid out on the track, including clones under infinite scroll.
    pub fn track_slides(&self) -> Vec<SlideItem> {
        if self.config.infinite_scroll {
            slides::with_buffer_clones(&self.items)
        } else {
            self.items.clone()
        }
    }

    fn slide_style(&self) -> String {
        if self.config.vertical {
            format!("height: {}px", self.slide.height)
        } else {
            format!("width: {}px", self.slide.width)
        }
    }

    /// Build the carousel subtree: root section, track with slides, live region.
    pub fn render(&self) -> RenderNode {
        let style = self.slide_style();
        let slides = self.track_slides().into_iter().map(|item| {
            let state = self.slide_state(item.index);
            let mut li = RenderNode::new("li")
                .key(item.key)
                .class("carousel-slide")
                .class_if("is-clone", item.is_clone)
                .class_if("is-active", state.is_active)
                .class_if("is-prev", state.is_prev)
                .class_if("is-next", state.is_next)
                .class_if("is-current", state.is_current)
                .style(style.clone())
                .attr("aria-hidden", !state.is_active)
                .attr("data-index", item.index);
            if let Some(content) = item.content {
                li = li.text(content);
            }
            li
        });
        let track = RenderNode::new("ul")
            .class("carousel-track")
            .class_if("is-dragging", self.is_dragging)
            .style(self.track_transform() + &self.track_transition())
            .children(slides);
        let live = RenderNode::new("div")
            .class("carousel-liveregion")
            .class("carousel-sr-only")
            .attr("aria-live", "polite")
            .attr("aria-atomic", "true")
            .text(self.live_region_text());
        RenderNode::new("section")
            .class("carousel")
            .class_if("is-vertical", self.config.vertical)
            .class_if("is-rtl", self.config.is_rtl())
            .attr("tabindex", 0)
            .child(RenderNode::new("div").class("carousel-list").child(track))
            .child(live)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Effective configuration after breakpoint resolution.
    #[inline]
    pub fn config(&self) -> &Settings {
        &self.config
    }

    #[inline]
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    #[inline]
    pub fn matched_breakpoint(&self) -> Option<u32> {
        self.matched_breakpoint
    }

    #[inline]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    #[inline]
    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    #[inline]
    pub fn trim_start(&self) -> f64 {
        self.trim_start
    }

    #[inline]
    pub fn trim_end(&self) -> f64 {
        self.trim_end
    }

    #[inline]
    pub fn is_sliding(&self) -> bool {
        self.is_sliding
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn delta(&self) -> Point {
        self.delta
    }

    #[inline]
    pub fn container_size(&self) -> Rect {
        self.container
    }

    #[inline]
    pub fn slide_size(&self) -> Rect {
        self.slide
    }

    #[inline]
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Whether an auto-play timer is currently scheduled.
    pub fn is_auto_playing(&self) -> bool {
        self.autoplay.as_ref().is_some_and(Timer::is_running)
    }

    /// Next auto-play firing time, if the timer is scheduled.
    pub fn auto_play_deadline(&self) -> Option<f64> {
        self.autoplay.as_ref().and_then(Timer::deadline)
    }

    /// Drain pending notifications.
    pub fn take_events(&mut self) -> Vec<CarouselEvent> {
        self.outputs.take()
    }

    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }
}
