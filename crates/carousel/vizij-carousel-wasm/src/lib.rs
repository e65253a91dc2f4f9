use js_sys::{Function, Reflect, JSON};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use vizij_carousel_core::{
    CarouselHandle, CarouselOptions, ChildNode, Clock, Env, Key, LayoutProvider, Listeners,
    Navigation, Pagination, PaginationMode, Point, PointerDown, Progress, Rect, Settings,
    WheelInput,
};

#[wasm_bindgen]
pub struct VizijCarousel {
    handle: CarouselHandle,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Serialize with plain objects for maps so JS sees `{ "aria-hidden": "true" }`.
fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Layout callbacks supplied by the host:
/// `{ measure(): {width, height}, matchesMinWidth?(px): boolean, isRtl?(): boolean }`.
struct JsLayout {
    measure: Function,
    matches_min_width: Option<Function>,
    is_rtl: Option<Function>,
}

fn optional_function(obj: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(obj, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

impl JsLayout {
    fn from_js(obj: &JsValue) -> Result<Self, JsError> {
        let measure = optional_function(obj, "measure")
            .ok_or_else(|| JsError::new("layout error: `measure` callback is required"))?;
        Ok(Self {
            measure,
            matches_min_width: optional_function(obj, "matchesMinWidth"),
            is_rtl: optional_function(obj, "isRtl"),
        })
    }
}

impl LayoutProvider for JsLayout {
    fn measure(&self) -> Rect {
        self.measure
            .call0(&JsValue::UNDEFINED)
            .ok()
            .and_then(|v| swb::from_value::<Rect>(v).ok())
            .unwrap_or_default()
    }

    fn matches_min_width(&self, min_width: u32) -> bool {
        let Some(f) = &self.matches_min_width else {
            return false;
        };
        f.call1(&JsValue::UNDEFINED, &JsValue::from(min_width))
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    }

    fn is_rtl(&self) -> bool {
        let Some(f) = &self.is_rtl else {
            return false;
        };
        f.call0(&JsValue::UNDEFINED)
            .map(|v| v.is_truthy())
            .unwrap_or(false)
    }
}

fn parse_settings(settings: &JsValue) -> Result<Settings, JsError> {
    if jsvalue_is_undefined_or_null(settings) {
        return Ok(Settings::default());
    }
    // Round-trip through JSON so breakpoint keys ("768") parse as integers.
    let text = JSON::stringify(settings)
        .map_err(|e| JsError::new(&format!("settings stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new("settings: stringify produced non-string"))?;
    Settings::from_json(&text).map_err(|e| JsError::new(&format!("settings error: {e}")))
}

fn parse_mode(mode: Option<String>) -> Result<PaginationMode, JsError> {
    match mode {
        None => Ok(PaginationMode::default()),
        Some(name) => name
            .parse()
            .map_err(|e| JsError::new(&format!("pagination error: {e}"))),
    }
}

/// Read-only snapshot for hosts that render without the node tree.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateView {
    current_slide: f64,
    normalized_slide: f64,
    slides_count: usize,
    trim_start: f64,
    trim_end: f64,
    is_sliding: bool,
    is_dragging: bool,
    initialized: bool,
    track_style: String,
    listeners: Listeners,
    next_deadline: Option<f64>,
}

#[wasm_bindgen]
impl VizijCarousel {
    /// Create a carousel. `settings` uses the camelCase option names
    /// (`{ itemsToShow: 2, breakpoints: { 768: { itemsToShow: 3 } } }`); pass
    /// undefined/null for defaults. `layout` supplies the measuring callbacks.
    #[wasm_bindgen(constructor)]
    pub fn new(
        settings: JsValue,
        layout: JsValue,
        group: Option<String>,
    ) -> Result<VizijCarousel, JsError> {
        #[cfg(feature = "console_error")]
        console_error_panic_hook::set_once();

        let settings = parse_settings(&settings)?;
        let env = Env::new(JsClock, JsLayout::from_js(&layout)?);
        let handle = CarouselHandle::new(CarouselOptions { settings, group }, env)
            .map_err(|e| JsError::new(&format!("carousel error: {e}")))?;
        Ok(VizijCarousel { handle })
    }

    /// Replace the child list: `[{ kind: "slide", key?, content?, duration? } | { kind: "group", children } | { kind: "other" }]`.
    #[wasm_bindgen(js_name = set_children)]
    pub fn set_children(&mut self, children: JsValue) -> Result<(), JsError> {
        let nodes: Vec<ChildNode> = if jsvalue_is_undefined_or_null(&children) {
            Vec::new()
        } else {
            swb::from_value(children).map_err(|e| JsError::new(&format!("children error: {e}")))?
        };
        self.handle.borrow_mut().set_children(&nodes);
        Ok(())
    }

    pub fn mount(&mut self) {
        self.handle.mount();
    }

    pub fn unmount(&mut self) {
        self.handle.unmount();
    }

    /// Re-measure and re-resolve breakpoints (window resize).
    pub fn update(&mut self) {
        self.handle.borrow_mut().update();
    }

    pub fn restart(&mut self) {
        self.handle.borrow_mut().restart();
    }

    #[wasm_bindgen(js_name = slide_to)]
    pub fn slide_to(&mut self, index: f64) -> bool {
        self.handle.borrow_mut().slide_to(index, true)
    }

    #[wasm_bindgen(js_name = slide_next)]
    pub fn slide_next(&mut self) -> bool {
        self.handle.borrow_mut().slide_next()
    }

    #[wasm_bindgen(js_name = slide_prev)]
    pub fn slide_prev(&mut self) -> bool {
        self.handle.borrow_mut().slide_prev()
    }

    #[wasm_bindgen(js_name = restart_timer)]
    pub fn restart_timer(&mut self) {
        self.handle.borrow_mut().restart_timer();
    }

    #[wasm_bindgen(js_name = set_auto_play)]
    pub fn set_auto_play(&mut self, on: bool) {
        self.handle.borrow_mut().set_auto_play(on);
    }

    #[wasm_bindgen(js_name = set_group)]
    pub fn set_group(&mut self, group: Option<String>) {
        self.handle.set_group(group);
    }

    #[wasm_bindgen(js_name = set_hover)]
    pub fn set_hover(&mut self, hover: bool) {
        self.handle.borrow_mut().set_hover(hover);
    }

    #[wasm_bindgen(js_name = set_focus)]
    pub fn set_focus(&mut self, focus: bool) {
        self.handle.borrow_mut().set_focus(focus);
    }

    /// `{ kind: "mouse" | "touch", button?, x, y }`.
    #[wasm_bindgen(js_name = pointer_down)]
    pub fn pointer_down(&mut self, event: JsValue) -> Result<(), JsError> {
        let down: PointerDown =
            swb::from_value(event).map_err(|e| JsError::new(&format!("pointer error: {e}")))?;
        self.handle.borrow_mut().pointer_down(down);
        Ok(())
    }

    /// Returns true when the host should call `preventDefault()`.
    #[wasm_bindgen(js_name = pointer_move)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.handle.borrow_mut().pointer_move(Point::new(x, y))
    }

    #[wasm_bindgen(js_name = pointer_up)]
    pub fn pointer_up(&mut self) {
        self.handle.borrow_mut().pointer_up();
    }

    /// `key` is a DOM `KeyboardEvent.key`. Returns true when the key was consumed.
    #[wasm_bindgen(js_name = key_down)]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.handle.borrow_mut().key_down(Key::from_dom(key))
    }

    /// `{ deltaX, deltaY, wheelDelta? }`. Returns true when the host should call `preventDefault()`.
    pub fn wheel(&mut self, event: JsValue) -> Result<bool, JsError> {
        let input: WheelInput =
            swb::from_value(event).map_err(|e| JsError::new(&format!("wheel error: {e}")))?;
        Ok(self.handle.borrow_mut().wheel(input))
    }

    #[wasm_bindgen(js_name = transition_end)]
    pub fn transition_end(&mut self) {
        self.handle.borrow_mut().on_transition_end();
    }

    /// Fire due timers and drain notifications. Returns `[{ type, ... }]`.
    pub fn tick(&mut self) -> Result<JsValue, JsError> {
        let events = {
            let mut c = self.handle.borrow_mut();
            c.advance();
            c.take_events()
        };
        to_js(&events, "events")
    }

    /// Earliest pending timer deadline (ms, `Date.now()` clock) or undefined.
    #[wasm_bindgen(js_name = next_deadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.handle.borrow().next_deadline()
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        let c = self.handle.borrow();
        let view = StateView {
            current_slide: c.current_slide(),
            normalized_slide: c.normalized_current(),
            slides_count: c.slides_count(),
            trim_start: c.trim_start(),
            trim_end: c.trim_end(),
            is_sliding: c.is_sliding(),
            is_dragging: c.is_dragging(),
            initialized: c.is_initialized(),
            track_style: c.track_transform() + &c.track_transition(),
            listeners: c.listeners(),
            next_deadline: c.next_deadline(),
        };
        to_js(&view, "state")
    }

    /// Effective settings after breakpoint resolution.
    pub fn settings(&self) -> Result<JsValue, JsError> {
        to_js(self.handle.borrow().config(), "settings")
    }

    pub fn render(&self) -> Result<JsValue, JsError> {
        to_js(&self.handle.borrow().render(), "render")
    }

    /// Pagination view; `mode` is "indicator" (default) or "fraction".
    #[wasm_bindgen(js_name = pagination)]
    pub fn pagination(&self, mode: Option<String>) -> Result<JsValue, JsError> {
        let pagination = Pagination::new(self.handle.clone(), parse_mode(mode)?);
        to_js(&pagination.view(), "pagination")
    }

    #[wasm_bindgen(js_name = render_pagination)]
    pub fn render_pagination(&self, mode: Option<String>) -> Result<JsValue, JsError> {
        let pagination = Pagination::new(self.handle.clone(), parse_mode(mode)?);
        to_js(&pagination.render(), "pagination")
    }

    /// Indicator click.
    #[wasm_bindgen(js_name = pagination_select)]
    pub fn pagination_select(&mut self, index: i32) -> bool {
        Pagination::new(self.handle.clone(), PaginationMode::Indicator).select(i64::from(index))
    }

    pub fn navigation(&self) -> Result<JsValue, JsError> {
        to_js(&Navigation::new(self.handle.clone()).view(), "navigation")
    }

    #[wasm_bindgen(js_name = render_navigation)]
    pub fn render_navigation(&self) -> Result<JsValue, JsError> {
        to_js(&Navigation::new(self.handle.clone()).render(), "navigation")
    }

    /// Prev button click (also restarts auto-play).
    #[wasm_bindgen(js_name = navigation_prev)]
    pub fn navigation_prev(&mut self) -> bool {
        Navigation::new(self.handle.clone()).slide_prev()
    }

    /// Next button click (also restarts auto-play).
    #[wasm_bindgen(js_name = navigation_next)]
    pub fn navigation_next(&mut self) -> bool {
        Navigation::new(self.handle.clone()).slide_next()
    }

    pub fn progress(&self) -> f64 {
        Progress::new(self.handle.clone()).percent()
    }

    #[wasm_bindgen(js_name = render_progress)]
    pub fn render_progress(&self) -> Result<JsValue, JsError> {
        to_js(&Progress::new(self.handle.clone()).render(), "progress")
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
