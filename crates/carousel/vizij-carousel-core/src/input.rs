//! Host input events and listener bookkeeping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Pointer press on the track.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerDown {
    pub kind: PointerKind,
    /// Mouse button; ignored for touch.
    #[serde(default)]
    pub button: u16,
    pub x: f64,
    pub y: f64,
}

impl PointerDown {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Mouse,
            button: 0,
            x,
            y,
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Touch,
            button: 0,
            x,
            y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }

    #[inline]
    pub fn is_arrow(self) -> bool {
        !matches!(self, Key::Other)
    }
}

/// Wheel event deltas as reported by the DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    /// Legacy `wheelDelta`; positive means scrolling up. Takes precedence when non-zero.
    pub wheel_delta: Option<f64>,
}

impl WheelInput {
    pub fn vertical(delta_y: f64) -> Self {
        Self {
            delta_y,
            ..Default::default()
        }
    }

    /// Signed scroll value where negative means "forward".
    pub fn value(&self) -> f64 {
        match self.wheel_delta {
            Some(w) if w != 0.0 => w,
            _ if self.delta_x.abs() > self.delta_y.abs() => -self.delta_x,
            _ => -self.delta_y,
        }
    }
}

/// Listeners the host must keep attached for the carousel to receive input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listeners {
    /// `window` resize → `update()`.
    pub resize: bool,
    /// Root `keydown`.
    pub keydown: bool,
    /// Root `wheel` (non-passive).
    pub wheel: bool,
    /// Document move/end listeners for the active drag.
    pub drag: Option<PointerKind>,
}

impl Listeners {
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Listeners::default()
    }
}
