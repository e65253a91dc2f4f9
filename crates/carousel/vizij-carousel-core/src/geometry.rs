//! Pure layout math: visible window, track translation, trimming and drag distance.

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Inclusive index range of the slides considered active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideBounds {
    pub lower: f64,
    pub upper: f64,
}

pub fn slide_bounds(current: f64, items_to_show: f64, center_mode: bool) -> SlideBounds {
    if center_mode {
        SlideBounds {
            lower: (current - items_to_show / 2.0).ceil(),
            upper: (current + items_to_show / 2.0).floor(),
        }
    } else {
        SlideBounds {
            lower: current,
            upper: (current + items_to_show - 1.0).floor(),
        }
    }
}

/// Inputs for [`track_translate`], all measured along the sliding axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackAxis {
    pub drag_delta: f64,
    pub slide_length: f64,
    pub container_length: f64,
    pub current: f64,
    pub slides_count: usize,
    pub rtl: bool,
    pub infinite_scroll: bool,
    pub center_mode: bool,
}

/// Pixel offset of the track along its axis.
pub fn track_translate(axis: &TrackAxis) -> f64 {
    let direction = if axis.rtl { -1.0 } else { 1.0 };
    let clones_space = if axis.infinite_scroll {
        axis.slide_length * axis.slides_count as f64
    } else {
        0.0
    };
    let centering_space = if axis.center_mode {
        (axis.container_length - axis.slide_length) / 2.0
    } else {
        0.0
    };
    axis.drag_delta
        + direction * (centering_space - clones_space - axis.current * axis.slide_length)
}

/// Leading/trailing index counts excluded from the navigable range.
///
/// `(0, 1)` when trimming is off keeps `slides_count - trim_end` on the last slide.
pub fn trim_range(settings: &Settings) -> (f64, f64) {
    if !settings.trim_white_space || settings.infinite_scroll {
        return (0.0, 1.0);
    }
    let n = settings.items_to_show;
    if settings.center_mode {
        (((n - 1.0) / 2.0).floor(), (n / 2.0).ceil())
    } else {
        (0.0, n)
    }
}

/// Whole slides covered by a drag of `delta` pixels, biased by `tolerance`.
pub fn dragged_slides(delta: f64, slide_length: f64, tolerance: f64) -> f64 {
    if slide_length <= 0.0 || !slide_length.is_finite() {
        return 0.0;
    }
    (delta.abs() / slide_length + tolerance).round()
}
