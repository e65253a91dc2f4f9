//! Carousel settings: defaults, responsive breakpoint overrides and validation.
//!
//! Field names serialize in camelCase so hosts can pass the same option objects
//! they would hand to a component (`{ "itemsToShow": 2, "breakpoints": { "800": {...} } }`).

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Input tuning constants. Not overridable per breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tuning {
    /// Minimum wall-clock gap between two honored wheel events.
    pub wheel_throttle_ms: f64,
    /// Rounding bias applied to drag distance when `shortDrag` is on.
    pub short_drag_tolerance: f64,
    /// Rounding bias applied to drag distance when `shortDrag` is off.
    pub long_drag_tolerance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            wheel_throttle_ms: 200.0,
            short_drag_tolerance: 0.5,
            long_drag_tolerance: 0.15,
        }
    }
}

/// Full carousel configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Count of items visible per view. May be fractional (e.g. `1.5`).
    pub items_to_show: f64,
    /// Count of items moved by next/prev commands.
    pub items_to_slide: u32,
    pub initial_slide: i64,
    pub infinite_scroll: bool,
    pub center_mode: bool,
    pub vertical: bool,
    /// `None` means "detect from the layout direction on mount".
    pub rtl: Option<bool>,
    pub auto_play: bool,
    /// Auto-play delay in milliseconds when a slide has no own duration.
    pub play_speed: u32,
    pub mouse_drag: bool,
    pub touch_drag: bool,
    pub wheel_control: bool,
    pub keys_control: bool,
    /// Commit a slide change on any drag distance instead of ~35% of a slide.
    pub short_drag: bool,
    /// Sliding transition time in milliseconds.
    pub transition: u32,
    pub hover_pause: bool,
    pub trim_white_space: bool,
    pub tuning: Tuning,
    /// Minimum viewport width (px) → override. Only the widest match applies.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoints: BTreeMap<u32, SettingsPatch>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_to_show: 1.0,
            items_to_slide: 1,
            initial_slide: 0,
            infinite_scroll: false,
            center_mode: false,
            vertical: false,
            rtl: None,
            auto_play: false,
            play_speed: 2000,
            mouse_drag: true,
            touch_drag: true,
            wheel_control: true,
            keys_control: true,
            short_drag: true,
            transition: 300,
            hover_pause: true,
            trim_white_space: false,
            tuning: Tuning::default(),
            breakpoints: BTreeMap::new(),
        }
    }
}

/// Partial settings applied on top of the defaults when a breakpoint matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_to_show: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_to_slide: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_slide: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinite_scroll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_drag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_drag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_drag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_pause: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_white_space: Option<bool>,
}

impl SettingsPatch {
    /// Overwrite every field present in the patch.
    pub fn apply(&self, s: &mut Settings) {
        if let Some(v) = self.items_to_show {
            s.items_to_show = v;
        }
        if let Some(v) = self.items_to_slide {
            s.items_to_slide = v;
        }
        if let Some(v) = self.initial_slide {
            s.initial_slide = v;
        }
        if let Some(v) = self.infinite_scroll {
            s.infinite_scroll = v;
        }
        if let Some(v) = self.center_mode {
            s.center_mode = v;
        }
        if let Some(v) = self.vertical {
            s.vertical = v;
        }
        if let Some(v) = self.rtl {
            s.rtl = Some(v);
        }
        if let Some(v) = self.auto_play {
            s.auto_play = v;
        }
        if let Some(v) = self.play_speed {
            s.play_speed = v;
        }
        if let Some(v) = self.mouse_drag {
            s.mouse_drag = v;
        }
        if let Some(v) = self.touch_drag {
            s.touch_drag = v;
        }
        if let Some(v) = self.wheel_control {
            s.wheel_control = v;
        }
        if let Some(v) = self.keys_control {
            s.keys_control = v;
        }
        if let Some(v) = self.short_drag {
            s.short_drag = v;
        }
        if let Some(v) = self.transition {
            s.transition = v;
        }
        if let Some(v) = self.hover_pause {
            s.hover_pause = v;
        }
        if let Some(v) = self.trim_white_space {
            s.trim_white_space = v;
        }
    }
}

impl Settings {
    /// Parse settings JSON and validate the result.
    pub fn from_json(text: &str) -> Result<Self, CarouselError> {
        let settings: Settings =
            serde_json::from_str(text).map_err(|e| CarouselError::SettingsParse {
                reason: e.to_string(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// RTL flag with the undetected state read as left-to-right.
    #[inline]
    pub fn is_rtl(&self) -> bool {
        self.rtl.unwrap_or(false)
    }

    /// Check these settings and every breakpoint override applied on top of them.
    pub fn validate(&self) -> Result<(), CarouselError> {
        self.validate_values()?;
        for (min_width, patch) in &self.breakpoints {
            let mut merged = self.clone();
            patch.apply(&mut merged);
            merged
                .validate_values()
                .map_err(|e| CarouselError::Breakpoint {
                    min_width: *min_width,
                    source: Box::new(e),
                })?;
        }
        Ok(())
    }

    fn validate_values(&self) -> Result<(), CarouselError> {
        if !self.items_to_show.is_finite() || self.items_to_show <= 0.0 {
            return Err(CarouselError::InvalidItemsToShow {
                value: self.items_to_show,
            });
        }
        if self.items_to_slide == 0 {
            return Err(CarouselError::InvalidItemsToSlide);
        }
        if self.play_speed == 0 {
            return Err(CarouselError::InvalidPlaySpeed);
        }
        let tuning = [
            ("wheelThrottleMs", self.tuning.wheel_throttle_ms),
            ("shortDragTolerance", self.tuning.short_drag_tolerance),
            ("longDragTolerance", self.tuning.long_drag_tolerance),
        ];
        for (field, value) in tuning {
            if !value.is_finite() || value < 0.0 {
                return Err(CarouselError::InvalidTuning { field, value });
            }
        }
        Ok(())
    }

    /// Resolve the effective configuration for the current viewport.
    ///
    /// Breakpoints are tried widest first; the first one `matches` accepts is merged
    /// over `self`. Returns the merged settings and the winning threshold, if any.
    pub fn resolve(&self, matches: impl Fn(u32) -> bool) -> (Settings, Option<u32>) {
        let mut effective = self.clone();
        let matched = self
            .breakpoints
            .iter()
            .rev()
            .find(|(min_width, _)| matches(**min_width));
        match matched {
            Some((min_width, patch)) => {
                patch.apply(&mut effective);
                debug!("carousel breakpoint {min_width}px matched");
                (effective, Some(*min_width))
            }
            None => (effective, None),
        }
    }
}
