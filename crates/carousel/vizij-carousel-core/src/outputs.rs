//! Notifications emitted by the carousel core.
//!
//! Events accumulate in [`Outputs`] until the host drains them; the wasm adapter
//! forwards them as `{ "type": "beforeSlide", ... }` objects.

use serde::{Deserialize, Serialize};

use crate::config::Settings;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[non_exhaustive]
pub enum CarouselEvent {
    /// Layout or configuration was recomputed.
    Updated {
        container_width: f64,
        container_height: f64,
        slide_width: f64,
        slide_height: f64,
        settings: Settings,
    },
    /// Emitted before a slide change is committed. `current_slide` is `None`
    /// for the initial slide on mount.
    BeforeSlide {
        current_slide: Option<f64>,
        slide_to: f64,
    },
    /// Emitted synchronously once a slide change is committed, before the transition ends.
    Slide {
        current_slide: f64,
        slide_from: Option<f64>,
    },
    /// The render layer reported the end of the track transition.
    AfterSlide { current_slide: f64 },
    /// One transition after mount.
    Loaded,
}

/// Pending events, in emission order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<CarouselEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn take(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.events)
    }
}
