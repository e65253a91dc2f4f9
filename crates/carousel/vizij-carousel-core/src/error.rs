//! Error types for the carousel core.
//!
//! Every variant is a construction-time contract violation. Runtime paths
//! (sliding, dragging, resizing) clamp or fall back to defaults instead of failing.

/// Errors surfaced while building or reconfiguring a carousel.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CarouselError {
    /// `itemsToShow` must be a positive, finite number.
    #[error("itemsToShow must be a positive finite number, got {value}")]
    InvalidItemsToShow { value: f64 },

    /// `itemsToSlide` must move at least one item.
    #[error("itemsToSlide must be at least 1")]
    InvalidItemsToSlide,

    /// `playSpeed` of zero would reschedule auto-play without ever yielding.
    #[error("playSpeed must be at least 1ms")]
    InvalidPlaySpeed,

    /// Input tuning values must be finite and non-negative.
    #[error("invalid tuning value for {field}: {value}")]
    InvalidTuning { field: &'static str, value: f64 },

    /// A breakpoint override produced an invalid effective configuration.
    #[error("breakpoint {min_width}px: {source}")]
    Breakpoint {
        min_width: u32,
        source: Box<CarouselError>,
    },

    /// Pagination mode name was not recognized.
    #[error("unknown pagination mode: {name}")]
    UnknownPaginationMode { name: String },

    /// Navigation icon name was not recognized.
    #[error("unknown icon: {name}")]
    UnknownIcon { name: String },

    /// Settings JSON could not be parsed.
    #[error("settings parse error: {reason}")]
    SettingsParse { reason: String },
}
