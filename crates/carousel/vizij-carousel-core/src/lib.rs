//! Vizij Carousel Core (renderer-agnostic)
//!
//! Slide-index state machine, track geometry, responsive settings and group sync
//! for a carousel widget. Hosts inject a [`Clock`] and a [`LayoutProvider`], feed
//! input events, call [`Carousel::advance`] to fire due timers and read back
//! notifications plus a [`RenderNode`] tree. Pagination, navigation and progress
//! addons live in [`addons`].

pub mod addons;
pub mod bus;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod index;
pub mod input;
pub mod layout;
pub mod outputs;
pub mod render;
pub mod slides;
pub mod timer;

// Re-exports for consumers (adapters)
pub use addons::{
    IconName, Navigation, NavigationView, Pagination, PaginationMode, PaginationView, Progress,
};
pub use bus::{GroupBus, SubscriptionId};
pub use carousel::{Carousel, CarouselOptions, Env};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use config::{Settings, SettingsPatch, Tuning};
pub use error::CarouselError;
pub use geometry::SlideBounds;
pub use handle::CarouselHandle;
pub use index::normalize_slide_index;
pub use input::{Key, Listeners, Point, PointerDown, PointerKind, WheelInput};
pub use layout::{LayoutProvider, Rect, StaticLayout};
pub use outputs::{CarouselEvent, Outputs};
pub use render::RenderNode;
pub use slides::{ChildNode, SlideItem, SlideSpec, SlideState};
pub use timer::Timer;
