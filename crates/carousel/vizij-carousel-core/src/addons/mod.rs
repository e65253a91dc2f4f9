//! Read-only consumers of carousel state: pagination, navigation, progress and
//! the arrow icons they render.
//!
//! Each addon holds a [`CarouselHandle`](crate::CarouselHandle), computes a small
//! serializable view from the current state, and forwards clicks back as commands.

pub mod icon;
pub mod navigation;
pub mod pagination;
pub mod progress;

pub use icon::IconName;
pub use navigation::{Navigation, NavigationView};
pub use pagination::{Pagination, PaginationMode, PaginationView};
pub use progress::Progress;
