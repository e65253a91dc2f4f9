//! Layout measurement seam: container size, media queries and text direction.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Implemented by the host to answer the questions a browser would.
pub trait LayoutProvider {
    /// Bounding box of the carousel root element.
    fn measure(&self) -> Rect;
    /// Whether `(min-width: <min_width>px)` currently matches.
    fn matches_min_width(&self, min_width: u32) -> bool;
    /// Computed text direction of the root element.
    fn is_rtl(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct LayoutState {
    container: Rect,
    viewport_width: f64,
    rtl: bool,
}

/// Fixed layout for tests and headless hosts. Clones share state, so a test can
/// keep one clone and resize the "viewport" after handing the other to a carousel.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    state: Rc<RefCell<LayoutState>>,
}

impl StaticLayout {
    /// Container of the given size inside a viewport of the same width.
    pub fn new(container: Rect) -> Self {
        Self {
            state: Rc::new(RefCell::new(LayoutState {
                container,
                viewport_width: container.width,
                rtl: false,
            })),
        }
    }

    pub fn with_viewport(self, width: f64) -> Self {
        self.set_viewport_width(width);
        self
    }

    pub fn with_rtl(self, rtl: bool) -> Self {
        self.state.borrow_mut().rtl = rtl;
        self
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.state.borrow_mut().viewport_width = width;
    }

    pub fn set_container(&self, container: Rect) {
        self.state.borrow_mut().container = container;
    }
}

impl LayoutProvider for StaticLayout {
    fn measure(&self) -> Rect {
        self.state.borrow().container
    }

    fn matches_min_width(&self, min_width: u32) -> bool {
        self.state.borrow().viewport_width >= f64::from(min_width)
    }

    fn is_rtl(&self) -> bool {
        self.state.borrow().rtl
    }
}
