//! Progress bar.

use crate::handle::CarouselHandle;
use crate::render::RenderNode;

#[derive(Clone, Debug)]
pub struct Progress {
    carousel: CarouselHandle,
}

impl Progress {
    pub fn new(carousel: CarouselHandle) -> Self {
        Self { carousel }
    }

    /// Fill percentage across the navigable range. `0` when the range is empty.
    pub fn percent(&self) -> f64 {
        let c = self.carousel.borrow();
        let range = c.slides_count() as f64 - c.trim_start() - c.trim_end();
        if range <= 0.0 {
            return 0.0;
        }
        (c.normalized_current() - c.trim_start()) * 100.0 / range
    }

    pub fn render(&self) -> RenderNode {
        RenderNode::new("div").class("carousel-progress").child(
            RenderNode::new("div")
                .class("carousel-progress-inner")
                .style(format!("width: {}%", self.percent())),
        )
    }
}
