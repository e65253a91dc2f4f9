//! Prev/next buttons.

use serde::{Deserialize, Serialize};

use crate::addons::icon::IconName;
use crate::carousel::Carousel;
use crate::handle::CarouselHandle;
use crate::render::RenderNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub prev_icon: IconName,
    pub next_icon: IconName,
    pub vertical: bool,
    pub rtl: bool,
}

#[derive(Clone, Debug)]
pub struct Navigation {
    carousel: CarouselHandle,
}

fn prev_disabled(c: &Carousel) -> bool {
    !c.config().infinite_scroll && c.current_slide() == 0.0
}

fn next_disabled(c: &Carousel) -> bool {
    let config = c.config();
    if config.infinite_scroll {
        return false;
    }
    let count = c.slides_count() as f64;
    let last = if config.trim_white_space {
        count - config.items_to_show.min(count)
    } else {
        count - 1.0
    };
    c.current_slide() == last
}

impl Navigation {
    pub fn new(carousel: CarouselHandle) -> Self {
        Self { carousel }
    }

    pub fn view(&self) -> NavigationView {
        let c = self.carousel.borrow();
        let vertical = c.config().vertical;
        let rtl = c.config().is_rtl();
        NavigationView {
            prev_disabled: prev_disabled(&c),
            next_disabled: next_disabled(&c),
            prev_icon: IconName::for_direction(vertical, rtl, true),
            next_icon: IconName::for_direction(vertical, rtl, false),
            vertical,
            rtl,
        }
    }

    /// Prev button click: step back and restart auto-play.
    pub fn slide_prev(&self) -> bool {
        let mut c = self.carousel.borrow_mut();
        let moved = c.slide_prev();
        c.restart_timer();
        moved
    }

    /// Next button click: step forward and restart auto-play.
    pub fn slide_next(&self) -> bool {
        let mut c = self.carousel.borrow_mut();
        let moved = c.slide_next();
        c.restart_timer();
        moved
    }

    pub fn render(&self) -> RenderNode {
        let view = self.view();
        let button = |class: &str, disabled: bool, icon: IconName| {
            RenderNode::new("button")
                .class(class)
                .class_if("is-disabled", disabled)
                .attr("type", "button")
                .child(icon.render())
        };
        RenderNode::new("div")
            .class("carousel-navigation")
            .class_if("is-vertical", view.vertical)
            .class_if("is-rtl", view.rtl)
            .child(button("carousel-prev", view.prev_disabled, view.prev_icon))
            .child(button("carousel-next", view.next_disabled, view.next_icon))
    }
}
