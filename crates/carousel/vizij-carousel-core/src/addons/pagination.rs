//! Pagination: one indicator per navigable index, or a `current / total` fraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;
use crate::handle::CarouselHandle;
use crate::render::RenderNode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    #[default]
    Indicator,
    Fraction,
}

impl PaginationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PaginationMode::Indicator => "indicator",
            PaginationMode::Fraction => "fraction",
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationMode {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indicator" => Ok(PaginationMode::Indicator),
            "fraction" => Ok(PaginationMode::Fraction),
            other => Err(CarouselError::UnknownPaginationMode {
                name: other.to_owned(),
            }),
        }
    }
}

/// Snapshot of what the pagination shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub mode: PaginationMode,
    /// Normalized current index.
    pub current: f64,
    pub total: usize,
    /// Indices that get an indicator; empty in fraction mode.
    pub indices: Vec<i64>,
    pub vertical: bool,
}

#[derive(Clone, Debug)]
pub struct Pagination {
    carousel: CarouselHandle,
    mode: PaginationMode,
}

impl Pagination {
    pub fn new(carousel: CarouselHandle, mode: PaginationMode) -> Self {
        Self { carousel, mode }
    }

    /// Build from a mode name; unknown names are rejected.
    pub fn with_mode_name(carousel: CarouselHandle, mode: &str) -> Result<Self, CarouselError> {
        Ok(Self::new(carousel, mode.parse()?))
    }

    #[inline]
    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// Indices inside `[trimStart, slidesCount - trimEnd]`.
    pub fn navigable_indices(&self) -> Vec<i64> {
        let c = self.carousel.borrow();
        let count = c.slides_count() as f64;
        if count == 0.0 {
            return Vec::new();
        }
        let first = c.trim_start().ceil().max(0.0) as i64;
        let last = (count - c.trim_end()).floor().min(count - 1.0) as i64;
        (first..=last).collect()
    }

    pub fn view(&self) -> PaginationView {
        let indices = match self.mode {
            PaginationMode::Indicator => self.navigable_indices(),
            PaginationMode::Fraction => Vec::new(),
        };
        let c = self.carousel.borrow();
        PaginationView {
            mode: self.mode,
            current: c.normalized_current(),
            total: c.slides_count(),
            indices,
            vertical: c.config().vertical,
        }
    }

    /// Indicator click. Fraction mode is not clickable.
    pub fn select(&self, index: i64) -> bool {
        if self.mode != PaginationMode::Indicator {
            return false;
        }
        self.carousel.borrow_mut().slide_to(index as f64, true)
    }

    pub fn render(&self) -> RenderNode {
        let view = self.view();
        let root = RenderNode::new("div")
            .class("carousel-pagination")
            .class_if("is-vertical", view.vertical);
        match view.mode {
            PaginationMode::Fraction => root
                .child(RenderNode::new("span").text((view.current + 1.0).to_string()))
                .child(RenderNode::new("span").text("/"))
                .child(RenderNode::new("span").text(view.total.to_string())),
            PaginationMode::Indicator => {
                let items = view.indices.iter().map(|&i| {
                    let button = RenderNode::new("button")
                        .class("carousel-indicator")
                        .class_if("is-active", i as f64 == view.current)
                        .attr("type", "button")
                        .attr("data-index", i)
                        .child(
                            RenderNode::new("span")
                                .class("carousel-sr-only")
                                .text(format!("item {i}")),
                        );
                    RenderNode::new("li").child(button)
                });
                root.child(
                    RenderNode::new("ol")
                        .class("carousel-indicators")
                        .children(items),
                )
            }
        }
    }
}
