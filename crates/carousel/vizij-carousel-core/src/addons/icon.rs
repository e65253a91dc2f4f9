//! Arrow icons used by the navigation buttons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;
use crate::render::RenderNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconName {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl IconName {
    pub const ALL: [IconName; 4] = [
        IconName::ArrowUp,
        IconName::ArrowDown,
        IconName::ArrowLeft,
        IconName::ArrowRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IconName::ArrowUp => "arrowUp",
            IconName::ArrowDown => "arrowDown",
            IconName::ArrowLeft => "arrowLeft",
            IconName::ArrowRight => "arrowRight",
        }
    }

    /// Human-readable title: the camelCase name split into capitalized words.
    pub fn title(self) -> String {
        let mut out = String::new();
        for (i, ch) in self.as_str().chars().enumerate() {
            if i == 0 {
                out.extend(ch.to_uppercase());
            } else if ch.is_uppercase() {
                out.push(' ');
                out.push(ch);
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Arrow pointing towards the previous or next slide.
    pub fn for_direction(vertical: bool, rtl: bool, prev: bool) -> Self {
        match (vertical, rtl, prev) {
            (true, _, true) => IconName::ArrowUp,
            (true, _, false) => IconName::ArrowDown,
            (false, true, true) | (false, false, false) => IconName::ArrowRight,
            (false, true, false) | (false, false, true) => IconName::ArrowLeft,
        }
    }

    /// `svg.icon.icon-<name>` with a `title` child. Path data is left to the host.
    pub fn render(self) -> RenderNode {
        RenderNode::new("svg")
            .class("icon")
            .class(format!("icon-{}", self.as_str()))
            .attr("viewBox", "0 0 24 24")
            .attr("width", "24px")
            .attr("height", "24px")
            .child(RenderNode::new("title").text(self.title()))
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| CarouselError::UnknownIcon { name: s.to_owned() })
    }
}
