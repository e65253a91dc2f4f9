//! Child flattening, infinite-scroll clones and per-slide classification.

use serde::{Deserialize, Serialize};

use crate::geometry::SlideBounds;

/// Host description of one navigable item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideSpec {
    /// Host key used to reconcile rendered nodes; defaults to the slide index.
    pub key: Option<String>,
    /// Opaque content forwarded into the render tree as text.
    pub content: Option<String>,
    /// Auto-play delay override (ms) while this slide is current.
    pub duration: Option<u32>,
}

/// A child as the host hands it over: a slide, a single-level group of slides
/// (a fragment), or something that is not a slide and gets skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChildNode {
    Slide(SlideSpec),
    Group { children: Vec<ChildNode> },
    Other,
}

/// A slide placed on the track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideItem {
    /// 0-based position. Clones carry `[-count, 0)` or `[count, 2 * count)`.
    pub index: i64,
    pub is_clone: bool,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Flatten direct slides and slides nested exactly one group deep into a
/// sequentially indexed list. Deeper nesting and non-slide children are skipped.
pub fn flatten_children(children: &[ChildNode]) -> Vec<SlideItem> {
    let mut out = Vec::new();
    collect(children, 0, &mut out);
    out
}

fn collect(children: &[ChildNode], depth: usize, out: &mut Vec<SlideItem>) {
    for child in children {
        match child {
            ChildNode::Slide(spec) => {
                let index = out.len() as i64;
                out.push(SlideItem {
                    index,
                    is_clone: false,
                    key: spec.key.clone().unwrap_or_else(|| index.to_string()),
                    content: spec.content.clone(),
                    duration: spec.duration,
                });
            }
            ChildNode::Group { children } if depth == 0 => collect(children, depth + 1, out),
            ChildNode::Group { .. } | ChildNode::Other => {}
        }
    }
}

/// Surround `slides` with one clone of the whole sequence on each side.
pub fn with_buffer_clones(slides: &[SlideItem]) -> Vec<SlideItem> {
    let count = slides.len() as i64;
    let mut before = Vec::with_capacity(slides.len());
    let mut after = Vec::with_capacity(slides.len());
    for (i, slide) in slides.iter().enumerate() {
        let i = i as i64;
        before.push(SlideItem {
            index: i - count,
            is_clone: true,
            key: format!("before_{i}"),
            ..slide.clone()
        });
        after.push(SlideItem {
            index: i + count,
            is_clone: true,
            key: format!("after_{}", i + count),
            ..slide.clone()
        });
    }
    before.extend(slides.iter().cloned());
    before.extend(after);
    before
}

/// Derived classification of one slide relative to the current window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideState {
    pub is_active: bool,
    pub is_prev: bool,
    pub is_next: bool,
    pub is_current: bool,
}

pub fn classify(index: i64, bounds: SlideBounds, items_to_slide: u32, current: f64) -> SlideState {
    let i = index as f64;
    let step = f64::from(items_to_slide);
    SlideState {
        is_active: i >= bounds.lower && i <= bounds.upper,
        is_prev: i < bounds.lower && i >= bounds.lower - step,
        is_next: i > bounds.upper && i <= bounds.upper + step,
        is_current: i == current,
    }
}
