//! Minimal render tree populated by the core and the addons.
//!
//! Hosts diff or map these nodes onto their own element tree; the core only
//! decides tags, classes, inline style and attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn class_if(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.class(name)
        } else {
            self
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        let style = style.into();
        if !style.is_empty() {
            self.style = Some(style);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    #[inline]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Depth-first search for the first node carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&RenderNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// All nodes carrying `class`, depth first.
    pub fn find_all_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a RenderNode>) {
        if self.has_class(class) {
            out.push(self);
        }
        for c in &self.children {
            c.find_all_by_class(class, out);
        }
    }
}
