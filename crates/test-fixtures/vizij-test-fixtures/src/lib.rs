//! Shared JSON fixtures for carousel tests.
//!
//! `fixtures/manifest.json` maps fixture names to files under `fixtures/`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    settings: HashMap<String, FixtureEntry>,
    children: HashMap<String, FixtureEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixtureEntry {
    Path(String),
    Detailed { path: String },
}

impl FixtureEntry {
    fn as_path(&self) -> &str {
        match self {
            FixtureEntry::Path(path) => path,
            FixtureEntry::Detailed { path } => path,
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(
    map: &'a HashMap<String, FixtureEntry>,
    kind: &str,
    name: &str,
) -> Result<&'a str> {
    map.get(name)
        .map(FixtureEntry::as_path)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Carousel settings objects (camelCase, as a host would pass them).
pub mod settings {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.settings.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.settings, "settings", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        load_json(lookup(&MANIFEST.settings, "settings", name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(lookup(&MANIFEST.settings, "settings", name)?))
    }
}

/// Child lists (`[{ "kind": "slide", ... }, { "kind": "group", ... }]`).
pub mod children {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.children.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_to_string(lookup(&MANIFEST.children, "children", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        load_json(lookup(&MANIFEST.children, "children", name)?)
    }
}
