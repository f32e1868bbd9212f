use std::path::Path;

use anyhow::Context as _;

use crate::error::{DeckError, DeckResult};

/// On-disk shape of a content document: everything sits under a single
/// `presentation` key.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ContentFile {
    pub presentation: ContentDocument,
}

/// The content document. Parsed once per run and never mutated afterwards.
/// Unknown fields anywhere in the tree are ignored on purpose so that newer
/// documents keep rendering on older builds.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

/// One entry in the content document describing one output slide.
/// `layout_id` stays raw here; ids outside the known range are resolved by
/// the mapper under an explicit policy instead of failing the parse.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SlideSpec {
    #[serde(default)]
    pub slide_number: u32,
    #[serde(default = "default_layout_id")]
    pub layout_id: u32,
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default)]
    pub custom_elements: Vec<ElementSpec>,
}

fn default_layout_id() -> u32 {
    4
}

/// Role-keyed text content for the template slots of a slide.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Placeholders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub toc_items: Vec<TocItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<BodyLine>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct TocItem {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pages: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BodyLine {
    #[serde(default)]
    pub text: String,
    /// 1-based indent level.
    #[serde(default = "default_level")]
    pub level: u32,
}

fn default_level() -> u32 {
    1
}

/// Raw typed content block: a tag plus an untyped payload. `parse_element`
/// in `element.rs` turns this into the closed `Element` enum; keeping the
/// raw form in the model is what lets unknown tags ride through untouched.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ElementSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

impl ContentDocument {
    /// Loads and parses a content document. A missing or unparseable file is
    /// fatal; nothing has been produced at this point.
    pub fn load(path: &Path) -> DeckResult<ContentDocument> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read content document '{}'", path.display()))
            .map_err(|e| DeckError::Configuration(format!("{e:#}")))?;
        let file: ContentFile = serde_json::from_str(&raw)
            .map_err(|e| DeckError::serde(format!("parse '{}': {e}", path.display())))?;
        Ok(file.presentation)
    }
}
