use std::{collections::BTreeMap, path::Path};

use anyhow::Context as _;

use crate::{
    error::{DeckError, DeckResult},
    geom::{Emu, Rect},
};

/// The fixed layout vocabulary of the content schema.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum LayoutId {
    /// Cover slide: big title plus subtitle.
    Cover,
    /// Table of contents: number / title / pages columns.
    Toc,
    /// Content slide with action title and body list.
    Body,
    /// Content slide with action title and a free content region for custom
    /// elements.
    Free,
    /// Wide content slide: no action title, body list only.
    Wide,
}

impl TryFrom<u8> for LayoutId {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(LayoutId::Cover),
            2 => Ok(LayoutId::Toc),
            3 => Ok(LayoutId::Body),
            4 => Ok(LayoutId::Free),
            5 => Ok(LayoutId::Wide),
            other => Err(format!("unknown layout id {other}")),
        }
    }
}

impl From<LayoutId> for u8 {
    fn from(id: LayoutId) -> u8 {
        match id {
            LayoutId::Cover => 1,
            LayoutId::Toc => 2,
            LayoutId::Body => 3,
            LayoutId::Free => 4,
            LayoutId::Wide => 5,
        }
    }
}

/// Semantic roles a template slot can play. Content is keyed by role, never
/// by slot position, so templates can rearrange freely.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    Title,
    Subtitle,
    MainTitle,
    ActionTitle,
    Body,
    TocNumber,
    TocTitle,
    TocPages,
    /// Region that custom elements are placed into.
    Content,
}

/// A named set of positioned slots that a slide's content is mapped into.
/// Owned by the template file; read-only to the mapper.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayoutTemplate {
    pub id: LayoutId,
    pub name: String,
    pub slots: BTreeMap<SlotRole, Rect>,
}

impl LayoutTemplate {
    pub fn slot(&self, role: SlotRole) -> Option<Rect> {
        self.slots.get(&role).copied()
    }
}

/// What `resolve` does with a layout id that has no registered template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLayoutPolicy {
    /// Abort the run with a configuration error.
    Fail,
    /// Substitute the named layout; the default falls back to `Free`.
    Fallback(LayoutId),
}

impl Default for UnknownLayoutPolicy {
    fn default() -> Self {
        UnknownLayoutPolicy::Fallback(LayoutId::Free)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TemplateSet {
    pub templates: Vec<LayoutTemplate>,
    #[serde(default)]
    pub on_unknown_layout: UnknownLayoutPolicy,
}

impl TemplateSet {
    /// Loads a template set from JSON. Failure here is fatal: no slide has
    /// been produced yet.
    pub fn load(path: &Path) -> DeckResult<TemplateSet> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read template set '{}'", path.display()))
            .map_err(|e| DeckError::Configuration(format!("{e:#}")))?;
        let set: TemplateSet = serde_json::from_str(&raw)
            .map_err(|e| DeckError::serde(format!("parse '{}': {e}", path.display())))?;
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.templates.is_empty() {
            return Err(DeckError::configuration("template set has no layouts"));
        }
        for t in &self.templates {
            if t.slots.is_empty() {
                return Err(DeckError::configuration(format!(
                    "layout '{}' has no slots",
                    t.name
                )));
            }
            for (role, rect) in &t.slots {
                if rect.w.0 <= 0 || rect.h.0 <= 0 {
                    return Err(DeckError::configuration(format!(
                        "layout '{}' slot {role:?} has a non-positive extent",
                        t.name
                    )));
                }
            }
        }
        if let UnknownLayoutPolicy::Fallback(id) = self.on_unknown_layout
            && self.get(id).is_none()
        {
            return Err(DeckError::configuration(format!(
                "fallback layout {id:?} is not in the template set"
            )));
        }
        Ok(())
    }

    pub fn get(&self, id: LayoutId) -> Option<&LayoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Deterministic lookup of the template for a raw layout id. Unknown or
    /// unregistered ids go through `on_unknown_layout`.
    pub fn resolve(&self, raw_id: u32) -> DeckResult<&LayoutTemplate> {
        let known = u8::try_from(raw_id)
            .ok()
            .and_then(|v| LayoutId::try_from(v).ok())
            .and_then(|id| self.get(id));
        if let Some(template) = known {
            return Ok(template);
        }
        match self.on_unknown_layout {
            UnknownLayoutPolicy::Fail => Err(DeckError::configuration(format!(
                "no template registered for layout id {raw_id}"
            ))),
            UnknownLayoutPolicy::Fallback(id) => self.get(id).ok_or_else(|| {
                DeckError::configuration(format!("fallback layout {id:?} missing from set"))
            }),
        }
    }

    /// The built-in template set on a 12,192,000 x 6,858,000 EMU slide.
    pub fn builtin() -> TemplateSet {
        fn rect(x: i64, y: i64, w: i64, h: i64) -> Rect {
            Rect::new(Emu(x), Emu(y), Emu(w), Emu(h))
        }

        let cover = LayoutTemplate {
            id: LayoutId::Cover,
            name: "cover".to_string(),
            slots: BTreeMap::from([
                (SlotRole::Title, rect(914_400, 2_400_000, 10_363_200, 1_200_000)),
                (
                    SlotRole::Subtitle,
                    rect(914_400, 3_700_000, 10_363_200, 600_000),
                ),
            ]),
        };

        let toc = LayoutTemplate {
            id: LayoutId::Toc,
            name: "toc".to_string(),
            slots: BTreeMap::from([
                (SlotRole::MainTitle, rect(685_800, 457_200, 10_820_400, 800_000)),
                (
                    SlotRole::TocNumber,
                    rect(1_200_000, 1_600_000, 900_000, 4_300_000),
                ),
                (
                    SlotRole::TocTitle,
                    rect(2_300_000, 1_600_000, 6_000_000, 4_300_000),
                ),
                (
                    SlotRole::TocPages,
                    rect(8_500_000, 1_600_000, 1_200_000, 4_300_000),
                ),
            ]),
        };

        // Shared content-slide geometry.
        let main_title = (SlotRole::MainTitle, rect(270_064, 274_638, 9_360_550, 600_000));
        let action_title = (
            SlotRole::ActionTitle,
            rect(270_064, 900_000, 9_360_550, 450_000),
        );
        let body_slot = (SlotRole::Body, rect(270_064, 1_431_130, 9_360_550, 4_800_000));
        let content_region = (
            SlotRole::Content,
            rect(270_064, 1_431_130, 9_360_550, 5_000_000),
        );

        let body = LayoutTemplate {
            id: LayoutId::Body,
            name: "body".to_string(),
            slots: BTreeMap::from([main_title, action_title, body_slot, content_region]),
        };
        let free = LayoutTemplate {
            id: LayoutId::Free,
            name: "free".to_string(),
            slots: BTreeMap::from([main_title, action_title, content_region]),
        };
        let wide = LayoutTemplate {
            id: LayoutId::Wide,
            name: "wide".to_string(),
            slots: BTreeMap::from([main_title, body_slot, content_region]),
        };

        TemplateSet {
            templates: vec![cover, toc, body, free, wide],
            on_unknown_layout: UnknownLayoutPolicy::default(),
        }
    }
}
