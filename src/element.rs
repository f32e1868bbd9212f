use crate::{
    error::{DeckError, DeckResult},
    model::ElementSpec,
};

/// The closed set of typed content blocks. Dispatch over this enum is an
/// exhaustive `match`, so adding a variant without a rendering rule fails to
/// compile.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Table(TableData),
    IconBoxGrid(IconGridData),
    PainPointCards(PainPointData),
    ProcessFlow(ProcessFlowData),
    ComparisonChart(ComparisonData),
    Timeline(TimelineData),
    ScreenGallery(GalleryData),
    ArchitectureDiagram(ArchitectureRef),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconGridData {
    #[serde(default)]
    pub items: Vec<IconBoxItem>,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconBoxItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PainPointData {
    #[serde(default)]
    pub items: Vec<PainPointItem>,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PainPointItem {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub pain: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProcessFlowData {
    #[serde(default)]
    pub steps: Vec<FlowStep>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowStep {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub actor: String,
    /// Palette tone for the node ("navy", "green", "orange"); navy when
    /// absent or unrecognized.
    #[serde(default)]
    pub tone: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonData {
    #[serde(default)]
    pub items: Vec<ComparisonItem>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub as_is: f64,
    #[serde(default)]
    pub to_be: f64,
    #[serde(default)]
    pub unit: String,
    /// Human-readable delta like "+40%" or "-2h". The sign used for coloring
    /// comes from parsing this numerically, not from the leading character.
    #[serde(default)]
    pub change: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineData {
    #[serde(default)]
    pub phases: Vec<PhaseSpec>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseSpec {
    #[serde(default)]
    pub name: String,
    /// 1-based first week column the phase occupies.
    #[serde(default = "default_start_week")]
    pub start_week: u32,
    #[serde(default = "default_span_weeks")]
    pub span_weeks: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryData {
    #[serde(default)]
    pub screens: Vec<ScreenSpec>,
    /// Layout hint from the document; anything containing "wide" selects the
    /// shorter, wider target geometry.
    #[serde(default)]
    pub layout: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenSpec {
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArchitectureRef {
    /// Pre-rendered diagram image to embed; a placeholder is drawn when the
    /// file is missing.
    #[serde(default)]
    pub image_path: String,
}

fn default_columns() -> usize {
    4
}

fn default_start_week() -> u32 {
    1
}

fn default_span_weeks() -> u32 {
    1
}

/// Maps a raw `{type, data}` block to a typed element.
///
/// `Ok(None)` means the tag is unknown: the caller skips the block, which is
/// the deliberate forward-compatibility policy for newer content documents.
/// A known tag with a malformed payload is an element-level error.
pub fn parse_element(spec: &ElementSpec) -> DeckResult<Option<Element>> {
    let kind = spec.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(DeckError::element("element type must be non-empty"));
    }

    fn payload<T: serde::de::DeserializeOwned>(
        kind: &str,
        data: &serde_json::Value,
    ) -> DeckResult<T> {
        serde_json::from_value(data.clone())
            .map_err(|e| DeckError::element(format!("malformed '{kind}' payload: {e}")))
    }

    let element = match kind.as_str() {
        "table" => Element::Table(payload(&kind, &spec.data)?),
        "icon_box_grid" => Element::IconBoxGrid(payload(&kind, &spec.data)?),
        "pain_point_cards" => Element::PainPointCards(payload(&kind, &spec.data)?),
        "process_flow" => Element::ProcessFlow(payload(&kind, &spec.data)?),
        "comparison_chart" => Element::ComparisonChart(payload(&kind, &spec.data)?),
        "timeline" => Element::Timeline(payload(&kind, &spec.data)?),
        "screen_gallery" => Element::ScreenGallery(payload(&kind, &spec.data)?),
        "architecture_diagram" => Element::ArchitectureDiagram(payload(&kind, &spec.data)?),
        _ => return Ok(None),
    };
    Ok(Some(element))
}

/// Numeric delta parsed out of a comparison `change` string, e.g. "+40%" ->
/// 40.0, "-2h" -> -2.0. Non-numeric strings parse to 0 (treated as
/// non-positive). The sign decides coloring, not the leading character.
pub fn parse_change_delta(change: &str) -> f64 {
    let trimmed = change.trim();
    let numeric: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '+' || *c == '-' || *c == '.')
        .collect();
    numeric.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementSpec;

    fn spec(kind: &str, data: serde_json::Value) -> ElementSpec {
        ElementSpec {
            kind: kind.to_string(),
            data,
        }
    }

    #[test]
    fn parses_known_tags() {
        let el = parse_element(&spec(
            "table",
            serde_json::json!({"headers": ["A", "B"], "rows": [["1", "2"]]}),
        ))
        .unwrap()
        .unwrap();
        match el {
            Element::Table(t) => {
                assert_eq!(t.headers.len(), 2);
                assert_eq!(t.rows.len(), 1);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_is_skipped_not_fatal() {
        let parsed = parse_element(&spec("hologram", serde_json::json!({"x": 1}))).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn empty_tag_is_an_element_error() {
        assert!(parse_element(&spec("  ", serde_json::Value::Null)).is_err());
    }

    #[test]
    fn malformed_payload_for_known_tag_is_an_element_error() {
        let res = parse_element(&spec("timeline", serde_json::json!({"phases": "nope"})));
        assert!(res.is_err());
    }

    #[test]
    fn defaults_fill_missing_payload_fields() {
        let el = parse_element(&spec("icon_box_grid", serde_json::json!({"items": []})))
            .unwrap()
            .unwrap();
        match el {
            Element::IconBoxGrid(g) => assert_eq!(g.columns, 4),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn change_delta_uses_numeric_sign() {
        assert_eq!(parse_change_delta("+40%"), 40.0);
        assert_eq!(parse_change_delta("-2.5h"), -2.5);
        assert_eq!(parse_change_delta("steady"), 0.0);
        assert_eq!(parse_change_delta("  +0.1"), 0.1);
    }
}
