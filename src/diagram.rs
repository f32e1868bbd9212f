//! Standalone system-architecture diagram: a small data-driven model of
//! zones, typed node glyphs, and connecting links, rendered to SVG. The PNG
//! rasterization of the same document lives in `export::png`.

use std::path::Path;

use anyhow::Context as _;
use kurbo::{Point, Size};
use svg::{
    Document,
    node::element::{
        Circle, Definitions, Ellipse, Group, Line, LinearGradient, Marker, Path as SvgPath,
        Polygon, Rectangle, Stop, Text,
    },
};

use crate::{
    error::{DeckError, DeckResult},
    geom::Color,
};

const GRADIENT_ID: &str = "grad1";
const ARROWHEAD_ID: &str = "arrowhead";
const FONT_FAMILY: &str = "Arial, sans-serif";

/// Full description of the diagram: canvas, styling, zones with their nodes,
/// and absolute-coordinate links. Loaded from JSON or taken from the builtin
/// default.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ArchitectureSpec {
    #[serde(default = "default_canvas")]
    pub canvas: Size,
    #[serde(default)]
    pub style: DiagramStyle,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub links: Vec<Link>,
}

fn default_canvas() -> Size {
    Size::new(1920.0, 1080.0)
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DiagramStyle {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub line: Color,
    pub background: Color,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        DiagramStyle {
            primary: Color::rgb(0x00, 0xD4, 0xAA),
            secondary: Color::rgb(0x1F, 0x4E, 0x79),
            text: Color::rgb(0x0A, 0x16, 0x28),
            line: Color::rgb(0xC8, 0xC8, 0xC8),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// A labeled, outlined region of the canvas holding a group of nodes.
/// Node positions are relative to the zone origin.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Zone {
    pub label: String,
    pub origin: Point,
    pub size: Size,
    /// Zone background as a CSS color string.
    #[serde(default = "default_zone_fill")]
    pub fill: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

fn default_zone_fill() -> String {
    "#f8f9fa".to_string()
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    pub kind: NodeKind,
    /// Zone-relative glyph origin.
    pub origin: Point,
}

/// The glyph vocabulary. Each kind has a fixed footprint; `origin` places its
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Phone outline with a screen and home button, label below.
    Mobile,
    /// Monitor with a stand, label below.
    Web,
    /// Solid service box with the label inside, sublabel under it.
    Service,
    /// Database cylinder, label inside.
    Database,
    /// Chat-bubble callout.
    Chat,
}

impl ArchitectureSpec {
    pub fn load(path: &Path) -> DeckResult<ArchitectureSpec> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read diagram spec '{}'", path.display()))
            .map_err(|e| DeckError::Configuration(format!("{e:#}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| DeckError::serde(format!("parse '{}': {e}", path.display())))
    }

    /// Builds the complete SVG document for this spec.
    pub fn to_svg(&self) -> Document {
        let style = &self.style;
        let mut doc = Document::new()
            .set("width", self.canvas.width)
            .set("height", self.canvas.height)
            .set("viewBox", (0.0, 0.0, self.canvas.width, self.canvas.height))
            .add(self.defs())
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", style.background.css()),
            );

        for zone in &self.zones {
            doc = doc.add(self.zone_group(zone));
        }

        let mut links = Group::new()
            .set("stroke", style.line.css())
            .set("stroke-width", 4)
            .set("fill", "none")
            .set("marker-end", format!("url(#{ARROWHEAD_ID})"));
        for link in &self.links {
            links = links.add(
                Line::new()
                    .set("x1", link.from.x)
                    .set("y1", link.from.y)
                    .set("x2", link.to.x)
                    .set("y2", link.to.y),
            );
        }
        doc.add(links)
    }

    fn defs(&self) -> Definitions {
        let style = &self.style;
        let gradient = LinearGradient::new()
            .set("id", GRADIENT_ID)
            .set("x1", "0%")
            .set("y1", "0%")
            .set("x2", "100%")
            .set("y2", "100%")
            .add(
                Stop::new()
                    .set("offset", "0%")
                    .set("stop-color", style.primary.css()),
            )
            .add(
                Stop::new()
                    .set("offset", "100%")
                    .set("stop-color", style.secondary.css()),
            );
        let arrowhead = Marker::new()
            .set("id", ARROWHEAD_ID)
            .set("markerWidth", 10)
            .set("markerHeight", 7)
            .set("refX", 0)
            .set("refY", 3.5)
            .set("orient", "auto")
            .add(
                Polygon::new()
                    .set("points", "0 0, 10 3.5, 0 7")
                    .set("fill", style.line.css()),
            );
        Definitions::new().add(gradient).add(arrowhead)
    }

    fn zone_group(&self, zone: &Zone) -> Group {
        let style = &self.style;
        let mut g = Group::new()
            .set(
                "transform",
                format!("translate({}, {})", zone.origin.x, zone.origin.y),
            )
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", zone.size.width)
                    .set("height", zone.size.height)
                    .set("rx", 20)
                    .set("fill", zone.fill.as_str())
                    .set("stroke", style.secondary.css())
                    .set("stroke-width", 2),
            )
            .add(
                caption(zone.size.width / 2.0, 50.0, 24, style.text)
                    .set("font-weight", "bold")
                    .add(svg::node::Text::new(zone.label.clone())),
            );
        for node in &zone.nodes {
            g = g.add(self.node_group(node));
        }
        g
    }

    fn node_group(&self, node: &Node) -> Group {
        let style = &self.style;
        let g = Group::new().set(
            "transform",
            format!("translate({}, {})", node.origin.x, node.origin.y),
        );
        match node.kind {
            NodeKind::Mobile => g
                .add(
                    Rectangle::new()
                        .set("width", 100)
                        .set("height", 180)
                        .set("rx", 10)
                        .set("fill", format!("url(#{GRADIENT_ID})")),
                )
                .add(
                    Rectangle::new()
                        .set("x", 5)
                        .set("y", 5)
                        .set("width", 90)
                        .set("height", 150)
                        .set("rx", 5)
                        .set("fill", "white"),
                )
                .add(
                    Circle::new()
                        .set("cx", 50)
                        .set("cy", 165)
                        .set("r", 8)
                        .set("fill", "white"),
                )
                .add(caption(50.0, 195.0, 16, style.text).add(svg::node::Text::new(node.label.clone()))),
            NodeKind::Web => g
                .add(
                    Rectangle::new()
                        .set("width", 180)
                        .set("height", 110)
                        .set("rx", 5)
                        .set("fill", format!("url(#{GRADIENT_ID})")),
                )
                .add(
                    Rectangle::new()
                        .set("x", 5)
                        .set("y", 5)
                        .set("width", 170)
                        .set("height", 85)
                        .set("fill", "white"),
                )
                .add(
                    Rectangle::new()
                        .set("x", 70)
                        .set("y", 110)
                        .set("width", 40)
                        .set("height", 20)
                        .set("fill", style.secondary.css()),
                )
                .add(
                    Rectangle::new()
                        .set("x", 50)
                        .set("y", 130)
                        .set("width", 80)
                        .set("height", 10)
                        .set("rx", 2)
                        .set("fill", style.secondary.css()),
                )
                .add(caption(90.0, 160.0, 16, style.text).add(svg::node::Text::new(node.label.clone()))),
            NodeKind::Service => {
                let mut g = g
                    .add(
                        Rectangle::new()
                            .set("width", 300)
                            .set("height", 200)
                            .set("rx", 10)
                            .set("fill", style.secondary.css()),
                    )
                    .add(
                        caption(150.0, 110.0, 32, Color::rgb(0xFF, 0xFF, 0xFF))
                            .set("font-weight", "bold")
                            .add(svg::node::Text::new(node.label.clone())),
                    );
                if let Some(sub) = &node.sublabel {
                    g = g.add(
                        caption(150.0, 150.0, 20, style.primary)
                            .add(svg::node::Text::new(sub.clone())),
                    );
                }
                g
            }
            NodeKind::Database => g
                .add(
                    Ellipse::new()
                        .set("cx", 50)
                        .set("cy", 20)
                        .set("rx", 50)
                        .set("ry", 20)
                        .set("fill", "#d3d3d3")
                        .set("stroke", style.secondary.css()),
                )
                .add(
                    SvgPath::new()
                        .set("d", "M0,20 v100 a50,20 0 0,0 100,0 v-100")
                        .set("fill", "#d3d3d3")
                        .set("stroke", style.secondary.css()),
                )
                .add(
                    Ellipse::new()
                        .set("cx", 50)
                        .set("cy", 120)
                        .set("rx", 50)
                        .set("ry", 20)
                        .set("fill", "#d3d3d3")
                        .set("stroke", style.secondary.css()),
                )
                .add(
                    caption(50.0, 70.0, 20, style.text)
                        .set("font-weight", "bold")
                        .add(svg::node::Text::new(node.label.clone())),
                ),
            NodeKind::Chat => g
                .add(
                    SvgPath::new()
                        .set(
                            "d",
                            "M20,0 h100 a20,20 0 0,1 20,20 v60 a20,20 0 0,1 -20,20 h-60 \
                             l-20,20 l0,-20 h-20 a20,20 0 0,1 -20,-20 v-60 a20,20 0 0,1 20,-20 z",
                        )
                        .set("fill", "#f7e600"),
                )
                .add(
                    caption(70.0, 60.0, 18, Color::rgb(0x3A, 0x1D, 0x1D))
                        .set("font-weight", "bold")
                        .add(svg::node::Text::new(node.label.clone())),
                ),
        }
    }
}

fn caption(x: f64, y: f64, size: u32, color: Color) -> Text {
    Text::new("")
        .set("x", x)
        .set("y", y)
        .set("font-family", FONT_FAMILY)
        .set("font-size", size)
        .set("text-anchor", "middle")
        .set("fill", color.css())
}

/// A gray connecting arrow between two absolute canvas points.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub from: Point,
    pub to: Point,
}

impl Default for ArchitectureSpec {
    /// The shipped system diagram: clients on the left, the backend service
    /// in the middle, data stores and external channels on the right.
    fn default() -> Self {
        ArchitectureSpec {
            canvas: default_canvas(),
            style: DiagramStyle::default(),
            zones: vec![
                Zone {
                    label: "CLIENTS".to_string(),
                    origin: Point::new(200.0, 300.0),
                    size: Size::new(300.0, 480.0),
                    fill: "#f8f9fa".to_string(),
                    nodes: vec![
                        Node {
                            label: "Mobile App".to_string(),
                            sublabel: None,
                            kind: NodeKind::Mobile,
                            origin: Point::new(100.0, 100.0),
                        },
                        Node {
                            label: "Web Dashboard".to_string(),
                            sublabel: None,
                            kind: NodeKind::Web,
                            origin: Point::new(60.0, 320.0),
                        },
                    ],
                },
                Zone {
                    label: "BACKEND SERVER".to_string(),
                    origin: Point::new(700.0, 300.0),
                    size: Size::new(500.0, 480.0),
                    fill: "#f0f4f8".to_string(),
                    nodes: vec![Node {
                        label: "Spring Boot".to_string(),
                        sublabel: Some("API Service".to_string()),
                        kind: NodeKind::Service,
                        origin: Point::new(100.0, 150.0),
                    }],
                },
                Zone {
                    label: "DATA & EXT".to_string(),
                    origin: Point::new(1400.0, 300.0),
                    size: Size::new(300.0, 480.0),
                    fill: "#f8f9fa".to_string(),
                    nodes: vec![
                        Node {
                            label: "Tibero".to_string(),
                            sublabel: None,
                            kind: NodeKind::Database,
                            origin: Point::new(100.0, 100.0),
                        },
                        Node {
                            label: "Kakao".to_string(),
                            sublabel: None,
                            kind: NodeKind::Chat,
                            origin: Point::new(80.0, 300.0),
                        },
                    ],
                },
            ],
            links: vec![
                Link {
                    from: Point::new(500.0, 500.0),
                    to: Point::new(700.0, 500.0),
                },
                Link {
                    from: Point::new(1200.0, 450.0),
                    to: Point::new(1400.0, 450.0),
                },
                Link {
                    from: Point::new(1200.0, 650.0),
                    to: Point::new(1400.0, 650.0),
                },
            ],
        }
    }
}
