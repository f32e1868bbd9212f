use std::path::PathBuf;

use crate::{
    geom::{Color, Emu, Rect},
    layout::LayoutId,
};

/// One output slide: the mapper's unit of work. Elements are write-once and
/// appended in draw order; nothing mutates them after placement.
#[derive(Clone, Debug)]
pub struct RenderedSlide {
    pub number: u32,
    pub layout: LayoutId,
    pub elements: Vec<PositionedElement>,
}

/// Concrete geometry plus rendered content.
#[derive(Clone, Debug)]
pub struct PositionedElement {
    pub frame: Rect,
    pub content: ElementContent,
}

#[derive(Clone, Debug)]
pub enum ElementContent {
    Text(TextBlock),
    Shape(ShapeSpec),
    Table(TableModel),
    Picture(PictureSpec),
}

#[derive(Clone, Debug)]
pub struct TextBlock {
    pub paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

#[derive(Clone, Debug)]
pub struct Paragraph {
    pub text: String,
    pub font_size_pt: f32,
    pub bold: bool,
    pub color: Color,
    pub align: Align,
    /// 0-based indent level.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    RoundedRect,
    Oval,
    RightArrow,
}

#[derive(Clone, Debug)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub fill: Option<Color>,
    pub line: Option<Outline>,
}

#[derive(Clone, Copy, Debug)]
pub struct Outline {
    pub color: Color,
    pub width_pt: f32,
}

#[derive(Clone, Debug)]
pub struct TableModel {
    pub col_widths: Vec<Emu>,
    pub row_height: Emu,
    /// Row-major cells; row 0 is the header.
    pub cells: Vec<Vec<TableCell>>,
}

#[derive(Clone, Debug)]
pub struct TableCell {
    pub text: String,
    pub font_size_pt: f32,
    pub bold: bool,
    pub color: Color,
    pub fill: Option<Color>,
}

#[derive(Clone, Debug)]
pub struct PictureSpec {
    pub path: PathBuf,
    pub border: Option<Outline>,
}

/// Style for a single-paragraph text placement.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub font_size_pt: f32,
    pub bold: bool,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub fn new(font_size_pt: f32, bold: bool, color: Color) -> Self {
        TextStyle {
            font_size_pt,
            bold,
            color,
            align: Align::Left,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Builds a single-paragraph text element in `frame`. Content documents use
/// a literal backslash-n for line breaks inside one box; that split happens
/// at the exporter, so the text stays verbatim here.
pub fn text_element(frame: Rect, text: impl Into<String>, style: TextStyle) -> PositionedElement {
    PositionedElement {
        frame,
        content: ElementContent::Text(TextBlock {
            paragraphs: vec![Paragraph {
                text: text.into(),
                font_size_pt: style.font_size_pt,
                bold: style.bold,
                color: style.color,
                align: style.align,
                level: 0,
            }],
            word_wrap: true,
        }),
    }
}

pub fn shape_element(
    frame: Rect,
    kind: ShapeKind,
    fill: Option<Color>,
    line: Option<Outline>,
) -> PositionedElement {
    PositionedElement {
        frame,
        content: ElementContent::Shape(ShapeSpec { kind, fill, line }),
    }
}
