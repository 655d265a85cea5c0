//! Library-agnostic document model.
//!
//! The assembler describes the resume as plain values: styled runs grouped
//! into paragraphs, and tables whose cells carry explicit border and shading
//! descriptors. Nothing here knows about any markup format; a
//! [`DocumentWriter`] turns the values into a file.

pub mod writer;

use serde::Serialize;

use crate::color::Rgb;

pub use writer::DocumentWriter;

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Character formatting shared by one run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RunStyle {
    pub bold: bool,
    pub underline: bool,
    pub color: Option<Rgb>,
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<u16>,
}

/// A span of text with one style. A `\n` in the text is a line break.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
    /// External hyperlink target
    pub link: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.style.underline = true;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.style.font = Some(font.into());
        self
    }

    pub fn size(mut self, points: u16) -> Self {
        self.style.size = Some(points);
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

/// A sequence of runs sharing alignment and indentation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    /// Left indent in twentieths of a point
    pub indent: Option<u32>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(run: Run) -> Self {
        Self {
            runs: vec![run],
            ..Default::default()
        }
    }

    pub fn push(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn indented(mut self, twips: u32) -> Self {
        self.indent = Some(twips);
        self
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// One edge of a cell border (single line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Border {
    /// Width in eighths of a point
    pub size: u8,
    pub color: Rgb,
}

impl Border {
    pub const fn new(size: u8, color: Rgb) -> Self {
        Self { size, color }
    }
}

/// Per-edge border descriptor; `None` leaves the edge undrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Borders {
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
}

impl Borders {
    pub fn none() -> Self {
        Self::default()
    }

    /// Same border on every edge
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border),
            left: Some(border),
            bottom: Some(border),
            right: Some(border),
        }
    }

    pub fn with_left(mut self, border: Border) -> Self {
        self.left = Some(border);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.bottom.is_none() && self.right.is_none()
    }
}

/// Table cell: paragraphs plus its own border and background
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    pub paragraphs: Vec<Paragraph>,
    pub borders: Borders,
    pub shading: Option<Rgb>,
}

impl Cell {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            ..Default::default()
        }
    }

    pub fn bordered(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn shaded(mut self, fill: Rgb) -> Self {
        self.shading = Some(fill);
        self
    }

    /// Paragraph texts joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Grid of cells; every row has the same number of cells
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
    /// Column widths in twentieths of a point; `None` splits the page evenly
    pub column_widths: Option<Vec<u32>>,
}

impl Table {
    pub fn row(cells: Vec<Cell>) -> Self {
        Self {
            rows: vec![cells],
            column_widths: None,
        }
    }

    pub fn with_widths(mut self, widths: Vec<u32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Top-level body element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl Block {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}

/// Package-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
}
