//! Document writer trait - the seam between the assembler and a file format.

use std::path::Path;

use crate::error::Result;

use super::{Block, DocumentProperties, Paragraph, Table};

/// Accepts body elements in order and serializes them on `save`.
///
/// A fresh writer is an empty document; implementations decide the format.
pub trait DocumentWriter {
    /// Set package metadata (title, author)
    fn set_properties(&mut self, properties: &DocumentProperties) {
        let _ = properties;
    }

    /// Append a paragraph to the body
    fn append_paragraph(&mut self, paragraph: &Paragraph) -> Result<()>;

    /// Append a table to the body
    fn append_table(&mut self, table: &Table) -> Result<()>;

    /// Append any body element
    fn append_block(&mut self, block: &Block) -> Result<()> {
        match block {
            Block::Paragraph(p) => self.append_paragraph(p),
            Block::Table(t) => self.append_table(t),
        }
    }

    /// Serialize everything appended so far to `path`
    fn save(&mut self, path: &Path) -> Result<()>;
}
