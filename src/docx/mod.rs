//! Minimal OOXML (.docx) package writer.
//!
//! Body elements are serialized as they are appended; `save` wraps them with
//! the fixed package parts, zips the whole package in memory and writes it
//! with a single file write, so a failed run never leaves a partial file.

mod parts;
mod xml;

use std::io::{Cursor, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::document::{DocumentProperties, DocumentWriter, Paragraph, Table};
use crate::error::Result;

pub use parts::Relationships;
pub use xml::{escape, TEXT_WIDTH};

/// Part names inside the package, in write order
pub const PART_NAMES: &[&str] = &[
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/core.xml",
    "docProps/app.xml",
    "word/document.xml",
    "word/styles.xml",
    "word/_rels/document.xml.rels",
];

/// [`DocumentWriter`] producing a Word package
#[derive(Debug)]
pub struct DocxWriter {
    body: String,
    rels: Relationships,
    properties: DocumentProperties,
    created: DateTime<Utc>,
}

impl DocxWriter {
    /// Empty document stamped with the current time
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    /// Empty document with a fixed creation time
    pub fn created_at(created: DateTime<Utc>) -> Self {
        Self {
            body: String::new(),
            rels: Relationships::new(),
            properties: DocumentProperties::default(),
            created,
        }
    }

    /// Serialized `word/document.xml`
    pub fn document_xml(&self) -> String {
        parts::document(&self.body)
    }

    /// Build the complete zipped package
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let contents = [
            parts::content_types(),
            parts::package_rels(),
            parts::core_properties(&self.properties, self.created),
            parts::app_properties(),
            self.document_xml(),
            parts::styles(),
            self.rels.to_xml(),
        ];

        for (name, content) in PART_NAMES.iter().zip(contents.iter()) {
            zip.start_file(*name, options)?;
            zip.write_all(content.as_bytes())?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for DocxWriter {
    fn set_properties(&mut self, properties: &DocumentProperties) {
        self.properties = properties.clone();
    }

    fn append_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        xml::write_paragraph(&mut self.body, paragraph, &mut self.rels);
        Ok(())
    }

    fn append_table(&mut self, table: &Table) -> Result<()> {
        xml::write_table(&mut self.body, table, &mut self.rels);
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, &bytes)?;
        tracing::debug!(
            "Wrote {} bytes ({} hyperlinks) to {}",
            bytes.len(),
            self.rels.hyperlink_count(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Run;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_has_all_parts() {
        let writer = DocxWriter::new();
        let bytes = writer.to_bytes().unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        let mut expected = PART_NAMES.to_vec();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_appended_content_lands_in_document() {
        let mut writer = DocxWriter::new();
        writer
            .append_paragraph(&Paragraph::with_run(Run::new("Hello <world>")))
            .unwrap();
        let bytes = writer.to_bytes().unwrap();
        let doc = read_part(&bytes, "word/document.xml");
        assert!(doc.contains("Hello &lt;world&gt;"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out/nested/resume.docx");
        let mut writer = DocxWriter::new();
        writer.save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_properties_written() {
        let mut writer = DocxWriter::new();
        writer.set_properties(&DocumentProperties {
            title: Some("Resume".into()),
            creator: Some("Ada".into()),
        });
        let bytes = writer.to_bytes().unwrap();
        assert!(read_part(&bytes, "docProps/core.xml").contains("<dc:creator>Ada</dc:creator>"));
    }
}
