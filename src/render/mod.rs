//! Resume assembler.
//!
//! Maps a loaded [`ResumeConfig`] onto document blocks in a fixed order:
//! header, summary, core pillars, flagship project, professional experience.
//! Nothing is reordered, filtered or deduplicated; lists keep their input
//! order. Styling comes from the theme or from the constants in [`style`].

pub mod sections;
pub mod style;

use std::path::Path;

use serde::Serialize;

use crate::config::ResumeConfig;
use crate::docx::DocxWriter;
use crate::document::{Block, DocumentProperties, DocumentWriter};
use crate::error::Result;

/// Default output path used by the CLI
pub const DEFAULT_OUTPUT_PATH: &str = "generated_resume.docx";

/// Top-level resume block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Summary,
    CorePillars,
    FlagshipProject,
    ProfessionalExperience,
}

impl SectionKind {
    /// All sections in document order
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::Header,
            SectionKind::Summary,
            SectionKind::CorePillars,
            SectionKind::FlagshipProject,
            SectionKind::ProfessionalExperience,
        ]
    }

    /// Config key the section is read from
    pub fn config_key(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Summary => "summary",
            SectionKind::CorePillars => "core_pillars",
            SectionKind::FlagshipProject => "flagship_project",
            SectionKind::ProfessionalExperience => "professional_experience",
        }
    }
}

/// One rendered section and its body blocks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

/// Fully assembled resume, ready for any [`DocumentWriter`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeDocument {
    pub properties: DocumentProperties,
    pub sections: Vec<Section>,
}

/// Build the document for a config
pub fn assemble(config: &ResumeConfig) -> ResumeDocument {
    let theme = &config.theme;

    let sections = vec![
        Section {
            kind: SectionKind::Header,
            blocks: sections::header(&config.header, theme),
        },
        Section {
            kind: SectionKind::Summary,
            blocks: sections::summary(&config.summary, theme),
        },
        Section {
            kind: SectionKind::CorePillars,
            blocks: sections::core_pillars(&config.core_pillars, theme),
        },
        Section {
            kind: SectionKind::FlagshipProject,
            blocks: sections::flagship_project(&config.flagship_project, theme),
        },
        Section {
            kind: SectionKind::ProfessionalExperience,
            blocks: sections::professional_experience(&config.professional_experience, theme),
        },
    ];

    tracing::debug!(
        "Assembled {} sections, {} blocks",
        sections.len(),
        sections.iter().map(|s| s.blocks.len()).sum::<usize>()
    );

    ResumeDocument {
        properties: DocumentProperties {
            title: Some(format!("{} - Resume", config.header.name)),
            creator: Some(config.header.name.clone()),
        },
        sections,
    }
}

impl ResumeDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Every body block in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|s| s.blocks.iter())
    }

    /// Feed every block to `writer` in order
    pub fn write_to<W: DocumentWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.set_properties(&self.properties);
        for block in self.blocks() {
            writer.append_block(block)?;
        }
        Ok(())
    }

    /// Write a .docx package to `path`
    pub fn save_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = DocxWriter::new();
        self.write_to(&mut writer)?;
        writer.save(path.as_ref())
    }
}

/// Load `config_path`, assemble, and write `output_path`.
/// Nothing is written unless loading and assembly both succeed.
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(
    config_path: P,
    output_path: Q,
) -> Result<ResumeDocument> {
    let config = ResumeConfig::load(config_path)?;
    let document = assemble(&config);
    document.save_docx(output_path)?;
    Ok(document)
}
