#![forbid(unsafe_code)]

//! # resumegen
//!
//! Render a YAML resume description into a styled Word (.docx) document.
//!
//! The pipeline is a single linear pass:
//!
//! - **Load**: read the YAML config, report any missing field by its full path
//! - **Assemble**: map the config onto header, summary, pillars, flagship and
//!   experience blocks built from a format-neutral document model
//! - **Write**: hand the blocks to a [`DocumentWriter`]; [`DocxWriter`] emits
//!   an OOXML package
//!
//! ## Example
//!
//! ```rust,no_run
//! use resumegen::{assemble, ResumeConfig};
//!
//! fn main() -> resumegen::Result<()> {
//!     let config = ResumeConfig::load("resume_config.yaml")?;
//!     let document = assemble(&config);
//!     document.save_docx("generated_resume.docx")?;
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod commands;
pub mod config;
pub mod document;
pub mod docx;
pub mod error;
pub mod render;

// Re-exports
pub use color::Rgb;
pub use config::{
    CorePillars, FlagshipProject, Header, Job, Link, PillarColumn, ProfessionalExperience,
    ResumeConfig, Summary, Theme,
};
pub use document::{
    Alignment, Block, Border, Borders, Cell, DocumentProperties, DocumentWriter, Paragraph, Run,
    RunStyle, Table,
};
pub use docx::DocxWriter;
pub use error::{ResumeError, Result};
pub use render::{assemble, render_file, ResumeDocument, Section, SectionKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
