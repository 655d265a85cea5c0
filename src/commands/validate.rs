//! Validate command: load and assemble a config without writing anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::config::{ResumeConfig, DEFAULT_CONFIG_PATH};
use crate::render::{assemble, SectionKind};

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Resume config to check
    pub config: PathBuf,
    /// Print the outline as JSON
    pub json: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            json: false,
        }
    }
}

/// Summary of what a config would render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub name: String,
    pub sections: Vec<OutlineSection>,
    pub links: usize,
    pub pillar_columns: usize,
    pub flagship_tags: usize,
    pub jobs: usize,
    pub job_highlights: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineSection {
    pub kind: SectionKind,
    pub title: String,
    pub blocks: usize,
}

impl Outline {
    pub fn build(config: &ResumeConfig) -> Self {
        let document = assemble(config);
        let experience = &config.professional_experience;

        let sections = document
            .sections
            .iter()
            .map(|section| OutlineSection {
                kind: section.kind,
                title: section_title(config, section.kind).to_string(),
                blocks: section.blocks.len(),
            })
            .collect();

        Self {
            name: config.header.name.clone(),
            sections,
            links: config.header.links.len(),
            pillar_columns: config.core_pillars.columns.len(),
            flagship_tags: config.flagship_project.tags.len(),
            jobs: experience.jobs.len(),
            job_highlights: experience.jobs.iter().map(|j| j.highlights.len()).sum(),
        }
    }
}

fn section_title(config: &ResumeConfig, kind: SectionKind) -> &str {
    match kind {
        SectionKind::Header => config.header.name.as_str(),
        SectionKind::Summary => config.summary.title.as_str(),
        SectionKind::CorePillars => config.core_pillars.title.as_str(),
        SectionKind::FlagshipProject => config.flagship_project.section_title.as_str(),
        SectionKind::ProfessionalExperience => config.professional_experience.title.as_str(),
    }
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let config = ResumeConfig::load(&options.config)
        .with_context(|| format!("Invalid resume config {}", options.config.display()))?;
    let outline = Outline::build(&config);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!(
        "{} {} is valid",
        style("✓").green(),
        options.config.display()
    );
    for section in &outline.sections {
        println!(
            "  {:<24} {} ({} blocks)",
            section.kind.config_key(),
            style(&section.title).bold(),
            section.blocks
        );
    }
    println!(
        "  Jobs: {}, highlights: {}, links: {}, tags: {}",
        outline.jobs, outline.job_highlights, outline.links, outline.flagship_tags
    );

    Ok(())
}
