//! Render command: config file in, .docx out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::render::{render_file, DEFAULT_OUTPUT_PATH};

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Resume config to read
    pub config: PathBuf,
    /// Document to write
    pub output: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Execute the render command
pub fn execute_render(options: RenderOptions) -> Result<()> {
    println!(
        "{} Rendering {}...",
        style("→").cyan(),
        options.config.display()
    );

    let document = render_file(&options.config, &options.output).with_context(|| {
        format!(
            "Failed to render {} to {}",
            options.config.display(),
            options.output.display()
        )
    })?;

    tracing::debug!("Rendered {} blocks", document.blocks().count());
    println!(
        "{} Resume generated at: {}",
        style("✓").green(),
        options.output.display()
    );

    Ok(())
}
