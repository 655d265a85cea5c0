//! Init command: write a sample resume config to start from.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;

use crate::config::DEFAULT_CONFIG_PATH;

/// Sample config shipped with the binary
pub const SAMPLE_CONFIG: &str = include_str!("../../templates/resume_config.yaml");

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the sample config
    pub config: PathBuf,
    /// Overwrite an existing file
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            force: false,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.config.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.config.display()
        );
    }

    if let Some(parent) = options.config.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(&options.config, SAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", options.config.display()))?;

    println!(
        "{} Sample config written to {}",
        style("✓").green(),
        options.config.display()
    );
    println!("  Edit it, then run: resumegen --config {}", options.config.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResumeConfig;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_is_valid() {
        let config = ResumeConfig::from_yaml_str(SAMPLE_CONFIG).unwrap();
        assert!(!config.professional_experience.jobs.is_empty());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resume_config.yaml");
        std::fs::write(&path, "keep me").unwrap();

        let result = execute_init(InitOptions {
            config: path.clone(),
            force: false,
        });
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        execute_init(InitOptions {
            config: path.clone(),
            force: true,
        })
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_CONFIG);
    }
}
