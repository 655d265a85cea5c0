//! Resume configuration: data model, defaults and YAML loading.
//!
//! The config file is a YAML mapping with the fixed top-level keys `theme`,
//! `header`, `summary`, `core_pillars`, `flagship_project` and
//! `professional_experience`. Only `theme` (and a few nested keys such as
//! `header.links`) may be omitted; everything else is required and a missing
//! entry fails the load with its full field path.

mod fields;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::Value;

use crate::color::Rgb;
use crate::error::{ResumeError, Result};

pub use fields::Node;

/// Default input path used by the CLI
pub const DEFAULT_CONFIG_PATH: &str = "resume_config.yaml";

/// Default primary color (`#004080`)
pub const DEFAULT_PRIMARY_COLOR: Rgb = Rgb::new(0x00, 0x40, 0x80);

/// Default accent color (`#E07000`)
pub const DEFAULT_ACCENT_COLOR: Rgb = Rgb::new(0xE0, 0x70, 0x00);

/// Default header font
pub const DEFAULT_HEADER_FONT: &str = "Calibri";

/// Complete resume description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeConfig {
    pub theme: Theme,
    pub header: Header,
    pub summary: Summary,
    pub core_pillars: CorePillars,
    pub flagship_project: FlagshipProject,
    pub professional_experience: ProfessionalExperience,
}

/// Colors and fonts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub primary_color: Rgb,
    pub accent_color: Rgb,
    pub font_header: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR,
            accent_color: DEFAULT_ACCENT_COLOR,
            font_header: DEFAULT_HEADER_FONT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub links: Vec<Link>,
}

/// Labelled link; without a url it renders as styled text only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub text: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub subtitle: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorePillars {
    pub title: String,
    pub columns: Vec<PillarColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarColumn {
    pub header: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagshipProject {
    pub section_title: String,
    pub project_title: String,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalExperience {
    pub title: String,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    pub dates: String,
    pub highlights: Vec<String>,
}

impl ResumeConfig {
    /// Load and check a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ResumeError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ResumeError::Io(e),
        })?;
        tracing::debug!("Read {} bytes from {}", content.len(), path.display());
        Self::parse(&content, path)
    }

    /// Parse config text that did not come from a file
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ResumeError::Parse {
            path: PathBuf::from(origin),
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Build the config from an already parsed YAML tree
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = Node::root(value)?;
        Ok(Self {
            theme: Theme::from_node(root.opt_child("theme")?)?,
            header: Header::from_node(&root.child("header")?)?,
            summary: Summary::from_node(&root.child("summary")?)?,
            core_pillars: CorePillars::from_node(&root.child("core_pillars")?)?,
            flagship_project: FlagshipProject::from_node(&root.child("flagship_project")?)?,
            professional_experience: ProfessionalExperience::from_node(
                &root.child("professional_experience")?,
            )?,
        })
    }
}

impl Theme {
    fn from_node(node: Option<Node<'_>>) -> Result<Self> {
        let Some(node) = node else {
            return Ok(Self::default());
        };

        let color = |key: &str, default: Rgb| -> Result<Rgb> {
            match node.get(key)? {
                Some(field) => {
                    let path = field.path().to_string();
                    Rgb::from_hex(&field.text()?).map_err(|e| e.at_field(path))
                }
                None => Ok(default),
            }
        };

        Ok(Self {
            primary_color: color("primary_color", DEFAULT_PRIMARY_COLOR)?,
            accent_color: color("accent_color", DEFAULT_ACCENT_COLOR)?,
            font_header: node
                .opt_str("font_header")?
                .unwrap_or_else(|| DEFAULT_HEADER_FONT.to_string()),
        })
    }
}

impl Header {
    fn from_node(node: &Node<'_>) -> Result<Self> {
        let links = node
            .opt_seq("links")?
            .iter()
            .map(|link| {
                Ok(Link {
                    text: link.str("text")?,
                    url: link.opt_str("url")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: node.str("name")?,
            location: node.str("location")?,
            phone: node.str("phone")?,
            email: node.str("email")?,
            links,
        })
    }
}

impl Summary {
    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            title: node.str("title")?,
            subtitle: node.str("subtitle")?,
            text: node.str("text")?,
        })
    }
}

impl CorePillars {
    fn from_node(node: &Node<'_>) -> Result<Self> {
        let columns = node
            .seq("columns")?
            .iter()
            .map(|column| {
                Ok(PillarColumn {
                    header: column.str("header")?,
                    items: column.strings("items")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: node.str("title")?,
            columns,
        })
    }
}

impl FlagshipProject {
    fn from_node(node: &Node<'_>) -> Result<Self> {
        Ok(Self {
            section_title: node.str("section_title")?,
            project_title: node.str("project_title")?,
            highlights: node.strings("highlights")?,
            tags: node.strings("tags")?,
        })
    }
}

impl ProfessionalExperience {
    fn from_node(node: &Node<'_>) -> Result<Self> {
        let jobs = node
            .seq("jobs")?
            .iter()
            .map(|job| {
                Ok(Job {
                    company: job.str("company")?,
                    role: job.str("role")?,
                    dates: job.str("dates")?,
                    highlights: job.opt_strings("highlights")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: node.str("title")?,
            jobs,
        })
    }
}
