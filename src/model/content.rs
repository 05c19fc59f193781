//! Static portfolio content.
//!
//! The view-state core treats these records as opaque: it only needs the
//! length of each list to size animation sequences.

use super::error::ContentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CONTENT: &str = include_str!("default_content.json");

/// Everything the page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioContent {
    /// Owner details used by the hero, navbar and footer.
    pub profile: Profile,
    /// Skills grid entries.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Experience timeline entries, newest first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Education list entries.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Awards.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Certifications.
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Extra-curricular activities.
    #[serde(default)]
    pub extra_curricular: Vec<String>,
    /// Projects gallery entries.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Footer contact links.
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

/// Page owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name for the hero heading.
    pub name: String,
    /// Short brand shown in the navbar.
    pub brand: String,
    /// Text revealed by the typewriter.
    pub tagline: String,
    /// Paragraph under the tagline.
    #[serde(default)]
    pub summary: String,
    /// Resume link for the hero call to action.
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Shown in the footer status line.
    #[serde(default)]
    pub location: Option<String>,
    /// Shown in the contact terminal header.
    #[serde(default)]
    pub contact_address: Option<String>,
}

/// One skills grid card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Grouping used for the accent color.
    pub category: String,
}

/// One experience timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Free-form date range.
    pub period: String,
    /// Work location.
    #[serde(default)]
    pub location: String,
    /// Bullet points.
    #[serde(default)]
    pub details: Vec<String>,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    /// Free-form date range.
    pub period: String,
    /// Degree or grade.
    pub degree: String,
    /// Institution.
    pub school: String,
}

/// One projects gallery card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Technologies used.
    pub stack: String,
    /// One-paragraph description.
    pub description: String,
    /// Repository or demo link. Absent for private work.
    #[serde(default)]
    pub link: Option<String>,
    /// Grouping used for the accent color.
    pub category: String,
}

/// Footer contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactLink {
    /// Visible label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl PortfolioContent {
    /// Content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT, Path::new("<builtin>"))
    }

    /// Parse content from JSON text. `origin` is only used in errors.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::ParseError {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load content from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|e| ContentError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json, path)
    }

    /// Load from `path` if given, otherwise use the builtin content.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }
}
