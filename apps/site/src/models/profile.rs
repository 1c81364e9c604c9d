//! Profile data table: the hand-authored CV content every page and document draws from.
//!
//! The built-in table ships inside the binary (`assets/profile.json`). A deployment can
//! swap it for its own file via `PROFILE_PATH`; both go through the same serde shape.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_PROFILE: &str = include_str!("../../assets/profile.json");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("profile JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub timeline: String,
    pub bullets: Vec<String>,
    /// Lower-case focus tags. A keyword equal to one of these pulls in every bullet.
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub impact: String,
    pub stack: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCard {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    /// Language swatch colour, CSS hex.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubShowcase {
    pub username: String,
    pub public_repos: String,
    #[serde(default)]
    pub pinned: Vec<RepoCard>,
    /// Weeks × weekdays activity levels, 0 (none) through 3 (busy).
    #[serde(default)]
    pub contributions: Vec<[u8; 7]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub contact: ContactInfo,
    /// One-sentence value statement used in the cover letter opener.
    #[serde(default)]
    pub pitch: String,
    #[serde(default)]
    pub tagline: String,
    pub summary_points: Vec<String>,
    #[serde(default)]
    pub differentiators: Vec<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub philosophy: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub skill_groups: Vec<SkillGroup>,
    pub experience_history: Vec<ExperienceItem>,
    pub project_showcase: Vec<ProjectItem>,
    pub github: GithubShowcase,
}

impl Profile {
    /// The profile compiled into the binary.
    pub fn builtin() -> Result<Self, ProfileError> {
        Self::from_json(BUILTIN_PROFILE)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads a profile from a JSON file with the same shape as the built-in table.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Every skill across all groups, in group order. Duplicates are kept.
    pub fn flat_skills(&self) -> Vec<&str> {
        self.skill_groups
            .iter()
            .flat_map(|g| g.items.iter().map(String::as_str))
            .collect()
    }

    /// `(label, url)` pairs shown in the hero, contact section and footer.
    pub fn social_links(&self) -> Vec<(&'static str, String)> {
        vec![
            ("GitHub", self.contact.github.clone()),
            ("LinkedIn", self.contact.linkedin.clone()),
            ("Email", format!("mailto:{}", self.contact.email)),
        ]
    }
}
