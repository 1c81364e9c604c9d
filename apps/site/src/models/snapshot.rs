use serde::{Deserialize, Serialize};

use crate::models::profile::{ExperienceItem, ProjectItem};

/// What the visitor pasted into the studio. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TailorRequest {
    pub role: String,
    pub company: String,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotExperience {
    pub role: String,
    pub company: String,
    pub timeline: String,
    pub bullets: Vec<String>,
}

impl From<&ExperienceItem> for SnapshotExperience {
    fn from(exp: &ExperienceItem) -> Self {
        Self {
            role: exp.role.clone(),
            company: exp.company.clone(),
            timeline: exp.timeline.clone(),
            bullets: exp.bullets.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotProject {
    pub name: String,
    pub impact: String,
    pub stack: String,
}

impl From<&ProjectItem> for SnapshotProject {
    fn from(proj: &ProjectItem) -> Self {
        Self {
            name: proj.name.clone(),
            impact: proj.impact.clone(),
            stack: proj.stack.clone(),
        }
    }
}

/// An experience as the generative model rewrote it. Only `role` and `company`
/// are needed to match a profile entry; the rest falls back to that entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiExperience {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
}

/// Reduced CV content used for display, PDF export and the email body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub summary: Vec<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<SnapshotExperience>,
    pub projects: Vec<SnapshotProject>,
}

/// The generative model's answer. Each field overrides its heuristic counterpart
/// when present, so a partial answer still merges cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTailoring {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<AiExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<SnapshotProject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cold_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_letter: Option<String>,
}

/// Everything the studio shows after tailoring.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationPackage {
    pub keywords: Vec<String>,
    pub snapshot: Snapshot,
    pub cover_letter: String,
    pub cold_email: String,
    pub offer_letter: String,
    pub mailto: String,
    pub ai_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_error: Option<String>,
}
