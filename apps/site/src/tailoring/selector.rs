//! Heuristic content selection. Picks profile content that overlaps the job keywords.
//!
//! No network calls. Every selector falls back to unfiltered content when nothing
//! matches, so the snapshot is never empty for a non-empty profile.

use std::collections::HashSet;

use crate::models::profile::Profile;
use crate::models::snapshot::{Snapshot, SnapshotExperience, SnapshotProject, TailorRequest};

// ────────────────────────────────────────────────────────────────────────────
// Limits
// ────────────────────────────────────────────────────────────────────────────

pub const SKILL_LIMIT: usize = 10;
pub const BULLETS_PER_EXPERIENCE: usize = 3;
pub const PROJECT_LIMIT: usize = 2;
/// Keywords quoted in the "Focus areas" summary line.
const SUMMARY_KEYWORD_LIMIT: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Builds the heuristic snapshot for a request.
pub fn heuristic_snapshot(
    profile: &Profile,
    request: &TailorRequest,
    keywords: &[String],
) -> Snapshot {
    Snapshot {
        summary: build_summary(profile, request, keywords),
        skills: select_skills(profile, keywords),
        experiences: select_experiences(profile, keywords),
        projects: select_projects(profile, keywords),
    }
}

/// Skills whose lower-case name contains any keyword, else every skill.
/// De-duplicated, capped at `SKILL_LIMIT`.
pub fn select_skills(profile: &Profile, keywords: &[String]) -> Vec<String> {
    let flat = profile.flat_skills();

    let matches: Vec<&str> = flat
        .iter()
        .copied()
        .filter(|skill| contains_any(skill, keywords))
        .collect();

    let selected = if matches.is_empty() { flat } else { matches };

    let mut seen = HashSet::new();
    selected
        .into_iter()
        .filter(|skill| seen.insert(*skill))
        .take(SKILL_LIMIT)
        .map(str::to_string)
        .collect()
}

/// Every experience in profile order, with bullets narrowed to the keyword hits.
///
/// A bullet is kept when its text contains a keyword, or when a keyword is one of
/// the experience's focus tags (which keeps all of its bullets). If nothing is kept
/// the original bullets stand. At most `BULLETS_PER_EXPERIENCE` per entry.
pub fn select_experiences(profile: &Profile, keywords: &[String]) -> Vec<SnapshotExperience> {
    profile
        .experience_history
        .iter()
        .map(|exp| {
            let focus_hit = keywords.iter().any(|kw| exp.focus.contains(kw));

            let keyword_bullets: Vec<&String> = exp
                .bullets
                .iter()
                .filter(|b| focus_hit || contains_any(b, keywords))
                .collect();

            let bullets: Vec<String> = if keyword_bullets.is_empty() {
                exp.bullets.iter().take(BULLETS_PER_EXPERIENCE).cloned().collect()
            } else {
                keyword_bullets
                    .into_iter()
                    .take(BULLETS_PER_EXPERIENCE)
                    .cloned()
                    .collect()
            };

            SnapshotExperience {
                bullets,
                ..SnapshotExperience::from(exp)
            }
        })
        .collect()
}

/// Projects whose name, impact or stack mention a keyword, else every project.
/// Capped at `PROJECT_LIMIT`.
pub fn select_projects(profile: &Profile, keywords: &[String]) -> Vec<SnapshotProject> {
    let relevant: Vec<SnapshotProject> = profile
        .project_showcase
        .iter()
        .filter(|proj| {
            [&proj.name, &proj.impact, &proj.stack]
                .iter()
                .any(|line| contains_any(line, keywords))
        })
        .map(SnapshotProject::from)
        .collect();

    if relevant.is_empty() {
        profile
            .project_showcase
            .iter()
            .take(PROJECT_LIMIT)
            .map(SnapshotProject::from)
            .collect()
    } else {
        relevant.into_iter().take(PROJECT_LIMIT).collect()
    }
}

/// Three-line summary: the lead summary point, a targeting line and a focus line.
///
/// Without a role the targeting line falls back to the first differentiator; without
/// keywords the focus line falls back to the second. Missing table rows are skipped.
pub fn build_summary(profile: &Profile, request: &TailorRequest, keywords: &[String]) -> Vec<String> {
    let role = request.role.trim();
    let company = request.company.trim();

    let role_line = if !role.is_empty() {
        let at_company = if company.is_empty() {
            String::new()
        } else {
            format!(" at {company}")
        };
        Some(format!("Targeting {role}{at_company}."))
    } else {
        profile.differentiators.first().cloned()
    };

    let keyword_line = if !keywords.is_empty() {
        let top: Vec<&str> = keywords
            .iter()
            .take(SUMMARY_KEYWORD_LIMIT)
            .map(String::as_str)
            .collect();
        Some(format!("Focus areas: {}.", top.join(", ")))
    } else {
        profile.differentiators.get(1).cloned()
    };

    [profile.summary_points.first().cloned(), role_line, keyword_line]
        .into_iter()
        .flatten()
        .collect()
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|kw| lowered.contains(kw.as_str()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailoring::keywords::extract_keywords;

    fn profile() -> Profile {
        Profile::builtin().unwrap()
    }

    fn request(role: &str, company: &str, requirements: &str) -> TailorRequest {
        TailorRequest {
            role: role.to_string(),
            company: company.to_string(),
            requirements: requirements.to_string(),
        }
    }

    #[test]
    fn test_skill_containing_keyword_is_selected() {
        let keywords = extract_keywords("Must know Kubernetes and Terraform");
        let skills = select_skills(&profile(), &keywords);
        assert!(skills.contains(&"Kubernetes".to_string()));
        assert!(skills.contains(&"Terraform".to_string()));
        assert!(!skills.contains(&"Figma".to_string()));
    }

    #[test]
    fn test_skill_substring_match() {
        // "react" is contained in both "React" and "React Native"
        let skills = select_skills(&profile(), &["react".to_string()]);
        assert_eq!(skills, vec!["React", "React Native"]);
    }

    #[test]
    fn test_skills_deduplicated() {
        // Solidity and React Native appear in two groups each
        let skills = select_skills(&profile(), &["solidity".to_string(), "native".to_string()]);
        assert_eq!(skills, vec!["Solidity", "React Native"]);
    }

    #[test]
    fn test_skills_fall_back_to_all_capped_at_limit() {
        let skills = select_skills(&profile(), &["cobol".to_string()]);
        assert_eq!(skills.len(), SKILL_LIMIT);
        assert_eq!(skills[0], "JavaScript");
        // The Languages group has 7 items, Frameworks starts after
        assert_eq!(skills[7], "Next.js");
    }

    #[test]
    fn test_experience_bullets_filtered_by_keyword() {
        let experiences = select_experiences(&profile(), &["webrtc".to_string()]);
        let talk2memo = experiences.iter().find(|e| e.company == "Talk2memo").unwrap();
        // "webrtc" is a focus tag on Talk2memo, so every bullet stays
        assert_eq!(talk2memo.bullets.len(), 2);

        let forditva = experiences.iter().find(|e| e.company == "Forditva").unwrap();
        // No hit: original bullets kept
        assert_eq!(forditva.bullets.len(), 2);
    }

    #[test]
    fn test_experience_bullet_text_match_narrows_bullets() {
        let experiences = select_experiences(&profile(), &["uptime".to_string()]);
        let wanzami = &experiences[0];
        assert_eq!(wanzami.company, "Wanzami");
        assert_eq!(
            wanzami.bullets,
            vec!["Implemented stress testing and monitoring to achieve 99.9% uptime."]
        );
    }

    #[test]
    fn test_experiences_keep_profile_order_and_count() {
        let experiences = select_experiences(&profile(), &[]);
        assert_eq!(experiences.len(), 6);
        assert_eq!(experiences[0].company, "Wanzami");
        assert_eq!(experiences[5].company, "Ariosh");
        assert!(experiences.iter().all(|e| e.bullets.len() <= BULLETS_PER_EXPERIENCE));
    }

    #[test]
    fn test_projects_matching_keyword() {
        let projects = select_projects(&profile(), &["ipfs".to_string()]);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Hashiro (NFT Marketplace)");
    }

    #[test]
    fn test_projects_capped_at_limit() {
        let projects = select_projects(&profile(), &["aws".to_string()]);
        assert_eq!(projects.len(), PROJECT_LIMIT);
        assert_eq!(projects[0].name, "Talk2memo (Voice Mail)");
    }

    #[test]
    fn test_projects_fall_back_to_first_two() {
        let projects = select_projects(&profile(), &["haskell".to_string()]);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Hashiro (NFT Marketplace)");
        assert_eq!(projects[1].name, "Forditva (AI Translator)");
    }

    #[test]
    fn test_summary_with_role_company_and_keywords() {
        let p = profile();
        let req = request("Platform Engineer", "Acme", "rust kafka grpc");
        let keywords = extract_keywords(&req.requirements);
        let summary = build_summary(&p, &req, &keywords);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0], p.summary_points[0]);
        assert_eq!(summary[1], "Targeting Platform Engineer at Acme.");
        assert_eq!(summary[2], "Focus areas: rust, kafka, grpc.");
    }

    #[test]
    fn test_summary_role_without_company() {
        let summary = build_summary(&profile(), &request("SRE Lead", "", ""), &[]);
        assert_eq!(summary[1], "Targeting SRE Lead.");
    }

    #[test]
    fn test_summary_falls_back_to_differentiators() {
        let p = profile();
        let summary = build_summary(&p, &request("", "Acme", ""), &[]);
        assert_eq!(summary[1], p.differentiators[0]);
        assert_eq!(summary[2], p.differentiators[1]);
    }

    #[test]
    fn test_summary_focus_line_uses_first_six_keywords() {
        let keywords: Vec<String> = ["aaa", "bbb", "ccc", "ddd", "eee", "fff", "ggg"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let summary = build_summary(&profile(), &request("X", "", ""), &keywords);
        assert_eq!(summary[2], "Focus areas: aaa, bbb, ccc, ddd, eee, fff.");
    }

    #[test]
    fn test_summary_skips_missing_table_rows() {
        let mut p = profile();
        p.summary_points.clear();
        p.differentiators.clear();
        let summary = build_summary(&p, &request("", "", ""), &[]);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_heuristic_snapshot_assembles_all_sections() {
        let req = request("DevOps Engineer", "Acme", "Docker and Kubernetes on AWS");
        let keywords = extract_keywords(&req.requirements);
        let snapshot = heuristic_snapshot(&profile(), &req, &keywords);
        assert_eq!(snapshot.summary.len(), 3);
        assert!(snapshot.skills.contains(&"Docker".to_string()));
        assert_eq!(snapshot.experiences.len(), 6);
        assert_eq!(snapshot.projects.len(), 2);
    }
}
