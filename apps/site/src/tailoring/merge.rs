//! Overlays an AI answer on the heuristic snapshot, field by field.

use crate::models::profile::Profile;
use crate::models::snapshot::{AiExperience, AiTailoring, Snapshot, SnapshotExperience};

/// Any field the AI answered wins, even an empty list. Everything else keeps the
/// heuristic value.
pub fn merge_snapshot(profile: &Profile, heuristic: Snapshot, ai: Option<&AiTailoring>) -> Snapshot {
    let Some(ai) = ai else {
        return heuristic;
    };

    let experiences = match &ai.experiences {
        Some(ai_experiences) => merge_experiences(profile, ai_experiences),
        None => heuristic.experiences,
    };

    Snapshot {
        summary: ai.summary.clone().unwrap_or(heuristic.summary),
        skills: ai.skills.clone().unwrap_or(heuristic.skills),
        experiences,
        projects: ai.projects.clone().unwrap_or(heuristic.projects),
    }
}

/// Walks the profile's experiences in order, replacing each one the AI rewrote.
///
/// An AI entry matches when company and role both agree, ignoring case. A match
/// takes the AI's role and company spelling, and its timeline and bullets when it
/// sent them. Unmatched profile entries are kept with their full, unfiltered
/// bullets; AI entries that match nothing in the profile are dropped.
pub fn merge_experiences(
    profile: &Profile,
    ai_experiences: &[AiExperience],
) -> Vec<SnapshotExperience> {
    profile
        .experience_history
        .iter()
        .map(|exp| {
            let base = SnapshotExperience::from(exp);
            match ai_experiences.iter().find(|ai| {
                ai.company.to_lowercase() == exp.company.to_lowercase()
                    && ai.role.to_lowercase() == exp.role.to_lowercase()
            }) {
                Some(ai) => SnapshotExperience {
                    role: ai.role.clone(),
                    company: ai.company.clone(),
                    timeline: ai.timeline.clone().unwrap_or(base.timeline),
                    bullets: ai.bullets.clone().unwrap_or(base.bullets),
                },
                None => base,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snapshot::SnapshotProject;

    fn profile() -> Profile {
        Profile::builtin().unwrap()
    }

    fn heuristic() -> Snapshot {
        Snapshot {
            summary: vec!["heuristic summary".to_string()],
            skills: vec!["Docker".to_string()],
            experiences: vec![SnapshotExperience {
                role: "Software Engineer / DevOps".to_string(),
                company: "Wanzami".to_string(),
                timeline: "2022 - Present".to_string(),
                bullets: vec!["heuristic bullet".to_string()],
            }],
            projects: vec![SnapshotProject {
                name: "heuristic project".to_string(),
                impact: String::new(),
                stack: String::new(),
            }],
        }
    }

    #[test]
    fn test_without_ai_heuristic_is_untouched() {
        let merged = merge_snapshot(&profile(), heuristic(), None);
        assert_eq!(merged, heuristic());
    }

    #[test]
    fn test_ai_fields_override_individually() {
        let ai = AiTailoring {
            skills: Some(vec!["Rust".to_string(), "Go".to_string()]),
            ..Default::default()
        };
        let merged = merge_snapshot(&profile(), heuristic(), Some(&ai));
        assert_eq!(merged.skills, vec!["Rust", "Go"]);
        assert_eq!(merged.summary, vec!["heuristic summary"]);
        assert_eq!(merged.projects[0].name, "heuristic project");
        assert_eq!(merged.experiences[0].bullets, vec!["heuristic bullet"]);
    }

    #[test]
    fn test_empty_ai_list_still_wins() {
        let ai = AiTailoring {
            projects: Some(vec![]),
            ..Default::default()
        };
        let merged = merge_snapshot(&profile(), heuristic(), Some(&ai));
        assert!(merged.projects.is_empty());
    }

    #[test]
    fn test_ai_experience_matched_case_insensitively() {
        let ai = AiTailoring {
            experiences: Some(vec![AiExperience {
                role: "software engineer / devops".to_string(),
                company: "WANZAMI".to_string(),
                timeline: Some("2022 - now".to_string()),
                bullets: Some(vec!["Rewritten bullet.".to_string()]),
            }]),
            ..Default::default()
        };
        let merged = merge_snapshot(&profile(), heuristic(), Some(&ai));

        // Every profile experience is present, in profile order
        assert_eq!(merged.experiences.len(), 6);
        assert_eq!(merged.experiences[0].company, "WANZAMI");
        assert_eq!(merged.experiences[0].timeline, "2022 - now");
        assert_eq!(merged.experiences[0].bullets, vec!["Rewritten bullet."]);

        // Unmatched entries keep their full profile bullets
        assert_eq!(merged.experiences[1].company, "BLVCK CODE LLC");
        assert_eq!(merged.experiences[1].bullets.len(), 3);
    }

    #[test]
    fn test_ai_experience_needs_both_company_and_role() {
        let ai_experiences = vec![AiExperience {
            role: "Principal Engineer".to_string(),
            company: "Wanzami".to_string(),
            bullets: Some(vec!["Nope.".to_string()]),
            ..Default::default()
        }];
        let merged = merge_experiences(&profile(), &ai_experiences);
        assert_eq!(merged[0].role, "Software Engineer / DevOps");
        assert!(merged.iter().all(|e| e.role != "Principal Engineer"));
    }

    #[test]
    fn test_ai_experience_missing_fields_fall_back_to_profile() {
        let profile = profile();
        let ai_experiences = vec![
            AiExperience {
                role: "Software Engineer / DevOps".to_string(),
                company: "Wanzami".to_string(),
                timeline: Some("2022".to_string()),
                bullets: None,
            },
            AiExperience {
                role: profile.experience_history[1].role.clone(),
                company: profile.experience_history[1].company.clone(),
                timeline: None,
                bullets: Some(vec!["Only bullet.".to_string()]),
            },
        ];
        let merged = merge_experiences(&profile, &ai_experiences);

        assert_eq!(merged[0].timeline, "2022");
        assert_eq!(merged[0].bullets, profile.experience_history[0].bullets);
        assert_eq!(merged[1].timeline, profile.experience_history[1].timeline);
        assert_eq!(merged[1].bullets, vec!["Only bullet."]);
    }
}
