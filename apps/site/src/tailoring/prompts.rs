// Prompt template for the tailoring call.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_INSTRUCTION};
use crate::models::profile::Profile;
use crate::models::snapshot::TailorRequest;

const NOT_PROVIDED: &str = "Not provided";

/// Tailoring prompt template.
/// Placeholders: {name}, {role}, {company}, {requirements}, {title}, {location},
///          {email}, {summary}, {skills}, {experiences}, {projects},
///          {grounding_instruction}, {json_instruction}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are tailoring a CV snapshot and cover letter for {name}.
Role: {role}
Company: {company}
Job Requirements: {requirements}

Base profile:
- Title: {title}
- Location: {location}
- Email: {email}
- Summary: {summary}
- Skills:
{skills}
- Experience:
{experiences}
- Projects:
{projects}

{grounding_instruction}

Return a strict JSON object with keys:
{
  "summary": string[] (2-4 concise bullets),
  "skills": string[] (up to 10 highly relevant skills),
  "experiences": { "role": string, "company": string, "timeline": string, "bullets": string[] }[] (top 3 relevant),
  "projects": { "name": string, "impact": string, "stack": string }[] (top 2),
  "coverLetter": string (3-5 short paragraphs separated by blank lines),
  "coldEmail": string (at most 3 short paragraphs, casual greeting),
  "offerLetter": string (a short offer of value addressed to the hiring team)
}

{json_instruction}"#;

pub fn build_tailor_prompt(profile: &Profile, request: &TailorRequest) -> String {
    let skills = profile
        .skill_groups
        .iter()
        .map(|g| format!("{}: {}", g.label, g.items.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    let experiences = profile
        .experience_history
        .iter()
        .map(|exp| {
            format!(
                "{} at {} ({}) -> {}",
                exp.role,
                exp.company,
                exp.timeline,
                exp.bullets.join("; ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let projects = profile
        .project_showcase
        .iter()
        .map(|p| format!("{}: {} | Stack: {}", p.name, p.impact, p.stack))
        .collect::<Vec<_>>()
        .join("\n");

    fill_placeholders(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("name", &profile.contact.name),
            ("role", or_not_provided(&request.role)),
            ("company", or_not_provided(&request.company)),
            ("requirements", or_not_provided(&request.requirements)),
            ("title", &profile.contact.title),
            ("location", &profile.contact.location),
            ("email", &profile.contact.email),
            ("summary", &profile.summary_points.join(" ")),
            ("skills", &skills),
            ("experiences", &experiences),
            ("projects", &projects),
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("json_instruction", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Single left-to-right pass over `template`. Inserted values are never
/// rescanned, so braces in visitor text stay literal. Unknown `{...}` is kept.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn or_not_provided(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_profile_and_request() {
        let profile = Profile::builtin().unwrap();
        let request = TailorRequest {
            role: "DevOps Engineer".to_string(),
            company: "Acme".to_string(),
            requirements: "Kubernetes and Terraform".to_string(),
        };
        let prompt = build_tailor_prompt(&profile, &request);

        assert!(prompt.starts_with("You are tailoring a CV snapshot and cover letter for OluKayode (Peters) Soliu."));
        assert!(prompt.contains("Role: DevOps Engineer\nCompany: Acme\nJob Requirements: Kubernetes and Terraform"));
        assert!(prompt.contains("- Email: Soliupeter@gmail.com"));
        assert!(prompt.contains("Software Engineer / DevOps at Wanzami (2022 - Present) -> "));
        assert!(prompt.contains(" | Stack: "));
        assert!(prompt.contains("\"coldEmail\""));
        assert!(prompt.contains("\"offerLetter\""));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_prompt_blank_fields_are_not_provided() {
        let profile = Profile::builtin().unwrap();
        let prompt = build_tailor_prompt(&profile, &TailorRequest::default());
        assert!(prompt.contains("Role: Not provided\nCompany: Not provided\nJob Requirements: Not provided"));
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        let profile = Profile::builtin().unwrap();
        let prompt = build_tailor_prompt(&profile, &TailorRequest::default());
        for placeholder in ["{name}", "{role}", "{skills}", "{projects}", "{json_instruction}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_visitor_braces_are_not_expanded() {
        let profile = Profile::builtin().unwrap();
        let request = TailorRequest {
            role: "{company} {skills}".to_string(),
            company: "Acme".to_string(),
            requirements: "{role} and {json_instruction}".to_string(),
        };
        let prompt = build_tailor_prompt(&profile, &request);
        assert!(prompt.contains("Role: {company} {skills}\nCompany: Acme\n"));
        assert!(prompt.contains("Job Requirements: {role} and {json_instruction}\n"));
    }

    #[test]
    fn test_fill_keeps_unknown_braces() {
        let filled = fill_placeholders("{ \"a\": {x} {y} }", &[("x", "1")]);
        assert_eq!(filled, "{ \"a\": 1 {y} }");
    }
}
