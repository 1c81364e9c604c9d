//! Deterministic letter templates. Paragraphs are separated by a blank line.

use crate::models::profile::Profile;
use crate::models::snapshot::{Snapshot, TailorRequest};

const PARAGRAPH_BREAK: &str = "\n\n";

const COVER_KEYWORD_LIMIT: usize = 5;
const COVER_SKILL_LIMIT: usize = 4;
const COLD_EMAIL_PARAGRAPHS: usize = 3;
const OFFER_SKILL_LIMIT: usize = 5;

/// Opener value statement for profiles that do not carry their own `pitch`.
pub const DEFAULT_PITCH: &str = "I blend full-stack engineering, blockchain expertise, and DevOps discipline to ship secure, scalable products.";

/// Cover letter built from the heuristic snapshot.
///
/// The "recent impact" line quotes the first bullet of the first experience; the
/// problem line is only specific when requirements were pasted.
pub fn cover_letter(
    profile: &Profile,
    request: &TailorRequest,
    keywords: &[String],
    snapshot: &Snapshot,
) -> String {
    let company = request.company.trim();
    let role = request.role.trim();

    let addressee = if company.is_empty() {
        "Hiring Manager".to_string()
    } else {
        format!("{company} team")
    };
    let role_name = if role.is_empty() { "the role" } else { role };

    let pitch = match profile.pitch.trim() {
        "" => DEFAULT_PITCH,
        own => own,
    };
    let opener = format!("I am excited to apply for {role_name}. {pitch}");

    let recent_impact = match snapshot
        .experiences
        .first()
        .and_then(|exp| exp.bullets.first().map(|b| (exp, b)))
    {
        Some((exp, bullet)) => format!("Recently at {}, I {bullet}", exp.company),
        None => "Recently, I have been leading teams to ship production systems end-to-end."
            .to_string(),
    };

    let problem_line = if request.requirements.trim().is_empty() {
        "I prioritize pairing clear outcomes with reliable engineering.".to_string()
    } else {
        let highlights = if keywords.is_empty() {
            "product and delivery".to_string()
        } else {
            take_joined(keywords, COVER_KEYWORD_LIMIT)
        };
        format!(
            "Your description highlights {highlights}; I can help by pairing {} with disciplined delivery.",
            take_joined(&snapshot.skills, COVER_SKILL_LIMIT)
        )
    };

    [
        format!("Dear {addressee},"),
        opener,
        recent_impact,
        problem_line,
        "Thank you for your time and consideration.".to_string(),
        profile.contact.name.clone(),
        format!("{} | {}", profile.contact.email, profile.contact.phone),
    ]
    .join(PARAGRAPH_BREAK)
}

/// Short outreach note: the cover letter's first paragraphs with a casual greeting.
pub fn cold_email(cover_letter: &str) -> String {
    cover_letter
        .replacen("Dear", "Hi", 1)
        .split(PARAGRAPH_BREAK)
        .take(COLD_EMAIL_PARAGRAPHS)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK)
}

/// Offer-of-value note built from the final (post-merge) snapshot.
pub fn offer_letter(profile: &Profile, request: &TailorRequest, snapshot: &Snapshot) -> String {
    let company = request.company.trim();
    let role = request.role.trim();

    let addressee = if company.is_empty() {
        "hiring team".to_string()
    } else {
        format!("{company} team")
    };
    let role_name = if role.is_empty() { "this role" } else { role };

    let recent_impact = snapshot
        .experiences
        .first()
        .and_then(|exp| exp.bullets.first())
        .map(String::as_str)
        .unwrap_or_default();

    [
        format!("To the {addressee},"),
        format!(
            "I am excited to contribute as {role_name}. Below is a concise offer of value tailored to your needs."
        ),
        format!("Key strengths: {}.", take_joined(&snapshot.skills, OFFER_SKILL_LIMIT)),
        format!("Recent impact: {recent_impact}"),
        "Let me know the best next step to move this forward.".to_string(),
        profile.contact.name.clone(),
    ]
    .join(PARAGRAPH_BREAK)
}

pub(crate) fn take_joined(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
