//! Pre-filled `mailto:` link carrying the cover letter and a CV digest.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::snapshot::{Snapshot, TailorRequest};
use crate::tailoring::letters::take_joined;

/// Characters left as-is, matching JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const EMAIL_SKILL_LIMIT: usize = 6;

pub fn subject(request: &TailorRequest) -> String {
    let role = request.role.trim();
    let company = request.company.trim();
    let role_name = if role.is_empty() { "the role" } else { role };
    if company.is_empty() {
        format!("Application for {role_name}")
    } else {
        format!("Application for {role_name} at {company}")
    }
}

/// Cover letter, a separator, then top skills and the experience roll-call.
pub fn body(cover_letter: &str, snapshot: &Snapshot) -> String {
    let experience_line = snapshot
        .experiences
        .iter()
        .map(|exp| format!("{} @ {}", exp.role, exp.company))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "{cover_letter}\n\n---\nCV Snapshot\nTop skills: {}\nExperience: {experience_line}",
        take_joined(&snapshot.skills, EMAIL_SKILL_LIMIT)
    )
}

pub fn build_mailto(request: &TailorRequest, cover_letter: &str, snapshot: &Snapshot) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_component(&subject(request)),
        encode_component(&body(cover_letter, snapshot))
    )
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}
