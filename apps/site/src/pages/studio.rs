//! Application Studio page. The form submits with GET, so the tailored result
//! is rendered server-side and the page works without client script.

use std::fmt::Write;

use crate::models::profile::Profile;
use crate::models::snapshot::ApplicationPackage;
use crate::pages::{document, escape, list};
use crate::tailoring::studio::{StudioForm, StudioPdfForm};

/// Bullets shown per experience in the on-page preview.
const PREVIEW_BULLETS: usize = 2;

pub fn render(
    profile: &Profile,
    form: &StudioForm,
    package: &ApplicationPackage,
) -> Result<String, std::fmt::Error> {
    let request = form.tailor_request();
    let role = request.role.trim();
    let company = request.company.trim();
    let mut body = String::with_capacity(24 * 1024);

    // Header
    write!(
        body,
        r#"<main class="studio"><div class="glow glow-a"></div><div class="glow glow-b"></div><header class="studio-header fade-up"><div><span class="badge">Application Studio</span><h1>Tailor your CV and cover letter from this portfolio</h1><p class="muted">Paste a job requirement and build a role-specific CV snapshot and cover letter.</p></div><div class="identity glass"><strong>{}</strong><span class="muted">{}</span><a href="/">&larr; Back to portfolio</a></div></header>"#,
        escape(&profile.contact.name),
        escape(&profile.contact.title)
    )?;

    // Form
    write!(
        body,
        r#"<div class="studio-grid"><form class="glass card fade-up" method="get" action="/apply"><p class="muted">Start with the job requirements, role, and company name.</p><div class="grid two"><label>Role Title<input name="role" value="{}" placeholder="Senior Full Stack Engineer"></label><label>Company<input name="company" value="{}" placeholder="Acme Labs"></label></div><label>Job requirements<textarea name="requirements" rows="8" placeholder="Paste the role description, required skills, and responsibilities.">{}</textarea></label>"#,
        escape(role),
        escape(company),
        escape(&request.requirements)
    )?;
    write!(
        body,
        r#"<label class="check"><input type="checkbox" name="use_ai"{}> Refine with AI</label><div class="row"><span class="muted">{}</span><button class="button primary" type="submit">Tailor CV &amp; Cover Letter</button></div>"#,
        if form.use_ai() { " checked" } else { "" },
        keyword_status(package.keywords.len())
    )?;
    if let Some(error) = &package.ai_error {
        write!(
            body,
            r#"<p class="error">AI tailoring unavailable: {}. Showing the keyword-matched result.</p>"#,
            escape(error)
        )?;
    } else if package.ai_applied {
        body.push_str(r#"<p class="notice">AI suggestions applied.</p>"#);
    }
    body.push_str("</form>");

    // Preview
    body.push_str(r#"<div class="stack">"#);
    snapshot_card(&mut body, profile, form, package, role, company)?;
    letter_card(&mut body, "Cover letter draft", "Ready to edit and send", &package.cover_letter)?;
    letter_card(&mut body, "Cold outreach email", "Short intro you can paste", &package.cold_email)?;
    letter_card(&mut body, "Offer-style note", "Concise offer of value", &package.offer_letter)?;
    body.push_str("</div></div></main>");

    document(&format!("Application Studio | {}", profile.contact.name), "studio-page", &body)
}

fn keyword_status(count: usize) -> String {
    match count {
        0 => "Add requirements to extract keywords".to_string(),
        1 => "1 keyword detected".to_string(),
        n => format!("{n} keywords detected"),
    }
}

fn snapshot_card(
    html: &mut String,
    profile: &Profile,
    form: &StudioForm,
    package: &ApplicationPackage,
    role: &str,
    company: &str,
) -> std::fmt::Result {
    let snapshot = &package.snapshot;
    write!(
        html,
        r#"<section id="tailored-preview" class="glass card fade-up"><div class="row"><div><p class="muted">CV snapshot for {}</p><h2>{}</h2><p class="muted">{}</p></div><div class="chips"><span class="chip">{}</span><span class="chip outline">{}</span></div></div>"#,
        escape(if role.is_empty() { "your next role" } else { role }),
        escape(&profile.contact.name),
        escape(&profile.contact.title),
        escape(if company.is_empty() { "Company TBD" } else { company }),
        escape(if role.is_empty() { "Role TBD" } else { role })
    )?;

    html.push_str(r#"<div class="summary">"#);
    for line in &snapshot.summary {
        write!(html, r#"<p class="muted">{}</p>"#, escape(line))?;
    }
    html.push_str(r#"</div><hr><h3>Relevant skills</h3><div class="chips">"#);
    for skill in &snapshot.skills {
        write!(html, r#"<span class="chip outline">{}</span>"#, escape(skill))?;
    }
    html.push_str(r#"</div><hr><h3>Experience focus</h3>"#);
    for exp in &snapshot.experiences {
        write!(
            html,
            r#"<div class="mini"><div class="row"><div><strong>{}</strong><span class="muted small">{}</span></div><span class="muted small">{}</span></div>"#,
            escape(&exp.role),
            escape(&exp.company),
            escape(&exp.timeline)
        )?;
        let bullets: Vec<String> = exp.bullets.iter().take(PREVIEW_BULLETS).cloned().collect();
        list(html, "bullets small", &bullets)?;
        html.push_str("</div>");
    }
    html.push_str(r#"<h3>Projects to spotlight</h3>"#);
    for project in &snapshot.projects {
        write!(
            html,
            r#"<div class="mini"><strong>{}</strong><p class="muted small">{}</p><p class="muted small">{}</p></div>"#,
            escape(&project.name),
            escape(&project.impact),
            escape(&project.stack)
        )?;
    }

    // Actions: the PDF form carries the snapshot shown above.
    let cv = StudioPdfForm::encode(package, &form.tailor_request()).map_err(|_| std::fmt::Error)?;
    write!(
        html,
        r#"<div class="actions"><form method="post" action="/apply/pdf"><input type="hidden" name="cv" value="{}"><button class="button" type="submit">Download PDF</button></form><a class="button secondary" href="{}">Submit via email</a></div></section>"#,
        escape(&cv),
        escape(&package.mailto)
    )
}

fn letter_card(html: &mut String, eyebrow: &str, title: &str, text: &str) -> std::fmt::Result {
    write!(
        html,
        r#"<section class="glass card fade-up"><p class="muted">{}</p><h3>{}</h3><pre class="letter">{}</pre></section>"#,
        escape(eyebrow),
        escape(title),
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailoring::studio::build_package;

    fn render_for(form: StudioForm, ai_error: Option<String>) -> String {
        let profile = Profile::builtin().unwrap();
        let package = build_package(&profile, &form.tailor_request(), None, ai_error);
        render(&profile, &form, &package).unwrap()
    }

    #[test]
    fn test_first_visit_prefills_default_requirements() {
        let html = render_for(StudioForm::default(), None);
        assert!(html.contains("We need a full-stack engineer comfortable with Next.js"));
        assert!(html.contains("keywords detected"));
        assert!(html.contains("Company TBD"));
        assert!(html.contains("Dear Hiring Manager,"));
        assert!(html.contains(r#"action="/apply/pdf""#));
        assert!(html.contains(r#"<input type="hidden" name="cv" value="{&quot;contact&quot;:null,"#));
        assert!(html.contains(r#"href="mailto:?subject="#));
    }

    #[test]
    fn test_submitted_form_is_echoed_escaped() {
        let form = StudioForm {
            role: "SRE <lead>".to_string(),
            company: "Acme & Co".to_string(),
            requirements: Some("Kubernetes \"at scale\"".to_string()),
            use_ai: None,
        };
        let html = render_for(form, None);
        assert!(html.contains(r#"value="SRE &lt;lead&gt;""#));
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("Kubernetes &quot;at scale&quot;"));
        assert!(!html.contains("<lead>"));
        assert!(html.contains("Dear Acme &amp; Co team,"));
    }

    #[test]
    fn test_ai_error_renders_inline_with_heuristic_result() {
        let form = StudioForm {
            requirements: Some("docker".to_string()),
            use_ai: Some("on".to_string()),
            ..Default::default()
        };
        let html = render_for(form, Some("GEMINI_API_KEY is not configured on the server.".to_string()));
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("GEMINI_API_KEY is not configured on the server."));
        assert!(html.contains(r#"name="use_ai" checked"#));
        assert!(!html.contains(r#"type="hidden" name="use_ai""#));
        assert!(html.contains("1 keyword detected"));
    }

    #[test]
    fn test_empty_requirements_prompt_for_keywords() {
        let form = StudioForm {
            requirements: Some(String::new()),
            ..Default::default()
        };
        let html = render_for(form, None);
        assert!(html.contains("Add requirements to extract keywords"));
    }
}
