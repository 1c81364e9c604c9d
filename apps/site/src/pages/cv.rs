//! Printable CV of the full profile.

use std::fmt::Write;

use crate::models::profile::Profile;
use crate::pages::{document, escape, list};

pub fn render(profile: &Profile) -> Result<String, std::fmt::Error> {
    let c = &profile.contact;
    let mut body = String::with_capacity(16 * 1024);

    body.push_str(r#"<main class="cv-sheet"><nav class="cv-actions no-print"><a href="/">&larr; Portfolio</a><a href="/apply">Tailor this CV</a></nav>"#);
    write!(
        body,
        r#"<header class="cv-header"><h1>{}</h1><p class="cv-title">{}</p><p class="cv-contact">{} &middot; <a href="mailto:{}">{}</a> &middot; {}</p><p class="cv-contact"><a href="{}">{}</a> &middot; <a href="{}">{}</a></p></header>"#,
        escape(&c.name),
        escape(&c.title),
        escape(&c.location),
        escape(&c.email),
        escape(&c.email),
        escape(&c.phone),
        escape(&c.github),
        escape(&c.github),
        escape(&c.linkedin),
        escape(&c.linkedin),
    )?;

    body.push_str(r#"<section class="cv-section"><h2>Summary</h2>"#);
    list(&mut body, "cv-bullets", &profile.summary_points)?;
    body.push_str("</section>");

    body.push_str(r#"<section class="cv-section"><h2>Skills</h2><dl class="cv-skills">"#);
    for group in &profile.skill_groups {
        write!(
            body,
            "<dt>{}</dt><dd>{}</dd>",
            escape(&group.label),
            escape(&group.items.join(", "))
        )?;
    }
    body.push_str("</dl></section>");

    body.push_str(r#"<section class="cv-section"><h2>Experience</h2>"#);
    for exp in &profile.experience_history {
        write!(
            body,
            r#"<article class="cv-entry"><div class="cv-row"><h3>{} &middot; {}</h3><span>{}</span></div>"#,
            escape(&exp.role),
            escape(&exp.company),
            escape(&exp.timeline)
        )?;
        list(&mut body, "cv-bullets", &exp.bullets)?;
        body.push_str("</article>");
    }
    body.push_str("</section>");

    body.push_str(r#"<section class="cv-section"><h2>Selected Projects</h2>"#);
    for project in &profile.project_showcase {
        write!(
            body,
            r#"<article class="cv-entry"><div class="cv-row"><h3>{}</h3><span>{}</span></div><p>{}</p></article>"#,
            escape(&project.name),
            escape(&project.stack),
            escape(&project.impact)
        )?;
    }
    body.push_str("</section></main>");

    document(&format!("{} | CV", c.name), "cv", &body)
}
