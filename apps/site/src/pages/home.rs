//! Single-page portfolio: navbar, hero, about, skills, experience, projects,
//! GitHub showcase, contact, footer.

use std::fmt::{Result, Write};

use crate::models::profile::Profile;
use crate::pages::{document, escape, list};

const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("GitHub", "#github"),
    ("Contact", "#contact"),
];

/// Brand shown in the navbar and footer: first name plus `.dev`.
fn brand(profile: &Profile) -> String {
    let first = profile
        .contact
        .name
        .split_whitespace()
        .next()
        .unwrap_or("portfolio");
    format!("{first}.dev")
}

pub fn render(profile: &Profile, year: i32) -> std::result::Result<String, std::fmt::Error> {
    let mut body = String::with_capacity(32 * 1024);
    navbar(&mut body, profile)?;
    body.push_str("<main>");
    hero(&mut body, profile)?;
    about(&mut body, profile)?;
    skills(&mut body, profile)?;
    experience(&mut body, profile)?;
    projects(&mut body, profile)?;
    github(&mut body, profile)?;
    contact(&mut body, profile)?;
    body.push_str("</main>");
    footer(&mut body, profile, year)?;

    document(
        &format!("{} | {}", profile.contact.name, profile.contact.title),
        "home",
        &body,
    )
}

fn section_header(html: &mut String, id: &str, title: &str, subtitle: &str) -> Result {
    write!(
        html,
        r#"<section id="{id}" class="section reveal"><header class="section-header"><h2 class="gradient-text">{}</h2><p class="muted">{}</p></header>"#,
        escape(title),
        escape(subtitle)
    )
}

fn navbar(html: &mut String, profile: &Profile) -> Result {
    write!(
        html,
        r##"<nav class="navbar"><a class="brand gradient-text" href="#home">{}</a><div class="nav-links">"##,
        escape(&brand(profile))
    )?;
    for (label, href) in NAV_LINKS {
        write!(html, r#"<a href="{href}">{label}</a>"#)?;
    }
    html.push_str(r##"</div><a class="button primary" href="#contact">Let's Talk</a></nav>"##);
    Ok(())
}

fn hero(html: &mut String, profile: &Profile) -> Result {
    let contact = &profile.contact;
    html.push_str(r#"<section id="home" class="hero"><div class="glow glow-a"></div><div class="glow glow-b"></div><div class="hero-card glass fade-up">"#);
    write!(
        html,
        r#"<p class="eyebrow">Hello, I'm</p><h1 class="gradient-text">{}</h1><p class="titles">"#,
        escape(&contact.name)
    )?;
    for (i, part) in contact.title.split('|').map(str::trim).enumerate() {
        if i > 0 {
            html.push_str(r#"<span class="dot">&middot;</span>"#);
        }
        write!(html, "<span>{}</span>", escape(part))?;
    }
    write!(html, r#"</p><p class="lead">{}</p>"#, escape(&profile.tagline))?;

    html.push_str(r#"<div class="actions"><a class="button primary" href="/cv">View CV</a><a class="button" href="/apply">Application Studio</a>"#);
    write!(
        html,
        r#"<a class="button ghost" href="{}" rel="noopener">GitHub</a><a class="button ghost" href="{}" rel="noopener">LinkedIn</a>"#,
        escape(&contact.github),
        escape(&contact.linkedin)
    )?;
    html.push_str("</div></div></section>");
    Ok(())
}

fn about(html: &mut String, profile: &Profile) -> Result {
    section_header(html, "about", "About Me", "Passionate about building the future of technology")?;
    html.push_str(r#"<div class="grid two"><div class="glass card">"#);
    for paragraph in &profile.about {
        write!(html, "<p>{}</p>", escape(paragraph))?;
    }
    write!(
        html,
        r#"<div class="stats"><div><strong>{}+</strong><span>Years Experience</span></div><div><strong>{}+</strong><span>Projects Delivered</span></div></div>"#,
        years_active(profile),
        profile.project_showcase.len()
    )?;
    html.push_str(r#"</div><div class="stack">"#);
    if !profile.philosophy.is_empty() {
        html.push_str(r#"<div class="glass card"><h3>Philosophy</h3>"#);
        list(html, "bullets", &profile.philosophy)?;
        html.push_str("</div>");
    }
    if !profile.services.is_empty() {
        html.push_str(r#"<div class="glass card"><h3>Core Expertise</h3><div class="chips">"#);
        for service in &profile.services {
            write!(html, r#"<span class="chip">{}</span>"#, escape(service))?;
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div></div></section>");
    Ok(())
}

/// Span from the earliest year in any experience timeline to the latest.
fn years_active(profile: &Profile) -> i32 {
    let years: Vec<i32> = profile
        .experience_history
        .iter()
        .flat_map(|exp| {
            exp.timeline
                .split(|c: char| !c.is_ascii_digit())
                .filter_map(|part| part.parse::<i32>().ok())
                .filter(|y| *y > 1900)
                .collect::<Vec<_>>()
        })
        .collect();
    let earliest = years.iter().min().copied();
    let latest = years.iter().max().copied();
    let ongoing = profile
        .experience_history
        .iter()
        .any(|exp| exp.timeline.to_lowercase().contains("present"));
    match (earliest, latest) {
        (Some(first), Some(last)) => {
            let end = if ongoing {
                last.max(chrono::Datelike::year(&chrono::Utc::now()))
            } else {
                last
            };
            (end - first).max(1)
        }
        _ => 1,
    }
}

fn skills(html: &mut String, profile: &Profile) -> Result {
    section_header(
        html,
        "skills",
        "Skills & Technologies",
        "A comprehensive toolkit for building modern, scalable applications",
    )?;
    html.push_str(r#"<div class="grid three">"#);
    for (i, group) in profile.skill_groups.iter().enumerate() {
        write!(
            html,
            r#"<div class="glass card lift" style="animation-delay:{}ms"><h3>{}</h3><div class="chips">"#,
            i * 80,
            escape(&group.label)
        )?;
        for item in &group.items {
            write!(html, r#"<span class="chip">{}</span>"#, escape(item))?;
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div></section>");
    Ok(())
}

fn experience(html: &mut String, profile: &Profile) -> Result {
    section_header(
        html,
        "experience",
        "Professional Experience",
        "A journey through innovation, leadership, and technical excellence",
    )?;
    html.push_str(r#"<ol class="timeline">"#);
    for exp in &profile.experience_history {
        write!(
            html,
            r#"<li class="glass card"><div class="row"><div><h3>{}</h3><p class="accent">{}</p></div><span class="pill">{}</span></div>"#,
            escape(&exp.role),
            escape(&exp.company),
            escape(&exp.timeline)
        )?;
        if let Some(description) = &exp.description {
            write!(html, r#"<p class="muted">{}</p>"#, escape(description))?;
        }
        list(html, "bullets", &exp.bullets)?;
        html.push_str("</li>");
    }
    html.push_str("</ol></section>");
    Ok(())
}

fn projects(html: &mut String, profile: &Profile) -> Result {
    section_header(
        html,
        "projects",
        "Featured Projects",
        "Transforming ideas into production-ready applications",
    )?;
    html.push_str(r#"<div class="grid two">"#);
    for project in &profile.project_showcase {
        write!(html, r#"<article class="glass card lift"><h3>{}</h3>"#, escape(&project.name))?;
        if let Some(subtitle) = &project.subtitle {
            write!(html, r#"<p class="accent">{}</p>"#, escape(subtitle))?;
        }
        let description = project.description.as_deref().unwrap_or(&project.impact);
        write!(html, r#"<p class="muted">{}</p>"#, escape(description))?;
        list(html, "bullets", &project.features)?;
        html.push_str(r#"<div class="chips">"#);
        for tech in project.stack.split('|').map(str::trim).filter(|t| !t.is_empty()) {
            write!(html, r#"<span class="chip">{}</span>"#, escape(tech))?;
        }
        html.push_str("</div></article>");
    }
    html.push_str("</div></section>");
    Ok(())
}

fn github(html: &mut String, profile: &Profile) -> Result {
    let gh = &profile.github;
    section_header(html, "github", "GitHub Activity", "Building in public, one commit at a time")?;

    let total_stars: u32 = gh.pinned.iter().map(|r| r.stars).sum();
    let total_forks: u32 = gh.pinned.iter().map(|r| r.forks).sum();
    write!(
        html,
        r#"<div class="stats glass card"><div><strong>{}</strong><span>Public Repos</span></div><div><strong>{total_stars}</strong><span>Stars on pinned</span></div><div><strong>{total_forks}</strong><span>Forks on pinned</span></div></div>"#,
        escape(&gh.public_repos)
    )?;

    if !gh.contributions.is_empty() {
        html.push_str(r#"<div class="glass card"><div class="row"><h3>Contribution Activity</h3><span class="muted">Last 6 months</span></div><div class="contrib">"#);
        for week in &gh.contributions {
            html.push_str(r#"<div class="week">"#);
            for level in week {
                write!(html, r#"<span class="day lvl-{}"></span>"#, (*level).min(3))?;
            }
            html.push_str("</div>");
        }
        html.push_str(r#"</div><p class="legend muted">Less <span class="day lvl-0"></span><span class="day lvl-1"></span><span class="day lvl-2"></span><span class="day lvl-3"></span> More</p></div>"#);
    }

    if !gh.pinned.is_empty() {
        html.push_str(r#"<h3 class="subheading">Pinned Repositories</h3><div class="grid three">"#);
        for repo in &gh.pinned {
            write!(
                html,
                r#"<a class="glass card lift repo" href="https://github.com/{}/{}" rel="noopener"><h4>{}</h4><p class="muted">{}</p><p class="repo-meta"><span class="swatch" style="background:{}"></span>{} <span>&#9733; {}</span> <span>&#8916; {}</span></p></a>"#,
                escape(&gh.username),
                escape(&repo.name),
                escape(&repo.name),
                escape(&repo.description),
                escape(&repo.color),
                escape(&repo.language),
                repo.stars,
                repo.forks
            )?;
        }
        html.push_str("</div>");
    }
    write!(
        html,
        r#"<p class="center"><a class="button" href="https://github.com/{}" rel="noopener">View all on GitHub</a></p></section>"#,
        escape(&gh.username)
    )
}

fn contact(html: &mut String, profile: &Profile) -> Result {
    section_header(
        html,
        "contact",
        "Let's Build Something Amazing",
        "Have a project in mind? Let's discuss how we can work together",
    )?;
    let c = &profile.contact;
    write!(
        html,
        r#"<div class="grid two"><div class="glass card"><h3>Get in Touch</h3><p><span class="muted">Email</span><br><a href="mailto:{}">{}</a></p><p><span class="muted">Location</span><br>{}</p><p><span class="muted">Response Time</span><br>Usually within 24 hours</p></div>"#,
        escape(&c.email),
        escape(&c.email),
        escape(&c.location)
    )?;
    html.push_str(r#"<div class="glass card"><h3>Connect With Me</h3><div class="socials">"#);
    for (label, url) in profile.social_links() {
        write!(
            html,
            r#"<a class="button ghost" href="{}" rel="noopener">{label}</a>"#,
            escape(&url)
        )?;
    }
    html.push_str(r#"</div><p class="badge-live"><span class="pulse"></span>Available for new projects</p></div></div></section>"#);
    Ok(())
}

fn footer(html: &mut String, profile: &Profile, year: i32) -> Result {
    write!(
        html,
        r#"<footer class="footer"><h3 class="gradient-text">{}</h3><p class="muted">Building the future of technology, one line of code at a time.</p><div class="socials">"#,
        escape(&brand(profile))
    )?;
    for (label, url) in profile.social_links() {
        write!(html, r#"<a href="{}" rel="noopener">{label}</a>"#, escape(&url))?;
    }
    write!(
        html,
        r#"</div><p class="muted small">&copy; {year} {}. Built with Rust &amp; axum.</p></footer>"#,
        escape(&profile.contact.name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> String {
        render(&Profile::builtin().unwrap(), 2026).unwrap()
    }

    #[test]
    fn test_home_has_every_anchor() {
        let html = page();
        for id in ["home", "about", "skills", "experience", "projects", "github", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
            assert!(html.contains(&format!(r##"href="#{id}""##)), "missing nav link {id}");
        }
    }

    #[test]
    fn test_home_renders_profile_content() {
        let html = page();
        assert!(html.contains("OluKayode (Peters) Soliu"));
        assert!(html.contains("OluKayode.dev"));
        assert!(html.contains(r#"href="/cv""#));
        assert!(html.contains(r#"href="/apply""#));
        assert!(html.contains("Wanzami"));
        assert!(html.contains("hashiro-nft-marketplace"));
        assert!(html.contains("mailto:Soliupeter@gmail.com"));
        assert!(html.contains("&copy; 2026"));
        // Skill group labels are escaped
        assert!(html.contains("Blockchain &amp; Web3"));
    }

    #[test]
    fn test_contribution_grid_has_one_cell_per_day() {
        let profile = Profile::builtin().unwrap();
        let html = page();
        let cells = html.matches(r#"<span class="day lvl-"#).count();
        // Grid cells plus the four legend swatches
        assert_eq!(cells, profile.github.contributions.len() * 7 + 4);
    }

    #[test]
    fn test_years_active_counts_from_earliest_role() {
        let profile = Profile::builtin().unwrap();
        assert!(years_active(&profile) >= 6);
    }
}
