//! Server-rendered HTML for the portfolio, the printable CV and the Application Studio.
//!
//! Pages are plain strings built with `write!`. Every interpolated value goes
//! through [`escape`]; nothing here runs client-side script.

pub mod cv;
pub mod handlers;
pub mod home;
pub mod studio;

use std::fmt::Write;

pub const STYLESHEET: &str = include_str!("../../assets/site.css");

/// Escapes text for HTML element content and double-quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a page body in the shared document shell.
pub fn document(title: &str, body_class: &str, body: &str) -> Result<String, std::fmt::Error> {
    let mut html = String::with_capacity(body.len() + 512);
    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<link rel="stylesheet" href="/assets/site.css">
</head>
<body class="{}">
{}
</body>
</html>
"#,
        escape(title),
        escape(body_class),
        body
    )?;
    Ok(html)
}

/// `<ul>` of escaped items with the given class; empty lists render nothing.
pub(crate) fn list(html: &mut String, class: &str, items: &[String]) -> std::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    write!(html, r#"<ul class="{}">"#, escape(class))?;
    for item in items {
        write!(html, "<li>{}</li>", escape(item))?;
    }
    html.push_str("</ul>");
    Ok(())
}
