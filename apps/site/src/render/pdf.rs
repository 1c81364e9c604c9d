//! Tailored CV → PDF.
//!
//! Two passes: [`compose_cv`] resolves fallbacks and lays every line out on A4
//! pages (pure, testable), then [`paint`] draws the layout with printpdf's
//! built-in Helvetica faces. Painting is CPU-bound; call it from `spawn_blocking`.

use std::io::BufWriter;

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, Pt, Rgb};
use serde::{Deserialize, Serialize};

use crate::models::profile::{ContactInfo, Profile};
use crate::models::snapshot::{Snapshot, SnapshotExperience, SnapshotProject};
use crate::render::metrics::{fold_to_ascii, wrap, Font};
use crate::render::RenderError;
use crate::tailoring::selector::{PROJECT_LIMIT, SKILL_LIMIT};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
pub const MARGIN_PT: f32 = 50.0;
pub const TEXT_WIDTH_PT: f32 = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;

const LINE_HEIGHT: f32 = 1.2;
const FALLBACK_EXPERIENCES: usize = 3;
const PDF_BULLETS_PER_EXPERIENCE: usize = 4;
const BULLET: &str = "- ";
const SKILL_SEPARATOR: &str = " - ";
pub const PDF_FILENAME: &str = "tailored-cv.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

const BLACK: Rgb8 = Rgb8(0x00, 0x00, 0x00);
const TITLE_GREY: Rgb8 = Rgb8(0x44, 0x44, 0x44);
const META_GREY: Rgb8 = Rgb8(0x55, 0x55, 0x55);
const TEAL: Rgb8 = Rgb8(0x0f, 0x76, 0x6e);

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

/// Contact fields to override. Anything left out keeps the profile's value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl ContactPatch {
    fn apply(&self, base: &ContactInfo) -> ContactInfo {
        let pick = |patch: &Option<String>, base: &String| patch.clone().unwrap_or_else(|| base.clone());
        ContactInfo {
            name: pick(&self.name, &base.name),
            title: pick(&self.title, &base.title),
            location: pick(&self.location, &base.location),
            email: pick(&self.email, &base.email),
            phone: pick(&self.phone, &base.phone),
            github: pick(&self.github, &base.github),
            linkedin: pick(&self.linkedin, &base.linkedin),
        }
    }
}

/// Body of `POST /api/cv-pdf`, and the JSON the studio page embeds in its PDF
/// form. Missing or empty lists fall back to profile content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvPdfRequest {
    pub contact: Option<ContactPatch>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub summary: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub experiences: Option<Vec<SnapshotExperience>>,
    pub projects: Option<Vec<SnapshotProject>>,
}

impl CvPdfRequest {
    /// PDF request for a studio result.
    pub fn from_snapshot(snapshot: &Snapshot, role: &str, company: &str) -> Self {
        Self {
            contact: None,
            role: Some(role.to_string()),
            company: Some(company.to_string()),
            summary: Some(snapshot.summary.clone()),
            skills: Some(snapshot.skills.clone()),
            experiences: Some(snapshot.experiences.clone()),
            projects: Some(snapshot.projects.clone()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// One drawn line. `x_pt`/`y_pt` are the baseline origin in PDF space
/// (points, origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font: Font,
    pub size_pt: f32,
    pub color: Rgb8,
    pub x_pt: f32,
    pub y_pt: f32,
}

#[derive(Debug, Clone)]
pub struct CvLayout {
    pub title: String,
    pub pages: Vec<Vec<PlacedLine>>,
}

impl CvLayout {
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flatten()
    }
}

/// Cursor over A4 pages. `cursor` is the distance from the page top to the
/// top of the next line.
struct Composer {
    pages: Vec<Vec<PlacedLine>>,
    cursor: f32,
}

impl Composer {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor: MARGIN_PT,
        }
    }

    fn text(&mut self, text: &str, font: Font, size_pt: f32, color: Rgb8, line_gap: f32) {
        let folded = fold_to_ascii(text);
        let advance = size_pt * LINE_HEIGHT + line_gap;
        for line in wrap(&folded, font, size_pt, TEXT_WIDTH_PT) {
            if self.cursor + size_pt * LINE_HEIGHT > PAGE_HEIGHT_PT - MARGIN_PT {
                self.pages.push(Vec::new());
                self.cursor = MARGIN_PT;
            }
            let baseline_from_top = self.cursor + size_pt;
            if let Some(page) = self.pages.last_mut() {
                page.push(PlacedLine {
                    text: line,
                    font,
                    size_pt,
                    color,
                    x_pt: MARGIN_PT,
                    y_pt: PAGE_HEIGHT_PT - baseline_from_top,
                });
            }
            self.cursor += advance;
        }
    }

    /// Vertical gap of `lines` line-heights at `size_pt`.
    fn move_down(&mut self, lines: f32, size_pt: f32) {
        self.cursor += lines * size_pt * LINE_HEIGHT;
    }

    fn heading(&mut self, title: &str) {
        self.move_down(0.6, 12.0);
        self.text(title, Font::HelveticaBold, 12.0, BLACK, 0.0);
        self.move_down(0.2, 12.0);
    }

    fn finish(self, title: String) -> CvLayout {
        CvLayout {
            title,
            pages: self.pages,
        }
    }
}

fn non_empty<T: Clone>(list: &Option<Vec<T>>) -> Option<Vec<T>> {
    list.as_ref().filter(|l| !l.is_empty()).cloned()
}

/// Resolves the request against the profile and lays out every line.
pub fn compose_cv(profile: &Profile, request: &CvPdfRequest) -> CvLayout {
    let contact = match &request.contact {
        Some(patch) => patch.apply(&profile.contact),
        None => profile.contact.clone(),
    };
    let summary = non_empty(&request.summary).unwrap_or_else(|| profile.summary_points.clone());
    let skills = non_empty(&request.skills).unwrap_or_else(|| {
        profile
            .flat_skills()
            .into_iter()
            .take(SKILL_LIMIT)
            .map(str::to_string)
            .collect()
    });
    let experiences = non_empty(&request.experiences).unwrap_or_else(|| {
        profile
            .experience_history
            .iter()
            .take(FALLBACK_EXPERIENCES)
            .map(SnapshotExperience::from)
            .collect()
    });
    let projects = non_empty(&request.projects).unwrap_or_else(|| {
        profile
            .project_showcase
            .iter()
            .take(PROJECT_LIMIT)
            .map(SnapshotProject::from)
            .collect()
    });

    let role = request.role.as_deref().map(str::trim).unwrap_or_default();
    let company = request.company.as_deref().map(str::trim).unwrap_or_default();

    let mut c = Composer::new();

    // Header
    c.text(&contact.name, Font::HelveticaBold, 18.0, BLACK, 0.0);
    c.move_down(0.2, 18.0);
    c.text(&contact.title, Font::Helvetica, 11.0, TITLE_GREY, 0.0);
    c.move_down(0.3, 11.0);
    c.text(
        &format!("{}  |  {}  |  {}", contact.location, contact.email, contact.phone),
        Font::Helvetica,
        10.0,
        BLACK,
        0.0,
    );
    c.text(
        &format!("{}  |  {}", contact.github, contact.linkedin),
        Font::Helvetica,
        10.0,
        BLACK,
        0.0,
    );
    if !role.is_empty() || !company.is_empty() {
        c.move_down(0.3, 10.0);
        let role_name = if role.is_empty() { "Role" } else { role };
        let target = if company.is_empty() {
            format!("Target: {role_name}")
        } else {
            format!("Target: {role_name} @ {company}")
        };
        c.text(&target, Font::Helvetica, 10.0, TEAL, 0.0);
    }

    c.heading("Summary");
    for line in &summary {
        c.text(&format!("{BULLET}{line}"), Font::Helvetica, 10.0, BLACK, 2.0);
    }

    c.heading("Skills");
    c.text(&skills.join(SKILL_SEPARATOR), Font::Helvetica, 10.0, BLACK, 2.0);

    c.heading("Experience");
    for exp in &experiences {
        c.text(
            &format!("{}  |  {}", exp.role, exp.company),
            Font::HelveticaBold,
            11.0,
            BLACK,
            0.0,
        );
        c.text(&exp.timeline, Font::Helvetica, 9.0, META_GREY, 0.0);
        for bullet in exp.bullets.iter().take(PDF_BULLETS_PER_EXPERIENCE) {
            c.text(&format!("{BULLET}{bullet}"), Font::Helvetica, 9.0, BLACK, 1.0);
        }
        c.move_down(0.3, 9.0);
    }

    c.heading("Projects");
    for proj in &projects {
        c.text(&proj.name, Font::HelveticaBold, 11.0, BLACK, 0.0);
        c.text(&proj.stack, Font::Helvetica, 9.0, META_GREY, 0.0);
        c.text(&proj.impact, Font::Helvetica, 10.0, BLACK, 0.0);
        c.move_down(0.3, 10.0);
    }

    c.finish(fold_to_ascii(&format!("{} - CV", contact.name)))
}

// ────────────────────────────────────────────────────────────────────────────
// Painting
// ────────────────────────────────────────────────────────────────────────────

/// Draws a composed layout. Returns the PDF bytes.
pub fn paint(layout: &CvLayout) -> Result<Vec<u8>, RenderError> {
    let width = Mm::from(Pt(PAGE_WIDTH_PT));
    let height = Mm::from(Pt(PAGE_HEIGHT_PT));
    let (doc, first_page, first_layer) = PdfDocument::new(&layout.title, width, height, "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Font(e.to_string()))?;

    for (index, lines) in layout.pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("Layer {}", index + 1))
        };
        let layer = doc.get_page(page).get_layer(layer);

        for line in lines {
            let font: &IndirectFontRef = match line.font {
                Font::Helvetica => &regular,
                Font::HelveticaBold => &bold,
            };
            let Rgb8(r, g, b) = line.color;
            layer.set_fill_color(Color::Rgb(Rgb::new(
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
                None,
            )));
            layer.use_text(
                line.text.as_str(),
                line.size_pt,
                Mm::from(Pt(line.x_pt)),
                Mm::from(Pt(line.y_pt)),
                font,
            );
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Save(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| RenderError::Save(e.to_string()))
}

/// `compose_cv` then `paint`.
pub fn render_cv(profile: &Profile, request: &CvPdfRequest) -> Result<Vec<u8>, RenderError> {
    paint(&compose_cv(profile, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::builtin().unwrap()
    }

    fn texts(layout: &CvLayout) -> Vec<&str> {
        layout.lines().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_empty_request_uses_profile_fallbacks() {
        let layout = compose_cv(&profile(), &CvPdfRequest::default());
        let texts = texts(&layout);

        assert_eq!(texts[0], "OluKayode (Peters) Soliu");
        for heading in ["Summary", "Skills", "Experience", "Projects"] {
            assert!(texts.contains(&heading), "missing {heading}");
        }
        assert!(texts.iter().any(|t| t.starts_with("- Full-stack engineer building")));
        assert!(texts.iter().any(|t| t.starts_with("JavaScript - TypeScript - Solidity")));
        // First three experiences, first two projects
        assert!(texts.contains(&"Software Engineer / DevOps  |  Wanzami"));
        assert!(texts.contains(&"Full Stack Engineer  |  Forditva"));
        assert!(!texts.iter().any(|t| t.contains("Talk2memo") && t.contains("  |  ")));
        assert!(texts.contains(&"Hashiro (NFT Marketplace)"));
        assert!(!texts.contains(&"BLVCK CODE Home Automation"));
        // No target line without role or company
        assert!(!texts.iter().any(|t| t.starts_with("Target:")));
    }

    #[test]
    fn test_empty_lists_count_as_missing() {
        let request = CvPdfRequest {
            skills: Some(vec![]),
            summary: Some(vec![]),
            ..Default::default()
        };
        let texts_owned: Vec<String> = compose_cv(&profile(), &request)
            .lines()
            .map(|l| l.text.clone())
            .collect();
        assert!(texts_owned.iter().any(|t| t.starts_with("JavaScript")));
        assert!(texts_owned.iter().any(|t| t.starts_with("- Full-stack engineer")));
    }

    #[test]
    fn test_request_content_and_target_line() {
        let request = CvPdfRequest {
            contact: Some(ContactPatch {
                name: Some("Jane Doe".to_string()),
                ..Default::default()
            }),
            role: Some("SRE".to_string()),
            company: Some("Acme".to_string()),
            skills: Some(vec!["Rust".to_string(), "Go".to_string()]),
            ..Default::default()
        };
        let layout = compose_cv(&profile(), &request);
        let texts = texts(&layout);
        assert_eq!(texts[0], "Jane Doe");
        // Unpatched contact fields keep the profile values
        assert!(texts.iter().any(|t| t.contains("Soliupeter@gmail.com")));
        assert!(texts.contains(&"Rust - Go"));

        let target = layout
            .lines()
            .find(|l| l.text.starts_with("Target:"))
            .unwrap();
        assert_eq!(target.text, "Target: SRE @ Acme");
        assert_eq!(target.color, TEAL);
    }

    #[test]
    fn test_company_only_target_defaults_role() {
        let request = CvPdfRequest {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        let layout = compose_cv(&profile(), &request);
        assert!(layout.lines().any(|l| l.text == "Target: Role @ Acme"));
    }

    #[test]
    fn test_experience_bullets_capped_at_four() {
        let request = CvPdfRequest {
            experiences: Some(vec![SnapshotExperience {
                role: "Engineer".to_string(),
                company: "A".to_string(),
                timeline: "2020".to_string(),
                bullets: (1..=6).map(|i| format!("Bullet {i}")).collect(),
            }]),
            ..Default::default()
        };
        let layout = compose_cv(&profile(), &request);
        let bullets = layout.lines().filter(|l| l.text.starts_with("- Bullet")).count();
        assert_eq!(bullets, 4);
    }

    #[test]
    fn test_lines_stay_inside_margins() {
        let layout = compose_cv(&profile(), &CvPdfRequest::default());
        for line in layout.lines() {
            assert!(line.y_pt >= MARGIN_PT - 1e-3, "{} below margin", line.text);
            assert!(line.y_pt <= PAGE_HEIGHT_PT - MARGIN_PT);
        }
    }

    #[test]
    fn test_long_content_breaks_onto_new_pages() {
        let request = CvPdfRequest {
            summary: Some((0..120).map(|i| format!("Summary point number {i}.")).collect()),
            ..Default::default()
        };
        let layout = compose_cv(&profile(), &request);
        assert!(layout.pages.len() >= 2);
        // Each page restarts at the top margin.
        let first_on_second = &layout.pages[1][0];
        assert!((PAGE_HEIGHT_PT - first_on_second.y_pt - MARGIN_PT - first_on_second.size_pt).abs() < 1e-3);
    }

    #[test]
    fn test_text_is_folded_for_builtin_fonts() {
        let request = CvPdfRequest {
            summary: Some(vec!["Shipped “fast” — twice".to_string()]),
            ..Default::default()
        };
        let layout = compose_cv(&profile(), &request);
        assert!(layout.lines().any(|l| l.text == "- Shipped \"fast\" - twice"));
        assert!(layout.lines().all(|l| l.text.is_ascii()));
    }

    #[test]
    fn test_paint_produces_pdf_bytes() {
        let bytes = render_cv(&profile(), &CvPdfRequest::default()).unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn test_paint_multi_page() {
        let request = CvPdfRequest {
            summary: Some((0..120).map(|i| format!("Point {i}")).collect()),
            ..Default::default()
        };
        let layout = compose_cv(&profile(), &request);
        assert!(layout.pages.len() >= 2);
        let bytes = paint(&layout).unwrap();
        assert_eq!(&bytes[0..5], b"%PDF-");
    }

    #[test]
    fn test_cv_request_accepts_partial_json() {
        let request: CvPdfRequest = serde_json::from_str(
            r#"{"contact": {"email": "x@y.z"}, "skills": ["Rust"], "experiences": []}"#,
        )
        .unwrap();
        assert_eq!(request.contact.unwrap().email.as_deref(), Some("x@y.z"));
        assert_eq!(request.experiences, Some(vec![]));
        assert!(request.role.is_none());
    }
}
