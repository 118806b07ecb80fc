//! Folio Code Generator
//!
//! Renders a portfolio document into a static site: one HTML page, one
//! stylesheet, one behavior script and a README.
//!
//! ```text
//! PortfolioDocument + template → generate() → GeneratedSite { html, css, js, readme }
//! ```
//!
//! The page layout is the same for every template. The template name is
//! only displayed; the template's palette is used when the document has no
//! color scheme of its own.
//!
//! One renderer serves two wirings: [`RenderMode::Linked`] references
//! `css/styles.css` and `js/main.js` (the downloadable bundle) and
//! [`RenderMode::Inline`] embeds both in the page (the live preview).

pub mod css;
pub mod html;
pub mod js;
pub mod readme;

use chrono::{Datelike, NaiveDate};
use folio_model::palette::{self, Palette};
use folio_model::{Classifier, PortfolioDocument};

pub const INDEX_HTML: &str = "index.html";
pub const STYLES_CSS: &str = "css/styles.css";
pub const MAIN_JS: &str = "js/main.js";
pub const README_MD: &str = "README.md";

/// The four generated files.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSite {
    pub index_html: String,
    pub styles_css: String,
    pub main_js: String,
    pub readme: String,
}

impl GeneratedSite {
    /// `(path, content)` pairs in bundle order.
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            (INDEX_HTML, self.index_html.as_str()),
            (STYLES_CSS, self.styles_css.as_str()),
            (MAIN_JS, self.main_js.as_str()),
            (README_MD, self.readme.as_str()),
        ]
    }
}

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation error: failed to format output")]
    Format(#[from] std::fmt::Error),
}

/// How the page references its stylesheet and script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// `<link>` / `<script src>` to the bundled files.
    #[default]
    Linked,
    /// CSS and JS embedded in the page.
    Inline,
}

/// The time-varying inputs of a build: footer year and README date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStamp {
    pub date: NaiveDate,
}

impl BuildStamp {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Everything the renderers read besides the document itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub stamp: BuildStamp,
    /// Used when the document has no color scheme.
    pub palette: &'static Palette,
    pub classifier: Classifier,
}

impl RenderOptions {
    pub fn new(mode: RenderMode, stamp: BuildStamp) -> Self {
        Self {
            mode,
            stamp,
            palette: &palette::DEFAULT,
            classifier: Classifier::default(),
        }
    }

    pub fn linked() -> Self {
        Self::new(RenderMode::Linked, BuildStamp::today())
    }

    pub fn inline() -> Self {
        Self::new(RenderMode::Inline, BuildStamp::today())
    }

    pub fn with_palette(mut self, palette: &'static Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Generate every file of the site.
pub fn generate(
    portfolio: &PortfolioDocument,
    template_name: &str,
    opts: &RenderOptions,
) -> Result<GeneratedSite, GenerationError> {
    let index_html = html::generate(portfolio, template_name, opts)?;
    let styles_css = css::generate(portfolio, opts.palette)?;
    let main_js = js::generate()?;
    let readme = readme::generate(portfolio, template_name, &opts.stamp)?;

    Ok(GeneratedSite {
        index_html,
        styles_css,
        main_js,
        readme,
    })
}

/// Exported page for `portfolio`, stamped with today's date.
pub fn render_html(
    portfolio: &PortfolioDocument,
    template_name: &str,
) -> Result<String, GenerationError> {
    html::generate(portfolio, template_name, &RenderOptions::linked())
}

/// Stylesheet for `portfolio`, using the default palette as fallback.
pub fn render_css(portfolio: &PortfolioDocument) -> Result<String, GenerationError> {
    css::generate(portfolio, &palette::DEFAULT)
}

pub fn render_js() -> Result<String, GenerationError> {
    js::generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{EducationEntry, Project, Skill};
    use pretty_assertions::assert_eq;

    fn stamp() -> BuildStamp {
        BuildStamp::new(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
    }

    fn sample() -> PortfolioDocument {
        let mut doc = PortfolioDocument::default();
        doc.name = "Ada's Portfolio".into();
        doc.personal_info.first_name = "Ada".into();
        doc.personal_info.last_name = "Lovelace".into();
        doc.skills = vec![Skill::new("Rust", 5, Some("Languages"))];
        doc.projects = vec![Project {
            title: "Analytical Engine".into(),
            ..Project::default()
        }];
        doc.education = vec![EducationEntry::new("University of London", "BA")];
        doc
    }

    #[test]
    fn test_files_layout() {
        let site = generate(&sample(), "minimal", &RenderOptions::new(RenderMode::Linked, stamp()))
            .unwrap();
        let paths: Vec<&str> = site.files().iter().map(|(p, _)| *p).collect();
        assert_eq!(
            paths,
            vec!["index.html", "css/styles.css", "js/main.js", "README.md"]
        );
        assert_eq!(site.files()[1].1, site.styles_css);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let opts = RenderOptions::new(RenderMode::Linked, stamp());
        let a = generate(&sample(), "modern", &opts).unwrap();
        let b = generate(&sample(), "modern", &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_does_not_touch_document() {
        let doc = sample();
        let before = doc.clone();
        generate(&doc, "modern", &RenderOptions::new(RenderMode::Inline, stamp())).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn test_linked_page_references_bundle_files() {
        let site = generate(&sample(), "minimal", &RenderOptions::new(RenderMode::Linked, stamp()))
            .unwrap();
        assert!(site.index_html.contains("href=\"css/styles.css\""));
        assert!(site.index_html.contains("<script src=\"js/main.js\"></script>"));
        assert!(!site.index_html.contains("<style>"));
    }

    #[test]
    fn test_inline_page_embeds_css_and_js() {
        let opts = RenderOptions::new(RenderMode::Inline, stamp());
        let site = generate(&sample(), "minimal", &opts).unwrap();
        assert!(site.index_html.contains(&site.styles_css));
        assert!(site.index_html.contains(&site.main_js));
        assert!(!site.index_html.contains("css/styles.css"));
        assert!(!site.index_html.contains("js/main.js"));
    }

    #[test]
    fn test_palette_fallback_reaches_css() {
        let opts = RenderOptions::new(RenderMode::Linked, stamp()).with_palette(&palette::FOREST);
        let site = generate(&sample(), "modern", &opts).unwrap();
        assert!(site.styles_css.contains(palette::FOREST.primary));
    }

    #[test]
    fn test_convenience_renderers() {
        let html = render_html(&sample(), "minimal").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(render_css(&sample()).unwrap().contains(palette::DEFAULT.primary));
        assert_eq!(render_js().unwrap(), js::generate().unwrap());
    }

    #[test]
    fn test_stamp_year() {
        assert_eq!(stamp().year(), 2026);
    }
}
