//! CSS code generator.
//!
//! The palette lands in `:root` custom properties, copied verbatim; the
//! layout rules after it are the same for every portfolio.

use std::fmt::Write;

use folio_model::palette::Palette;
use folio_model::PortfolioDocument;

use crate::GenerationError;

/// Layout shared by every template. Breakpoint at 768px.
const LAYOUT: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
  line-height: 1.6;
  color: var(--text-color);
  background-color: var(--background-color);
}

a {
  color: var(--primary-color);
  text-decoration: none;
}

a:hover {
  color: var(--accent-color);
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 20px;
}

/* Header */
.site-header {
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
  color: #ffffff;
  padding: 80px 0 60px;
  text-align: center;
}

.header-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 12px;
}

.profile-photo {
  width: 150px;
  height: 150px;
  border-radius: 50%;
  object-fit: cover;
  border: 4px solid #ffffff;
}

.name {
  font-size: 2.75rem;
  font-weight: 700;
}

.headline {
  font-size: 1.25rem;
  opacity: 0.9;
}

/* Navigation */
.site-nav {
  position: sticky;
  top: 0;
  z-index: 100;
  background-color: var(--secondary-color);
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
}

.nav-links {
  display: flex;
  justify-content: center;
  list-style: none;
  gap: 8px;
}

.nav-links a {
  display: block;
  padding: 14px 18px;
  color: #ffffff;
  font-weight: 500;
  transition: background-color 0.2s;
}

.nav-links a:hover,
.nav-links a.active {
  background-color: var(--primary-color);
  color: #ffffff;
}

/* Sections */
.section {
  padding: 70px 0;
}

.section:nth-child(even) {
  background-color: rgba(0, 0, 0, 0.03);
}

.section-title {
  font-size: 2rem;
  margin-bottom: 32px;
  text-align: center;
  color: var(--secondary-color);
}

.section-title::after {
  content: '';
  display: block;
  width: 60px;
  height: 3px;
  margin: 12px auto 0;
  background-color: var(--accent-color);
}

.placeholder {
  text-align: center;
  font-style: italic;
  opacity: 0.7;
}

.about-text {
  max-width: 760px;
  margin: 0 auto 16px;
  font-size: 1.1rem;
}

/* Skills */
.skills-container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 30px;
}

.skill-category h3 {
  margin-bottom: 16px;
  color: var(--primary-color);
}

.skill-list {
  list-style: none;
}

.skill-item {
  margin-bottom: 14px;
}

.skill-name {
  display: block;
  margin-bottom: 6px;
  font-weight: 500;
}

.skill-bar {
  height: 8px;
  border-radius: 4px;
  background-color: rgba(0, 0, 0, 0.1);
  overflow: hidden;
}

.skill-level {
  height: 100%;
  border-radius: 4px;
  background-color: var(--primary-color);
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 30px;
}

.project-card {
  display: flex;
  flex-direction: column;
  border-radius: 8px;
  overflow: hidden;
  background-color: var(--background-color);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
  transition: transform 0.2s;
}

.project-card:hover {
  transform: translateY(-4px);
}

.project-image {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.project-content {
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.project-title {
  color: var(--secondary-color);
}

.project-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.tech-tag {
  padding: 2px 10px;
  border-radius: 12px;
  font-size: 0.85rem;
  background-color: var(--accent-color);
  color: #ffffff;
}

.project-links {
  display: flex;
  gap: 16px;
}

/* Timeline */
.timeline {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
  padding-left: 30px;
  border-left: 3px solid var(--primary-color);
}

.timeline-item {
  position: relative;
  margin-bottom: 30px;
}

.timeline-item::before {
  content: '';
  position: absolute;
  left: -39px;
  top: 6px;
  width: 15px;
  height: 15px;
  border-radius: 50%;
  background-color: var(--background-color);
  border: 3px solid var(--primary-color);
}

.experience-item::before {
  border-color: var(--accent-color);
}

.timeline-content h4 {
  font-weight: 500;
  opacity: 0.85;
}

.timeline-date {
  display: inline-block;
  margin: 4px 0 8px;
  font-size: 0.9rem;
  color: var(--accent-color);
}

/* Contact */
.contact-info {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 10px;
  margin-bottom: 24px;
}

.contact-item i {
  margin-right: 8px;
  color: var(--primary-color);
}

.social-links {
  display: flex;
  justify-content: center;
  gap: 18px;
  font-size: 1.6rem;
}

/* Footer */
.site-footer {
  padding: 24px 0;
  text-align: center;
  background-color: var(--secondary-color);
  color: #ffffff;
}

@media (max-width: 768px) {
  .name {
    font-size: 2rem;
  }

  .nav-links {
    flex-wrap: wrap;
    gap: 0;
  }

  .nav-links a {
    padding: 10px 12px;
  }

  .section {
    padding: 50px 0;
  }

  .projects-grid,
  .skills-container {
    grid-template-columns: 1fr;
  }
}
"#;

/// Generate the stylesheet. `fallback` supplies the colors when the document
/// has no color scheme; values are never validated.
pub fn generate(portfolio: &PortfolioDocument, fallback: &Palette) -> Result<String, GenerationError> {
    let colors = portfolio.color_scheme_or(fallback);
    let mut css = String::with_capacity(LAYOUT.len() + 512);

    writeln!(css, "/* Stylesheet for {} */", comment_safe(&portfolio.display_name()))?;
    writeln!(css)?;
    writeln!(css, ":root {{")?;
    writeln!(css, "  --primary-color: {};", colors.primary)?;
    writeln!(css, "  --secondary-color: {};", colors.secondary)?;
    writeln!(css, "  --accent-color: {};", colors.accent)?;
    writeln!(css, "  --background-color: {};", colors.background)?;
    writeln!(css, "  --text-color: {};", colors.text)?;
    writeln!(css, "}}")?;
    writeln!(css)?;
    css.push_str(LAYOUT);

    Ok(css)
}

/// Keep free text from ending the comment or the enclosing `<style>`.
fn comment_safe(text: &str) -> String {
    text.replace("*/", "* /").replace(['<', '>'], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::palette;
    use folio_model::ColorScheme;
    use pretty_assertions::assert_eq;

    fn with_scheme(scheme: ColorScheme) -> PortfolioDocument {
        PortfolioDocument {
            name: "Demo".into(),
            color_scheme: Some(scheme),
            ..PortfolioDocument::default()
        }
    }

    #[test]
    fn test_root_block_from_scheme() {
        let doc = with_scheme(ColorScheme {
            primary: "#123456".into(),
            secondary: "navy".into(),
            accent: "rgb(1, 2, 3)".into(),
            background: "#fff".into(),
            text: "black".into(),
        });
        let css = generate(&doc, &palette::DEFAULT).unwrap();
        assert!(css.starts_with(
            "/* Stylesheet for Demo */\n\n:root {\n  --primary-color: #123456;\n  --secondary-color: navy;\n  --accent-color: rgb(1, 2, 3);\n  --background-color: #fff;\n  --text-color: black;\n}\n"
        ));
    }

    #[test]
    fn test_invalid_colors_pass_through() {
        let doc = with_scheme(ColorScheme {
            primary: "not-a-color".into(),
            secondary: "".into(),
            accent: "#zzz".into(),
            background: "#fff".into(),
            text: "#000".into(),
        });
        let css = generate(&doc, &palette::DEFAULT).unwrap();
        assert!(css.contains("--primary-color: not-a-color;"));
        assert!(css.contains("--secondary-color: ;"));
        assert!(css.contains("--accent-color: #zzz;"));
    }

    #[test]
    fn test_fallback_palette() {
        let doc = PortfolioDocument::default();
        let css = generate(&doc, &palette::MIDNIGHT).unwrap();
        assert!(css.contains(&format!("--primary-color: {};", palette::MIDNIGHT.primary)));
        assert!(css.contains(&format!("--text-color: {};", palette::MIDNIGHT.text)));
    }

    #[test]
    fn test_document_scheme_beats_fallback() {
        let doc = with_scheme(ColorScheme::from(&palette::FOREST));
        let css = generate(&doc, &palette::SUNSET).unwrap();
        assert!(css.contains(palette::FOREST.primary));
        assert!(!css.contains(palette::SUNSET.primary));
    }

    #[test]
    fn test_layout_is_fixed() {
        let a = generate(&with_scheme(ColorScheme::from(&palette::OCEAN)), &palette::DEFAULT).unwrap();
        let b = generate(&with_scheme(ColorScheme::from(&palette::SUNSET)), &palette::DEFAULT).unwrap();
        assert!(a.ends_with(LAYOUT));
        assert!(b.ends_with(LAYOUT));
        assert!(a.contains("@media (max-width: 768px)"));
    }

    #[test]
    fn test_deterministic() {
        let doc = with_scheme(ColorScheme::from(&palette::OCEAN));
        assert_eq!(
            generate(&doc, &palette::DEFAULT).unwrap(),
            generate(&doc, &palette::DEFAULT).unwrap()
        );
    }

    #[test]
    fn test_name_cannot_break_out_of_comment() {
        let mut doc = PortfolioDocument::default();
        doc.name = "evil */ body { display: none } </style>".into();
        let css = generate(&doc, &palette::DEFAULT).unwrap();
        let first_line = css.lines().next().unwrap();
        assert_eq!(first_line, "/* Stylesheet for evil * / body { display: none } /style */");
    }
}
