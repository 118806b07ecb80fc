//! HTML code generator.
//!
//! Renders the single portfolio page section by section through [`Markup`],
//! which escapes every text node and attribute value. Sections with nothing
//! to show render a placeholder line instead of disappearing.

use folio_model::portfolio::non_blank;
use folio_model::{group_skills, PersonalInfo, PortfolioDocument, Project, Skill};

use crate::{css, js, GenerationError, RenderMode, RenderOptions, MAIN_JS, STYLES_CSS};

pub const NO_ABOUT: &str = "No about information provided yet.";
pub const NO_SKILLS: &str = "No skills listed yet.";
pub const NO_PROJECTS: &str = "No projects listed yet.";
pub const NO_EDUCATION: &str = "No education or experience listed yet.";
pub const NO_CONTACT: &str = "No contact information listed yet.";

/// Shown in the live preview when both names are blank.
pub const PREVIEW_NAME: &str = "Your Name";

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

const NAV: &[(&str, &str)] = &[
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("education", "Experience"),
    ("contact", "Contact"),
];

/// Generate the full HTML document.
pub fn generate(
    portfolio: &PortfolioDocument,
    template_name: &str,
    opts: &RenderOptions,
) -> Result<String, GenerationError> {
    let info = &portfolio.personal_info;
    let mut w = Markup::new();

    w.line("<!DOCTYPE html>");
    w.open("html", &[("lang", "en")]);

    w.open("head", &[]);
    w.void("meta", &[("charset", "UTF-8")]);
    w.void(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1.0"),
        ],
    );
    w.void("meta", &[("name", "template"), ("content", template_name)]);
    w.element("title", &[], &portfolio.display_name());
    w.void("link", &[("rel", "stylesheet"), ("href", FONT_AWESOME)]);
    match opts.mode {
        RenderMode::Linked => w.void("link", &[("rel", "stylesheet"), ("href", STYLES_CSS)]),
        RenderMode::Inline => {
            let styles = css::generate(portfolio, opts.palette)?;
            w.raw_block("style", &styles);
        }
    }
    w.close("head");

    w.open("body", &[]);
    header(&mut w, portfolio, opts.mode);
    nav(&mut w);

    w.open("main", &[]);
    about_section(&mut w, info);
    skills_section(&mut w, &portfolio.skills);
    projects_section(&mut w, &portfolio.projects);
    education_section(&mut w, portfolio, opts);
    contact_section(&mut w, info);
    w.close("main");

    footer(&mut w, portfolio, opts.stamp.year());

    match opts.mode {
        RenderMode::Linked => w.element("script", &[("src", MAIN_JS)], ""),
        RenderMode::Inline => w.raw_block("script", &js::generate()?),
    }
    w.close("body");
    w.close("html");

    Ok(w.finish())
}

// =========================================================================
// Sections
// =========================================================================

fn header(w: &mut Markup, portfolio: &PortfolioDocument, mode: RenderMode) {
    let info = &portfolio.personal_info;
    let mut name = portfolio.full_name();
    if name.is_empty() && mode == RenderMode::Inline {
        name = PREVIEW_NAME.to_string();
    }

    w.open("header", &[("class", "site-header")]);
    w.open("div", &[("class", "container header-content")]);
    if let Some(photo) = non_blank(&info.profile_photo_url) {
        w.void(
            "img",
            &[("class", "profile-photo"), ("src", photo), ("alt", name.as_str())],
        );
    }
    w.element("h1", &[("class", "name")], &name);
    if !info.headline.trim().is_empty() {
        w.element("p", &[("class", "headline")], info.headline.trim());
    }
    w.close("div");
    w.close("header");
}

fn nav(w: &mut Markup) {
    w.open("nav", &[("class", "site-nav")]);
    w.open("div", &[("class", "container")]);
    w.open("ul", &[("class", "nav-links")]);
    for (id, label) in NAV {
        let href = format!("#{id}");
        w.open_inline("li", &[]);
        w.inline("a", &[("href", href.as_str())], label);
        w.close_inline("li");
    }
    w.close("ul");
    w.close("div");
    w.close("nav");
}

fn section_start(w: &mut Markup, id: &str, title: &str) {
    w.open("section", &[("id", id), ("class", "section")]);
    w.open("div", &[("class", "container")]);
    w.element("h2", &[("class", "section-title")], title);
}

fn section_end(w: &mut Markup) {
    w.close("div");
    w.close("section");
}

fn placeholder(w: &mut Markup, text: &str) {
    w.element("p", &[("class", "placeholder")], text);
}

fn about_section(w: &mut Markup, info: &PersonalInfo) {
    section_start(w, "about", "About Me");
    let paragraphs: Vec<&str> = info
        .about
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if paragraphs.is_empty() {
        placeholder(w, NO_ABOUT);
    }
    for paragraph in paragraphs {
        w.element("p", &[("class", "about-text")], paragraph);
    }
    section_end(w);
}

fn skills_section(w: &mut Markup, skills: &[Skill]) {
    section_start(w, "skills", "Skills");
    if skills.is_empty() {
        placeholder(w, NO_SKILLS);
    } else {
        w.open("div", &[("class", "skills-container")]);
        for group in group_skills(skills) {
            w.open("div", &[("class", "skill-category")]);
            w.element("h3", &[], group.category);
            w.open("ul", &[("class", "skill-list")]);
            for skill in group.skills {
                let level = skill.level();
                let width = format!("width: {}%", u32::from(level) * 20);
                let title = format!("{level}/5");
                w.open("li", &[("class", "skill-item")]);
                w.element("span", &[("class", "skill-name")], &skill.name);
                w.open("div", &[("class", "skill-bar"), ("title", title.as_str())]);
                w.element("div", &[("class", "skill-level"), ("style", width.as_str())], "");
                w.close("div");
                w.close("li");
            }
            w.close("ul");
            w.close("div");
        }
        w.close("div");
    }
    section_end(w);
}

fn projects_section(w: &mut Markup, projects: &[Project]) {
    section_start(w, "projects", "Projects");
    if projects.is_empty() {
        placeholder(w, NO_PROJECTS);
    } else {
        w.open("div", &[("class", "projects-grid")]);
        for project in projects {
            project_card(w, project);
        }
        w.close("div");
    }
    section_end(w);
}

fn project_card(w: &mut Markup, project: &Project) {
    w.open("article", &[("class", "project-card")]);
    if let Some(image) = non_blank(&project.image_url) {
        w.void(
            "img",
            &[("class", "project-image"), ("src", image), ("alt", project.title.as_str())],
        );
    }
    w.open("div", &[("class", "project-content")]);
    w.element("h3", &[("class", "project-title")], &project.title);
    if !project.description.trim().is_empty() {
        w.element("p", &[("class", "project-description")], &project.description);
    }

    let technologies: Vec<&str> = project
        .technologies
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if !technologies.is_empty() {
        w.open("div", &[("class", "project-tech")]);
        for tech in technologies {
            w.element("span", &[("class", "tech-tag")], tech);
        }
        w.close("div");
    }

    let live = non_blank(&project.live_url);
    let code = non_blank(&project.code_url);
    if live.is_some() || code.is_some() {
        w.open("div", &[("class", "project-links")]);
        if let Some(url) = live {
            external_link(w, url, "project-link", "fas fa-external-link-alt", "Live Demo");
        }
        if let Some(url) = code {
            external_link(w, url, "project-link", "fab fa-github", "View Code");
        }
        w.close("div");
    }
    w.close("div");
    w.close("article");
}

fn education_section(w: &mut Markup, portfolio: &PortfolioDocument, opts: &RenderOptions) {
    section_start(w, "education", "Education & Experience");
    if portfolio.education.is_empty() {
        placeholder(w, NO_EDUCATION);
    } else {
        w.open("div", &[("class", "timeline")]);
        for entry in &portfolio.education {
            let kind = opts.classifier.classify(entry);
            let class = format!("timeline-item {}", kind.css_class());
            w.open("div", &[("class", class.as_str())]);
            w.open("div", &[("class", "timeline-content")]);
            w.element("h3", &[], &entry.degree);
            w.element("h4", &[], &entry.institution);
            if let Some(range) = date_range(&entry.start_date, entry.end_date.as_deref()) {
                w.element("span", &[("class", "timeline-date")], &range);
            }
            if let Some(description) = non_blank(&entry.description) {
                w.element("p", &[], description);
            }
            w.close("div");
            w.close("div");
        }
        w.close("div");
    }
    section_end(w);
}

fn contact_section(w: &mut Markup, info: &PersonalInfo) {
    section_start(w, "contact", "Contact");

    let email = non_blank(&info.email);
    let phone = non_blank(&info.phone);
    let links: Vec<_> = info
        .social_links
        .iter()
        .filter(|l| !l.url.trim().is_empty())
        .collect();

    if email.is_none() && phone.is_none() && links.is_empty() {
        placeholder(w, NO_CONTACT);
    }

    if email.is_some() || phone.is_some() {
        w.open("div", &[("class", "contact-info")]);
        if let Some(email) = email {
            contact_line(w, "fas fa-envelope", &format!("mailto:{email}"), email);
        }
        if let Some(phone) = phone {
            contact_line(w, "fas fa-phone", &format!("tel:{phone}"), phone);
        }
        w.close("div");
    }

    if !links.is_empty() {
        w.open("div", &[("class", "social-links")]);
        for link in links {
            let platform = link.platform.trim();
            w.open(
                "a",
                &[
                    ("href", link.url.trim()),
                    ("class", "social-link"),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                    ("title", platform),
                    ("aria-label", platform),
                ],
            );
            w.element("i", &[("class", social_icon(platform))], "");
            w.close("a");
        }
        w.close("div");
    }

    section_end(w);
}

fn contact_line(w: &mut Markup, icon: &str, href: &str, label: &str) {
    w.open("p", &[("class", "contact-item")]);
    w.element("i", &[("class", icon)], "");
    w.element("a", &[("href", href)], label);
    w.close("p");
}

fn external_link(w: &mut Markup, url: &str, class: &str, icon: &str, label: &str) {
    w.open(
        "a",
        &[
            ("href", url),
            ("class", class),
            ("target", "_blank"),
            ("rel", "noopener noreferrer"),
        ],
    );
    w.element("i", &[("class", icon)], "");
    w.text(label);
    w.close("a");
}

fn footer(w: &mut Markup, portfolio: &PortfolioDocument, year: i32) {
    w.open("footer", &[("class", "site-footer")]);
    w.open("div", &[("class", "container")]);
    let notice = format!(
        "&copy; {year} {}. All rights reserved.",
        escape(&portfolio.display_name())
    );
    w.element_raw("p", &[], &notice);
    w.close("div");
    w.close("footer");
}

// =========================================================================
// Helpers
// =========================================================================

/// Font Awesome class for a social platform. Matching is a case-insensitive
/// substring test, with one narrowing: `x` maps to Twitter only when it is
/// the whole platform name, so `"Xing"` or `"Box"` fall through to a link.
pub fn social_icon(platform: &str) -> &'static str {
    let p = platform.trim().to_lowercase();
    if p.contains("github") {
        "fab fa-github"
    } else if p.contains("linkedin") {
        "fab fa-linkedin"
    } else if p.contains("twitter") || p == "x" {
        "fab fa-twitter"
    } else if p.contains("facebook") {
        "fab fa-facebook"
    } else if p.contains("instagram") {
        "fab fa-instagram"
    } else {
        "fas fa-link"
    }
}

/// `"2019 - 2023"`, `"2019 - Present"`, or `None` when nothing is known.
fn date_range(start: &str, end: Option<&str>) -> Option<String> {
    let start = start.trim();
    let end = end.map(str::trim).filter(|e| !e.is_empty());
    match (start.is_empty(), end) {
        (true, None) => None,
        (true, Some(end)) => Some(end.to_string()),
        (false, None) => Some(format!("{start} - Present")),
        (false, Some(end)) => Some(format!("{start} - {end}")),
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Indented HTML writer. Block elements go on their own lines; text and
/// attribute values are always escaped unless the method says `raw`.
struct Markup {
    buf: String,
    depth: usize,
}

impl Markup {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    fn tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    fn line(&mut self, raw: &str) {
        self.indent();
        self.buf.push_str(raw);
        self.buf.push('\n');
    }

    fn text(&mut self, text: &str) {
        self.indent();
        self.buf.push_str(&escape(text));
        self.buf.push('\n');
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.tag(tag, attrs);
        self.buf.push('\n');
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// `<tag>` with no newline, for short nested runs like `<li><a>`.
    fn open_inline(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.tag(tag, attrs);
    }

    fn inline(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.tag(tag, attrs);
        self.buf.push_str(&escape(text));
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    fn close_inline(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.element_raw(tag, attrs, &escape(text));
    }

    fn element_raw(&mut self, tag: &str, attrs: &[(&str, &str)], html: &str) {
        self.indent();
        self.inline_raw(tag, attrs, html);
        self.buf.push('\n');
    }

    fn inline_raw(&mut self, tag: &str, attrs: &[(&str, &str)], html: &str) {
        self.tag(tag, attrs);
        self.buf.push_str(html);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.tag(tag, attrs);
        self.buf.push('\n');
    }

    /// Embedded stylesheet or script. Content is copied verbatim except that
    /// `</` becomes `<\/`, so nothing inside can close the element.
    fn raw_block(&mut self, tag: &str, content: &str) {
        self.indent();
        self.tag(tag, &[]);
        self.buf.push('\n');
        self.buf.push_str(&content.replace("</", "<\\/"));
        if !content.ends_with('\n') {
            self.buf.push('\n');
        }
        self.indent();
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn finish(self) -> String {
        self.buf
    }
}
