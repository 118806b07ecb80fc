//! The portfolio document.
//!
//! Field names follow the JSON the builder stores (`camelCase`). Every field
//! is defaulted so a half-finished wizard still loads and renders.

use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::ModelError;

/// Everything the generator knows about one portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioDocument {
    pub name: String,
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    /// `None` means "use the selected template's palette".
    pub color_scheme: Option<ColorScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub about: String,
    pub profile_photo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// 1 (beginner) to 5 (expert).
    pub proficiency: u8,
    pub category: Option<String>,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            proficiency: 3,
            category: None,
        }
    }
}

impl Skill {
    pub fn new(name: impl Into<String>, proficiency: u8, category: Option<&str>) -> Self {
        Self {
            name: name.into(),
            proficiency,
            category: category.map(str::to_string),
        }
    }

    /// Proficiency clamped into `1..=5`.
    pub fn level(&self) -> u8 {
        self.proficiency.clamp(1, 5)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub code_url: Option<String>,
}

/// A schooling or employment entry. The data model carries no explicit kind;
/// see [`crate::Classifier`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl EducationEntry {
    pub fn new(institution: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            degree: degree.into(),
            ..Self::default()
        }
    }
}

/// Five CSS color strings. Values are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl From<&Palette> for ColorScheme {
    fn from(palette: &Palette) -> Self {
        Self {
            primary: palette.primary.to_string(),
            secondary: palette.secondary.to_string(),
            accent: palette.accent.to_string(),
            background: palette.background.to_string(),
            text: palette.text.to_string(),
        }
    }
}

impl PortfolioDocument {
    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(source)?)
    }

    /// `"{first} {last}"` with surrounding whitespace removed. Empty when both
    /// names are blank; callers decide on any placeholder.
    pub fn full_name(&self) -> String {
        let info = &self.personal_info;
        format!("{} {}", info.first_name.trim(), info.last_name.trim())
            .trim()
            .to_string()
    }

    /// Name used for titles and the README: full name, then portfolio name.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if !full.is_empty() {
            full
        } else if !self.name.trim().is_empty() {
            self.name.trim().to_string()
        } else {
            "My Portfolio".to_string()
        }
    }

    /// The document's own color scheme, or `fallback` when none was chosen.
    pub fn color_scheme_or(&self, fallback: &Palette) -> ColorScheme {
        self.color_scheme
            .clone()
            .unwrap_or_else(|| ColorScheme::from(fallback))
    }
}

/// `Some` only for values that contain something other than whitespace.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
