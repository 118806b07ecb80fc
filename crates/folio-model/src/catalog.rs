//! Template catalog.
//!
//! Every template shares one page layout; a template only contributes its
//! default palette, its display metadata and whether it must be purchased.

use crate::gate::PurchaseStatus;
use crate::palette::{self, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub premium: bool,
    /// Price in US cents; zero for free templates.
    pub price_cents: u32,
    pub palette: &'static Palette,
}

impl TemplateInfo {
    /// `"Free"` or a dollar amount such as `"$4.99"`.
    pub fn price_label(&self) -> String {
        if !self.premium || self.price_cents == 0 {
            "Free".to_string()
        } else {
            format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
        }
    }

    /// Free templates always export; premium ones need an approved purchase.
    pub fn export_permitted(&self, status: PurchaseStatus) -> bool {
        !self.premium || status == PurchaseStatus::Approved
    }
}

/// Source of template metadata.
pub trait TemplateCatalog {
    fn templates(&self) -> &[TemplateInfo];

    /// Find a template by name, ignoring ASCII case.
    fn find(&self, name: &str) -> Option<&TemplateInfo> {
        self.templates()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }
}

pub const BUILTIN_TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        name: "minimal",
        title: "Minimal",
        description: "Clean single-column layout with generous whitespace.",
        premium: false,
        price_cents: 0,
        palette: &palette::DEFAULT,
    },
    TemplateInfo {
        name: "modern",
        title: "Modern",
        description: "Bold header and card-based project grid.",
        premium: false,
        price_cents: 0,
        palette: &palette::OCEAN,
    },
    TemplateInfo {
        name: "creative",
        title: "Creative",
        description: "Warm palette for designers and artists.",
        premium: true,
        price_cents: 499,
        palette: &palette::SUNSET,
    },
    TemplateInfo {
        name: "professional",
        title: "Professional",
        description: "Dark, understated look for senior profiles.",
        premium: true,
        price_cents: 999,
        palette: &palette::MIDNIGHT,
    },
];

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl TemplateCatalog for BuiltinCatalog {
    fn templates(&self) -> &[TemplateInfo] {
        BUILTIN_TEMPLATES
    }
}
