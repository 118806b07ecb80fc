//! Folio Export
//!
//! Turns a portfolio into something a user can take away: a live preview
//! page or a ZIP bundle.
//!
//! ```text
//! template name → catalog → purchase gate → folio_codegen::generate() → build_archive()
//! ```
//!
//! The pipeline never catches its own errors and never retries; a failed
//! export leaves the caller's document untouched and can simply be run again.

pub mod archive;
pub mod filename;

pub use archive::{build_archive, ArchiveEntry, ArchiveError, EntryContent};
pub use filename::{archive_filename, sanitize_filename};

use folio_codegen::{BuildStamp, GeneratedSite, GenerationError, RenderMode, RenderOptions};
use folio_model::{
    Classifier, PortfolioDocument, PortfolioStore, PurchaseGate, PurchaseStatus, StoreError,
    TemplateCatalog, TemplateInfo,
};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Template \"{template}\" requires an approved purchase (status: {status})")]
    PurchaseRequired {
        template: String,
        status: PurchaseStatus,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// A finished download.
#[derive(Debug, Clone)]
pub struct SiteBundle {
    /// Suggested download name, e.g. `my-cool-portfolio.zip`.
    pub filename: String,
    pub site: GeneratedSite,
    pub archive: Vec<u8>,
}

/// Archive entries for a generated site, in bundle order.
pub fn site_entries(site: &GeneratedSite) -> Vec<ArchiveEntry> {
    site.files()
        .iter()
        .map(|(path, content)| ArchiveEntry::text(*path, *content))
        .collect()
}

/// Runs previews and exports against a template catalog and purchase gate.
pub struct Exporter<'a> {
    catalog: &'a dyn TemplateCatalog,
    gate: &'a dyn PurchaseGate,
    classifier: Classifier,
}

impl<'a> Exporter<'a> {
    pub fn new(catalog: &'a dyn TemplateCatalog, gate: &'a dyn PurchaseGate) -> Self {
        Self {
            catalog,
            gate,
            classifier: Classifier::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn resolve_template(&self, name: &str) -> Result<&'a TemplateInfo, ExportError> {
        let catalog: &'a dyn TemplateCatalog = self.catalog;
        catalog.find(name).ok_or_else(|| ExportError::UnknownTemplate {
            name: name.to_string(),
        })
    }

    fn options(
        &self,
        template: &TemplateInfo,
        mode: RenderMode,
        stamp: BuildStamp,
    ) -> RenderOptions {
        RenderOptions::new(mode, stamp)
            .with_palette(template.palette)
            .with_classifier(self.classifier.clone())
    }

    /// Single self-contained page for the live preview. Premium templates
    /// can be previewed without a purchase.
    pub fn preview(
        &self,
        portfolio: &PortfolioDocument,
        template: &str,
        stamp: BuildStamp,
    ) -> Result<String, ExportError> {
        let info = self.resolve_template(template)?;
        debug!(template = info.name, "rendering preview");
        let opts = self.options(info, RenderMode::Inline, stamp);
        Ok(folio_codegen::html::generate(portfolio, info.name, &opts)?)
    }

    /// Generate the site and package it. Premium templates need an approved
    /// purchase.
    pub fn export(
        &self,
        portfolio: &PortfolioDocument,
        template: &str,
        stamp: BuildStamp,
    ) -> Result<SiteBundle, ExportError> {
        let info = self.resolve_template(template)?;

        let status = self.gate.status(info.name);
        if !info.export_permitted(status) {
            warn!(template = info.name, %status, "export blocked, purchase not approved");
            return Err(ExportError::PurchaseRequired {
                template: info.name.to_string(),
                status,
            });
        }
        debug!(template = info.name, premium = info.premium, %status, "export permitted");

        let opts = self.options(info, RenderMode::Linked, stamp);
        let site = folio_codegen::generate(portfolio, info.name, &opts)?;
        let archive = build_archive(&site_entries(&site))?;
        let filename = archive_filename(&portfolio.name);

        info!(
            template = info.name,
            filename = %filename,
            bytes = archive.len(),
            "portfolio exported"
        );

        Ok(SiteBundle {
            filename,
            site,
            archive,
        })
    }

    /// Fetch `id` from `store` and export it.
    pub fn export_stored(
        &self,
        store: &dyn PortfolioStore,
        id: &str,
        template: &str,
        stamp: BuildStamp,
    ) -> Result<SiteBundle, ExportError> {
        let portfolio = store.fetch(id)?;
        debug!(id, "portfolio fetched");
        self.export(&portfolio, template, stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_model::palette;
    use folio_model::{ApprovedTemplates, BuiltinCatalog, MemoryStore, Skill};
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Read};

    fn stamp() -> BuildStamp {
        BuildStamp::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn doc() -> PortfolioDocument {
        let mut doc = PortfolioDocument::default();
        doc.name = "My Cool Portfolio!!".into();
        doc.personal_info.first_name = "Ada".into();
        doc.skills = vec![Skill::new("Rust", 5, None)];
        doc
    }

    fn read_all(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut out = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            if file.is_dir() {
                continue;
            }
            let mut text = String::new();
            file.read_to_string(&mut text).unwrap();
            out.push((file.name().to_string(), text));
        }
        out
    }

    #[test]
    fn test_export_free_template() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let bundle = exporter.export(&doc(), "minimal", stamp()).unwrap();

        assert_eq!(bundle.filename, "my-cool-portfolio.zip");
        let files = read_all(&bundle.archive);
        let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["index.html", "css/styles.css", "js/main.js", "README.md"]);
        assert_eq!(files[0].1, bundle.site.index_html);
        assert_eq!(files[1].1, bundle.site.styles_css);
        assert_eq!(files[2].1, bundle.site.main_js);
        assert_eq!(files[3].1, bundle.site.readme);
    }

    #[test]
    fn test_exported_html_links_bundle() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let bundle = exporter.export(&doc(), "modern", stamp()).unwrap();
        assert!(bundle.site.index_html.contains("href=\"css/styles.css\""));
        assert!(bundle.site.index_html.contains("src=\"js/main.js\""));
    }

    #[test]
    fn test_premium_requires_purchase() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let err = exporter.export(&doc(), "creative", stamp()).unwrap_err();
        match err {
            ExportError::PurchaseRequired { template, status } => {
                assert_eq!(template, "creative");
                assert_eq!(status, PurchaseStatus::NotRequested);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_premium_with_approval() {
        let gate = ApprovedTemplates::new(["creative"]);
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let bundle = exporter.export(&doc(), "Creative", stamp()).unwrap();
        assert!(bundle.site.readme.contains("\"creative\" template"));
    }

    #[test]
    fn test_pending_purchase_still_blocked() {
        struct Pending;
        impl PurchaseGate for Pending {
            fn status(&self, _template: &str) -> PurchaseStatus {
                PurchaseStatus::Pending
            }
        }
        let exporter = Exporter::new(&BuiltinCatalog, &Pending);
        assert!(matches!(
            exporter.export(&doc(), "professional", stamp()),
            Err(ExportError::PurchaseRequired { status: PurchaseStatus::Pending, .. })
        ));
        assert!(exporter.export(&doc(), "minimal", stamp()).is_ok());
    }

    #[test]
    fn test_unknown_template() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let err = exporter.export(&doc(), "retro", stamp()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown template: retro");
        assert!(exporter.preview(&doc(), "retro", stamp()).is_err());
    }

    #[test]
    fn test_preview_is_inline_and_ungated() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let html = exporter.preview(&doc(), "professional", stamp()).unwrap();
        assert!(html.contains("<style>"));
        assert!(html.contains(palette::MIDNIGHT.primary));
        assert!(!html.contains("js/main.js"));
    }

    #[test]
    fn test_template_palette_used_without_scheme() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let bundle = exporter.export(&doc(), "modern", stamp()).unwrap();
        assert!(bundle.site.styles_css.contains(palette::OCEAN.primary));
    }

    #[test]
    fn test_custom_classifier() {
        let gate = ApprovedTemplates::default();
        let exporter =
            Exporter::new(&BuiltinCatalog, &gate).with_classifier(Classifier::new(["GmbH"]));
        let mut portfolio = doc();
        portfolio.education = vec![folio_model::EducationEntry::new("Siemens GmbH", "Dev")];
        let bundle = exporter.export(&portfolio, "minimal", stamp()).unwrap();
        assert!(bundle.site.index_html.contains("experience-item"));
    }

    #[test]
    fn test_export_stored() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let mut store = MemoryStore::new();
        store.insert("p1", doc());

        let bundle = exporter.export_stored(&store, "p1", "minimal", stamp()).unwrap();
        assert_eq!(bundle.filename, "my-cool-portfolio.zip");

        let err = exporter.export_stored(&store, "p2", "minimal", stamp()).unwrap_err();
        assert!(matches!(err, ExportError::Store(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_unnamed_portfolio_filename() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let bundle = exporter
            .export(&PortfolioDocument::default(), "minimal", stamp())
            .unwrap();
        assert_eq!(bundle.filename, "my-portfolio.zip");
    }

    #[test]
    fn test_export_deterministic() {
        let gate = ApprovedTemplates::default();
        let exporter = Exporter::new(&BuiltinCatalog, &gate);
        let a = exporter.export(&doc(), "minimal", stamp()).unwrap();
        let b = exporter.export(&doc(), "minimal", stamp()).unwrap();
        assert_eq!(a.archive, b.archive);
    }
}
