//! Folio Model
//!
//! The portfolio document a user builds in the form wizard, plus the static
//! configuration the generator consumes: color palettes, the template
//! catalog, the education/experience classifier and skill grouping.
//!
//! The collaborator seams of the export pipeline live here as traits:
//! [`PortfolioStore`] hands out documents by id, [`TemplateCatalog`] describes
//! templates and [`PurchaseGate`] reports whether a premium template was
//! approved for export.
//!
//! # Example
//!
//! ```
//! use folio_model::PortfolioDocument;
//!
//! let doc = PortfolioDocument::from_json(r#"{ "name": "Demo" }"#).unwrap();
//! assert_eq!(doc.display_name(), "Demo");
//! assert!(doc.skills.is_empty());
//! ```

pub mod catalog;
pub mod classify;
pub mod gate;
pub mod palette;
pub mod portfolio;
pub mod skills;
pub mod store;

pub use catalog::{BuiltinCatalog, TemplateCatalog, TemplateInfo};
pub use classify::{Classifier, EntryKind, DEFAULT_EXPERIENCE_MARKERS};
pub use gate::{ApprovedTemplates, PurchaseGate, PurchaseStatus};
pub use palette::{Palette, PALETTES};
pub use portfolio::{
    ColorScheme, EducationEntry, PersonalInfo, PortfolioDocument, Project, Skill, SocialLink,
};
pub use skills::{group_skills, SkillGroup, OTHER_CATEGORY};
pub use store::{DirectoryStore, MemoryStore, PortfolioStore, StoreError};

/// Error raised while loading a portfolio document.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid portfolio document: {0}")]
    Json(#[from] serde_json::Error),
}
