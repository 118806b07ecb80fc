//! Purchase approval gate for premium templates.
//!
//! Purchases are requested by users and approved by hand; the generator
//! only asks for the current status.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    NotRequested,
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PurchaseStatus::NotRequested => "not requested",
            PurchaseStatus::Pending => "pending approval",
            PurchaseStatus::Approved => "approved",
            PurchaseStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

pub trait PurchaseGate {
    /// Purchase status of `template` for the current user.
    fn status(&self, template: &str) -> PurchaseStatus;
}

/// Gate backed by a fixed set of approved template names.
#[derive(Debug, Clone, Default)]
pub struct ApprovedTemplates {
    approved: HashSet<String>,
}

impl ApprovedTemplates {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            approved: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn approve(&mut self, template: &str) {
        self.approved.insert(template.trim().to_ascii_lowercase());
    }
}

impl PurchaseGate for ApprovedTemplates {
    fn status(&self, template: &str) -> PurchaseStatus {
        if self.approved.contains(&template.trim().to_ascii_lowercase()) {
            PurchaseStatus::Approved
        } else {
            PurchaseStatus::NotRequested
        }
    }
}
