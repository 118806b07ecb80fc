//! Education vs. work-experience classification.
//!
//! Entries carry no explicit kind, so the timeline decides from the
//! institution text: any configured marker present means employment.
//! Both the live preview and the exported page go through the same
//! [`Classifier`], so identical entries always get identical classes.

use crate::portfolio::EducationEntry;

/// Markers that identify an employer: `"Google, Inc."`, `"Acme LLC"`.
pub const DEFAULT_EXPERIENCE_MARKERS: &[&str] = &[",", "Inc", "LLC"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Education,
    Experience,
}

impl EntryKind {
    pub fn css_class(self) -> &'static str {
        match self {
            EntryKind::Education => "education-item",
            EntryKind::Experience => "experience-item",
        }
    }
}

/// Substring rule set for [`EntryKind`]. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    markers: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_EXPERIENCE_MARKERS.iter().copied())
    }
}

impl Classifier {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::<String>::into)
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn classify_institution(&self, institution: &str) -> EntryKind {
        if self.markers.iter().any(|m| institution.contains(m.as_str())) {
            EntryKind::Experience
        } else {
            EntryKind::Education
        }
    }

    pub fn classify(&self, entry: &EducationEntry) -> EntryKind {
        self.classify_institution(&entry.institution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_university_is_education() {
        let c = Classifier::default();
        let entry = EducationEntry::new("Harvard University", "BSc");
        assert_eq!(c.classify(&entry), EntryKind::Education);
        assert_eq!(c.classify(&entry).css_class(), "education-item");
    }

    #[test]
    fn test_comma_inc_is_experience() {
        let c = Classifier::default();
        let entry = EducationEntry::new("Google, Inc.", "Engineer");
        assert_eq!(c.classify(&entry), EntryKind::Experience);
        assert_eq!(c.classify(&entry).css_class(), "experience-item");
    }

    #[test]
    fn test_each_default_marker() {
        let c = Classifier::default();
        assert_eq!(c.classify_institution("Paris, France"), EntryKind::Experience);
        assert_eq!(c.classify_institution("Initech Inc"), EntryKind::Experience);
        assert_eq!(c.classify_institution("Acme LLC"), EntryKind::Experience);
        assert_eq!(c.classify_institution(""), EntryKind::Education);
    }

    #[test]
    fn test_markers_case_sensitive() {
        let c = Classifier::default();
        assert_eq!(c.classify_institution("acme llc"), EntryKind::Education);
        // "Inc" also matches inside words.
        assert_eq!(c.classify_institution("Lincoln College"), EntryKind::Education);
        assert_eq!(c.classify_institution("Incubator Academy"), EntryKind::Experience);
    }

    #[test]
    fn test_custom_markers() {
        let c = Classifier::new(["GmbH", ""]);
        assert_eq!(c.markers(), ["GmbH".to_string()]);
        assert_eq!(c.classify_institution("Siemens GmbH"), EntryKind::Experience);
        assert_eq!(c.classify_institution("Google, Inc."), EntryKind::Education);
    }
}
