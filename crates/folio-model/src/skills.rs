//! Skill grouping for the skills section.

use crate::portfolio::Skill;

/// Bucket for skills without a category.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Group skills by category. Groups appear in the order their category was
/// first seen; skills keep their input order within a group.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();

    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(OTHER_CATEGORY);

        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category,
                skills: vec![skill],
            }),
        }
    }

    groups
}
