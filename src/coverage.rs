//! Coverage accounting between project tech stacks and the skills catalog.
//!
//! Helpers here build a tech-label→project mapping used by tooling and tests
//! to spot drift: a technology showcased on a project card that the skills
//! section never mentions is an authoring gap worth surfacing. Gaps are
//! reported, not rejected, because the two content files evolve
//! independently.

use crate::catalog::ProjectIndex;
use crate::skills::SkillSet;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
/// Whether the skills catalog lists a tech label plus the projects using it.
pub struct CoverageEntry {
    pub listed: bool,
    pub project_slugs: Vec<String>,
}

/// Build a mapping of tech label to skills coverage.
///
/// Labels are collected from every project's tech stack; project slugs per
/// label are deduplicated and kept sorted for deterministic output.
pub fn build_tech_coverage_map(
    projects: &ProjectIndex,
    skills: &SkillSet,
) -> BTreeMap<String, CoverageEntry> {
    let mut map: BTreeMap<String, CoverageEntry> = BTreeMap::new();

    for project in projects.projects() {
        for tech in &project.tech_stack {
            let entry = map.entry(tech.clone()).or_insert_with(|| CoverageEntry {
                listed: skills.lists(tech),
                project_slugs: Vec::new(),
            });
            let slug = project.slug.0.clone();
            if !entry.project_slugs.contains(&slug) {
                entry.project_slugs.push(slug);
                entry.project_slugs.sort();
            }
        }
    }

    map
}

/// The labels projects use but the skills catalog does not list.
pub fn uncovered_labels(map: &BTreeMap<String, CoverageEntry>) -> Vec<String> {
    map.iter()
        .filter(|(_, entry)| !entry.listed)
        .map(|(label, _)| label.clone())
        .collect()
}
