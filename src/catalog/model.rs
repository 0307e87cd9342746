//! Deserializable representation of `content/portfolio.json`.
//!
//! The types mirror the content schema so helpers and tests can reason about
//! project records without ad-hoc JSON handling. Use `ProjectIndex` for
//! validation and slug lookup; use these structs when the raw catalog surface
//! is required (revision metadata, whole-file passes).

use crate::catalog::identity::{
    AssetRef, CatalogKey, ProjectCard, ProjectId, ProjectSlug, TECH_PREVIEW_LIMIT,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// Full project catalog as stored on disk.
pub struct ProjectCatalog {
    pub schema_version: String,
    pub catalog: CatalogInfo,
    pub projects: Vec<ProjectRecord>,
}

#[derive(Clone, Debug, Deserialize)]
/// Revision metadata carried alongside the records.
pub struct CatalogInfo {
    pub key: CatalogKey,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One portfolio case study.
///
/// Field names in JSON keep the original content format's camelCase spelling,
/// so content files remain diffable against earlier revisions of the site.
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub slug: ProjectSlug,
    pub short_description: String,
    pub full_description: String,
    pub tech_stack: Vec<String>,
    pub thumbnail_image: AssetRef,
    pub full_preview_images: Vec<AssetRef>,
    pub live_demo_link: String,
    pub github_link: String,
    pub featured: bool,
    pub problem: String,
    pub solution: String,
    pub result: String,
}

impl ProjectRecord {
    /// Create the compact snapshot used by listing grids.
    ///
    /// The tech stack is truncated to [`TECH_PREVIEW_LIMIT`] entries in
    /// display order; detail views use the full record instead.
    pub fn card(&self) -> ProjectCard {
        ProjectCard {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            short_description: self.short_description.clone(),
            tech_stack: self
                .tech_stack
                .iter()
                .take(TECH_PREVIEW_LIMIT)
                .cloned()
                .collect(),
            thumbnail_image: self.thumbnail_image.clone(),
            featured: self.featured,
        }
    }
}

/// Read and parse a project catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<ProjectCatalog> {
    let data = fs::read_to_string(path)?;
    let catalog: ProjectCatalog = serde_json::from_str(&data)?;
    Ok(catalog)
}
