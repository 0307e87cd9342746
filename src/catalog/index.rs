//! Validated, indexed view of one project catalog revision.
//!
//! The index enforces the content schema, checks the record invariants the
//! rendering layer relies on (unique ids and slugs, non-empty copy, absolute
//! links), and answers the four read queries behind the site's views: list
//! all, list featured, lookup by slug, and previous/next adjacency. It is
//! intentionally strict at load time so view code never has to re-validate.

use crate::catalog::identity::{CatalogKey, ProjectCard};
use crate::catalog::model::{CatalogInfo, ProjectCatalog, ProjectRecord, load_catalog_from_path};
use crate::schema_loader::{allowed_versions, validate_content_against_schema};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use url::Url;

pub(crate) const CATALOG_SCHEMA_FILE: &str = "portfolio_catalog.schema.json";
// The site currently ships a single content format; reject unexpected
// versions rather than risk rendering a half-understood revision.
pub(crate) const DEFAULT_CATALOG_SCHEMA_VERSION: &str = "portfolio_catalog_v1";

/// Previous/next neighbors of a project in canonical catalog order.
///
/// Both sides are `None` when the requested slug is unknown; each end of the
/// catalog yields `None` on that side. Adjacency never wraps around.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a ProjectRecord>,
    pub next: Option<&'a ProjectRecord>,
}

#[derive(Debug)]
/// Project catalog plus a derived position index keyed by slug.
pub struct ProjectIndex {
    catalog_key: CatalogKey,
    catalog: ProjectCatalog,
    position_by_slug: BTreeMap<String, usize>,
}

impl ProjectIndex {
    /// Load and validate a catalog revision from disk.
    ///
    /// Validates the file against the shipped JSON Schema, checks the
    /// collection invariants, and builds the slug position map. The returned
    /// index is immutable; every query below is a pure read over it.
    pub fn load(path: &Path) -> Result<Self> {
        validate_content_against_schema(path, CATALOG_SCHEMA_FILE, DEFAULT_CATALOG_SCHEMA_VERSION)?;

        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_info(&catalog.catalog)?;
        let position_by_slug = build_positions(&catalog)?;
        Ok(Self {
            catalog_key: catalog.catalog.key.clone(),
            catalog,
            position_by_slug,
        })
    }

    /// The revision key declared in the loaded file.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Access the underlying catalog (revision metadata, raw records).
    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Every record in canonical (file) order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.catalog.projects
    }

    /// The featured subset, preserving canonical relative order.
    ///
    /// An empty result is a valid catalog state, not an error.
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.catalog
            .projects
            .iter()
            .filter(|project| project.featured)
            .collect()
    }

    /// Resolve a project by slug; exact, case-sensitive match.
    ///
    /// Returns `None` instead of erroring; detail views treat a miss as their
    /// signal to redirect back to the listing.
    pub fn project(&self, slug: &str) -> Option<&ProjectRecord> {
        let position = *self.position_by_slug.get(slug)?;
        self.catalog.projects.get(position)
    }

    /// Previous/next neighbors of the record matching `slug`.
    ///
    /// Neighbors follow canonical order, not featured or filtered order. An
    /// unknown slug yields the empty pair.
    pub fn adjacent(&self, slug: &str) -> Adjacent<'_> {
        let Some(&position) = self.position_by_slug.get(slug) else {
            return Adjacent::default();
        };
        Adjacent {
            previous: position
                .checked_sub(1)
                .and_then(|prev| self.catalog.projects.get(prev)),
            next: self.catalog.projects.get(position + 1),
        }
    }

    /// Listing snapshots for every record, canonical order.
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.catalog.projects.iter().map(ProjectRecord::card).collect()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_versions(CATALOG_SCHEMA_FILE, DEFAULT_CATALOG_SCHEMA_VERSION);
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn validate_catalog_info(info: &CatalogInfo) -> Result<()> {
    validate_catalog_key(&info.key)?;
    if info.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    Ok(())
}

fn validate_catalog_key(key: &CatalogKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }

    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", key.0);
    }

    Ok(())
}

fn build_positions(catalog: &ProjectCatalog) -> Result<BTreeMap<String, usize>> {
    if catalog.projects.is_empty() {
        bail!("catalog contains no projects");
    }

    let mut seen_ids = BTreeSet::new();
    let mut positions = BTreeMap::new();
    for (position, project) in catalog.projects.iter().enumerate() {
        validate_record(project)?;
        if !seen_ids.insert(project.id) {
            bail!("duplicate project id {}", project.id.0);
        }
        if positions
            .insert(project.slug.0.clone(), position)
            .is_some()
        {
            bail!("duplicate project slug '{}'", project.slug.0);
        }
    }
    Ok(positions)
}

fn validate_record(project: &ProjectRecord) -> Result<()> {
    let slug = &project.slug.0;
    if slug.is_empty() {
        bail!("encountered project with no slug");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!("project slug must match ^[a-z0-9-]+$, got '{slug}'");
    }

    let copy_fields = [
        ("title", &project.title),
        ("shortDescription", &project.short_description),
        ("fullDescription", &project.full_description),
        ("problem", &project.problem),
        ("solution", &project.solution),
        ("result", &project.result),
    ];
    for (name, value) in copy_fields {
        if value.trim().is_empty() {
            bail!("project '{slug}' has empty {name}");
        }
    }

    if project.tech_stack.is_empty() {
        bail!("project '{slug}' has an empty tech stack");
    }
    if project.tech_stack.iter().any(|tech| tech.trim().is_empty()) {
        bail!("project '{slug}' tech stack contains empty entries");
    }

    if project.thumbnail_image.0.trim().is_empty() {
        bail!("project '{slug}' has an empty thumbnail reference");
    }
    if project.full_preview_images.is_empty() {
        bail!("project '{slug}' has no preview images");
    }
    if project
        .full_preview_images
        .iter()
        .any(|image| image.0.trim().is_empty())
    {
        bail!("project '{slug}' preview images contain empty entries");
    }

    validate_link(slug, "liveDemoLink", &project.live_demo_link)?;
    validate_link(slug, "githubLink", &project.github_link)?;

    Ok(())
}

fn validate_link(slug: &str, field: &str, raw: &str) -> Result<()> {
    // Url::parse only accepts absolute URLs, which is exactly the contract:
    // relative asset-style paths belong in image fields, not link fields.
    Url::parse(raw).with_context(|| format!("project '{slug}' has invalid {field} '{raw}'"))?;
    Ok(())
}
