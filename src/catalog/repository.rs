//! Holds one or more catalog revisions for lookup by key.
//!
//! The site keeps near-duplicate content revisions side by side while a
//! redesign is in flight. The repository makes revision selection explicit:
//! callers resolve records through the catalog key instead of whichever file
//! happened to load last.

use crate::catalog::identity::CatalogKey;
use crate::catalog::model::{ProjectCatalog, ProjectRecord};
use std::collections::BTreeMap;

#[derive(Default)]
/// In-memory store for project catalogs keyed by `CatalogKey`.
pub struct CatalogRepository {
    catalogs: BTreeMap<CatalogKey, ProjectCatalog>,
}

impl CatalogRepository {
    /// Register a catalog revision for later lookup.
    pub fn register(&mut self, catalog: ProjectCatalog) {
        self.catalogs.insert(catalog.catalog.key.clone(), catalog);
    }

    /// Fetch a revision by key, if present.
    pub fn get(&self, key: &CatalogKey) -> Option<&ProjectCatalog> {
        self.catalogs.get(key)
    }

    /// Resolve a project inside a registered revision.
    ///
    /// A plain scan in canonical order; when a revision somehow carries a
    /// duplicate slug, the first match wins.
    pub fn find_project(&self, key: &CatalogKey, slug: &str) -> Option<&ProjectRecord> {
        self.get(key)?
            .projects
            .iter()
            .find(|project| project.slug.0 == slug)
    }
}
