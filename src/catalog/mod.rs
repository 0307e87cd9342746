//! Project catalog wiring.
//!
//! This module wraps the JSON catalog under `content/portfolio.json` so views
//! and helpers can load a validated snapshot and answer the queries behind
//! listing, detail, and previous/next navigation. Callers use `ProjectIndex`
//! for fast lookups and `CatalogRepository` when multiple revisions are
//! registered.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use identity::{AssetRef, CatalogKey, ProjectCard, ProjectId, ProjectSlug, TECH_PREVIEW_LIMIT};
pub use index::{Adjacent, ProjectIndex};
pub use model::{CatalogInfo, ProjectCatalog, ProjectRecord};
pub use repository::CatalogRepository;

pub use model::load_catalog_from_path;
