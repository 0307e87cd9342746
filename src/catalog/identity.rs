use serde::{Deserialize, Serialize};

/// Versioned key for a content catalog revision (e.g., `portfolio_2025_v1`).
///
/// The key travels with every catalog file so tooling can tell near-duplicate
/// content revisions apart instead of guessing from file paths.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

/// Stable numeric identity for a project record. Never reused across
/// revisions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

/// URL-safe token identifying a project in routes and deep links.
///
/// Lookups are exact and case-sensitive; no trimming or case-folding happens
/// anywhere in the crate, so a slug either matches byte-for-byte or not at
/// all.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectSlug(pub String);

/// Opaque reference to an image asset.
///
/// The catalog never interprets these; the rendering layer resolves them
/// against its own asset pipeline.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl ProjectSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AssetRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compact project snapshot used by listing views.
///
/// Cards denormalize the record fields the grid actually renders, with the
/// tech stack truncated to the leading entries the way the listing page
/// displays it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub slug: ProjectSlug,
    pub short_description: String,
    pub tech_stack: Vec<String>,
    pub thumbnail_image: AssetRef,
    pub featured: bool,
}

/// How many tech stack entries a truncated card view shows.
pub const TECH_PREVIEW_LIMIT: usize = 4;
