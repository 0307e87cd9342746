//! Shared library for the folio content tooling.
//!
//! The crate owns the portfolio site's content layer: validated project,
//! testimonial, and skill catalogs plus the read-only queries the rendering
//! views consume. Public functions here form the contract the helper binaries
//! depend on: content root discovery, catalog loading, and the query surface
//! documented in README.md.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod coverage;
pub mod skills;
pub mod testimonials;

mod schema_loader;

pub use catalog::{
    Adjacent, AssetRef, CatalogInfo, CatalogKey, CatalogRepository, ProjectCard, ProjectCatalog,
    ProjectId, ProjectIndex, ProjectRecord, ProjectSlug, TECH_PREVIEW_LIMIT,
    load_catalog_from_path,
};
pub use coverage::{CoverageEntry, build_tech_coverage_map, uncovered_labels};
pub use skills::{Skill, SkillArea, SkillCategory, SkillSet};
pub use testimonials::{Testimonial, TestimonialSet};

const CONTENT_DIR: &str = "content";
const SCHEMA_DIR: &str = "schema";
const CATALOG_FILE: &str = "portfolio.json";
const TESTIMONIALS_FILE: &str = "testimonials.json";
const SKILLS_FILE: &str = "skills.json";

/// Returns true when `candidate` looks like the content root.
///
/// Detection is strict: both the catalog file and the schema directory must
/// be present so helpers never half-load a tree that merely resembles one.
fn is_content_root(candidate: &Path) -> bool {
    candidate.join(CONTENT_DIR).join(CATALOG_FILE).is_file()
        && candidate.join(SCHEMA_DIR).is_dir()
}

/// Verifies that an explicit `FOLIO_ROOT` hint points at a valid tree.
fn content_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_content_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_content_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the content root.
///
/// Search order: honor `FOLIO_ROOT` if it points at a real tree, fall back to
/// climbing up from the current executable, then use the build-time hint.
/// Callers can treat failure as fatal because the binaries cannot run without
/// the content layout.
pub fn find_content_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("FOLIO_ROOT") {
        if let Some(root) = content_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("FOLIO_ROOT_HINT") {
        if let Some(root) = content_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate the folio content root. Set FOLIO_ROOT to the repository checkout.");
}

/// Canonical location of the project catalog under a content root.
pub fn default_catalog_path(root: &Path) -> PathBuf {
    root.join(CONTENT_DIR).join(CATALOG_FILE)
}

/// Canonical location of the testimonials file under a content root.
pub fn default_testimonials_path(root: &Path) -> PathBuf {
    root.join(CONTENT_DIR).join(TESTIMONIALS_FILE)
}

/// Canonical location of the skills file under a content root.
pub fn default_skills_path(root: &Path) -> PathBuf {
    root.join(CONTENT_DIR).join(SKILLS_FILE)
}

/// Every validated content collection, loaded in one construction step.
///
/// This is the single owner the views hang off: collections are built once,
/// never mutated, and handed out by reference. There is no partially-loaded
/// state; any invalid file fails the whole load.
pub struct SiteContent {
    pub projects: ProjectIndex,
    pub testimonials: TestimonialSet,
    pub skills: SkillSet,
}

impl SiteContent {
    /// Load and validate all content files under `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let projects = ProjectIndex::load(&default_catalog_path(root))?;
        let testimonials = TestimonialSet::load(&default_testimonials_path(root))?;
        let skills = SkillSet::load(&default_skills_path(root))?;
        Ok(Self {
            projects,
            testimonials,
            skills,
        })
    }
}
