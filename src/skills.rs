//! Skill categories backing the tabbed skills section.
//!
//! Categories carry an ordered list of skills with 0-100 proficiency levels.
//! The category id is a closed set of known areas plus an open variant so a
//! content revision can introduce a new area without breaking older binaries.

use crate::schema_loader::validate_content_against_schema;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub(crate) const SKILLS_SCHEMA_FILE: &str = "skills.schema.json";
pub(crate) const DEFAULT_SKILLS_SCHEMA_VERSION: &str = "skills_v1";

/// Skill area grouping mirrored from the content schema.
///
/// Known variants keep serialization consistent; `Other` preserves forward
/// compatibility with content revisions that introduce new areas.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SkillArea {
    Frontend,
    Backend,
    Devops,
    Other(String),
}

impl SkillArea {
    pub fn as_str(&self) -> &str {
        match self {
            SkillArea::Frontend => "frontend",
            SkillArea::Backend => "backend",
            SkillArea::Devops => "devops",
            SkillArea::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "frontend" => SkillArea::Frontend,
            "backend" => SkillArea::Backend,
            "devops" => SkillArea::Devops,
            other => SkillArea::Other(other.to_string()),
        }
    }
}

impl Serialize for SkillArea {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SkillArea {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Skills file as stored on disk.
pub struct SkillsFile {
    pub schema_version: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One tab of the skills section.
pub struct SkillCategory {
    pub id: SkillArea,
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A named proficiency bar; `level` is a 0-100 percentage.
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// Validated, immutable skills collection.
#[derive(Debug)]
pub struct SkillSet {
    categories: Vec<SkillCategory>,
}

impl SkillSet {
    /// Load and validate skill categories from disk.
    pub fn load(path: &Path) -> Result<Self> {
        validate_content_against_schema(path, SKILLS_SCHEMA_FILE, DEFAULT_SKILLS_SCHEMA_VERSION)?;

        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: SkillsFile = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        validate_categories(&file.categories)?;
        Ok(Self {
            categories: file.categories,
        })
    }

    /// Every category in canonical (file) order.
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Resolve a category by id token; exact match.
    pub fn category(&self, id: &str) -> Option<&SkillCategory> {
        self.categories
            .iter()
            .find(|category| category.id.as_str() == id)
    }

    /// Proficiency level for a skill label, scanning categories in canonical
    /// order; first exact match wins.
    pub fn level(&self, name: &str) -> Option<u8> {
        self.categories
            .iter()
            .flat_map(|category| category.skills.iter())
            .find(|skill| skill.name == name)
            .map(|skill| skill.level)
    }

    /// Whether any category lists the given skill label.
    pub fn lists(&self, name: &str) -> bool {
        self.level(name).is_some()
    }
}

fn validate_categories(categories: &[SkillCategory]) -> Result<()> {
    if categories.is_empty() {
        bail!("skills file contains no categories");
    }

    let mut seen_ids = BTreeSet::new();
    for category in categories {
        let id = category.id.as_str();
        if id.trim().is_empty() {
            bail!("encountered skill category with no id");
        }
        if !seen_ids.insert(id.to_string()) {
            bail!("duplicate skill category id '{id}'");
        }
        if category.title.trim().is_empty() {
            bail!("skill category '{id}' has empty title");
        }
        if category.skills.is_empty() {
            bail!("skill category '{id}' has no skills");
        }
        for skill in &category.skills {
            if skill.name.trim().is_empty() {
                bail!("skill category '{id}' contains an unnamed skill");
            }
            if skill.level > 100 {
                bail!(
                    "skill '{}' level must be 0-100, got {}",
                    skill.name,
                    skill.level
                );
            }
        }
    }
    Ok(())
}
