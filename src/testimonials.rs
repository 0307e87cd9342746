//! Client testimonials shown in the rotating carousel section.
//!
//! Unlike project adjacency, carousel stepping wraps: advancing past the last
//! testimonial lands on the first and stepping back from the first lands on
//! the last. Both behaviors are part of the content contract and must not be
//! unified.

use crate::schema_loader::validate_content_against_schema;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use url::Url;

pub(crate) const TESTIMONIALS_SCHEMA_FILE: &str = "testimonials.schema.json";
pub(crate) const DEFAULT_TESTIMONIALS_SCHEMA_VERSION: &str = "testimonials_v1";

#[derive(Clone, Debug, Deserialize)]
/// Testimonials file as stored on disk.
pub struct TestimonialFile {
    pub schema_version: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One client quote with attribution and a 1-5 star rating.
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub image: String,
}

/// Validated, immutable testimonial collection.
#[derive(Debug)]
pub struct TestimonialSet {
    testimonials: Vec<Testimonial>,
}

impl TestimonialSet {
    /// Load and validate testimonials from disk.
    pub fn load(path: &Path) -> Result<Self> {
        validate_content_against_schema(
            path,
            TESTIMONIALS_SCHEMA_FILE,
            DEFAULT_TESTIMONIALS_SCHEMA_VERSION,
        )?;

        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: TestimonialFile = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        validate_testimonials(&file.testimonials)?;
        Ok(Self {
            testimonials: file.testimonials,
        })
    }

    /// Every testimonial in canonical (file) order.
    pub fn all(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        self.testimonials.get(index)
    }

    /// The carousel index after `index`, wrapping past the end.
    pub fn next_index(&self, index: usize) -> usize {
        self.step(index, 1)
    }

    /// The carousel index before `index`, wrapping past the start.
    pub fn previous_index(&self, index: usize) -> usize {
        self.step(index, -1)
    }

    // Mirrors the carousel pagination arithmetic: add the direction, then
    // wrap modulo the collection length. Out-of-range starting indices clamp
    // into range through the same modulo.
    fn step(&self, index: usize, direction: isize) -> usize {
        let len = self.testimonials.len();
        let shifted = index as isize + direction + len as isize;
        shifted.rem_euclid(len as isize) as usize
    }
}

fn validate_testimonials(testimonials: &[Testimonial]) -> Result<()> {
    if testimonials.is_empty() {
        bail!("testimonials file contains no entries");
    }

    let mut seen_ids = BTreeSet::new();
    for testimonial in testimonials {
        let id = testimonial.id;
        if !seen_ids.insert(id) {
            bail!("duplicate testimonial id {id}");
        }
        for (name, value) in [
            ("name", &testimonial.name),
            ("role", &testimonial.role),
            ("content", &testimonial.content),
        ] {
            if value.trim().is_empty() {
                bail!("testimonial {id} has empty {name}");
            }
        }
        if !(1..=5).contains(&testimonial.rating) {
            bail!(
                "testimonial {id} rating must be 1-5, got {}",
                testimonial.rating
            );
        }
        Url::parse(&testimonial.image)
            .with_context(|| format!("testimonial {id} has invalid image URL"))?;
    }
    Ok(())
}
