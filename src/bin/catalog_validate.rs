//! CI gate for the shipped content files.
//!
//! Loads every content file through the same validation path the library
//! uses, prints a one-object JSON summary per file, and exits non-zero when
//! anything fails. Errors carry file context on stderr so a broken content
//! edit points straight at the offending entry.

use anyhow::Result;
use folio::{
    ProjectIndex, SkillSet, TestimonialSet, default_catalog_path, default_skills_path,
    default_testimonials_path, find_content_root,
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

#[derive(Serialize)]
struct FileReport {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run() -> Result<()> {
    let root = find_content_root()?;
    let mut reports: BTreeMap<&'static str, FileReport> = BTreeMap::new();

    reports.insert(
        "portfolio",
        report(ProjectIndex::load(&default_catalog_path(&root)).map(|index| {
            index.projects().len()
        })),
    );
    reports.insert(
        "testimonials",
        report(
            TestimonialSet::load(&default_testimonials_path(&root))
                .map(|set| set.all().len()),
        ),
    );
    reports.insert(
        "skills",
        report(SkillSet::load(&default_skills_path(&root)).map(|set| set.categories().len())),
    );

    let failed = reports.values().any(|entry| entry.status != "ok");
    println!(
        "{}",
        serde_json::to_string(&json!({
            "root": root.display().to_string(),
            "files": reports,
        }))?
    );

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn report(outcome: Result<usize>) -> FileReport {
    match outcome {
        Ok(entries) => FileReport {
            status: "ok",
            entries: Some(entries),
            error: None,
        },
        Err(err) => FileReport {
            status: "invalid",
            entries: None,
            error: Some(format!("{err:#}")),
        },
    }
}
