//! Reports skills coverage for every tech label the projects showcase.
//!
//! `tech-coverage` prints the full label→projects map; `--uncovered`
//! restricts output to the labels missing from the skills catalog, which is
//! the actionable list for the site author.

use anyhow::{Result, bail};
use folio::{
    ProjectIndex, SkillSet, build_tech_coverage_map, default_catalog_path, default_skills_path,
    find_content_root, uncovered_labels,
};
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut uncovered_only = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--uncovered" => uncovered_only = true,
            "--help" | "-h" => {
                eprintln!(
                    "Usage: tech-coverage [--uncovered]\nPrints the tech label -> skills coverage map as JSON; --uncovered prints only the labels the skills catalog is missing."
                );
                return Ok(());
            }
            other => bail!("unknown flag: {other}"),
        }
    }

    let root = find_content_root()?;
    let projects = ProjectIndex::load(&default_catalog_path(&root))?;
    let skills = SkillSet::load(&default_skills_path(&root))?;

    let map = build_tech_coverage_map(&projects, &skills);
    if uncovered_only {
        println!("{}", serde_json::to_string(&uncovered_labels(&map))?);
    } else {
        println!("{}", serde_json::to_string(&map)?);
    }
    Ok(())
}
