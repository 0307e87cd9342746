// Centralized integration suite for the content catalogs; exercises schema
// validation, query contracts, and the helper binaries so changes surface in
// one place.
mod support;

use anyhow::{Context, Result};
use folio::{
    CatalogInfo, CatalogKey, CatalogRepository, ProjectCatalog, ProjectIndex, ProjectRecord,
    default_catalog_path,
};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::io::Write;
use std::process::Command;
use support::{helper_binary, repo_root, run_command};
use tempfile::NamedTempFile;

fn shipped_index() -> Result<ProjectIndex> {
    let root = repo_root();
    ProjectIndex::load(&default_catalog_path(&root)).context("loading shipped catalog")
}

fn fixture_project(id: u32, slug: &str, featured: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Project {slug}"),
        "slug": slug,
        "shortDescription": "Short copy.",
        "fullDescription": "Long copy.",
        "techStack": ["React"],
        "thumbnailImage": format!("assets/{slug}.png"),
        "fullPreviewImages": [format!("assets/{slug}.png")],
        "liveDemoLink": format!("https://example.com/{slug}"),
        "githubLink": format!("https://github.com/example/{slug}"),
        "featured": featured,
        "problem": "Problem copy.",
        "solution": "Solution copy.",
        "result": "Result copy."
    })
}

fn fixture_catalog(projects: Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog fixture")?;
    let payload = json!({
        "schema_version": "portfolio_catalog_v1",
        "catalog": {"key": "fixture_v1", "title": "Fixture catalog"},
        "projects": projects,
    });
    file.write_all(payload.to_string().as_bytes())?;
    Ok(file)
}

// The identity invariants every view relies on: ids and slugs are pairwise
// distinct across the whole shipped catalog.
#[test]
fn shipped_catalog_upholds_identity_invariants() -> Result<()> {
    let index = shipped_index()?;

    let mut ids = BTreeSet::new();
    let mut slugs = BTreeSet::new();
    for project in index.projects() {
        assert!(ids.insert(project.id), "duplicate id {}", project.id.0);
        assert!(
            slugs.insert(project.slug.0.clone()),
            "duplicate slug {}",
            project.slug.0
        );
    }
    Ok(())
}

#[test]
fn featured_subset_preserves_canonical_order() -> Result<()> {
    let index = shipped_index()?;
    let featured = index.featured();
    assert!(featured.iter().all(|project| project.featured));

    let positions: Vec<usize> = featured
        .iter()
        .map(|project| {
            index
                .projects()
                .iter()
                .position(|candidate| candidate.slug == project.slug)
                .expect("featured project missing from canonical list")
        })
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "featured order must follow canonical order"
    );
    Ok(())
}

#[test]
fn slug_lookup_is_exact_and_case_sensitive() -> Result<()> {
    let index = shipped_index()?;

    for project in index.projects() {
        let found = index
            .project(project.slug.as_str())
            .expect("every canonical slug must resolve");
        assert_eq!(found.slug, project.slug);
    }

    // No normalization: trimming and case-folding are deliberately absent.
    assert!(index.project("Agencies-Web-App").is_none());
    assert!(index.project(" agencies-web-app").is_none());
    assert!(index.project("agencies-web-app ").is_none());
    assert!(index.project("zzz").is_none());

    let missing = index.adjacent("zzz");
    assert!(missing.previous.is_none());
    assert!(missing.next.is_none());
    Ok(())
}

// Walking the `next` chain from the first record must visit every record
// exactly once and stop; adjacency never wraps.
#[test]
fn adjacency_chain_terminates_without_wrapping() -> Result<()> {
    let index = shipped_index()?;
    let projects = index.projects();

    let first = &projects[0];
    let last = &projects[projects.len() - 1];
    assert!(index.adjacent(first.slug.as_str()).previous.is_none());
    assert!(index.adjacent(last.slug.as_str()).next.is_none());

    let mut visited = vec![first.slug.0.clone()];
    let mut cursor = first.slug.0.clone();
    while let Some(next) = index.adjacent(&cursor).next {
        assert!(
            !visited.contains(&next.slug.0),
            "adjacency chain revisited {}",
            next.slug.0
        );
        visited.push(next.slug.0.clone());
        cursor = next.slug.0.clone();
    }
    assert_eq!(visited.len(), projects.len());
    Ok(())
}

// The smallest catalog shape that still exercises every query:
// A (featured), B, C (featured) in canonical order.
#[test]
fn three_record_catalog_answers_every_query() -> Result<()> {
    let file = fixture_catalog(json!([
        fixture_project(1, "a", true),
        fixture_project(2, "b", false),
        fixture_project(3, "c", true),
    ]))?;
    let index = ProjectIndex::load(file.path())?;

    let all: Vec<&str> = index
        .projects()
        .iter()
        .map(|project| project.slug.as_str())
        .collect();
    assert_eq!(all, vec!["a", "b", "c"]);

    let featured: Vec<&str> = index
        .featured()
        .iter()
        .map(|project| project.slug.as_str())
        .collect();
    assert_eq!(featured, vec!["a", "c"]);

    assert_eq!(index.project("b").map(|p| p.id.0), Some(2));
    assert!(index.project("zzz").is_none());

    let middle = index.adjacent("b");
    assert_eq!(middle.previous.map(|p| p.slug.as_str()), Some("a"));
    assert_eq!(middle.next.map(|p| p.slug.as_str()), Some("c"));

    let start = index.adjacent("a");
    assert!(start.previous.is_none());
    assert_eq!(start.next.map(|p| p.slug.as_str()), Some("b"));

    let end = index.adjacent("c");
    assert_eq!(end.previous.map(|p| p.slug.as_str()), Some("b"));
    assert!(end.next.is_none());
    Ok(())
}

// Every operation is a pure read: repeated calls observe deep-equal results.
#[test]
fn repeated_queries_observe_identical_results() -> Result<()> {
    let index = shipped_index()?;

    let first_pass: Vec<ProjectRecord> = index.projects().to_vec();
    let featured_before: Vec<ProjectRecord> =
        index.featured().into_iter().cloned().collect();
    let lookup_before = index.project("restaurant-website").cloned();

    // Interleave other queries, then re-run everything.
    let _ = index.adjacent("portfolio-2-0");
    let _ = index.cards();

    assert_eq!(index.projects().to_vec(), first_pass);
    let featured_after: Vec<ProjectRecord> =
        index.featured().into_iter().cloned().collect();
    assert_eq!(featured_after, featured_before);
    assert_eq!(index.project("restaurant-website").cloned(), lookup_before);
    Ok(())
}

#[test]
fn index_rejects_duplicate_slug() -> Result<()> {
    let file = fixture_catalog(json!([
        fixture_project(1, "dup", true),
        fixture_project(2, "dup", false),
    ]))?;
    let err = ProjectIndex::load(file.path()).expect_err("duplicate slug must fail");
    assert!(err.to_string().contains("duplicate project slug 'dup'"));
    Ok(())
}

#[test]
fn index_rejects_duplicate_id() -> Result<()> {
    let file = fixture_catalog(json!([
        fixture_project(7, "first", true),
        fixture_project(7, "second", false),
    ]))?;
    let err = ProjectIndex::load(file.path()).expect_err("duplicate id must fail");
    assert!(err.to_string().contains("duplicate project id 7"));
    Ok(())
}

#[test]
fn index_rejects_relative_demo_link() -> Result<()> {
    let mut project = fixture_project(1, "solo", true);
    project["liveDemoLink"] = json!("demo.html");
    let file = fixture_catalog(json!([project]))?;
    let err = ProjectIndex::load(file.path()).expect_err("relative link must fail");
    assert!(err.to_string().contains("invalid liveDemoLink"));
    Ok(())
}

#[test]
fn index_rejects_unknown_schema_version() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    let payload = json!({
        "schema_version": "portfolio_catalog_v2",
        "catalog": {"key": "fixture_v1", "title": "Fixture catalog"},
        "projects": [fixture_project(1, "solo", true)],
    });
    file.write_all(payload.to_string().as_bytes())?;
    let err = ProjectIndex::load(file.path()).expect_err("unknown schema version must fail");
    assert!(err.to_string().contains("declares schema_version"));
    Ok(())
}

#[test]
fn index_rejects_missing_record_field() -> Result<()> {
    let mut project = fixture_project(1, "solo", true);
    project.as_object_mut().unwrap().remove("problem");
    let file = fixture_catalog(json!([project]))?;
    let err = ProjectIndex::load(file.path()).expect_err("missing field must fail");
    assert!(err.to_string().contains("failed schema validation"));
    Ok(())
}

// The repository skips index validation on purpose, so it documents the
// degraded contract: with a duplicate slug, the first record in canonical
// order wins.
#[test]
fn repository_returns_first_match_in_canonical_order() {
    let make_record = |id: u32, slug: &str, title: &str| {
        let mut value = fixture_project(id, slug, false);
        value["title"] = json!(title);
        serde_json::from_value::<ProjectRecord>(value).expect("fixture record")
    };

    let catalog = ProjectCatalog {
        schema_version: "portfolio_catalog_v1".to_string(),
        catalog: CatalogInfo {
            key: CatalogKey("rev_a".to_string()),
            title: "Revision A".to_string(),
        },
        projects: vec![
            make_record(1, "dup", "First"),
            make_record(2, "dup", "Second"),
        ],
    };

    let mut repository = CatalogRepository::default();
    repository.register(catalog);

    let key = CatalogKey("rev_a".to_string());
    let found = repository
        .find_project(&key, "dup")
        .expect("slug must resolve");
    assert_eq!(found.title, "First");

    assert!(repository.get(&CatalogKey("rev_b".to_string())).is_none());
    assert!(repository.find_project(&key, "absent").is_none());
}

#[test]
fn cli_list_matches_catalog() -> Result<()> {
    let root = repo_root();
    let folio = helper_binary(&root, "folio");
    let index = shipped_index()?;

    let mut list_cmd = Command::new(&folio);
    list_cmd.arg("list").env("FOLIO_ROOT", &root);
    let output = run_command(list_cmd)?;
    let listed: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(listed.len(), index.projects().len());
    assert_eq!(
        listed[0].get("slug").and_then(Value::as_str),
        Some(index.projects()[0].slug.as_str())
    );

    let mut featured_cmd = Command::new(&folio);
    featured_cmd
        .arg("list")
        .arg("--featured")
        .arg("--cards")
        .env("FOLIO_ROOT", &root);
    let output = run_command(featured_cmd)?;
    let cards: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(cards.len(), index.featured().len());
    assert!(
        cards
            .iter()
            .all(|card| card.get("featured") == Some(&Value::Bool(true)))
    );
    Ok(())
}

#[test]
fn cli_show_round_trips_record() -> Result<()> {
    let root = repo_root();
    let folio = helper_binary(&root, "folio");
    let index = shipped_index()?;

    let mut show_cmd = Command::new(&folio);
    show_cmd
        .arg("show")
        .arg("--slug")
        .arg("ecommerce-platform")
        .env("FOLIO_ROOT", &root);
    let output = run_command(show_cmd)?;
    let shown: Value = serde_json::from_slice(&output.stdout)?;

    let expected = serde_json::to_value(
        index
            .project("ecommerce-platform")
            .expect("shipped slug must resolve"),
    )?;
    assert_eq!(shown, expected);
    Ok(())
}

#[test]
fn cli_show_unknown_slug_fails() -> Result<()> {
    let root = repo_root();
    let folio = helper_binary(&root, "folio");

    let mut show_cmd = Command::new(&folio);
    show_cmd
        .arg("show")
        .arg("--slug")
        .arg("zzz")
        .env("FOLIO_ROOT", &root);
    let output = show_cmd.output()?;
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("project not found: zzz"),
        "stderr should name the missing slug"
    );
    Ok(())
}

#[test]
fn cli_adjacent_reports_edges_and_misses() -> Result<()> {
    let root = repo_root();
    let folio = helper_binary(&root, "folio");
    let index = shipped_index()?;
    let first_slug = index.projects()[0].slug.0.clone();
    let second_slug = index.projects()[1].slug.0.clone();

    let mut edge_cmd = Command::new(&folio);
    edge_cmd
        .arg("adjacent")
        .arg("--slug")
        .arg(&first_slug)
        .env("FOLIO_ROOT", &root);
    let output = run_command(edge_cmd)?;
    let adjacent: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(adjacent.get("previous"), Some(&Value::Null));
    assert_eq!(
        adjacent
            .pointer("/next/slug")
            .and_then(Value::as_str),
        Some(second_slug.as_str())
    );

    // Unknown slug is a defined empty result for navigation, not an error.
    let mut miss_cmd = Command::new(&folio);
    miss_cmd
        .arg("adjacent")
        .arg("--slug")
        .arg("zzz")
        .env("FOLIO_ROOT", &root);
    let output = run_command(miss_cmd)?;
    let adjacent: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(adjacent.get("previous"), Some(&Value::Null));
    assert_eq!(adjacent.get("next"), Some(&Value::Null));
    Ok(())
}

#[test]
fn validate_helpers_accept_shipped_content() -> Result<()> {
    let root = repo_root();

    let folio = helper_binary(&root, "folio");
    let mut validate_cmd = Command::new(&folio);
    validate_cmd.arg("validate").env("FOLIO_ROOT", &root);
    let output = run_command(validate_cmd)?;
    let summary: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        summary.get("catalog_key").and_then(Value::as_str),
        Some("portfolio_2025_v1")
    );
    assert_eq!(summary.get("projects").and_then(Value::as_u64), Some(6));
    assert_eq!(summary.get("featured").and_then(Value::as_u64), Some(3));

    let catalog_validate = helper_binary(&root, "catalog-validate");
    let mut gate_cmd = Command::new(&catalog_validate);
    gate_cmd.env("FOLIO_ROOT", &root);
    let output = run_command(gate_cmd)?;
    let report: Value = serde_json::from_slice(&output.stdout)?;
    for file in ["portfolio", "testimonials", "skills"] {
        assert_eq!(
            report
                .pointer(&format!("/files/{file}/status"))
                .and_then(Value::as_str),
            Some("ok"),
            "{file} must validate"
        );
    }
    Ok(())
}

#[test]
fn tech_coverage_reports_known_gaps() -> Result<()> {
    let root = repo_root();
    let tech_coverage = helper_binary(&root, "tech-coverage");

    let mut uncovered_cmd = Command::new(&tech_coverage);
    uncovered_cmd.arg("--uncovered").env("FOLIO_ROOT", &root);
    let output = run_command(uncovered_cmd)?;
    let uncovered: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(uncovered, vec!["Firebase", "MongoDB", "Stripe API"]);

    let mut map_cmd = Command::new(&tech_coverage);
    map_cmd.env("FOLIO_ROOT", &root);
    let output = run_command(map_cmd)?;
    let map: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        map.pointer("/React/listed").and_then(Value::as_bool),
        Some(true)
    );
    assert!(
        map.pointer("/React/project_slugs")
            .and_then(Value::as_array)
            .is_some_and(|slugs| slugs.contains(&json!("agencies-web-app")))
    );
    Ok(())
}
