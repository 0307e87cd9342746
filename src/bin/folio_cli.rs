//! Top-level CLI for querying the portfolio content catalogs.
//!
//! The binary keeps the public `folio <command>` interface stable for shell
//! tooling and static-site generators: every command resolves the content
//! root, loads a validated snapshot, and prints compact JSON on stdout.
//! "Not found" on a detail lookup is a hard error here because the caller
//! named a specific slug; adjacency misses stay a defined empty result, the
//! same contract the detail views rely on.

use anyhow::{Context, Result, bail};
use folio::{ProjectCard, ProjectIndex, ProjectRecord, SiteContent, find_content_root};
use serde::Serialize;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let root = find_content_root()?;

    match cli.command {
        Command::List { featured, cards } => {
            let index = load_index(&root)?;
            if cards {
                let selected: Vec<ProjectCard> = selected_records(&index, featured)
                    .into_iter()
                    .map(ProjectRecord::card)
                    .collect();
                print_json(&selected)
            } else {
                print_json(&selected_records(&index, featured))
            }
        }
        Command::Show { slug } => {
            let index = load_index(&root)?;
            let Some(project) = index.project(&slug) else {
                bail!("project not found: {slug}");
            };
            print_json(project)
        }
        Command::Adjacent { slug } => {
            let index = load_index(&root)?;
            let adjacent = index.adjacent(&slug);
            print_json(&AdjacentOut {
                previous: adjacent.previous.map(ProjectRecord::card),
                next: adjacent.next.map(ProjectRecord::card),
            })
        }
        Command::Validate => {
            let content = SiteContent::load(&root)?;
            print_json(&ValidateOut {
                catalog_key: content.projects.key().0.clone(),
                projects: content.projects.projects().len(),
                featured: content.projects.featured().len(),
                testimonials: content.testimonials.all().len(),
                skill_categories: content.skills.categories().len(),
            })
        }
    }
}

fn load_index(root: &std::path::Path) -> Result<ProjectIndex> {
    ProjectIndex::load(&folio::default_catalog_path(root))
        .context("loading the project catalog")
}

fn selected_records(index: &ProjectIndex, featured: bool) -> Vec<&ProjectRecord> {
    if featured {
        index.featured()
    } else {
        index.projects().iter().collect()
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

#[derive(Serialize)]
struct AdjacentOut {
    previous: Option<ProjectCard>,
    next: Option<ProjectCard>,
}

#[derive(Serialize)]
struct ValidateOut {
    catalog_key: String,
    projects: usize,
    featured: usize,
    testimonials: usize,
    skill_categories: usize,
}

struct Cli {
    command: Command,
}

enum Command {
    List { featured: bool, cards: bool },
    Show { slug: String },
    Adjacent { slug: String },
    Validate,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);

        let Some(name) = args.next() else {
            usage(1);
        };

        let command = match name.as_str() {
            "list" => {
                let mut featured = false;
                let mut cards = false;
                for arg in args.by_ref() {
                    match arg.as_str() {
                        "--featured" => featured = true,
                        "--cards" => cards = true,
                        other => bail!("unknown flag for list: {other}"),
                    }
                }
                Command::List { featured, cards }
            }
            "show" => Command::Show {
                slug: parse_slug(&mut args, "show")?,
            },
            "adjacent" => Command::Adjacent {
                slug: parse_slug(&mut args, "adjacent")?,
            },
            "validate" => Command::Validate,
            "--help" | "-h" => usage(0),
            _ => usage(1),
        };

        if let Some(extra) = args.next() {
            bail!("unexpected argument: {extra}");
        }

        Ok(Self { command })
    }
}

fn parse_slug(args: &mut impl Iterator<Item = String>, command: &str) -> Result<String> {
    match args.next().as_deref() {
        Some("--slug") => {}
        Some(other) => bail!("unknown flag for {command}: {other}"),
        None => bail!("{command} requires --slug <slug>"),
    }
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing value for --slug"))
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: folio <command> [flags]\n\nCommands:\n  list [--featured] [--cards]   Print the catalog (optionally the featured subset, as card snapshots).\n  show --slug <slug>            Print one project record.\n  adjacent --slug <slug>        Print previous/next card snapshots for a detail view.\n  validate                      Load every content file and print a summary.\n\nExamples:\n  folio list --featured --cards\n  folio adjacent --slug ecommerce-platform"
    );
    std::process::exit(code);
}
