//! tfsnip — generate Terraform snippet definitions from cached provider docs.
//!
//! Scans a local cache of registry documentation pages, extracts the first
//! "Example Usage" code block per resource, and writes one snippet JSON file
//! (built-in boilerplate entries first, discovered resources after).
//!
//! The cache is populated by a separate fetch step; this tool never touches
//! the network.

mod config;
mod extract;
mod model;
mod render;
mod select;

use anyhow::Result;
use clap::Parser;
use config::Config;
use model::Snippet;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tfsnip",
    about = "Generate Terraform snippet definitions from cached registry documentation"
)]
struct Cli {
    /// Directory of cached documentation pages
    #[arg(long, default_value = "./tmp")]
    cache_dir: PathBuf,

    /// Output snippets file
    #[arg(short = 'o', long, default_value = "./generated/terraform.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config {
        cache_dir: cli.cache_dir,
        output: cli.output,
        ..Config::default()
    };
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let files = select::cached_documents(&config.cache_dir, &config.services)?;

    // Pages are independent; extract in parallel, keep selector order.
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, extract::snippet(path, &config.provider_prefix)))
        .collect();

    let mut snippets = model::builtins();
    for (path, result) in results {
        match result {
            Ok(Some(snippet)) => snippets.push(snippet),
            Ok(None) => {}
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }

    write_document(&snippets, config)?;
    println!("generated snippets {}", config.output.display());
    Ok(())
}

fn write_document(snippets: &[Snippet], config: &Config) -> Result<()> {
    let text = render::document(snippets, &config.doc_root);
    render::write(&config.output, &text)
}
