//! Command-line interface for exhibit.
//!
//! Provides commands for printing the category tree, listing and
//! inspecting examples, resolving related examples, and showing the
//! resolved configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config;
use crate::content::loader;
use crate::core::ExampleIndex;
use crate::domain::{ExampleRecord, PreparedExample};

/// exhibit - Example catalog shaping for documentation sites
#[derive(Parser, Debug)]
#[command(name = "exhibit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the category tree of all examples
    Tree,

    /// List examples
    List {
        /// Only show examples in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum number of examples to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show the curated related examples of an example
    Related {
        /// Example slug
        slug: String,
    },

    /// Show details of one example
    Show {
        /// Example slug
        slug: String,

        /// Also list the example's source files in display order
        #[arg(short, long)]
        files: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Tree => show_tree().await,
            Commands::List { category, limit } => list_examples(category, limit).await,
            Commands::Related { slug } => show_related(&slug).await,
            Commands::Show { slug, files } => show_example(&slug, files).await,
            Commands::Config => show_config(),
        }
    }
}

/// Load the raw records and derive the prepared view
async fn load_prepared(
    index: &mut ExampleIndex,
) -> Result<(Vec<ExampleRecord>, Vec<PreparedExample>)> {
    let examples = loader::load_examples(&config::content_dir()?).await?;
    let images = loader::load_images(&config::assets_dir()?)?;

    let prepared = index.prepared(&examples, Some(images.as_slice()))?.to_vec();
    Ok((examples, prepared))
}

/// Print the category tree
async fn show_tree() -> Result<()> {
    let mut index = ExampleIndex::new(config::base_path()?);
    let (_, prepared) = load_prepared(&mut index).await?;
    let tree = index.organized(&prepared)?;

    for (category, subs) in tree {
        println!("{}", display_key(category));
        for (sub_category, items) in subs {
            println!("  {}", display_key(sub_category));
            for item in items {
                println!("    {} ({})", item.name, item.slug);
            }
        }
    }

    Ok(())
}

/// List prepared examples, optionally restricted to one category
async fn list_examples(category: Option<String>, limit: usize) -> Result<()> {
    let mut index = ExampleIndex::new(config::base_path()?);
    let (_, prepared) = load_prepared(&mut index).await?;

    let mut shown = 0;
    for item in &prepared {
        if let Some(ref wanted) = category {
            if item.category.as_deref() != Some(wanted.as_str()) {
                continue;
            }
        }
        if shown >= limit {
            break;
        }

        println!(
            "{:<24} {:<16} {}",
            item.slug,
            item.category.as_deref().unwrap_or("-"),
            item.path
        );
        shown += 1;
    }

    println!("\n{} examples", shown);
    Ok(())
}

/// Resolve and print the related examples of one example
async fn show_related(slug: &str) -> Result<()> {
    let mut index = ExampleIndex::new(config::base_path()?);
    let (examples, prepared) = load_prepared(&mut index).await?;

    let example = examples
        .iter()
        .find(|example| example.name == slug)
        .with_context(|| format!("No example named {slug}"))?;

    let related = index.related(&prepared, &example.meta.related)?;
    if related.is_empty() {
        println!("No related examples for {slug}");
        return Ok(());
    }

    for item in related {
        println!("{:<24} {}", item.slug, item.path);
    }
    Ok(())
}

/// Print one example's details
async fn show_example(slug: &str, files: bool) -> Result<()> {
    let mut index = ExampleIndex::new(config::base_path()?);
    let (examples, prepared) = load_prepared(&mut index).await?;

    let item = prepared
        .iter()
        .find(|item| item.slug == slug)
        .with_context(|| format!("No example named {slug}"))?;

    println!("Name: {}", item.name);
    println!("Slug: {}", item.slug);
    println!("Path: {}", item.path);
    if let Some(ref category) = item.category {
        println!("Category: {}", category);
    }
    if let Some(ref sub_category) = item.sub_category {
        println!("Subcategory: {}", sub_category);
    }
    match &item.image {
        Some(image) => println!("Image: {}", image.path.display()),
        None => println!("Image: (none)"),
    }

    if files {
        let record = examples
            .iter()
            .find(|example| example.name == slug)
            .with_context(|| format!("No example named {slug}"))?;

        let dir = loader::example_dir(&config::content_dir()?, record);
        let sources = loader::load_sources(&dir).await?;
        let ordered = index.ordered(slug, &sources)?;

        println!("\nFiles:");
        if ordered.main.is_none() {
            println!("  (no main file named {slug})");
        }
        for file in ordered.iter() {
            println!("  {}", file.path.display());
        }
    }

    Ok(())
}

/// Print the resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("Content: {}", config.content.display());
    println!("Assets: {}", config.assets.display());
    println!("Base path: {}", config.base_path);
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }

    Ok(())
}

/// Render possibly-empty grouping keys
fn display_key(key: &str) -> &str {
    if key.is_empty() {
        "(uncategorized)"
    } else {
        key
    }
}
