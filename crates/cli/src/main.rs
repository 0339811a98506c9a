//! Vitality Blog CLI - content store administration
//!
//! Composition root: wires the SQLite adapter into `BlogService` and exposes
//! every service operation as a subcommand.

mod logging;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use logging::LogFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use vitality_blog_core::application::blog::catalog;
use vitality_blog_core::application::BlogService;
use vitality_blog_core::domain::{BlogPostPatch, NewBlogPost, PostId};
use vitality_blog_core::port::time_provider::SystemTimeProvider;
use vitality_blog_core::port::TimeProvider;
use vitality_blog_infra_sqlite::{create_pool, run_migrations, SqliteBlogPostRepository};

const DEFAULT_DB_PATH: &str = "~/.vitality-blog/blog.db";

#[derive(Parser)]
#[command(name = "vitality-blog")]
#[command(about = "Vitality blog content store", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database path or sqlite: URL
    #[arg(long, env = "VITALITY_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: String,

    /// Log output format
    #[arg(long, env = "VITALITY_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// List published posts, newest first
    List {
        /// Only posts in this category (exact match)
        #[arg(short, long, conflicts_with = "all")]
        category: Option<String>,

        /// Include drafts
        #[arg(long)]
        all: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one post by slug
    Show {
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a post from a JSON document
    Create {
        /// Path to the post JSON (camelCase fields)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Apply a partial update from a JSON document
    Update {
        /// Post ID
        id: PostId,

        /// Path to the patch JSON; absent keys are left unchanged, null clears
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Mark a post as published
    Publish {
        /// Post ID
        id: PostId,
    },

    /// Move a post back to draft
    Unpublish {
        /// Post ID
        id: PostId,
    },

    /// Delete a post
    Delete {
        /// Post ID
        id: PostId,
    },

    /// Delete every post
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Replace all posts with the built-in catalog (or a catalog file)
    Seed {
        /// Catalog JSON to use instead of the built-in one
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Turn the configured path into something `create_pool` accepts
///
/// `sqlite:` URLs pass through untouched; plain paths get `~` expanded and
/// their parent directory created.
fn resolve_database_url(db_path: &str) -> Result<String> {
    if db_path.starts_with("sqlite:") {
        return Ok(db_path.to_string());
    }

    let expanded = shellexpand::tilde(db_path).into_owned();
    if let Some(parent) = Path::new(&expanded).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Ok(expanded)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_format)?;

    let database_url = resolve_database_url(&cli.db_path)?;
    info!(database_url = %database_url, "Opening blog database");

    let pool = create_pool(&database_url)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // Setup dependencies (DI wiring)
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let repo = Arc::new(SqliteBlogPostRepository::new(
        pool.clone(),
        time_provider.clone(),
    ));
    let service = BlogService::new(repo.clone(), repo);

    match cli.command {
        Commands::List {
            category,
            all,
            json,
        } => {
            let posts = match (category, all) {
                (Some(category), _) => service.list_published_by_category(&category).await?,
                (None, true) => service.list_all().await?,
                (None, false) => service.list_published().await?,
            };

            if json {
                print_json(&posts)?;
            } else {
                render::print_table(&posts);
            }
        }

        Commands::Show { slug, json } => match service.get_by_slug(&slug).await? {
            Some(post) if json => print_json(&post)?,
            Some(post) => render::print_post(&post),
            None => println!("{}", format!("No post with slug '{}'", slug).yellow()),
        },

        Commands::Create { file } => {
            let new_post: NewBlogPost = read_json(&file)?;
            let post = service.create(new_post).await?;
            println!(
                "{}",
                format!("✓ Created post {} ({})", post.id, post.slug)
                    .green()
                    .bold()
            );
        }

        Commands::Update { id, file } => {
            let patch: BlogPostPatch = read_json(&file)?;
            report_update(id, service.update(id, patch).await?.is_some());
        }

        Commands::Publish { id } => {
            let Some(current) = service.get_by_id(id).await? else {
                println!("{}", format!("No post with id {}", id).yellow());
                return Ok(());
            };

            let patch = BlogPostPatch {
                is_published: Some(true),
                // keep an existing (possibly backdated) date
                published_at: current
                    .published_at
                    .is_none()
                    .then(|| Some(time_provider.now_millis())),
                ..Default::default()
            };
            report_update(id, service.update(id, patch).await?.is_some());
        }

        Commands::Unpublish { id } => {
            let patch = BlogPostPatch {
                is_published: Some(false),
                ..Default::default()
            };
            report_update(id, service.update(id, patch).await?.is_some());
        }

        Commands::Delete { id } => {
            service.delete(id).await?;
            println!("{}", format!("✓ Post {} deleted", id).green().bold());
        }

        Commands::Clear { yes } => {
            if !yes {
                bail!("Refusing to delete every post without --yes");
            }
            service.clear_all().await?;
            println!("{}", "✓ All posts deleted".green().bold());
        }

        Commands::Seed { file } => {
            let report = match file {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let posts = catalog::parse_catalog(&raw)?;
                    service.seed_posts(&posts).await?
                }
                None => service.seed_initial_posts().await?,
            };

            println!("{}", "✓ Blog seeded".green().bold());
            println!();
            println!("  {} {}", "Removed:".bold(), report.cleared);
            println!("  {} {}", "Inserted:".bold(), report.inserted);
            println!("  {} {}", "Published:".bold(), report.published);
        }
    }

    Ok(())
}

fn report_update(id: PostId, found: bool) {
    if found {
        println!("{}", format!("✓ Post {} updated", id).green().bold());
    } else {
        println!("{}", format!("No post with id {}", id).yellow());
    }
}
