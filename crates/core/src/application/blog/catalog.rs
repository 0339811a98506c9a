// Seed Catalog - built-in articles shipped with the crate

use crate::domain::{estimate_reading_time, NewBlogPost};
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("../../../seed/posts.json");

/// One catalog entry as written in the JSON file
///
/// Differs from `NewBlogPost` in two places: `publishedAt` is an RFC 3339
/// string and `readingTime` may be omitted (then estimated from content).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEntry {
    slug: String,
    title: String,
    excerpt: String,
    content: String,
    #[serde(default)]
    featured_image: Option<String>,
    author_name: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    reading_time: Option<i32>,
    #[serde(default)]
    meta_title: Option<String>,
    #[serde(default)]
    meta_description: Option<String>,
    #[serde(default = "default_published")]
    is_published: bool,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
}

fn default_published() -> bool {
    true
}

impl SeedEntry {
    fn into_new_post(self) -> NewBlogPost {
        let reading_time = self
            .reading_time
            .unwrap_or_else(|| estimate_reading_time(&self.content));

        NewBlogPost {
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image,
            author_name: self.author_name,
            category: self.category,
            tags: self.tags,
            reading_time,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            is_published: self.is_published,
            published_at: self.published_at.map(|at| at.timestamp_millis()),
        }
    }
}

/// Posts from the catalog embedded at compile time
pub fn builtin_posts() -> Result<Vec<NewBlogPost>> {
    parse_catalog(BUILTIN_CATALOG)
}

/// Parse a catalog document (a JSON array of entries)
///
/// Duplicate slugs are rejected up front so a bad catalog never reaches
/// the store.
pub fn parse_catalog(json: &str) -> Result<Vec<NewBlogPost>> {
    let entries: Vec<SeedEntry> = serde_json::from_str(json)?;

    if let Some(dup) = first_duplicate_slug(&entries) {
        return Err(AppError::InvalidData(format!(
            "Duplicate slug in seed catalog: {}",
            dup
        )));
    }

    Ok(entries.into_iter().map(SeedEntry::into_new_post).collect())
}

fn first_duplicate_slug(entries: &[SeedEntry]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .map(|entry| entry.slug.as_str())
        .find(|slug| !seen.insert(*slug))
}
