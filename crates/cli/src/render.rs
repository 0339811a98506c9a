//! Terminal output for posts

use chrono::DateTime;
use colored::Colorize;
use tabled::{Table, Tabled};
use vitality_blog_core::domain::{BlogPost, Timestamp};

const TITLE_WIDTH: usize = 48;

#[derive(Tabled)]
struct PostLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Min")]
    reading_time: i32,
}

impl From<&BlogPost> for PostLine {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            slug: post.slug.clone(),
            title: truncate(&post.title, TITLE_WIDTH),
            category: post.category.clone(),
            status: if post.is_published { "published" } else { "draft" },
            published: post.published_at.map(format_date).unwrap_or_else(|| "-".to_string()),
            reading_time: post.reading_time,
        }
    }
}

pub fn print_table(posts: &[BlogPost]) {
    if posts.is_empty() {
        println!("{}", "No posts".yellow());
        return;
    }

    let lines: Vec<PostLine> = posts.iter().map(PostLine::from).collect();
    println!("{}", Table::new(lines));
    println!("{} post(s)", posts.len());
}

pub fn print_post(post: &BlogPost) {
    println!("{}", post.title.cyan().bold());
    println!();
    println!("  {} {}", "ID:".bold(), post.id);
    println!("  {} {}", "Slug:".bold(), post.slug);
    println!("  {} {}", "Author:".bold(), post.author_name);
    println!("  {} {}", "Category:".bold(), post.category);
    println!("  {} {}", "Tags:".bold(), post.tags.join(", "));
    println!("  {} {} min", "Reading time:".bold(), post.reading_time);
    let status = if post.is_published {
        "published".green()
    } else {
        "draft".yellow()
    };
    println!("  {} {}", "Status:".bold(), status);
    if let Some(at) = post.published_at {
        println!("  {} {}", "Published at:".bold(), format_datetime(at));
    }
    println!("  {} {}", "Updated at:".bold(), format_datetime(post.updated_at));
    if let Some(image) = &post.featured_image {
        println!("  {} {}", "Image:".bold(), image);
    }
    if let Some(title) = &post.meta_title {
        println!("  {} {}", "Meta title:".bold(), title);
    }
    if let Some(description) = &post.meta_description {
        println!("  {} {}", "Meta description:".bold(), description);
    }
    println!();
    println!("{}", post.excerpt.italic());
}

fn format_date(ms: Timestamp) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn format_datetime(ms: Timestamp) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
