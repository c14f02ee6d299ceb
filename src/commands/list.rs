//! List posts

use anyhow::Result;
use clap::ValueEnum;
use std::fmt::Write;

use crate::content::Post;
use crate::Blog;

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable lines
    Plain,
    /// JSON array of post records
    Json,
}

/// List all posts, newest first
pub fn run(blog: &Blog, format: ListFormat) -> Result<()> {
    let posts = blog.repository().all_posts()?;
    println!("{}", format_listing(&posts, format)?);
    Ok(())
}

/// Render the listing in the requested format
fn format_listing(posts: &[Post], format: ListFormat) -> Result<String> {
    match format {
        ListFormat::Json => Ok(serde_json::to_string_pretty(posts)?),
        ListFormat::Plain => {
            let mut out = String::new();
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(out, "  {} - {} [{}]", post.date, post.title, post.slug)?;
                if let Some(excerpt) = &post.excerpt {
                    writeln!(out, "      {}", excerpt)?;
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}
