//! Show a single post rendered as HTML

use anyhow::Result;

use crate::content::{html_escape, MarkdownRenderer, Post};
use crate::Blog;

/// Print one post by slug, body rendered to HTML.
/// A missing post is a normal outcome and prints a not-found line.
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let post = blog.repository().find_by_slug(slug)?;
    println!("{}", lookup_page(slug, post.as_ref()));
    Ok(())
}

/// Build the page for a slug lookup; absence gets its own presentation
fn lookup_page(slug: &str, post: Option<&Post>) -> String {
    match post {
        Some(post) => render_post_page(post),
        None => format!("Post not found: {}", slug),
    }
}

/// Render a post as a standalone HTML fragment
fn render_post_page(post: &Post) -> String {
    let renderer = MarkdownRenderer::new();
    format!(
        "<article>\n<h1>{}</h1>\n<time>{}</time>\n{}</article>",
        html_escape(&post.title),
        html_escape(&post.date),
        renderer.render(&post.content),
    )
}
