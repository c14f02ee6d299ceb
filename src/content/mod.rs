//! Content module - posts, front matter, and markdown rendering

mod frontmatter;
mod markdown;
mod post;
pub mod repository;

pub use frontmatter::{ContentError, FrontMatter};
pub use markdown::{html_escape, MarkdownRenderer};
pub use post::Post;
pub use repository::PostRepository;
