//! Post model

use serde::{Deserialize, Serialize};

/// A blog post loaded from the content directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, the source filename minus its extension
    pub slug: String,

    /// Post title from front matter
    pub title: String,

    /// Publication date from front matter, kept as the raw string.
    /// Listings order by descending lexicographic comparison, so calendar
    /// ordering requires a sortable format such as ISO 8601.
    pub date: String,

    /// Raw markdown body after the front matter block
    pub content: String,

    /// Post excerpt from front matter
    pub excerpt: Option<String>,
}
