//! Front-matter parsing

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A content file the repository cannot turn into a post
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{slug}: no front-matter block at start of file")]
    MissingFrontMatter { slug: String },

    #[error("{slug}: front-matter block is never closed")]
    UnterminatedFrontMatter { slug: String },

    #[error("{slug}: invalid front-matter YAML: {source}")]
    InvalidYaml {
        slug: String,
        source: serde_yaml::Error,
    },

    #[error("{slug}: front matter is missing required field `{field}`")]
    MissingField { slug: String, field: &'static str },
}

/// Front-matter data from a content file, as written
///
/// Required fields are enforced by the repository when it builds a `Post`,
/// not here; this struct mirrors the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse the leading front-matter block from a content file.
    /// Returns (front_matter, remaining_body).
    ///
    /// The block is YAML delimited by `---` lines at the start of the file.
    /// A file without one is malformed; `slug` only labels the error.
    pub fn parse<'a>(slug: &str, content: &'a str) -> Result<(Self, &'a str), ContentError> {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Err(ContentError::MissingFrontMatter {
                slug: slug.to_string(),
            });
        };

        // Find the closing delimiter. The newline stays in the search window
        // so an immediately-closed block parses as empty front matter.
        let Some(end_pos) = rest.find("\n---") else {
            return Err(ContentError::UnterminatedFrontMatter {
                slug: slug.to_string(),
            });
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        // An empty block is allowed; required-field checks happen later
        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content).map_err(|source| {
            ContentError::InvalidYaml {
                slug: slug.to_string(),
                source,
            }
        })?;

        Ok((fm, remaining))
    }
}
