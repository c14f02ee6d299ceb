//! Site configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Site-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Site title
    pub title: String,

    /// Site description
    pub description: String,

    /// Site author
    pub author: String,

    /// Directory of post files, relative to the base directory
    pub posts_dir: String,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: String::new(),
            posts_dir: "posts".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
