//! papyr: a markdown blog content reader
//!
//! Reads front-matter posts from a flat directory and serves them as
//! structured records, sorted listings for an index page and single
//! lookups for post pages.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

/// The main papyr application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding post files
    pub posts_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Repository over the configured posts directory
    pub fn repository(&self) -> content::PostRepository {
        content::PostRepository::new(&self.posts_dir)
    }
}
