//! Post repository - reads posts from a flat content directory

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};

/// Fixed extension for content files; a file's stem is its slug.
/// One extension over a flat directory means slugs cannot collide.
const POST_EXT: &str = "md";

/// Reads `Post` records from a directory of markdown files.
///
/// Stateless: every call re-reads the backing store, so edits on disk are
/// visible on the next read. The repository never writes.
pub struct PostRepository {
    posts_dir: PathBuf,
}

impl PostRepository {
    /// Create a repository over an explicit content directory
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
        }
    }

    /// Load all posts, newest date string first.
    ///
    /// A missing backing directory yields an empty list. Files that fail to
    /// parse are skipped with a warning so one bad file cannot take down
    /// the whole listing.
    pub fn all_posts(&self) -> Result<Vec<Post>> {
        if !self.posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                match load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Skipping post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Descending lexicographic on the raw date string, not calendar
        // order; ties keep whatever order the scan produced
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Look up a single post by slug.
    ///
    /// Absence is a normal outcome, not an error. A present but malformed
    /// file is an error here, unlike in `all_posts`: the caller asked for
    /// this specific post.
    pub fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        // A slug is a single normal path segment; anything else cannot name
        // a post
        if slug.is_empty() || slug.contains(['/', '\\']) || slug == "." || slug == ".." {
            return Ok(None);
        }

        let path = self.posts_dir.join(format!("{}.{}", slug, POST_EXT));
        if !path.is_file() {
            return Ok(None);
        }

        Ok(Some(load_post(&path)?))
    }
}

/// Parse one content file into a post
fn load_post(path: &Path) -> Result<Post> {
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let content = fs::read_to_string(path)?;
    let (fm, body) = FrontMatter::parse(&slug, &content)?;

    let title = fm.title.ok_or_else(|| ContentError::MissingField {
        slug: slug.clone(),
        field: "title",
    })?;
    let date = fm.date.ok_or_else(|| ContentError::MissingField {
        slug: slug.clone(),
        field: "date",
    })?;

    tracing::debug!("Loaded post {} ({})", slug, date);

    Ok(Post {
        slug,
        title,
        date,
        content: body.to_string(),
        excerpt: fm.excerpt,
    })
}

/// Check if a file is a content file
fn is_post_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(POST_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        let content = format!(
            "---\ntitle: \"{}\"\ndate: \"{}\"\n---\nBody of {}.\n",
            title, date, title
        );
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty_list() {
        let tmp = TempDir::new().unwrap();
        let repo = PostRepository::new(tmp.path().join("does-not-exist"));
        assert!(repo.all_posts().unwrap().is_empty());
    }

    #[test]
    fn test_empty_directory_is_empty_list() {
        let tmp = TempDir::new().unwrap();
        let repo = PostRepository::new(tmp.path());
        assert!(repo.all_posts().unwrap().is_empty());
    }

    #[test]
    fn test_lists_every_valid_file_with_stem_as_slug() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "first.md", "First", "2024-01-01");
        write_post(tmp.path(), "second.md", "Second", "2024-01-02");
        write_post(tmp.path(), "third.md", "Third", "2024-01-03");

        let posts = PostRepository::new(tmp.path()).all_posts().unwrap();
        assert_eq!(posts.len(), 3);

        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.md", "A", "2024-01-01");
        write_post(tmp.path(), "b.md", "B", "2024-03-01");
        write_post(tmp.path(), "c.md", "C", "2023-12-31");

        let posts = PostRepository::new(tmp.path()).all_posts().unwrap();
        let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-01-01", "2023-12-31"]);
    }

    #[test]
    fn test_non_content_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "post.md", "Post", "2024-01-01");
        fs::write(tmp.path().join("notes.txt"), "not a post").unwrap();

        let posts = PostRepository::new(tmp.path()).all_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "post");
    }

    #[test]
    fn test_listing_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "top.md", "Top", "2024-01-01");
        let nested = tmp.path().join("drafts");
        fs::create_dir(&nested).unwrap();
        write_post(&nested, "hidden.md", "Hidden", "2024-01-02");

        let posts = PostRepository::new(tmp.path()).all_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "top");
    }

    #[test]
    fn test_malformed_file_is_skipped_in_listing() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "good.md", "Good", "2024-01-01");
        // No date field
        fs::write(tmp.path().join("bad.md"), "---\ntitle: Bad\n---\nBody.\n").unwrap();

        let posts = PostRepository::new(tmp.path()).all_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn test_find_by_slug_roundtrip() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("hello.md"),
            "---\ntitle: \"Hello\"\ndate: \"2024-05-01\"\nexcerpt: \"Hi\"\n---\nWorld",
        )
        .unwrap();

        let post = PostRepository::new(tmp.path())
            .find_by_slug("hello")
            .unwrap()
            .unwrap();

        assert_eq!(
            post,
            Post {
                slug: "hello".to_string(),
                title: "Hello".to_string(),
                date: "2024-05-01".to_string(),
                content: "World".to_string(),
                excerpt: Some("Hi".to_string()),
            }
        );
    }

    #[test]
    fn test_find_by_slug_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "stable.md", "Stable", "2024-04-04");

        let repo = PostRepository::new(tmp.path());
        let first = repo.find_by_slug("stable").unwrap().unwrap();
        let second = repo.find_by_slug("stable").unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_by_slug_absent_is_none() {
        let tmp = TempDir::new().unwrap();
        let repo = PostRepository::new(tmp.path());
        assert_eq!(repo.find_by_slug("nope").unwrap(), None);
    }

    #[test]
    fn test_find_by_slug_rejects_path_segments() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "real.md", "Real", "2024-01-01");

        let repo = PostRepository::new(tmp.path().join("sub"));
        assert_eq!(repo.find_by_slug("../real").unwrap(), None);
        assert_eq!(repo.find_by_slug("..").unwrap(), None);
        assert_eq!(repo.find_by_slug(".").unwrap(), None);
        assert_eq!(repo.find_by_slug("").unwrap(), None);
    }

    #[test]
    fn test_find_by_slug_malformed_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.md"), "no front matter here\n").unwrap();

        let repo = PostRepository::new(tmp.path());
        assert!(repo.find_by_slug("bad").is_err());
    }
}
