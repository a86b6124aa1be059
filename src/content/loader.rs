//! Post loader - reads `{slug}.md` files from the posts directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, Post, POST_EXTENSION};
use crate::error::ContentError;

/// Loads posts from a single directory
pub struct PostLoader {
    posts_dir: PathBuf,
}

impl PostLoader {
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// Load every post, newest first.
    ///
    /// A missing directory means an empty site. The first malformed file
    /// aborts the load.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        if !self.posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && is_post_file(path) {
                posts.push(self.read_post(path)?);
            }
        }

        // sort_by is stable: equal dates keep file-name order
        posts.sort_by(|a, b| b.date().cmp(&a.date()));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(posts)
    }

    /// Load the post addressed by `slug`
    pub fn load_post(&self, slug: &str) -> Result<Post, ContentError> {
        if !is_plain_slug(slug) {
            return Err(ContentError::MissingPost(slug.to_string()));
        }

        let path = self.posts_dir.join(format!("{}.{}", slug, POST_EXTENSION));
        if !path.is_file() {
            return Err(ContentError::MissingPost(slug.to_string()));
        }

        self.read_post(&path)
    }

    fn read_post(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&content)
            .map_err(|e| ContentError::malformed(path, e.to_string()))?;
        let frontmatter = fm
            .validate()
            .map_err(|e| ContentError::malformed(path, e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::malformed(path, "file name is not valid UTF-8"))?
            .to_string();

        if slug::slugify(&slug) != slug {
            tracing::warn!(
                "Post {:?} has a slug that is not URL-safe: '{}'",
                path,
                slug
            );
        }

        tracing::debug!("Loaded post '{}' ({})", slug, frontmatter.date);

        Ok(Post {
            slug,
            frontmatter,
            body: body.to_string(),
            source: path.to_path_buf(),
        })
    }
}

/// Check if a file has the post extension
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == POST_EXTENSION)
        .unwrap_or(false)
}

/// A slug that names a file directly inside the posts directory
fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\'])
}
