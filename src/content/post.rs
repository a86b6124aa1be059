//! Post model

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Validated front-matter of a post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMeta {
    pub title: String,
    pub date: DateTime<Utc>,
    pub thumbnail: Option<String>,
    /// Free-form gallery label
    pub gallery: Option<String>,
    #[serde(rename = "galleryImages")]
    pub gallery_images: Vec<GalleryImage>,
}

/// One image of a post's gallery section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub image: String,
    pub alt: String,
}

/// A portfolio entry loaded from `{slug}.md`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// File name without extension; addresses the post at `/work/{slug}`
    pub slug: String,

    pub frontmatter: PostMeta,

    /// Raw markdown body following the front-matter block
    #[serde(skip)]
    pub body: String,

    /// Full source file path
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.frontmatter.date
    }

    /// URL path of the detail page, relative to the site root
    pub fn path(&self) -> String {
        format!("work/{}/", self.slug)
    }

    /// The post listed before this one (newer) in a date-sorted list
    pub fn newer<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        pos.checked_sub(1).map(|i| &posts[i])
    }

    /// The post listed after this one (older) in a date-sorted list
    pub fn older<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }
}
