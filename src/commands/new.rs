//! Create a new post

use anyhow::{bail, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::content::{parse_date_string, POST_EXTENSION};
use crate::Folio;

#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    date: String,
    thumbnail: Option<String>,
    #[serde(rename = "galleryImages")]
    gallery_images: Vec<String>,
}

/// Write `{posts_dir}/{slug}.md` with front-matter for `title`
pub fn create_post(folio: &Folio, title: &str, date: Option<&str>) -> Result<PathBuf> {
    let title = title.trim();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    let date = match date {
        Some(d) => {
            if parse_date_string(d).is_none() {
                bail!("Unrecognised date: {}", d);
            }
            d.to_string()
        }
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    let file_path = folio
        .posts_dir
        .join(format!("{}.{}", slug, POST_EXTENSION));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let front = serde_yaml::to_string(&Scaffold {
        title,
        date,
        thumbnail: None,
        gallery_images: Vec::new(),
    })?;
    let content = format!("---\n{}---\n\n", front);

    fs::create_dir_all(&folio.posts_dir)?;
    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostLoader;
    use tempfile::TempDir;

    #[test]
    fn test_created_post_loads() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        let path = create_post(&folio, "Study: Blue & Gold", Some("2024-02-29")).unwrap();
        assert!(path.ends_with("study-blue-gold.md"));

        let post = PostLoader::new(&folio.posts_dir)
            .load_post("study-blue-gold")
            .unwrap();
        assert_eq!(post.title(), "Study: Blue & Gold");
        assert_eq!(post.date().format("%Y-%m-%d").to_string(), "2024-02-29");
        assert!(post.frontmatter.thumbnail.is_none());
        assert!(post.frontmatter.gallery_images.is_empty());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        create_post(&folio, "Dusk", None).unwrap();
        assert!(create_post(&folio, "Dusk", None).is_err());
    }

    #[test]
    fn test_rejects_bad_input() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert!(create_post(&folio, "!!!", None).is_err());
        assert!(create_post(&folio, "Dusk", Some("tomorrow")).is_err());
    }
}
