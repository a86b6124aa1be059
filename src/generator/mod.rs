//! Generator module - renders routes to HTML and writes the static tree

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{MarkdownRenderer, Post};
use crate::masonry::{distribute, Tier};
use crate::routes::Route;
use crate::templates::{CardData, ConfigData, NavPost, TemplateRenderer, TierData, WorkData};
use crate::Folio;

/// Longest description emitted in `<meta name="description">`
const DESCRIPTION_CHARS: usize = 160;

/// Outcome of rendering one route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub status: Status,
    pub html: String,
}

/// Static site generator using the built-in templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    pub fn new(folio: &Folio) -> Result<Self> {
        Ok(Self {
            folio: folio.clone(),
            renderer: TemplateRenderer::new(&folio.config)?,
            markdown: MarkdownRenderer::with_options(&folio.config.highlight),
        })
    }

    /// Generate the entire site from posts sorted newest first
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.folio.public_dir))?;

        self.copy_static_assets()?;

        let mut routes = vec![Route::Home, Route::NotFound];
        routes.extend(posts.iter().map(|p| Route::Work(p.slug.clone())));

        for route in &routes {
            let rendered = self.render_route(route, posts)?;
            self.write(route, &rendered.html)?;
        }

        tracing::info!("Wrote {} pages to {:?}", routes.len(), self.folio.public_dir);
        Ok(())
    }

    /// Render a single route; unknown slugs yield the not-found page
    pub fn render_route(&self, route: &Route, posts: &[Post]) -> Result<Rendered> {
        match route {
            Route::Home => Ok(Rendered {
                status: Status::Ok,
                html: self.render_home(posts)?,
            }),
            Route::Work(slug) => match posts.iter().find(|p| &p.slug == slug) {
                Some(post) => self.render_post(post, posts),
                None => {
                    tracing::debug!("No post for slug '{}'", slug);
                    self.render_not_found()
                }
            },
            Route::NotFound => self.render_not_found(),
        }
    }

    /// Render the detail page of `post`; `posts` supplies the newer/older links
    pub fn render_post(&self, post: &Post, posts: &[Post]) -> Result<Rendered> {
        Ok(Rendered {
            status: Status::Ok,
            html: self.render_work(post, posts)?,
        })
    }

    pub fn render_not_found(&self) -> Result<Rendered> {
        Ok(Rendered {
            status: Status::NotFound,
            html: self.renderer.render("404.html", &self.base_context())?,
        })
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &ConfigData::from(&self.folio.config));
        context.insert("breakpoints", &self.folio.config.breakpoints);
        context.insert("current_year", &chrono::Utc::now().format("%Y").to_string());
        context
    }

    fn render_home(&self, posts: &[Post]) -> Result<String> {
        let cards: Vec<CardData> = posts.iter().map(card_data).collect();

        // One pre-distributed grid per tier; CSS shows the one matching the viewport
        let tiers: Vec<TierData> = if cards.is_empty() {
            Vec::new()
        } else {
            self.folio
                .config
                .breakpoints
                .tiers()
                .iter()
                .map(|tier| TierData {
                    columns: tier.columns.get(),
                    media: media_query(tier),
                    buckets: distribute(&cards, tier.columns),
                })
                .collect()
        };

        let mut context = self.base_context();
        context.insert("tiers", &tiers);
        self.renderer.render("index.html", &context)
    }

    fn render_work(&self, post: &Post, posts: &[Post]) -> Result<String> {
        let meta = &post.frontmatter;
        let content = self
            .markdown
            .render(&post.body)
            .with_context(|| format!("Failed to render {:?}", post.source))?;

        let description = match MarkdownRenderer::summary(&post.body, DESCRIPTION_CHARS) {
            s if s.is_empty() => meta.title.clone(),
            s => s,
        };

        let work = WorkData {
            title: meta.title.clone(),
            date_iso: meta.date.to_rfc3339(),
            date_display: meta.date.format(&self.folio.config.date_format).to_string(),
            path: post.path(),
            description,
            thumbnail: meta.thumbnail.clone(),
            gallery: meta.gallery.clone(),
            gallery_images: meta.gallery_images.clone(),
            content,
        };

        let nav = |p: &Post| NavPost {
            title: p.title().to_string(),
            path: p.path(),
        };

        let mut context = self.base_context();
        context.insert("work", &work);
        context.insert("newer", &post.newer(posts).map(nav));
        context.insert("older", &post.older(posts).map(nav));
        self.renderer.render("work.html", &context)
    }

    fn write(&self, route: &Route, html: &str) -> Result<()> {
        let output_path = self.folio.public_dir.join(route.output_path());
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy the static directory (images, fonts) into the output directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir).follow_links(true) {
            let entry = entry.with_context(|| format!("Failed to walk {:?}", static_dir))?;
            let path = entry.path();
            if !path.is_file() || is_hidden(path) {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", path, dest))?;
            tracing::debug!("Copied asset: {:?}", relative);
        }

        Ok(())
    }
}

fn card_data(post: &Post) -> CardData {
    CardData {
        slug: post.slug.clone(),
        title: post.title().to_string(),
        date: post.date().format("%Y-%m-%d").to_string(),
        path: post.path(),
        thumbnail: post.frontmatter.thumbnail.clone(),
    }
}

fn media_query(tier: &Tier) -> String {
    match (tier.min_width, tier.max_width) {
        // Fractional upper bound so zoomed widths like 639.5px still match a tier
        (0, Some(max)) => format!("(max-width: {}.98px)", max - 1),
        (min, Some(max)) => format!("(min-width: {}px) and (max-width: {}.98px)", min, max - 1),
        (min, None) => format!("(min-width: {}px)", min),
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masonry::Breakpoints;
    use tempfile::TempDir;

    fn site() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.posts_dir).unwrap();
        (tmp, folio)
    }

    fn write_post(folio: &Folio, slug: &str, front: &str, body: &str) {
        fs::write(
            folio.posts_dir.join(format!("{}.md", slug)),
            format!("---\n{}\n---\n{}", front, body),
        )
        .unwrap();
    }

    #[test]
    fn test_media_queries() {
        let tiers = Breakpoints::default().tiers();
        assert_eq!(media_query(&tiers[0]), "(max-width: 639.98px)");
        assert_eq!(
            media_query(&tiers[1]),
            "(min-width: 640px) and (max-width: 1023.98px)"
        );
        assert_eq!(media_query(&tiers[2]), "(min-width: 1024px)");
    }

    #[test]
    fn test_empty_site_shows_empty_state() {
        let (_tmp, folio) = site();
        let generator = Generator::new(&folio).unwrap();

        let rendered = generator.render_route(&Route::Home, &[]).unwrap();
        assert_eq!(rendered.status, Status::Ok);
        assert!(rendered.html.contains("No posts found."));
        assert!(!rendered.html.contains(r#"class="masonry-column""#));
    }

    #[test]
    fn test_home_has_one_grid_per_tier() {
        let (_tmp, folio) = site();
        for (slug, date) in [("a", "2024-01-04"), ("b", "2024-01-03"), ("c", "2024-01-02"), ("d", "2024-01-01")] {
            write_post(&folio, slug, &format!("title: Work {}\ndate: {}\nthumbnail: /img/{}.jpg", slug, date, slug), "");
        }
        let posts = folio.load_posts().unwrap();
        let generator = Generator::new(&folio).unwrap();

        let html = generator.render_route(&Route::Home, &posts).unwrap().html;
        assert!(html.contains(r#"class="masonry tier-1""#));
        assert!(html.contains(r#"class="masonry tier-2""#));
        assert!(html.contains(r#"class="masonry tier-3""#));
        assert_eq!(html.matches("masonry-column").count(), 1 + 2 + 3 + 1);
        assert!(html.contains(r#"href="/work/a/""#));
        assert!(html.contains(r#"src="/img/a.jpg""#));
        assert!(!html.contains("No posts found."));

        // Three-column tier is rendered last: a and d share the first column
        let tier3 = &html[html.find("tier-3\"").unwrap()..];
        let columns: Vec<&str> = tier3.split(r#"class="masonry-column""#).skip(1).collect();
        assert_eq!(columns.len(), 3);
        assert!(columns[0].contains("Work a") && columns[0].contains("Work d"));
        assert!(columns[1].contains("Work b") && !columns[1].contains("Work c"));
        assert!(columns[2].contains("Work c"));
    }

    #[test]
    fn test_work_page() {
        let (_tmp, folio) = site();
        write_post(
            &folio,
            "harbour",
            "title: Harbour <Study>\ndate: 2024-03-05\nthumbnail: /img/harbour.jpg\ngalleryImages:\n  - image: /img/h1.jpg\n    alt: Detail one",
            "Ink wash on rice paper.\n",
        );
        write_post(&folio, "older", "title: Older\ndate: 2023-01-01", "");
        let posts = folio.load_posts().unwrap();
        let generator = Generator::new(&folio).unwrap();

        let rendered = generator
            .render_route(&Route::Work("harbour".into()), &posts)
            .unwrap();
        assert_eq!(rendered.status, Status::Ok);
        let html = rendered.html;
        assert!(html.contains("<h1>Harbour &lt;Study&gt;</h1>"));
        assert!(html.contains("March 5, 2024"));
        assert!(html.contains("<p>Ink wash on rice paper.</p>"));
        assert!(html.contains("<h2>Gallery</h2>"));
        assert!(html.contains(r#"src="/img/h1.jpg" alt="Detail one""#));
        assert!(html.contains(r#"href="/work/older/""#));
        assert!(html.contains(r#"content="Ink wash on rice paper.""#));
    }

    #[test]
    fn test_work_page_without_gallery() {
        let (_tmp, folio) = site();
        write_post(&folio, "solo", "title: Solo\ndate: 2024-01-01", "Body");
        let posts = folio.load_posts().unwrap();
        let generator = Generator::new(&folio).unwrap();

        let html = generator
            .render_route(&Route::Work("solo".into()), &posts)
            .unwrap()
            .html;
        assert!(!html.contains("class=\"gallery\""));
        assert!(!html.contains("class=\"hero\""));
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let (_tmp, folio) = site();
        let generator = Generator::new(&folio).unwrap();

        let rendered = generator
            .render_route(&Route::Work("ghost".into()), &[])
            .unwrap();
        assert_eq!(rendered.status, Status::NotFound);
        assert!(rendered.html.contains("Nothing lives at this address"));
    }

    #[test]
    fn test_generate_writes_tree() {
        let (_tmp, folio) = site();
        write_post(&folio, "dusk", "title: Dusk\ndate: 2024-01-01", "Body");
        fs::create_dir_all(folio.static_dir.join("img")).unwrap();
        fs::write(folio.static_dir.join("img/dusk.jpg"), b"jpeg").unwrap();
        fs::write(folio.static_dir.join(".DS_Store"), b"junk").unwrap();

        let posts = folio.load_posts().unwrap();
        Generator::new(&folio).unwrap().generate(&posts).unwrap();

        assert!(folio.public_dir.join("index.html").is_file());
        assert!(folio.public_dir.join("404.html").is_file());
        assert!(folio.public_dir.join("work/dusk/index.html").is_file());
        assert_eq!(fs::read(folio.public_dir.join("img/dusk.jpg")).unwrap(), b"jpeg");
        assert!(!folio.public_dir.join(".DS_Store").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_fails_on_unreadable_static_tree() {
        let (_tmp, folio) = site();
        let looped = folio.static_dir.join("loop");
        fs::create_dir_all(&looped).unwrap();
        fs::write(folio.static_dir.join("dusk.jpg"), b"jpeg").unwrap();
        std::os::unix::fs::symlink(&looped, looped.join("self")).unwrap();

        let err = Generator::new(&folio).unwrap().generate(&[]).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to walk"));
    }
}
