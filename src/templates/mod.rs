//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary; a site only supplies content.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::GalleryImage;
use crate::helpers::{escape_attr, full_url_for, url_for};

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("work.html", include_str!("site/work.html")),
            ("404.html", include_str!("site/404.html")),
        ])?;

        let site = config.clone();
        tera.register_filter(
            "url_for",
            move |value: &tera::Value, args: &HashMap<String, tera::Value>| {
                url_for_filter(&site, value, args)
            },
        );

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: root-relative (or absolute) URL, attribute-escaped
fn url_for_filter(
    config: &SiteConfig,
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let path = tera::try_get_value!("url_for", "value", String, value);
    let absolute = match args.get("absolute") {
        Some(val) => tera::try_get_value!("url_for", "absolute", bool, val),
        None => false,
    };

    let url = if absolute {
        full_url_for(config, &path)
    } else {
        url_for(config, &path)
    };
    Ok(tera::Value::String(escape_attr(&url)))
}

// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
        }
    }
}

/// A post as shown in the home-page grid
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub path: String,
    pub thumbnail: Option<String>,
}

/// The home-page grid at one breakpoint tier
#[derive(Debug, Clone, Serialize)]
pub struct TierData {
    pub columns: usize,
    /// CSS media query under which this tier is shown
    pub media: String,
    pub buckets: Vec<Vec<CardData>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkData {
    pub title: String,
    pub date_iso: String,
    pub date_display: String,
    pub path: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub gallery: Option<String>,
    pub gallery_images: Vec<GalleryImage>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_filter() {
        let config = SiteConfig {
            url: "https://example.com".to_string(),
            root: "/p/".to_string(),
            ..Default::default()
        };
        let value = tera::Value::String("work/a\"b/".to_string());

        let relative = url_for_filter(&config, &value, &HashMap::new()).unwrap();
        assert_eq!(relative, tera::Value::String("/p/work/a&quot;b/".to_string()));

        let mut args = HashMap::new();
        args.insert("absolute".to_string(), tera::Value::Bool(true));
        let absolute = url_for_filter(&config, &value, &args).unwrap();
        assert_eq!(
            absolute,
            tera::Value::String("https://example.com/p/work/a&quot;b/".to_string())
        );
    }

    #[test]
    fn test_templates_parse() {
        assert!(TemplateRenderer::new(&SiteConfig::default()).is_ok());
    }
}
