//! Front-matter parsing

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use super::post::{GalleryImage, PostMeta};

/// Front-matter exactly as written in a post file.
///
/// Every field is optional here; `validate` turns it into a `PostMeta`
/// and rejects anything the site cannot render.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub thumbnail: Option<String>,
    pub gallery: Option<String>,
    #[serde(rename = "galleryImages", alias = "gallery_images")]
    pub gallery_images: Option<Vec<RawGalleryImage>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGalleryImage {
    #[serde(alias = "galimage")]
    pub image: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let (yaml, body) = split_block(content)?;

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml)
            .map_err(|e| anyhow!("invalid YAML: {}", e))?;
        Ok((fm, body))
    }

    /// Check required fields and coerce the loosely typed values
    pub fn validate(self) -> Result<PostMeta> {
        let title = match self.title.map(|t| t.trim().to_string()) {
            Some(t) if !t.is_empty() => t,
            _ => bail!("missing required field 'title'"),
        };

        let raw_date = self
            .date
            .ok_or_else(|| anyhow!("missing required field 'date'"))?;
        let date = parse_date_string(&raw_date)
            .ok_or_else(|| anyhow!("unrecognised date '{}'", raw_date))?;

        let gallery_images = self
            .gallery_images
            .unwrap_or_default()
            .into_iter()
            .map(|img| GalleryImage {
                image: img.image,
                alt: img.alt.unwrap_or_default(),
            })
            .collect();

        Ok(PostMeta {
            title,
            date,
            thumbnail: non_empty(self.thumbnail),
            gallery: non_empty(self.gallery),
            gallery_images,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split a file into its `---` delimited YAML block and the body after it
fn split_block(content: &str) -> Result<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}');

    let rest = content
        .strip_prefix("---")
        .ok_or_else(|| anyhow!("missing front-matter block"))?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or_else(|| anyhow!("opening '---' must be on its own line"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
            return Ok((yaml, body));
        }
        offset += line.len();
    }

    Err(anyhow!("unclosed front-matter block"))
}

/// Parse a date string in various formats. Values without an offset are UTC.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S %z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
