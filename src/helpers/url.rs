//! URL helper functions

use crate::config::SiteConfig;

/// Whether `path` points off-site and must be used as-is
pub fn is_external(path: &str) -> bool {
    path.starts_with("//") || path.contains("://") || path.starts_with("data:")
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/images/dusk.jpg") // -> "/portfolio/images/dusk.jpg"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "work/dusk/") // -> "https://example.com/portfolio/work/dusk/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    format!("{}{}", config.url.trim_end_matches('/'), url_for(config, path))
}

/// Escape a value for use inside a double-quoted HTML attribute, keeping `/`
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, root: &str) -> SiteConfig {
        SiteConfig {
            url: url.to_string(),
            root: root.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = config("https://example.com", "/");
        assert_eq!(url_for(&config, ""), "/");
        assert_eq!(url_for(&config, "work/dusk/"), "/work/dusk/");
        assert_eq!(url_for(&config, "/images/a.jpg"), "/images/a.jpg");
    }

    #[test]
    fn test_url_for_with_root() {
        let config = config("https://example.com", "/portfolio/");
        assert_eq!(url_for(&config, ""), "/portfolio/");
        assert_eq!(url_for(&config, "/images/a.jpg"), "/portfolio/images/a.jpg");
    }

    #[test]
    fn test_external_untouched() {
        let config = config("https://example.com", "/portfolio/");
        let cdn = "https://cdn.example.net/a.jpg";
        assert_eq!(url_for(&config, cdn), cdn);
        assert_eq!(full_url_for(&config, cdn), cdn);
        assert_eq!(url_for(&config, "//cdn/a.jpg"), "//cdn/a.jpg");
    }

    #[test]
    fn test_full_url_for() {
        let config = config("https://example.com/", "/portfolio/");
        assert_eq!(
            full_url_for(&config, "work/dusk/"),
            "https://example.com/portfolio/work/dusk/"
        );
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("/a b/\"x\"&"), "/a b/&quot;x&quot;&amp;");
    }
}
