//! URL routes of the generated site

use std::path::PathBuf;

/// A request path resolved against the site layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/work/{slug}`
    Work(String),
    NotFound,
}

impl Route {
    /// Resolve a path relative to the site root
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_start_matches('/');
        let path = match path.strip_suffix("index.html") {
            Some(dir) if dir.is_empty() || dir.ends_with('/') => dir,
            _ => path,
        };
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            return Route::Home;
        }

        match path.split_once('/') {
            Some(("work", slug)) if is_slug_segment(slug) => Route::Work(slug.to_string()),
            _ => Route::NotFound,
        }
    }

    /// File that holds this route inside the output directory
    pub fn output_path(&self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            Route::Work(slug) => PathBuf::from("work").join(slug).join("index.html"),
            Route::NotFound => PathBuf::from("404.html"),
        }
    }

    /// URL path relative to the site root, without leading slash
    pub fn url_path(&self) -> String {
        match self {
            Route::Home => String::new(),
            Route::Work(slug) => format!("work/{}/", slug),
            Route::NotFound => "404.html".to_string(),
        }
    }
}

fn is_slug_segment(s: &str) -> bool {
    !s.is_empty() && !s.contains('/') && s != "." && s != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/index.html"), Route::Home);
        assert_eq!(Route::parse("/?ref=mail"), Route::Home);
    }

    #[test]
    fn test_work() {
        let expected = Route::Work("harbour".to_string());
        assert_eq!(Route::parse("/work/harbour"), expected);
        assert_eq!(Route::parse("/work/harbour/"), expected);
        assert_eq!(Route::parse("work/harbour/index.html"), expected);
        assert_eq!(Route::parse("/work/harbour#gallery"), expected);
    }

    #[test]
    fn test_not_found() {
        for path in [
            "/work", "/work/", "/work/a/b", "/about", "/work/..", "/posts/a",
            "/work/harbourindex.html", "/fooindex.html",
        ] {
            assert_eq!(Route::parse(path), Route::NotFound, "{path}");
        }
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(Route::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(
            Route::Work("dusk".into()).output_path(),
            PathBuf::from("work/dusk/index.html")
        );
        assert_eq!(Route::NotFound.output_path(), PathBuf::from("404.html"));
        assert_eq!(Route::Work("dusk".into()).url_path(), "work/dusk/");
    }
}
