//! Render a single route to stdout

use anyhow::Result;

use crate::generator::{Generator, Rendered};
use crate::routes::Route;
use crate::Folio;

/// Render the page served at `path`
pub fn run(folio: &Folio, path: &str) -> Result<Rendered> {
    let route = Route::parse(path);
    tracing::debug!("Resolved {:?} to {:?}", path, route);

    let generator = Generator::new(folio)?;

    let Route::Work(slug) = &route else {
        let posts = folio.load_posts()?;
        return generator.render_route(&route, &posts);
    };

    let post = match folio.load_post(slug) {
        Ok(post) => post,
        Err(e) if e.is_not_found() => {
            tracing::debug!("{}", e);
            return generator.render_not_found();
        }
        Err(e) => return Err(e.into()),
    };

    // Neighbour links need the full, date-sorted list
    let posts = folio.load_posts()?;
    generator.render_post(&post, &posts)
}
