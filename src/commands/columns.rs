//! Show how the home-page grid reflows as the viewport changes

use anyhow::Result;
use std::io::Write;

use crate::masonry::{Breakpoints, GridView, MasonryGrid, Viewport};
use crate::Folio;

/// Mount a grid of the site's posts at `width`, then replay `resizes`
pub fn run(folio: &Folio, width: u32, resizes: &[u32]) -> Result<()> {
    let posts = folio.load_posts()?;
    let slugs: Vec<String> = posts.into_iter().map(|p| p.slug).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    simulate(&mut out, slugs, folio.config.breakpoints, width, resizes)
}

fn simulate<W: Write>(
    out: &mut W,
    items: Vec<String>,
    breakpoints: Breakpoints,
    width: u32,
    resizes: &[u32],
) -> Result<()> {
    let viewport = Viewport::new(width);
    let mut grid = MasonryGrid::with_breakpoints(items, breakpoints);

    grid.mount(&viewport);
    write_view(out, viewport.width(), &grid)?;

    for &w in resizes {
        viewport.resize(w);
        write_view(out, viewport.width(), &grid)?;
    }

    grid.unmount();
    Ok(())
}

fn write_view<W: Write>(out: &mut W, width: u32, grid: &MasonryGrid<String>) -> Result<()> {
    match grid.view() {
        GridView::Empty => writeln!(out, "width {}: No posts found.", width)?,
        GridView::Unmeasured => writeln!(out, "width {}: not measured", width)?,
        GridView::Columns(columns) => {
            let plural = if columns.len() == 1 { "" } else { "s" };
            writeln!(out, "width {}: {} column{}", width, columns.len(), plural)?;
            for (i, column) in columns.iter().enumerate() {
                writeln!(out, "  {}: {}", i + 1, column.join(", "))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_simulate_resize() {
        let mut buf = Vec::new();
        simulate(
            &mut buf,
            items(&["a", "b", "c", "d"]),
            Breakpoints::default(),
            1200,
            &[500],
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "width 1200: 3 columns\n  1: a, d\n  2: b\n  3: c\n\
             width 500: 1 column\n  1: a, b, c, d\n"
        );
    }

    #[test]
    fn test_simulate_empty() {
        let mut buf = Vec::new();
        simulate(&mut buf, Vec::new(), Breakpoints::default(), 800, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "width 800: No posts found.\n");
    }
}
