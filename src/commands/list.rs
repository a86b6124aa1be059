//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::Post;
use crate::Folio;

/// Print posts newest first, or as JSON
pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let posts = folio.load_posts()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &posts)?;
        writeln!(out)?;
    } else {
        write_table(&mut out, &posts)?;
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, posts: &[Post]) -> Result<()> {
    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        writeln!(
            out,
            "  {} - {} [{}]",
            post.date().format("%Y-%m-%d"),
            post.title(),
            post.slug
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostLoader;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_table_output() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.md"), "---\ntitle: Alpha\ndate: 2024-01-01\n---\n").unwrap();
        fs::write(tmp.path().join("b.md"), "---\ntitle: Beta\ndate: 2024-02-01\n---\n").unwrap();
        let posts = PostLoader::new(tmp.path()).load_posts().unwrap();

        let mut buf = Vec::new();
        write_table(&mut buf, &posts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Posts (2):\n  2024-02-01 - Beta [b]\n  2024-01-01 - Alpha [a]\n"
        );
    }
}
