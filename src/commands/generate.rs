//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::generator::Generator;
use crate::Folio;

/// Load posts and write the whole site
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let posts = folio.load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(folio)?;
    generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch posts, static assets and config, regenerating on change
pub fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();

    // Debounce to avoid rebuilding once per editor save step
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&folio.posts_dir, &folio.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = folio.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events.iter().filter(|e| is_relevant(&e.path)).collect();
                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Config changes may move directories, so rebuild from scratch
                let result = Folio::new(&folio.base_dir).and_then(|fresh| run(&fresh));
                if let Err(e) = result {
                    tracing::error!("Generation failed: {:#}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::warn!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Skip editor droppings and VCS internals
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(Path::new("/site/work/posts/dusk.md")));
        assert!(!is_relevant(Path::new("/site/.git/index")));
        assert!(!is_relevant(Path::new("/site/work/posts/dusk.md~")));
        assert!(!is_relevant(Path::new("/site/work/posts/.dusk.md.swp")));
    }

    #[test]
    fn test_run_fails_on_malformed_post() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(&folio.posts_dir).unwrap();
        fs::write(folio.posts_dir.join("bad.md"), "no front-matter").unwrap();

        let err = run(&folio).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.md"));
        assert!(!folio.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_run_with_no_posts_dir() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        run(&folio).unwrap();

        let index = fs::read_to_string(folio.public_dir.join("index.html")).unwrap();
        assert!(index.contains("No posts found."));
    }
}
