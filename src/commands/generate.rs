//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Site;

const REBUILD_INTERVAL: Duration = Duration::from_millis(500);

/// Load all content and write the site
pub fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    let content = ContentLoader::new(site).load_all()?;
    tracing::info!(
        "Loaded {} pages and {} posts",
        content.homepage.iter().chain(content.about.iter()).count(),
        content.posts.len()
    );

    Generator::new(site).generate(&content)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());
    Ok(())
}

/// Regenerate whenever content, static files or the config change.
/// Blocks until the watcher shuts down.
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for dir in [&site.content_dir, &site.static_dir] {
        if dir.exists() {
            watcher.watch(dir, notify::RecursiveMode::Recursive)?;
        }
    }
    let config_path = site.config_path();
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();
    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > REBUILD_INTERVAL {
                    tracing::info!("File changed, regenerating...");
                    // config edits change directories and chrome, so reopen the site
                    let result = Site::new(&site.base_dir).and_then(|site| run(&site));
                    if let Err(e) = result {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
