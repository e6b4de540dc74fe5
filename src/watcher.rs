//! File watching for live catalog reloads.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Watch the catalog file and flip the shared reload flag when it changes.
///
/// The parent directory is watched rather than the file itself, since many
/// editors replace files on save; events are matched back to the catalog by
/// canonical path, falling back to the file name.
pub fn setup_catalog_watcher(
    catalog_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical = catalog_path
        .canonicalize()
        .unwrap_or_else(|_| catalog_path.clone());
    let watch_root = canonical
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| canonical.clone());
    let file_name = catalog_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            let matches = event.paths.iter().any(|p| {
                if let Ok(event_canonical) = p.canonicalize() {
                    if event_canonical == canonical {
                        return true;
                    }
                }
                match (&file_name, p.file_name()) {
                    (Some(expected), Some(actual)) => expected == actual,
                    _ => false,
                }
            });
            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            watcher.watch(&watch_root, RecursiveMode::NonRecursive).ok()?;
            Some(watcher)
        }
        Err(_) => None,
    }
}
