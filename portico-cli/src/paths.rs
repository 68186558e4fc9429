//! Where the CLI keeps its config, preferences and logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Archived logs kept next to `latest.log`.
const KEEP_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "portico", "portico")
}

/// Default config file (`config.json` in the platform config dir).
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Preference store used by the shell.
pub fn preferences_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("preferences.json"))
}

/// Log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}

/// Archive the previous `latest.log` under a timestamp and prune old logs.
pub fn rotate_logs(latest: &Path) {
    let Some(dir) = latest.parent() else { return };
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(latest, dir.join(format!("{stamp}.log")));
    }

    let Ok(entries) = fs::read_dir(dir) else { return };
    let mut archived: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log") && path != latest)
        .collect();
    // Timestamped names sort chronologically.
    archived.sort();
    let excess = archived.len().saturating_sub(KEEP_LOGS);
    for path in archived.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
