use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;

/// Directory under the data dir where the exporter drops snapshots.
pub const SNAPSHOT_SUBDIR: &str = "data";

/// One discovered snapshot file.
#[derive(Debug, Clone)]
pub struct UserEntry {
    /// User name, taken from the file stem.
    pub user: String,
    pub path: PathBuf,
    /// Filesystem modification time, for display only.
    pub modified: Option<SystemTime>,
}

/// Path of `user`'s snapshot file under `data_dir`.
pub fn snapshot_path(data_dir: &Path, user: &str) -> PathBuf {
    data_dir.join(SNAPSHOT_SUBDIR).join(format!("{user}.json"))
}

/// Enumerate the snapshots under `data_dir`, sorted by user name.
///
/// The snapshot directory is flat: one `<user>.json` per user, exactly as
/// the exporter writes them. A missing directory is an empty listing, not
/// an error.
pub fn list_users(data_dir: &Path) -> Result<Vec<UserEntry>> {
    let dir = data_dir.join(SNAPSHOT_SUBDIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension().is_none_or(|e| e != "json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
        entries.push(UserEntry {
            user: stem.to_string(),
            path,
            modified,
        });
    }

    entries.sort_by(|a, b| a.user.cmp(&b.user));
    Ok(entries)
}
