use std::fs;
use std::path::Path;

use dexview_types::Snapshot;

use crate::discovery::snapshot_path;
use crate::error::{Error, Result};

/// Load and normalize one snapshot document.
///
/// The collection comes back in ascending dex order regardless of how the
/// document stored it; every downstream consumer assumes that order.
/// Malformed individual fields degrade to defaults in the schema layer;
/// only unreadable files and invalid JSON are errors here.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw = fs::read_to_string(path)?;
    let mut snapshot: Snapshot = serde_json::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    snapshot.normalize();
    Ok(snapshot)
}

/// Load `user`'s snapshot from `data_dir`.
pub fn load_user(data_dir: &Path, user: &str) -> Result<Snapshot> {
    let path = snapshot_path(data_dir, user);
    if !path.is_file() {
        return Err(Error::UserNotFound {
            user: user.to_string(),
            data_dir: data_dir.to_path_buf(),
        });
    }
    load_snapshot(&path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::discovery::SNAPSHOT_SUBDIR;

    use super::*;

    fn write_snapshot(data_dir: &Path, user: &str, body: &str) {
        let dir = data_dir.join(SNAPSHOT_SUBDIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{user}.json")), body).unwrap();
    }

    #[test]
    fn load_normalizes_out_of_order_documents() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(
            dir.path(),
            "ash",
            r#"{
                "user": { "username": "ash" },
                "pokemon": [
                    { "pokedex_number": 94, "name": "Gengar" },
                    { "pokedex_number": 1, "name": "Bulbasaur" }
                ]
            }"#,
        );

        let snapshot = load_user(dir.path(), "ash").unwrap();
        let order: Vec<u32> = snapshot.pokemon.iter().map(|c| c.pokedex_number).collect();
        assert_eq!(order, vec![1, 94]);
    }

    #[test]
    fn missing_user_is_reported_with_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_user(dir.path(), "nobody").unwrap_err();
        match err {
            Error::UserNotFound { user, .. } => assert_eq!(user, "nobody"),
            other => panic!("expected UserNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_carries_the_offending_path() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), "broken", "{ not json");

        let err = load_user(dir.path(), "broken").unwrap_err();
        match err {
            Error::Parse { path, .. } => {
                assert!(path.ends_with("data/broken.json"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}
