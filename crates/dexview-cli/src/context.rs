use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;

use dexview_source::{list_users, load_user};
use dexview_types::Snapshot;

use crate::config::Config;
use crate::types::OutputFormat;

/// Resolved invocation environment shared by every handler.
///
/// The snapshot is loaded lazily and at most once per invocation, so
/// commands that never touch it (like `users`) stay cheap.
pub struct AppContext {
    data_dir: PathBuf,
    config: Config,
    user_flag: Option<String>,
    pub format: OutputFormat,
    pub colors: bool,
    snapshot: OnceCell<(String, Snapshot)>,
}

impl AppContext {
    pub fn new(
        data_dir: PathBuf,
        config: Config,
        user_flag: Option<String>,
        format: OutputFormat,
        colors: bool,
    ) -> Self {
        Self {
            data_dir,
            config,
            user_flag,
            format,
            colors,
            snapshot: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pick the active user: `--user` flag, then the configured default,
    /// then the only snapshot present.
    pub fn resolve_user(&self) -> Result<String> {
        if let Some(user) = &self.user_flag {
            return Ok(user.clone());
        }
        if let Some(user) = &self.config.default_user {
            return Ok(user.clone());
        }

        let users = list_users(&self.data_dir)?;
        match users.as_slice() {
            [] => Err(anyhow!(
                "no snapshots under {}; drop an exporter file there as data/<user>.json",
                self.data_dir.display()
            )),
            [only] => Ok(only.user.clone()),
            many => {
                let names: Vec<&str> = many.iter().map(|entry| entry.user.as_str()).collect();
                Err(anyhow!(
                    "multiple snapshots found ({}); pick one with --user or set default_user in config.toml",
                    names.join(", ")
                ))
            }
        }
    }

    /// The active user's snapshot, loaded once per invocation.
    pub fn snapshot(&self) -> Result<(&str, &Snapshot)> {
        let (user, snapshot) = self.snapshot.get_or_try_init(|| -> Result<_> {
            let user = self.resolve_user()?;
            let snapshot = load_user(&self.data_dir, &user)?;
            Ok((user, snapshot))
        })?;
        Ok((user.as_str(), snapshot))
    }
}
