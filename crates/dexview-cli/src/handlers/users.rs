use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use dexview_source::list_users;

use crate::context::AppContext;
use crate::output::format_relative;
use crate::types::OutputFormat;

pub fn handle(ctx: &AppContext) -> Result<()> {
    let users = list_users(ctx.data_dir())?;

    if ctx.format == OutputFormat::Json {
        let entries: Vec<serde_json::Value> = users
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "user": entry.user,
                    "path": entry.path,
                    "default": Some(entry.user.as_str()) == ctx.config().default_user.as_deref(),
                })
            })
            .collect();
        let payload = serde_json::json!({ "total": entries.len(), "users": entries });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if users.is_empty() {
        println!(
            "No snapshots under {}",
            ctx.data_dir().join("data").display()
        );
        return Ok(());
    }

    let now = Utc::now();
    for entry in &users {
        let is_default = Some(entry.user.as_str()) == ctx.config().default_user.as_deref();
        let marker = if is_default { "*" } else { " " };

        let age = entry
            .modified
            .map(|modified| format_relative(DateTime::<Utc>::from(modified), now))
            .unwrap_or_default();

        if ctx.colors && is_default {
            println!("{} {}  {}", marker, entry.user.bold(), age);
        } else {
            println!("{} {}  {}", marker, entry.user, age);
        }
    }

    Ok(())
}
