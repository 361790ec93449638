use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::Duration;

use anyhow::Result;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};

use dexview_source::{load_user, snapshot_path, SNAPSHOT_SUBDIR};

use crate::context::AppContext;
use crate::output::{format_percent, format_stats, FormatOptions};
use crate::types::StatsSection;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Re-render a summary whenever the exporter rewrites the snapshot.
///
/// Uses a polling watcher so network mounts and editors that replace the
/// file atomically both register.
pub fn handle(ctx: &AppContext) -> Result<()> {
    let user = ctx.resolve_user()?;
    let watch_dir = ctx.data_dir().join(SNAPSHOT_SUBDIR);
    let target = snapshot_path(ctx.data_dir(), &user);

    render(ctx, &user);

    let (tx, rx) = channel();
    let watcher_config = notify::Config::default().with_poll_interval(POLL_INTERVAL);
    let mut watcher = PollWatcher::new(
        move |result: Result<Event, notify::Error>| {
            if let Ok(event) = result {
                let _ = tx.send(event);
            }
        },
        watcher_config,
    )?;
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    let running = Arc::new(AtomicBool::new(true));
    let stop = running.clone();
    ctrlc::set_handler(move || {
        stop.store(false, Ordering::SeqCst);
    })?;

    println!();
    println!("Watching {} (ctrl-c to stop)", target.display());

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(Duration::from_millis(250)) {
            Ok(event) => {
                if is_snapshot_change(&event, &target) {
                    println!();
                    render(ctx, &user);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn is_snapshot_change(event: &Event, target: &std::path::Path) -> bool {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| path.file_name() == target.file_name())
}

/// One summary block per change. A failed reload (e.g. a half-written
/// file) warns and keeps watching.
fn render(ctx: &AppContext, user: &str) {
    match load_user(ctx.data_dir(), user) {
        Ok(snapshot) => {
            let opts = FormatOptions {
                enable_color: ctx.colors,
                width: None,
            };
            for line in format_stats(user, &snapshot, StatsSection::Dex, &opts) {
                println!("{}", line);
            }
            let owned = snapshot.pokemon.iter().filter(|c| c.owned).count();
            println!(
                "  Entries: {} ({} owned, {} complete)",
                snapshot.pokemon.len(),
                owned,
                format_percent(snapshot.trainer_stats.pokedex.completion_percent)
            );
        }
        Err(err) => eprintln!("Warning: could not reload snapshot: {}", err),
    }
}
