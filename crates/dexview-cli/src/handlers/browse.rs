use anyhow::{bail, Result};

use crate::context::AppContext;
use crate::handlers::show::resolve_target;
use crate::ui;

pub fn handle(ctx: &AppContext, start: Option<&str>) -> Result<()> {
    let (user, snapshot) = ctx.snapshot()?;

    if snapshot.pokemon.is_empty() {
        bail!("snapshot has no entries to browse");
    }

    let start_dex = match start {
        Some(target) => Some(resolve_target(&snapshot.pokemon, target)?),
        None => None,
    };

    ui::browse::run(user, snapshot, start_dex)
}
