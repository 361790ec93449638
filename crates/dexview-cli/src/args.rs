use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use dexview_engine::{
    EvolvableFilter, FilterState, FriendshipFilter, LineFilter, OwnershipFilter, RegionFilter,
    SpecialFilter, StageFilter, TypeFilter,
};

use crate::types::{
    EvolvableArg, ExportFormat, FriendshipArg, LineArg, OutputFormat, SortKeyArg, SpecialTagArg,
    StatsSection,
};

#[derive(Parser)]
#[command(name = "dexview")]
#[command(about = "Browse creature-collection snapshots exported from the channel bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding snapshots and config (default: auto-detect)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Snapshot to open when more than one user has exported
    #[arg(long, short = 'u', global = true, value_name = "USER")]
    pub user: Option<String>,

    /// Output format for non-interactive commands
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users with a snapshot in the data directory
    Users,

    /// List collection entries as one-line cards
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortKeyArg::Dex)]
        sort: SortKeyArg,

        /// Show at most this many entries
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show one entry in full detail
    Show {
        /// Dex number or (partial) name
        target: String,
    },

    /// Browse entries interactively in the terminal
    Browse {
        /// Entry to open first (dex number or name)
        start: Option<String>,
    },

    /// Print the exporter's aggregate statistics
    Stats {
        /// Limit output to one section
        #[arg(long, value_enum, default_value_t = StatsSection::All)]
        section: StatsSection,
    },

    /// Check a snapshot for internal inconsistencies
    Check,

    /// Write the (filtered) collection to CSV or JSON
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Write to this file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// File format
        #[arg(long = "export-format", value_enum, default_value_t = ExportFormat::Csv)]
        export_format: ExportFormat,
    },

    /// Re-render a summary whenever the snapshot file changes
    Watch,
}

/// Filter flags shared by `list` and `export`. Flags left out match everything.
#[derive(Args)]
pub struct FilterArgs {
    /// Keep entries whose name contains this text (case-insensitive)
    #[arg(long, short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Only entries you own
    #[arg(long, conflicts_with = "unowned")]
    pub owned: bool,

    /// Only entries you are missing
    #[arg(long)]
    pub unowned: bool,

    /// Only entries from this region (exact match)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Only entries with this primary or secondary type
    #[arg(long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Only entries at this evolution stage (1, 2, 3, mega, ...)
    #[arg(long, value_name = "STAGE")]
    pub stage: Option<String>,

    /// Filter by evolution-line completion
    #[arg(long, value_enum, value_name = "STATE")]
    pub line: Option<LineArg>,

    /// Filter by whether the entry can still evolve
    #[arg(long, value_enum, value_name = "YES|NO")]
    pub evolvable: Option<EvolvableArg>,

    /// Only entries carrying this special flag
    #[arg(long, value_enum, value_name = "TAG")]
    pub special: Option<SpecialTagArg>,

    /// Filter by accumulated friendship points
    #[arg(long, value_enum, value_name = "HAS|NONE")]
    pub friendship: Option<FriendshipArg>,
}

impl FilterArgs {
    /// Build the engine filter state. Absent flags stay at their
    /// match-everything defaults.
    pub fn to_state(&self) -> FilterState {
        let mut state = FilterState::default();

        if let Some(search) = &self.search {
            state = state.with_search(search);
        }
        if self.owned {
            state = state.with_ownership(OwnershipFilter::Owned);
        }
        if self.unowned {
            state = state.with_ownership(OwnershipFilter::Unowned);
        }
        if let Some(region) = &self.region {
            state = state.with_region(RegionFilter::named(region));
        }
        if let Some(type_name) = &self.type_name {
            state = state.with_type(TypeFilter::named(type_name));
        }
        if let Some(stage) = &self.stage {
            state = state.with_stage(StageFilter::stage(stage));
        }
        if let Some(line) = self.line {
            state = state.with_line(LineFilter::from(line));
        }
        if let Some(evolvable) = self.evolvable {
            state = state.with_evolvable(EvolvableFilter::from(evolvable));
        }
        if let Some(special) = self.special {
            state = state.with_special(SpecialFilter::Tag(special.into()));
        }
        if let Some(friendship) = self.friendship {
            state = state.with_friendship(FriendshipFilter::from(friendship));
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_args_map_to_engine_state() {
        let cli = Cli::parse_from([
            "dexview", "list", "--owned", "--type", "grass", "--stage", "1", "--special",
            "legendary",
        ]);

        let Some(Commands::List { filters, .. }) = cli.command else {
            panic!("expected list command");
        };

        let state = filters.to_state();
        assert_eq!(state.ownership, OwnershipFilter::Owned);
        assert_eq!(state.ty, TypeFilter::named("grass"));
        assert_eq!(state.stage, StageFilter::stage("1"));
        assert!(matches!(state.special, SpecialFilter::Tag(_)));
        assert_eq!(state.region, RegionFilter::Any);
    }

    #[test]
    fn sentinel_all_collapses_to_default() {
        let cli = Cli::parse_from(["dexview", "list", "--region", "all", "--type", "ALL"]);

        let Some(Commands::List { filters, .. }) = cli.command else {
            panic!("expected list command");
        };

        let state = filters.to_state();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn export_defaults_to_csv() {
        let cli = Cli::parse_from(["dexview", "export"]);

        let Some(Commands::Export { export_format, output, .. }) = cli.command else {
            panic!("expected export command");
        };

        assert_eq!(export_format, ExportFormat::Csv);
        assert!(output.is_none());
    }
}
