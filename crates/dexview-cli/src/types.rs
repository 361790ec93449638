use clap::ValueEnum;
use dexview_engine::{EvolvableFilter, FriendshipFilter, LineFilter, SortKey, SpecialTag};

/// Top-level output mode for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// Machine-readable JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sort order for `list` and `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    /// Ascending dex number
    Dex,
    /// Alphabetical name
    Name,
    /// Most copies first
    Count,
    /// Evolution stage, then dex number
    Stage,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Dex => SortKey::DexNumber,
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Count => SortKey::Count,
            SortKeyArg::Stage => SortKey::Stage,
        }
    }
}

impl std::fmt::Display for SortKeyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKeyArg::Dex => write!(f, "dex"),
            SortKeyArg::Name => write!(f, "name"),
            SortKeyArg::Count => write!(f, "count"),
            SortKeyArg::Stage => write!(f, "stage"),
        }
    }
}

/// `--line` values: completion state of an entry's evolution line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineArg {
    Complete,
    Incomplete,
}

impl From<LineArg> for LineFilter {
    fn from(arg: LineArg) -> Self {
        match arg {
            LineArg::Complete => LineFilter::Complete,
            LineArg::Incomplete => LineFilter::Incomplete,
        }
    }
}

/// `--evolvable` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EvolvableArg {
    Yes,
    No,
}

impl From<EvolvableArg> for EvolvableFilter {
    fn from(arg: EvolvableArg) -> Self {
        match arg {
            EvolvableArg::Yes => EvolvableFilter::Yes,
            EvolvableArg::No => EvolvableFilter::No,
        }
    }
}

/// `--friendship` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FriendshipArg {
    /// Entries with friendship points
    Has,
    /// Entries without any
    None,
}

impl From<FriendshipArg> for FriendshipFilter {
    fn from(arg: FriendshipArg) -> Self {
        match arg {
            FriendshipArg::Has => FriendshipFilter::Has,
            FriendshipArg::None => FriendshipFilter::None,
        }
    }
}

/// `--special` values, one per exporter flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpecialTagArg {
    Legendary,
    Mythical,
    Baby,
    /// Needs a held item to evolve
    Item,
    /// Needs a trade to evolve
    Trade,
    /// Needs friendship points to evolve
    Friendship,
}

impl From<SpecialTagArg> for SpecialTag {
    fn from(arg: SpecialTagArg) -> Self {
        match arg {
            SpecialTagArg::Legendary => SpecialTag::Legendary,
            SpecialTagArg::Mythical => SpecialTag::Mythical,
            SpecialTagArg::Baby => SpecialTag::Baby,
            SpecialTagArg::Item => SpecialTag::ItemRequired,
            SpecialTagArg::Trade => SpecialTag::TradeRequired,
            SpecialTagArg::Friendship => SpecialTag::FriendshipRequired,
        }
    }
}

/// On-disk format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Which aggregate block `stats` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsSection {
    All,
    Dex,
    Generations,
    Evolution,
    Types,
    Rarity,
    Balls,
    Journey,
}

impl std::fmt::Display for StatsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatsSection::All => "all",
            StatsSection::Dex => "dex",
            StatsSection::Generations => "generations",
            StatsSection::Evolution => "evolution",
            StatsSection::Types => "types",
            StatsSection::Rarity => "rarity",
            StatsSection::Balls => "balls",
            StatsSection::Journey => "journey",
        };
        write!(f, "{}", name)
    }
}
