use dexview_types::Creature;

/// The "no filter" token accepted by every dimension constructor.
pub const ALL_SENTINEL: &str = "all";

// ==========================================
// 1. Filter state (one value per dimension)
// ==========================================

/// Active predicate values across all filter dimensions.
///
/// This is a value type: every change goes through a `with_*` constructor
/// returning a new state, so two views never share mutable filter state.
/// `Default` is the all-sentinel state that passes every entry; resetting
/// the filters is `FilterState::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-folded substring match on the entry name. Empty passes everything.
    pub search: String,
    pub ownership: OwnershipFilter,
    pub region: RegionFilter,
    /// Type dimension: matches the primary or the secondary type.
    pub ty: TypeFilter,
    pub stage: StageFilter,
    pub line: LineFilter,
    pub evolvable: EvolvableFilter,
    pub special: SpecialFilter,
    pub friendship: FriendshipFilter,
}

impl FilterState {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_ownership(mut self, ownership: OwnershipFilter) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn with_region(mut self, region: RegionFilter) -> Self {
        self.region = region;
        self
    }

    pub fn with_type(mut self, ty: TypeFilter) -> Self {
        self.ty = ty;
        self
    }

    pub fn with_stage(mut self, stage: StageFilter) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_line(mut self, line: LineFilter) -> Self {
        self.line = line;
        self
    }

    pub fn with_evolvable(mut self, evolvable: EvolvableFilter) -> Self {
        self.evolvable = evolvable;
        self
    }

    pub fn with_special(mut self, special: SpecialFilter) -> Self {
        self.special = special;
        self
    }

    pub fn with_friendship(mut self, friendship: FriendshipFilter) -> Self {
        self.friendship = friendship;
        self
    }

    /// True when every dimension passes this entry.
    pub fn matches(&self, creature: &Creature) -> bool {
        self.search_matches(creature)
            && self.ownership.matches(creature)
            && self.region.matches(creature)
            && self.ty.matches(creature)
            && self.stage.matches(creature)
            && self.line.matches(creature)
            && self.evolvable.matches(creature)
            && self.special.matches(creature)
            && self.friendship.matches(creature)
    }

    fn search_matches(&self, creature: &Creature) -> bool {
        if self.search.is_empty() {
            return true;
        }
        creature
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// Filter `items` by `state`, preserving input order.
///
/// Pure conjunction over the dimensions: an entry survives only if every
/// one passes. Neither argument is mutated; the result borrows from
/// `items`. Ordering for presentation is a separate concern (see
/// [`crate::order`]).
pub fn apply<'a>(items: &'a [Creature], state: &FilterState) -> Vec<&'a Creature> {
    items.iter().filter(|c| state.matches(c)).collect()
}

// ==========================================
// 2. Dimensions
// ==========================================

/// Ownership dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipFilter {
    All,
    Owned,
    Unowned,
}

impl Default for OwnershipFilter {
    fn default() -> Self {
        Self::All
    }
}

impl OwnershipFilter {
    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::All => true,
            Self::Owned => creature.owned,
            Self::Unowned => !creature.owned,
        }
    }
}

/// Region dimension: exact match on the grouping name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    Any,
    Named(String),
}

impl Default for RegionFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl RegionFilter {
    /// Build from a CLI value; the [`ALL_SENTINEL`] token means no filter.
    pub fn named(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.eq_ignore_ascii_case(ALL_SENTINEL) {
            Self::Any
        } else {
            Self::Named(value)
        }
    }

    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::Any => true,
            Self::Named(region) => creature.region == *region,
        }
    }
}

/// Type dimension: case-insensitive match against the primary or the
/// secondary type. An absent secondary type never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    Any,
    Named(String),
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl TypeFilter {
    /// Build from a CLI value; the [`ALL_SENTINEL`] token means no filter.
    pub fn named(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.eq_ignore_ascii_case(ALL_SENTINEL) {
            Self::Any
        } else {
            Self::Named(value)
        }
    }

    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => {
                creature.primary_type.eq_ignore_ascii_case(name)
                    || creature
                        .secondary()
                        .is_some_and(|s| s.eq_ignore_ascii_case(name))
            }
        }
    }
}

/// Stage dimension: literal string equality against the stored stage tag.
///
/// The terminal-variant tag is compared literally like any other value;
/// only stage *sorting* treats it specially (see [`crate::lineage`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageFilter {
    Any,
    Stage(String),
}

impl Default for StageFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl StageFilter {
    /// Build from a CLI value; the [`ALL_SENTINEL`] token means no filter.
    pub fn stage(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.eq_ignore_ascii_case(ALL_SENTINEL) {
            Self::Any
        } else {
            Self::Stage(value)
        }
    }

    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::Any => true,
            Self::Stage(stage) => creature.evolution_stage.as_deref() == Some(stage.as_str()),
        }
    }
}

/// Lineage-completion dimension, driven by the precomputed `line_complete` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    All,
    Complete,
    Incomplete,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::All
    }
}

impl LineFilter {
    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::All => true,
            Self::Complete => creature.line_complete,
            Self::Incomplete => !creature.line_complete,
        }
    }
}

/// Progressable dimension, driven by the precomputed `evolvable` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolvableFilter {
    All,
    Yes,
    No,
}

impl Default for EvolvableFilter {
    fn default() -> Self {
        Self::All
    }
}

impl EvolvableFilter {
    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::All => true,
            Self::Yes => creature.evolvable,
            Self::No => !creature.evolvable,
        }
    }
}

/// Special-tag dimension: the entry must carry the selected flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialFilter {
    Any,
    Tag(SpecialTag),
}

impl Default for SpecialFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl SpecialFilter {
    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::Any => true,
            Self::Tag(tag) => tag.is_set(creature),
        }
    }
}

/// Closed set of special flags an entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialTag {
    Legendary,
    Mythical,
    Baby,
    ItemRequired,
    TradeRequired,
    FriendshipRequired,
}

impl SpecialTag {
    /// Read the corresponding flag off the entry.
    pub fn is_set(&self, creature: &Creature) -> bool {
        match self {
            Self::Legendary => creature.legendary,
            Self::Mythical => creature.mythical,
            Self::Baby => creature.baby,
            Self::ItemRequired => creature.item_required,
            Self::TradeRequired => creature.trade_required,
            Self::FriendshipRequired => creature.friendship_required,
        }
    }
}

/// Bond-points dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipFilter {
    All,
    /// Bond points accumulated (> 0).
    Has,
    /// No bond points yet.
    None,
}

impl Default for FriendshipFilter {
    fn default() -> Self {
        Self::All
    }
}

impl FriendshipFilter {
    pub fn matches(&self, creature: &Creature) -> bool {
        match self {
            Self::All => true,
            Self::Has => creature.friendship > 0,
            Self::None => creature.friendship == 0,
        }
    }
}
