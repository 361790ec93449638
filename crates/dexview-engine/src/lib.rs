// Engine module - filtering, navigation and snapshot hygiene
// This layer sits between the document schema (types) and CLI presentation

pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod lineage;
pub mod navigator;
pub mod order;

pub use diagnostics::{Finding, Severity, validate};
pub use error::{Error, Result};
pub use filter::{
    ALL_SENTINEL, EvolvableFilter, FilterState, FriendshipFilter, LineFilter, OwnershipFilter,
    RegionFilter, SpecialFilter, SpecialTag, StageFilter, TypeFilter, apply,
};
pub use lineage::{line_members, stage_order_key};
pub use navigator::{NavState, Navigator, index_of, step_backward, step_forward};
pub use order::{SortKey, sort_creatures};
