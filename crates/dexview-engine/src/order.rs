use std::cmp::Reverse;

use dexview_types::Creature;

use crate::lineage::stage_order_key;

/// List ordering for the card view.
///
/// Ordering is a presenter concern, separate from filtering: `apply`
/// preserves input order and callers sort the filtered view afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending dex identifier (the collection's canonical order).
    DexNumber,
    /// Case-insensitive name.
    Name,
    /// Owned copies, most first.
    Count,
    /// Stage tag, terminal variant last.
    Stage,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::DexNumber
    }
}

/// Sort a filtered view for presentation. Ties fall back to dex order.
pub fn sort_creatures(creatures: &mut [&Creature], key: SortKey) {
    match key {
        SortKey::DexNumber => creatures.sort_by_key(|c| c.pokedex_number),
        SortKey::Name => creatures.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.pokedex_number.cmp(&b.pokedex_number))
        }),
        SortKey::Count => creatures.sort_by_key(|c| (Reverse(c.count), c.pokedex_number)),
        SortKey::Stage => creatures.sort_by_key(|c| {
            (
                stage_order_key(c.evolution_stage.as_deref()),
                c.pokedex_number,
            )
        }),
    }
}
