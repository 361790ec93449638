use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Creature;

// ==========================================
// 1. Snapshot (one user's exported document)
// ==========================================

/// One user's exported collection document.
///
/// Produced by the chat-bot exporter as `data/<user>.json`. The aggregate
/// `trainer_stats` block is precomputed by the exporter and rendered
/// verbatim; nothing in this workspace recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: TrainerProfile,
    /// Export timestamp; absent in hand-assembled documents.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trainer_stats: TrainerStats,
    #[serde(default)]
    pub pokemon: Vec<Creature>,
}

impl Snapshot {
    /// Restore the collection's canonical ascending-identifier order.
    ///
    /// Exports are already sorted, but hand-edited documents may not be, and
    /// every consumer (filtering, navigation, chain lookup) assumes ascending
    /// dex numbers. Sort is stable so duplicate identifiers keep their
    /// document order.
    pub fn normalize(&mut self) {
        self.pokemon.sort_by_key(|c| c.pokedex_number);
    }
}

/// The collector this document belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainerProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

// ==========================================
// 2. Trainer stats (aggregate block)
// ==========================================

/// Aggregate statistics block, consumed verbatim from the exporter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerStats {
    pub pokedex: DexTotals,
    /// Keyed by generation ordinal ("1", "2", ...), already sorted by the exporter.
    pub generation_progress: BTreeMap<String, GenerationProgress>,
    pub evolution: EvolutionProgress,
    /// Keyed by lowercased type name.
    pub types: BTreeMap<String, GroupProgress>,
    /// Keyed by lowercased rarity tier.
    pub rarity: BTreeMap<String, GroupProgress>,
    pub pokeballs: BallStats,
    pub journey: Journey,
}

/// Collection-wide totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DexTotals {
    pub total_available: u32,
    pub unique_owned: u32,
    /// Sum of owned copies, not unique entries.
    pub total_owned: u64,
    pub completion_percent: f64,
}

/// Per-generation completion entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationProgress {
    pub generation: u32,
    pub region: String,
    pub owned: u32,
    pub total: u32,
    pub completion_percent: f64,
}

/// Chain-progress rollup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionProgress {
    pub evolvable_owned: u32,
    pub lines_completed: u32,
    pub total_lines: u32,
    /// Owned-entry count per stage tag.
    pub by_stage: BTreeMap<String, u32>,
}

/// Owned/total rollup for one type or rarity bucket.
///
/// The exporter writes `completion_percent` for types but not for rarity
/// tiers, so it defaults here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupProgress {
    pub owned: u32,
    pub total: u32,
    pub completion_percent: f64,
}

/// Capture-accuracy rollup from ball inventory counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BallStats {
    pub thrown: u64,
    pub success: u64,
    pub accuracy_percent: f64,
    /// Free-form bag of named counters ("Pokeball Thrown", "Great Ball Success", ...).
    pub details: BTreeMap<String, u64>,
}

/// Channel-relationship numbers the bot tracks alongside the collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Journey {
    pub watch_hours: f64,
    pub follow_age: String,
    pub sub_age: String,
    pub commands_run: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(dex_no: u32, name: &str) -> Creature {
        serde_json::from_value(serde_json::json!({
            "pokedex_number": dex_no,
            "name": name,
        }))
        .unwrap()
    }

    #[test]
    fn normalize_sorts_by_identifier() {
        let mut snapshot = Snapshot {
            user: TrainerProfile::default(),
            updated_at: None,
            trainer_stats: TrainerStats::default(),
            pokemon: vec![
                creature(94, "Gengar"),
                creature(1, "Bulbasaur"),
                creature(25, "Pikachu"),
            ],
        };

        snapshot.normalize();

        let order: Vec<u32> = snapshot.pokemon.iter().map(|c| c.pokedex_number).collect();
        assert_eq!(order, vec![1, 25, 94]);
    }

    #[test]
    fn sparse_document_parses_with_defaults() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "user": { "username": "scromf9001" },
                "pokemon": [ { "pokedex_number": 1, "name": "Bulbasaur" } ]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.user.username, "scromf9001");
        assert!(snapshot.updated_at.is_none());
        assert_eq!(snapshot.trainer_stats.pokedex.total_available, 0);
        assert_eq!(snapshot.pokemon.len(), 1);
    }

    #[test]
    fn exporter_stats_block_round_trips() {
        let stats: TrainerStats = serde_json::from_str(
            r#"{
                "pokedex": {
                    "total_available": 151,
                    "unique_owned": 42,
                    "total_owned": 97,
                    "completion_percent": 27.81
                },
                "generation_progress": {
                    "1": { "generation": 1, "region": "kanto", "owned": 42, "total": 151, "completion_percent": 27.81 }
                },
                "evolution": {
                    "evolvable_owned": 5,
                    "lines_completed": 3,
                    "total_lines": 78,
                    "by_stage": { "1": 20, "2": 15, "mega": 1 }
                },
                "types": { "grass": { "owned": 4, "total": 14, "completion_percent": 28.57 } },
                "rarity": { "common": { "owned": 30, "total": 95 } },
                "pokeballs": {
                    "thrown": 420,
                    "success": 97,
                    "accuracy_percent": 23.1,
                    "details": { "Pokeball Thrown": 300 }
                },
                "journey": {
                    "watch_hours": 123.5,
                    "follow_age": "2 years",
                    "sub_age": "Not Subscribed",
                    "commands_run": 1044
                }
            }"#,
        )
        .unwrap();

        assert_eq!(stats.pokedex.unique_owned, 42);
        assert_eq!(stats.generation_progress["1"].region, "kanto");
        assert_eq!(stats.evolution.by_stage["mega"], 1);
        // Rarity entries omit completion_percent in exports.
        assert_eq!(stats.rarity["common"].completion_percent, 0.0);
        assert_eq!(stats.journey.commands_run, 1044);
    }
}
