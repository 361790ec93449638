use serde::{Deserialize, Serialize};

/// Stage tag for the terminal variant of a progression chain.
///
/// Regular stages are the digit strings "1".."4"; the terminal variant is a
/// named tag that sorts after all of them.
pub const MEGA_STAGE: &str = "mega";

// ==========================================
// 1. Creature (one collection entry)
// ==========================================

/// One collectible entry in a user's snapshot.
///
/// Field names mirror the exporter's JSON. Identity fields are required;
/// everything else defaults, so a partially filled document loads with
/// absent-value sentinels instead of failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Creature {
    /// Unique dex identifier (stable sort key, dense but not contiguous).
    pub pokedex_number: u32,
    /// Display name.
    pub name: String,

    // --- Ownership ---
    /// Copies owned. Zero implies owned == false.
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub owned: bool,

    // --- Categories ---
    /// Primary type; always present in well-formed exports.
    #[serde(default)]
    pub primary_type: String,
    /// Secondary type. Exports carry null, "" or the literal "Null" when absent;
    /// use [`Creature::secondary`] to read it normalized.
    #[serde(default)]
    pub secondary_type: Option<String>,

    // --- Grouping ---
    #[serde(default)]
    pub generation: u32,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub rarity: String,

    // --- Progression ---
    /// Stage within the chain: "1".."4", or [`MEGA_STAGE`] for the terminal variant.
    #[serde(default)]
    pub evolution_stage: Option<String>,
    /// Chain identifier; entries sharing it form one progression line.
    #[serde(default)]
    pub evolution_line_id: String,
    /// Whether this entry can still progress. Older exports name this "evolution".
    #[serde(default, alias = "evolution")]
    pub evolvable: bool,
    /// Whole chain owned. Precomputed by the exporter, never recomputed here.
    #[serde(default)]
    pub line_complete: bool,

    // --- Special flags ---
    #[serde(default)]
    pub legendary: bool,
    #[serde(default)]
    pub mythical: bool,
    #[serde(default)]
    pub baby: bool,
    #[serde(default)]
    pub item_required: bool,
    #[serde(default)]
    pub trade_required: bool,
    #[serde(default)]
    pub friendship_required: bool,

    // --- Requirements ---
    /// Companion bond points accumulated toward the bond requirement.
    #[serde(default)]
    pub friendship: u32,
    /// Copies needed before the next progression is offered.
    #[serde(default)]
    pub quantity_required: u32,
    /// Free-form requirement text from the source sheet.
    #[serde(default)]
    pub requirement: String,

    // --- Presentation ---
    #[serde(default)]
    pub stats: Option<BaseStats>,
    #[serde(default)]
    pub physical: Option<Physical>,
    #[serde(default)]
    pub pokedex_entry: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Creature {
    /// Zero-padded dex identifier, e.g. `#007`.
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.pokedex_number)
    }

    /// Secondary type with the sheet's absent markers ("", "Null") removed.
    pub fn secondary(&self) -> Option<&str> {
        match self.secondary_type.as_deref() {
            Some(s) if !s.is_empty() && !s.eq_ignore_ascii_case("null") => Some(s),
            _ => None,
        }
    }

    /// Both type names on one line, e.g. "Grass / Poison".
    pub fn type_line(&self) -> String {
        match self.secondary() {
            Some(second) => format!("{} / {}", self.primary_type, second),
            None => self.primary_type.clone(),
        }
    }

    /// True when the stage field carries the terminal-variant tag.
    pub fn is_mega_stage(&self) -> bool {
        self.evolution_stage
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(MEGA_STAGE))
    }
}

// ==========================================
// Components
// ==========================================

/// Base battle stats copied from the source sheet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn total(&self) -> u32 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }
}

/// Height (m) and weight (kg).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Physical {
    pub height: f64,
    pub weight: f64,
}
