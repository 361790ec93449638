use std::collections::BTreeMap;
use std::fmt;

use dexview_types::{Creature, MEGA_STAGE, Snapshot};
use serde::Serialize;

/// Severity of a snapshot finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One inconsistency found in a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Entry the finding points at, when it concerns a single entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex_no: Option<u32>,
    pub message: String,
}

impl Finding {
    fn error(dex_no: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            dex_no,
            message: message.into(),
        }
    }

    fn warning(dex_no: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            dex_no,
            message: message.into(),
        }
    }
}

/// Stage tags the exporter is known to write.
///
/// "unknown" is the exporter's blank-cell default, so it does not count as
/// a defect.
fn stage_is_known(stage: &str) -> bool {
    matches!(stage, "1" | "2" | "3" | "4" | "unknown") || stage.eq_ignore_ascii_case(MEGA_STAGE)
}

/// Check a snapshot for the inconsistency classes hand-edited source
/// sheets produce.
///
/// Loading never rejects these documents (every predicate degrades to an
/// absent-value sentinel), so `validate` is the one place that surfaces
/// them. Entry-level findings come back in document order, line-level
/// findings after them.
pub fn validate(snapshot: &Snapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    let creatures = &snapshot.pokemon;

    let mut seen: BTreeMap<u32, &str> = BTreeMap::new();
    for creature in creatures {
        let dex_no = creature.pokedex_number;

        if let Some(first) = seen.get(&dex_no) {
            findings.push(Finding::error(
                Some(dex_no),
                format!(
                    "duplicate dex number {} ({} and {})",
                    dex_no, first, creature.name
                ),
            ));
        } else {
            seen.insert(dex_no, &creature.name);
        }

        if creature.name.trim().is_empty() {
            findings.push(Finding::error(Some(dex_no), "entry has an empty name"));
        }

        if creature.owned != (creature.count > 0) {
            findings.push(Finding::error(
                Some(dex_no),
                format!(
                    "owned flag disagrees with count {} on {}",
                    creature.count, creature.name
                ),
            ));
        }

        if let Some(stage) = creature.evolution_stage.as_deref() {
            if !stage_is_known(stage) {
                findings.push(Finding::warning(
                    Some(dex_no),
                    format!("unrecognized stage tag \"{}\" on {}", stage, creature.name),
                ));
            }
        }

        if creature
            .secondary()
            .is_some_and(|s| s.eq_ignore_ascii_case(&creature.primary_type))
        {
            findings.push(Finding::warning(
                Some(dex_no),
                format!("secondary type repeats the primary type on {}", creature.name),
            ));
        }
    }

    let mut lines: BTreeMap<&str, Vec<&Creature>> = BTreeMap::new();
    for creature in creatures {
        if !creature.evolution_line_id.is_empty() {
            lines
                .entry(creature.evolution_line_id.as_str())
                .or_default()
                .push(creature);
        }
    }

    for (line_id, members) in &lines {
        let complete = members.iter().filter(|c| c.line_complete).count();

        if complete != 0 && complete != members.len() {
            findings.push(Finding::warning(
                None,
                format!("line \"{}\" mixes complete and incomplete flags", line_id),
            ));
        }

        if complete == members.len() && members.iter().any(|c| !c.owned) {
            findings.push(Finding::warning(
                None,
                format!(
                    "line \"{}\" is marked complete but has unowned members",
                    line_id
                ),
            ));
        }
    }

    findings
}
