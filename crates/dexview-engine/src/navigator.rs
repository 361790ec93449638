use dexview_types::Creature;

use crate::error::{Error, Result};

/// Clamped forward step over a collection of `len` entries.
///
/// Stops at the last index; no wraparound.
pub fn step_forward(cursor: usize, len: usize) -> usize {
    cursor.saturating_add(1).min(len.saturating_sub(1))
}

/// Clamped backward step. Stops at index 0.
pub fn step_backward(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Index of the entry whose identifier equals `dex_no`.
///
/// With duplicate identifiers (a malformed document `check` will flag) the
/// first occurrence wins.
pub fn index_of(collection: &[Creature], dex_no: u32) -> Result<usize> {
    collection
        .iter()
        .position(|c| c.pokedex_number == dex_no)
        .ok_or(Error::NotFound(dex_no))
}

/// Detail-view position: absent, or a cursor into the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Closed,
    Open { cursor: usize },
}

/// Detail-view cursor over the full, identifier-ordered collection.
///
/// Navigation is deliberately independent of any active filter: callers
/// always pass the full snapshot collection, so stepping in a detail view
/// visits dex-order neighbors even while the list view is narrowed. The
/// collection is an explicit parameter on every lookup so that contract is
/// visible at the call site.
///
/// While open, the cursor is always in bounds: `open`/`jump_to` only
/// succeed on identifiers present in the collection, and the step methods
/// clamp at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    state: NavState,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: NavState::Closed,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, NavState::Open { .. })
    }

    /// Current cursor while a detail view is open.
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            NavState::Open { cursor } => Some(cursor),
            NavState::Closed => None,
        }
    }

    /// Entry under the cursor, if a view is open.
    pub fn current<'a>(&self, collection: &'a [Creature]) -> Option<&'a Creature> {
        self.cursor().and_then(|i| collection.get(i))
    }

    /// Open the detail view on the entry with identifier `dex_no`.
    ///
    /// Fails with [`Error::NotFound`] when the identifier is absent; the
    /// previous state (open or closed) is left untouched in that case.
    pub fn open(&mut self, collection: &[Creature], dex_no: u32) -> Result<usize> {
        let cursor = index_of(collection, dex_no)?;
        self.state = NavState::Open { cursor };
        Ok(cursor)
    }

    /// Retarget the view at another identifier without closing it.
    ///
    /// Same lookup semantics as [`Navigator::open`]; used when a detail
    /// view follows a progression-chain cross-reference.
    pub fn jump_to(&mut self, collection: &[Creature], dex_no: u32) -> Result<usize> {
        self.open(collection, dex_no)
    }

    /// Step to the next entry, clamped at the end. No-op while closed.
    pub fn step_forward(&mut self, len: usize) {
        if let NavState::Open { cursor } = self.state {
            self.state = NavState::Open {
                cursor: step_forward(cursor, len),
            };
        }
    }

    /// Step to the previous entry, clamped at the start. No-op while closed.
    pub fn step_backward(&mut self) {
        if let NavState::Open { cursor } = self.state {
            self.state = NavState::Open {
                cursor: step_backward(cursor),
            };
        }
    }

    /// Close the view. Always permitted, from any state.
    pub fn close(&mut self) {
        self.state = NavState::Closed;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<Creature> {
        // Identifiers are dense but not contiguous on purpose.
        [1u32, 4, 7, 10, 12]
            .into_iter()
            .map(|dex_no| Creature {
                pokedex_number: dex_no,
                name: format!("entry-{dex_no}"),
                ..Creature::default()
            })
            .collect()
    }

    #[test]
    fn step_helpers_clamp_at_both_ends() {
        assert_eq!(step_forward(4, 5), 4);
        assert_eq!(step_forward(3, 5), 4);
        assert_eq!(step_backward(0), 0);
        assert_eq!(step_backward(1), 0);
    }

    #[test]
    fn open_resolves_identifier_to_index() {
        let items = collection();
        let mut nav = Navigator::new();

        let cursor = nav.open(&items, 7).unwrap();
        assert_eq!(cursor, 2);
        assert_eq!(nav.cursor(), Some(2));
        assert_eq!(nav.current(&items).unwrap().name, "entry-7");
    }

    #[test]
    fn open_missing_identifier_reports_not_found() {
        let items = collection();
        let mut nav = Navigator::new();

        let err = nav.open(&items, 999).unwrap_err();
        assert_eq!(err, Error::NotFound(999));
        assert!(!nav.is_open());
    }

    #[test]
    fn failed_jump_leaves_an_open_view_in_place() {
        let items = collection();
        let mut nav = Navigator::new();
        nav.open(&items, 10).unwrap();

        assert!(nav.jump_to(&items, 999).is_err());
        assert_eq!(nav.cursor(), Some(3));
    }

    #[test]
    fn stepping_stays_inside_the_collection() {
        let items = collection();
        let mut nav = Navigator::new();
        nav.open(&items, 12).unwrap();
        assert_eq!(nav.cursor(), Some(4));

        nav.step_forward(items.len());
        assert_eq!(nav.cursor(), Some(4), "no wraparound at the end");

        nav.open(&items, 1).unwrap();
        nav.step_backward();
        assert_eq!(nav.cursor(), Some(0), "no wraparound at the start");

        nav.step_forward(items.len());
        assert_eq!(nav.cursor(), Some(1));
    }

    #[test]
    fn stepping_while_closed_is_a_no_op() {
        let items = collection();
        let mut nav = Navigator::new();

        nav.step_forward(items.len());
        nav.step_backward();
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn jump_retargets_without_closing() {
        let items = collection();
        let mut nav = Navigator::new();
        nav.open(&items, 1).unwrap();

        let cursor = nav.jump_to(&items, 12).unwrap();
        assert_eq!(cursor, 4);
        assert!(nav.is_open());
    }

    #[test]
    fn close_is_unconditional() {
        let items = collection();
        let mut nav = Navigator::new();

        nav.close();
        assert_eq!(nav.state(), NavState::Closed);

        nav.open(&items, 4).unwrap();
        nav.close();
        assert_eq!(nav.state(), NavState::Closed);
    }

    #[test]
    fn duplicate_identifier_resolves_to_first_occurrence() {
        let mut items = collection();
        items.push(Creature {
            pokedex_number: 7,
            name: "entry-7-dup".to_string(),
            ..Creature::default()
        });

        assert_eq!(index_of(&items, 7).unwrap(), 2);
    }
}
