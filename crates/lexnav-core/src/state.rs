//! # Navigation State Machine
//!
//! The immutable-value navigation session and its transitions.
//!
//! A [`NavState`] holds the focus path, pending filter text, derived
//! suggestion list, selection cursor, and last transition error. Every
//! transition consumes the current state plus external inputs and returns a
//! new state; no entry is ever mutated, only referenced by identity.
//!
//! Tree-reading transitions take the [`LexiconHandle`] explicitly and
//! observe exactly one consistent snapshot. Selection moves are pure: they
//! only adjust the cursor over suggestions already derived.
//!
//! Errors are data: a transition that fails still returns a fully usable
//! state with `last_error` describing the anomaly. Transitions that have no
//! effect (backspace at the root, backspace on a single breadcrumb) return
//! the state unchanged, prior error included.

use crate::handle::LexiconHandle;
use crate::lexicon::Lexicon;
use crate::primitives::{is_valid_name_char, is_valid_name_start};
use crate::suggest::Suggester;
use crate::types::{EntryId, NavError, Revision};

/// An immutable navigation session over a lexicon tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Tree revision this state was computed against.
    observed_at: Revision,
    /// Upper navigation bound; backspace never pops past it.
    root: EntryId,
    /// Root-to-focus trail. Never empty; last element is the focus.
    breadcrumbs: Vec<EntryId>,
    /// Outcome of the most recent transition.
    last_error: Option<NavError>,
    /// Filter text typed so far against the focus's children.
    pending_input: String,
    /// Ordered candidate children derived from focus + pending input.
    suggestions: Vec<EntryId>,
    /// Cursor into `suggestions`; `None` only when the list is empty.
    selected: Option<usize>,
}

impl NavState {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Open a fresh session focused on an entry.
    ///
    /// The navigation root defaults to the tree root (the head of the
    /// focus's lineage). An unknown focus falls back to the tree root.
    #[must_use]
    pub fn open(handle: &LexiconHandle, focus: EntryId) -> Self {
        handle.read(|lex| Self::fresh(lex, focus, None))
    }

    /// Open a fresh session with an explicit upper navigation bound.
    ///
    /// Backspace will treat `root` as the top of the browsable subtree
    /// even when the tree continues above it.
    #[must_use]
    pub fn open_rooted(handle: &LexiconHandle, focus: EntryId, root: EntryId) -> Self {
        handle.read(|lex| Self::fresh(lex, focus, Some(root)))
    }

    fn fresh(lex: &Lexicon, focus: EntryId, root_override: Option<EntryId>) -> Self {
        let focus = if lex.contains(focus) { focus } else { lex.root() };
        let mut breadcrumbs = lex.lineage(focus);
        // An override that is an ancestor of the focus heads the trail;
        // one that is not falls back to the lineage head.
        let root = match root_override
            .filter(|r| lex.contains(*r))
            .and_then(|bound| breadcrumbs.iter().position(|&e| e == bound).map(|at| (bound, at)))
        {
            Some((bound, at)) => {
                breadcrumbs.drain(..at);
                bound
            }
            None => breadcrumbs.first().copied().unwrap_or(focus),
        };
        let suggestions = Suggester::offered(lex, focus);
        Self {
            observed_at: lex.revision(),
            root,
            breadcrumbs,
            last_error: None,
            pending_input: String::new(),
            selected: if suggestions.is_empty() { None } else { Some(0) },
            suggestions,
        }
    }

    // =========================================================================
    // PROJECTIONS
    // =========================================================================

    /// Tree revision this state was computed against.
    #[must_use]
    pub fn observed_at(&self) -> Revision {
        self.observed_at
    }

    /// The upper navigation bound.
    #[must_use]
    pub fn root(&self) -> EntryId {
        self.root
    }

    /// Root-to-focus trail; the last element is the focus.
    #[must_use]
    pub fn breadcrumbs(&self) -> &[EntryId] {
        &self.breadcrumbs
    }

    /// The currently focused entry.
    #[must_use]
    pub fn focus(&self) -> EntryId {
        self.breadcrumbs.last().copied().unwrap_or(self.root)
    }

    /// Outcome of the most recent transition, `None` in steady state.
    #[must_use]
    pub fn last_error(&self) -> Option<&NavError> {
        self.last_error.as_ref()
    }

    /// Filter text typed so far.
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Ordered candidate children currently offered.
    #[must_use]
    pub fn suggestions(&self) -> &[EntryId] {
        &self.suggestions
    }

    /// The selection cursor, when one exists.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entry, valid only while the cursor is in bounds.
    #[must_use]
    pub fn selected_suggestion(&self) -> Option<EntryId> {
        self.selected
            .and_then(|i| self.suggestions.get(i))
            .copied()
    }

    /// Human-readable trail for presentation layers: breadcrumb names
    /// joined by ` > `, with any pending filter text appended.
    #[must_use]
    pub fn describe(&self, handle: &LexiconHandle) -> String {
        handle.read(|lex| {
            let trail = self
                .breadcrumbs
                .iter()
                .map(|&id| lex.name(id).to_string())
                .collect::<Vec<_>>()
                .join(" > ");
            if self.pending_input.is_empty() {
                trail
            } else {
                format!("{trail} > {}…", self.pending_input)
            }
        })
    }

    // =========================================================================
    // SELECTION CURSOR (pure, no tree access)
    // =========================================================================

    /// Move the cursor one suggestion back.
    ///
    /// An absent cursor is treated as 1, so the first move lands on 0.
    #[must_use]
    pub fn select_previous(&self, cycle: bool) -> Self {
        let index = self.selected.map_or(1, |i| i as i64) - 1;
        self.select(index, cycle)
    }

    /// Move the cursor one suggestion forward.
    ///
    /// An absent cursor is treated as −1, so the first move lands on 0.
    #[must_use]
    pub fn select_next(&self, cycle: bool) -> Self {
        let index = self.selected.map_or(-1, |i| i as i64) + 1;
        self.select(index, cycle)
    }

    /// Set the cursor to an explicit index.
    ///
    /// Without `cycle` the index must be in bounds, otherwise the state
    /// records `InvalidSelection` and the cursor stays put. With `cycle`
    /// the index wraps by true mathematical modulo in both directions; an
    /// empty suggestion list is the only failure.
    #[must_use]
    pub fn select(&self, index: i64, cycle: bool) -> Self {
        let mut next = self.clone();
        next.last_error = None;
        let count = self.suggestions.len();

        if cycle {
            match count {
                0 => next.last_error = Some(NavError::InvalidSelection(Some(index))),
                1 => next.selected = Some(0),
                _ => next.selected = Some(index.rem_euclid(count as i64) as usize),
            }
        } else if index >= 0 && (index as usize) < count {
            next.selected = Some(index as usize);
        } else {
            next.last_error = Some(NavError::InvalidSelection(Some(index)));
        }
        next
    }

    // =========================================================================
    // TEXT INPUT
    // =========================================================================

    /// Append one typed character to the pending filter.
    #[must_use]
    pub fn append(&self, handle: &LexiconHandle, c: char) -> Self {
        handle.read(|lex| self.append_in(lex, c))
    }

    fn append_in(&self, lex: &Lexicon, c: char) -> Self {
        let mut next = self.clone();
        next.last_error = None;

        let valid = if self.pending_input.is_empty() {
            is_valid_name_start(c)
        } else {
            is_valid_name_char(c)
        };
        if !valid {
            next.last_error = Some(NavError::InvalidInputCharacter(c));
            return next;
        }

        next.pending_input.push(c);
        next.refilter(lex);
        next
    }

    /// Swap the whole pending filter, replaying validation character by
    /// character. Stops at the first invalid character, keeping the prefix
    /// accumulated so far.
    #[must_use]
    pub fn replace(&self, handle: &LexiconHandle, input: &str) -> Self {
        handle.read(|lex| self.replace_in(lex, input))
    }

    fn replace_in(&self, lex: &Lexicon, input: &str) -> Self {
        let mut next = self.clone();
        next.pending_input.clear();
        next.refilter(lex);
        for c in input.chars() {
            next = next.append_in(lex, c);
            if matches!(next.last_error, Some(NavError::InvalidInputCharacter(_))) {
                break;
            }
        }
        next
    }

    /// Two-mode backspace: erase the last typed character while filtering,
    /// otherwise step back up the breadcrumb trail.
    ///
    /// Stepping back never passes the navigation root; at the root (or on
    /// a single breadcrumb) this is a no-op that preserves the prior
    /// error. After a step back the cursor points at the entry just
    /// vacated when it reappears among its siblings.
    #[must_use]
    pub fn backspace(&self, handle: &LexiconHandle) -> Self {
        handle.read(|lex| self.backspace_in(lex))
    }

    fn backspace_in(&self, lex: &Lexicon) -> Self {
        if !self.pending_input.is_empty() {
            let mut next = self.clone();
            next.last_error = None;
            next.pending_input.pop();
            next.refilter(lex);
            return next;
        }

        if self.breadcrumbs.len() > 1 {
            if self.focus() == self.root {
                return self.clone();
            }
            let mut next = self.clone();
            next.last_error = None;
            if let Some(vacated) = next.breadcrumbs.pop() {
                let focus = next.focus();
                next.suggestions = Suggester::offered(lex, focus);
                next.selected = next.suggestions.iter().position(|&e| e == vacated);
            }
            return next;
        }

        self.clone()
    }

    // =========================================================================
    // COMMIT
    // =========================================================================

    /// Descend into the selected suggestion.
    ///
    /// Requires a cursor within bounds; otherwise the state records
    /// `InvalidSelection` (covering commit-with-no-selection).
    #[must_use]
    pub fn enter(&self, handle: &LexiconHandle) -> Self {
        handle.read(|lex| self.enter_in(lex))
    }

    fn enter_in(&self, lex: &Lexicon) -> Self {
        let target = self.selected.and_then(|i| self.suggestions.get(i)).copied();
        let Some(target) = target else {
            let mut next = self.clone();
            next.last_error = Some(NavError::InvalidSelection(
                self.selected.map(|i| i as i64),
            ));
            return next;
        };

        let mut next = self.clone();
        next.last_error = None;
        next.breadcrumbs.push(target);
        next.pending_input.clear();
        next.suggestions = Suggester::offered(lex, target);
        next.selected = if next.suggestions.is_empty() { None } else { Some(0) };
        next
    }

    // =========================================================================
    // REBASE
    // =========================================================================

    /// Re-synchronize against a possibly-mutated tree.
    ///
    /// Pass the session's own handle after external edits, or an alternate
    /// handle to migrate the session onto another tree. Root and focus are
    /// re-resolved by identity (falling back to the tree's root when gone),
    /// breadcrumbs are rebuilt as the resolved focus's lineage, and the
    /// pending filter is replayed against the new children. When the
    /// previously selected entry still appears among the new suggestions,
    /// the cursor pins to its new index.
    #[must_use]
    pub fn update(&self, handle: &LexiconHandle) -> Self {
        handle.read(|lex| self.update_in(lex))
    }

    fn update_in(&self, lex: &Lexicon) -> Self {
        let previously_selected = self.selected_suggestion();

        let root = if lex.contains(self.root) { self.root } else { lex.root() };
        let focus = if lex.contains(self.focus()) { self.focus() } else { lex.root() };

        let rebased = Self {
            observed_at: lex.revision(),
            root,
            breadcrumbs: lex.lineage(focus),
            last_error: None,
            pending_input: String::new(),
            suggestions: Vec::new(),
            selected: None,
        };
        let mut next = rebased.replace_in(lex, &self.pending_input);

        if let Some(previous) = previously_selected {
            if let Some(index) = next.suggestions.iter().position(|&e| e == previous) {
                next.selected = Some(index);
            }
        }
        next
    }

    // =========================================================================
    // RESET
    // =========================================================================

    /// Discard this session and open a fresh one.
    ///
    /// `to` defaults to the current focus; when `selecting` names an entry
    /// present in the fresh suggestion list, the cursor pins to it.
    #[must_use]
    pub fn reset(
        &self,
        handle: &LexiconHandle,
        to: Option<EntryId>,
        selecting: Option<EntryId>,
    ) -> Self {
        handle.read(|lex| {
            let mut next = Self::fresh(lex, to.unwrap_or(self.focus()), None);
            if let Some(wanted) = selecting {
                if let Some(index) = next.suggestions.iter().position(|&e| e == wanted) {
                    next.selected = Some(index);
                }
            }
            next
        })
    }

    // =========================================================================
    // SHARED RECOMPUTATION
    // =========================================================================

    /// Recompute suggestions from the focus's FULL child set filtered by
    /// the pending input, reset the cursor to the first match, and derive
    /// the match error.
    fn refilter(&mut self, lex: &Lexicon) {
        self.suggestions = Suggester::matching(lex, self.focus(), &self.pending_input);
        self.selected = if self.suggestions.is_empty() { None } else { Some(0) };
        self.last_error = if self.suggestions.is_empty() && !self.pending_input.is_empty() {
            Some(NavError::NoChildrenMatchInput(self.pending_input.clone()))
        } else {
            None
        };
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    /// `lexicon > fruit > {Banana, apple, cherry}`, plus an empty `stone`
    /// leaf under the root.
    fn orchard() -> (LexiconHandle, EntryId) {
        let mut lex = Lexicon::new("lexicon").expect("root");
        let fruit = lex.add_entry(lex.root(), "fruit").expect("add");
        lex.add_entry(fruit, "apple").expect("add");
        lex.add_entry(fruit, "Banana").expect("add");
        lex.add_entry(fruit, "cherry").expect("add");
        lex.add_entry(lex.root(), "stone").expect("add");
        (LexiconHandle::new(lex), fruit)
    }

    fn names(handle: &LexiconHandle, ids: &[EntryId]) -> Vec<String> {
        handle.read(|lex| ids.iter().map(|&id| lex.name(id).to_string()).collect())
    }

    #[test]
    fn open_offers_full_child_list_with_first_selected() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit);

        assert_eq!(
            names(&handle, state.suggestions()),
            vec!["Banana", "apple", "cherry"]
        );
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.last_error(), None);
        assert_eq!(state.breadcrumbs().len(), 2);
    }

    #[test]
    fn open_on_leaf_has_no_selection() {
        let (handle, _) = orchard();
        let stone = handle.read(|lex| lex.child(lex.root(), "stone")).expect("stone");
        let state = NavState::open(&handle, stone);
        assert!(state.suggestions().is_empty());
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn open_unknown_focus_falls_back_to_tree_root() {
        let (handle, _) = orchard();
        let state = NavState::open(&handle, EntryId(999));
        assert_eq!(state.focus(), handle.read(Lexicon::root));
    }

    #[test]
    fn select_in_bounds_sets_cursor_and_clears_error() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).select(5, false);
        assert_eq!(
            state.last_error(),
            Some(&NavError::InvalidSelection(Some(5)))
        );
        assert_eq!(state.selected_index(), Some(0));

        let state = state.select(2, false);
        assert_eq!(state.selected_index(), Some(2));
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn select_is_idempotent_when_valid() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).select(1, false);
        let again = state.select(1, false);
        assert_eq!(state, again);
    }

    #[test]
    fn cycling_wraps_both_directions() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit);

        assert_eq!(state.select(-1, true).selected_index(), Some(2));
        assert_eq!(state.select(3, true).selected_index(), Some(0));
        assert_eq!(state.select(4, true).selected_index(), Some(1));
        assert_eq!(state.select(-3, true).selected_index(), Some(0));
    }

    #[test]
    fn cycling_single_suggestion_forces_zero() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit);
        let narrowed = state.append(&handle, 'c');
        assert_eq!(narrowed.suggestions().len(), 1);
        assert_eq!(narrowed.select(7, true).selected_index(), Some(0));
        assert_eq!(narrowed.select(-7, true).selected_index(), Some(0));
    }

    #[test]
    fn cycling_empty_list_records_invalid_selection() {
        let (handle, _) = orchard();
        let stone = handle.read(|lex| lex.child(lex.root(), "stone")).expect("stone");
        let state = NavState::open(&handle, stone);

        let moved = state.select_next(true);
        assert!(matches!(
            moved.last_error(),
            Some(NavError::InvalidSelection(_))
        ));
        assert_eq!(moved.selected_index(), None);
    }

    #[test]
    fn first_moves_from_no_selection_land_on_zero() {
        let (handle, _) = orchard();
        let stone = handle.read(|lex| lex.child(lex.root(), "stone")).expect("stone");
        // Empty list keeps the absent cursor, but the delegated index is 0.
        let state = NavState::open(&handle, stone);
        assert!(matches!(
            state.select_next(false).last_error(),
            Some(NavError::InvalidSelection(Some(0)))
        ));
        assert!(matches!(
            state.select_previous(false).last_error(),
            Some(NavError::InvalidSelection(Some(0)))
        ));
    }

    #[test]
    fn append_filters_case_insensitively() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).append(&handle, 'b');
        assert_eq!(names(&handle, state.suggestions()), vec!["Banana"]);
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.last_error(), None);
        assert_eq!(state.pending_input(), "b");
    }

    #[test]
    fn append_with_no_match_records_error() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).append(&handle, 'z');
        assert!(state.suggestions().is_empty());
        assert_eq!(state.selected_index(), None);
        assert_eq!(
            state.last_error(),
            Some(&NavError::NoChildrenMatchInput("z".to_string()))
        );
    }

    #[test]
    fn append_invalid_character_leaves_input_unchanged() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).append(&handle, '3');
        assert_eq!(state.pending_input(), "");
        assert_eq!(
            state.last_error(),
            Some(&NavError::InvalidInputCharacter('3'))
        );
        // Digits are fine past the first position.
        let state = state.append(&handle, 'a').append(&handle, '3');
        assert_eq!(state.pending_input(), "a3");
    }

    #[test]
    fn append_filters_full_set_not_previous_filter() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit)
            .append(&handle, 'z')
            .backspace(&handle)
            .append(&handle, 'a');
        assert_eq!(names(&handle, state.suggestions()), vec!["apple"]);
    }

    #[test]
    fn replace_replays_whole_input() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).replace(&handle, "ba");
        assert_eq!(state.pending_input(), "ba");
        assert_eq!(names(&handle, state.suggestions()), vec!["Banana"]);
    }

    #[test]
    fn replace_stops_at_first_invalid_character() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).replace(&handle, "b!x");
        assert_eq!(state.pending_input(), "b");
        assert_eq!(
            state.last_error(),
            Some(&NavError::InvalidInputCharacter('!'))
        );
        assert_eq!(names(&handle, state.suggestions()), vec!["Banana"]);
    }

    #[test]
    fn replace_with_empty_clears_filter_and_error() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit)
            .append(&handle, 'z')
            .replace(&handle, "");
        assert_eq!(state.pending_input(), "");
        assert_eq!(state.suggestions().len(), 3);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn backspace_shortens_filter_and_rewidens() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit)
            .replace(&handle, "ba")
            .backspace(&handle);
        assert_eq!(state.pending_input(), "b");
        assert_eq!(names(&handle, state.suggestions()), vec!["Banana"]);

        let state = state.backspace(&handle);
        assert_eq!(state.pending_input(), "");
        assert_eq!(state.suggestions().len(), 3);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn backspace_pops_breadcrumb_and_points_back() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).backspace(&handle);

        assert_eq!(state.focus(), handle.read(Lexicon::root));
        assert_eq!(state.breadcrumbs().len(), 1);
        // Cursor points at the vacated entry among its siblings.
        assert_eq!(state.selected_suggestion(), Some(fruit));
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn backspace_at_root_is_a_no_op_preserving_error() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit)
            .backspace(&handle) // now at root
            .select(99, false); // plant an error
        let again = state.backspace(&handle);
        assert_eq!(state, again);
    }

    #[test]
    fn backspace_respects_root_override() {
        let (handle, fruit) = orchard();
        let state = NavState::open_rooted(&handle, fruit, fruit);
        // Focus == root: stepping back is a no-op even though the tree
        // continues above.
        let again = state.backspace(&handle);
        assert_eq!(state, again);
    }

    #[test]
    fn open_rooted_heads_the_trail_at_the_bound() {
        let (handle, fruit) = orchard();
        let banana = handle.read(|lex| lex.child(fruit, "Banana")).expect("banana");

        let state = NavState::open_rooted(&handle, banana, fruit);
        assert_eq!(state.breadcrumbs(), &[fruit, banana][..]);
        assert_eq!(state.root(), fruit);

        // Backing out stops at the bound, not the tree root.
        let back = state.backspace(&handle);
        assert_eq!(back.focus(), fruit);
        let stuck = back.backspace(&handle);
        assert_eq!(back, stuck);
    }

    #[test]
    fn open_rooted_with_non_ancestor_falls_back_to_lineage_head() {
        let (handle, fruit) = orchard();
        let stone = handle.read(|lex| lex.child(lex.root(), "stone")).expect("stone");

        let state = NavState::open_rooted(&handle, fruit, stone);
        assert_eq!(state.root(), handle.read(Lexicon::root));
        assert_eq!(state.breadcrumbs().first().copied(), Some(state.root()));
    }

    #[test]
    fn enter_descends_and_resets_filter() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit)
            .append(&handle, 'b')
            .enter(&handle);

        assert_eq!(handle.read(|lex| lex.name(state.focus()).to_string()), "Banana");
        assert_eq!(state.pending_input(), "");
        assert_eq!(state.breadcrumbs().len(), 3);
        assert!(state.suggestions().is_empty());
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn enter_without_selection_records_invalid_selection() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).append(&handle, 'z');
        let committed = state.enter(&handle);
        assert_eq!(
            committed.last_error(),
            Some(&NavError::InvalidSelection(None))
        );
        assert_eq!(committed.breadcrumbs(), state.breadcrumbs());
    }

    #[test]
    fn enter_then_backspace_round_trips() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit);
        let entered = state.select(2, false).enter(&handle);
        let back = entered.backspace(&handle);

        assert_eq!(back.focus(), fruit);
        assert_eq!(
            back.selected_suggestion(),
            handle.read(|lex| lex.child(fruit, "cherry"))
        );
    }

    #[test]
    fn update_refreshes_revision_and_children() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit);
        handle.write(|lex| lex.add_entry(fruit, "damson").map(|_| ())).expect("add");

        assert!(state.observed_at() < handle.revision());
        let rebased = state.update(&handle);
        assert_eq!(rebased.observed_at(), handle.revision());
        assert_eq!(
            names(&handle, rebased.suggestions()),
            vec!["Banana", "apple", "cherry", "damson"]
        );
    }

    #[test]
    fn update_replays_pending_input() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).replace(&handle, "da");
        assert!(state.suggestions().is_empty());

        handle.write(|lex| lex.add_entry(fruit, "damson").map(|_| ())).expect("add");
        let rebased = state.update(&handle);
        assert_eq!(rebased.pending_input(), "da");
        assert_eq!(names(&handle, rebased.suggestions()), vec!["damson"]);
        assert_eq!(rebased.last_error(), None);
    }

    #[test]
    fn update_pins_previous_selection_by_identity() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).select(2, false); // cherry
        let cherry = state.selected_suggestion().expect("cherry");

        handle.write(|lex| lex.add_entry(fruit, "bilberry").map(|_| ())).expect("add");
        let rebased = state.update(&handle);
        // bilberry lands at index 2, pushing cherry to 3.
        assert_eq!(rebased.selected_suggestion(), Some(cherry));
        assert_eq!(rebased.selected_index(), Some(3));
    }

    #[test]
    fn update_falls_back_to_tree_root_when_focus_removed() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit);
        handle.write(|lex| lex.remove_entry(fruit)).expect("remove");

        let rebased = state.update(&handle);
        assert_eq!(rebased.focus(), handle.read(Lexicon::root));
        assert_eq!(rebased.breadcrumbs().len(), 1);
    }

    #[test]
    fn reset_defaults_to_current_focus() {
        let (handle, fruit) = orchard();
        let dirty = NavState::open(&handle, fruit)
            .append(&handle, 'z')
            .select(9, true);
        let clean = dirty.reset(&handle, None, None);

        assert_eq!(clean.focus(), fruit);
        assert_eq!(clean.pending_input(), "");
        assert_eq!(clean.suggestions().len(), 3);
        assert_eq!(clean.selected_index(), Some(0));
        assert_eq!(clean.last_error(), None);
    }

    #[test]
    fn reset_pins_requested_selection() {
        let (handle, fruit) = orchard();
        let cherry = handle.read(|lex| lex.child(fruit, "cherry")).expect("cherry");
        let state = NavState::open(&handle, fruit).reset(&handle, None, Some(cherry));
        assert_eq!(state.selected_suggestion(), Some(cherry));
    }

    #[test]
    fn describe_renders_trail_and_filter() {
        let (handle, fruit) = orchard();
        let state = NavState::open(&handle, fruit).append(&handle, 'b');
        assert_eq!(state.describe(&handle), "lexicon > fruit > b…");
    }
}
