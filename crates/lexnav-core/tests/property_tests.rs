//! # Property-Based Tests
//!
//! Verification of the navigation invariants under generated inputs:
//! suggestion ordering, cursor bounds, and cycling arithmetic.

use lexnav_core::{EntryId, Lexicon, LexiconHandle, NavState, Suggester};
use proptest::collection::vec;
use proptest::prelude::*;

/// Build a two-level lexicon from generated child-name seeds.
///
/// Seeds are mapped onto valid, distinct names so builder validation never
/// interferes with the property under test.
fn seeded_handle(seeds: &[u8]) -> (LexiconHandle, EntryId) {
    let mut lex = Lexicon::new("lexicon").expect("root");
    let focus = lex.add_entry(lex.root(), "focus").expect("focus");
    for (position, seed) in seeds.iter().enumerate() {
        let letter = char::from(b'a' + (seed % 26));
        let name = format!("{letter}{position}");
        lex.add_entry(focus, name).expect("child");
    }
    (LexiconHandle::new(lex), focus)
}

proptest! {
    /// Filtered suggestions are always an in-order subsequence of the
    /// focus's full ordered child list.
    #[test]
    fn suggestions_are_ordered_subsequence(
        seeds in vec(0u8..26, 0..20),
        input in "[a-z]{0,2}",
    ) {
        let (handle, focus) = seeded_handle(&seeds);
        let full = handle.read(|lex| Suggester::offered(lex, focus));

        let state = NavState::open(&handle, focus).replace(&handle, &input);

        let mut cursor = full.iter();
        for suggested in state.suggestions() {
            prop_assert!(
                cursor.any(|candidate| candidate == suggested),
                "suggestion out of order or not offered"
            );
        }
    }

    /// Re-selecting the current valid index is an identity.
    #[test]
    fn select_is_idempotent(seeds in vec(0u8..26, 1..20)) {
        let (handle, focus) = seeded_handle(&seeds);
        let state = NavState::open(&handle, focus);
        let index = state.selected_index().map(|i| i as i64).unwrap_or(0);
        prop_assert_eq!(state.select(index, false), state.select(index, false).select(index, false));
    }

    /// `count` forward cycling steps return the cursor to where it began.
    #[test]
    fn full_cycle_returns_to_start(seeds in vec(0u8..26, 2..20)) {
        let (handle, focus) = seeded_handle(&seeds);
        let mut state = NavState::open(&handle, focus);
        let start = state.selected_index();
        let count = state.suggestions().len();

        for _ in 0..count {
            state = state.select_next(true);
        }
        prop_assert_eq!(state.selected_index(), start);
    }

    /// Cycling with a negative index wraps by true mathematical modulo.
    #[test]
    fn negative_wrap_is_euclidean(seeds in vec(0u8..26, 2..20), back in 1i64..100) {
        let (handle, focus) = seeded_handle(&seeds);
        let state = NavState::open(&handle, focus);
        let count = state.suggestions().len() as i64;

        let wrapped = state.select(-back, true);
        prop_assert_eq!(
            wrapped.selected_index(),
            Some((-back).rem_euclid(count) as usize)
        );
        prop_assert_eq!(wrapped.last_error(), None);
    }

    /// The cursor is absent exactly when the suggestion list is empty,
    /// across arbitrary typed input.
    #[test]
    fn cursor_absent_iff_no_suggestions(
        seeds in vec(0u8..26, 0..20),
        input in "[a-z0-9]{0,3}",
    ) {
        let (handle, focus) = seeded_handle(&seeds);
        let state = NavState::open(&handle, focus).replace(&handle, &input);
        prop_assert_eq!(state.selected_index().is_none(), state.suggestions().is_empty());
        if let Some(index) = state.selected_index() {
            prop_assert!(index < state.suggestions().len());
        }
    }

    /// The same tree and the same input always derive the same state.
    #[test]
    fn transitions_are_deterministic(
        seeds in vec(0u8..26, 0..20),
        input in "[a-z]{0,3}",
    ) {
        let (handle, focus) = seeded_handle(&seeds);
        let once = NavState::open(&handle, focus).replace(&handle, &input);
        let twice = NavState::open(&handle, focus).replace(&handle, &input);
        prop_assert_eq!(once, twice);
    }
}
