//! # Suggestion Ordering
//!
//! The pure ordering, grouping, and filtering protocol behind the
//! suggestion list.
//!
//! Ordering contract: an entry offers its OWN children first, sorted by
//! name (case-sensitive ascending), followed by the contribution of each
//! associated type in type-identity order: that type's own child keys
//! sorted ascending, each key resolved back through the focus's combined
//! child mapping. Keys that no longer resolve are silently skipped. The
//! result is one flat ordered sequence; the tree is assumed not to expose
//! the same key under two sources, so no dedup pass runs.
//!
//! These functions never touch the access handle; they operate on an
//! already-obtained tree reference.

use crate::lexicon::Lexicon;
use crate::types::EntryId;

/// One source's slice of the offered children, for per-type presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionGroup {
    /// The entry contributing this group: the focus itself for own
    /// children, a type entry otherwise.
    pub source: EntryId,
    /// Contributed children, in offer order.
    pub members: Vec<EntryId>,
}

/// The suggestion ordering and filtering protocol.
pub struct Suggester;

impl Suggester {
    /// Full ordered child sequence offered by a focus entry.
    ///
    /// Returns an empty sequence for an unknown focus.
    #[must_use]
    pub fn offered(lexicon: &Lexicon, focus: EntryId) -> Vec<EntryId> {
        Self::grouped(lexicon, focus)
            .into_iter()
            .flat_map(|group| group.members)
            .collect()
    }

    /// The same traversal as [`Suggester::offered`], grouped by source.
    ///
    /// The first group is headed by the focus itself and holds its own
    /// children; then one group per associated type, in type-identity
    /// order.
    #[must_use]
    pub fn grouped(lexicon: &Lexicon, focus: EntryId) -> Vec<SuggestionGroup> {
        let Some(entry) = lexicon.entry(focus) else {
            return Vec::new();
        };

        let mut groups = vec![SuggestionGroup {
            source: focus,
            members: entry.own_children().map(|(_, id)| id).collect(),
        }];

        for type_id in entry.own_types() {
            let Some(type_entry) = lexicon.entry(type_id) else {
                continue;
            };
            let members = type_entry
                .own_children()
                .filter_map(|(key, _)| lexicon.child(focus, key))
                .collect();
            groups.push(SuggestionGroup {
                source: type_id,
                members,
            });
        }

        groups
    }

    /// Filter an ordered sequence by case-insensitive prefix match on
    /// entry names, preserving order.
    ///
    /// Callers always pass the focus's FULL ordered child sequence, never
    /// a previous partial filter, so shortening the input widens the
    /// result again.
    #[must_use]
    pub fn filter(lexicon: &Lexicon, ordered: &[EntryId], input: &str) -> Vec<EntryId> {
        if input.is_empty() {
            return ordered.to_vec();
        }
        let needle = input.to_lowercase();
        ordered
            .iter()
            .copied()
            .filter(|&id| lexicon.name(id).to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Offered children of a focus, filtered by input, in one pass.
    #[must_use]
    pub fn matching(lexicon: &Lexicon, focus: EntryId, input: &str) -> Vec<EntryId> {
        let full = Self::offered(lexicon, focus);
        Self::filter(lexicon, &full, input)
    }
}

// =============================================================================
// TESTS
// =============================================================================
