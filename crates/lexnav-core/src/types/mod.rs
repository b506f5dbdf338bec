//! # Core Type Definitions
//!
//! This module contains all core types for the lexnav navigation substrate:
//! - Entry and tree identifiers (`EntryId`, `Revision`)
//! - Transition error taxonomy (`NavError`)
//! - Lexicon builder errors (`LexiconError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Use saturating arithmetic for counters to prevent overflow

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ENTRY & TREE IDENTIFIERS
// =============================================================================

/// Unique, orderable identifier for an entry (lemma) in the lexicon.
///
/// Identity is stable across tree mutations: a rebase re-resolves entries
/// by `EntryId`, never by name or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

/// Monotone clock of the lexicon tree.
///
/// Bumped on every tree mutation. A `NavState` copies the revision it was
/// computed against so callers can detect staleness without comparing trees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Revision(pub u64);

impl Revision {
    /// Create a revision with the given value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Advance the clock by one tick using saturating arithmetic.
    /// This is the ONLY allowed mutation for revisions.
    #[must_use]
    pub const fn tick(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Get the raw clock value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// TRANSITION ERRORS
// =============================================================================

/// Errors a navigation transition can record on the state it returns.
///
/// This taxonomy is closed. Transitions never return `Result`: every
/// transition yields a well-formed state with `last_error` describing any
/// anomaly, and the caller inspects it after each call. All variants are
/// local and recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A typed character is outside the allowed set for its position
    /// (first vs. subsequent). The rejected character is not appended.
    #[error("invalid input character {0:?}")]
    InvalidInputCharacter(char),

    /// The current filter text yields zero suggestions.
    #[error("no children match input {0:?}")]
    NoChildrenMatchInput(String),

    /// A requested or current index is out of bounds for the suggestion
    /// list. `None` means there was no selection to commit.
    #[error("invalid selection {0:?}")]
    InvalidSelection(Option<i64>),
}

// =============================================================================
// LEXICON ERRORS
// =============================================================================

/// Errors from the lexicon builder surface.
///
/// Unlike `NavError`, these are ordinary fallible results: building a tree
/// can fail, navigating one cannot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// The proposed entry name violates the naming contract.
    #[error("invalid entry name {0:?}")]
    InvalidName(String),

    /// The referenced entry does not exist in this tree.
    #[error("unknown entry {0:?}")]
    UnknownEntry(EntryId),

    /// The parent already owns a child with this name.
    #[error("duplicate child {name:?} under {parent:?}")]
    DuplicateChild { parent: EntryId, name: String },

    /// An entry path (dotted name trail) did not resolve.
    #[error("unresolved entry path {0:?}")]
    UnresolvedPath(String),

    /// An I/O error occurred while loading a lexicon document.
    #[error("I/O error: {0}")]
    Io(String),

    /// A lexicon document could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

// =============================================================================
// TESTS
// =============================================================================
