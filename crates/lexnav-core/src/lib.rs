//! # lexnav-core
//!
//! Navigation and autocomplete state machine for lexnav - THE LOGIC.
//!
//! This crate implements an interactive navigation session over a
//! hierarchical, typed lexicon of named entries. A caller types characters
//! to filter the focused entry's children, cycles through the filtered
//! candidates, and commits a selection to descend (or backs out), while the
//! tree may be mutated concurrently by writers elsewhere in the process.
//!
//! ## Shape
//!
//! - [`Lexicon`] is the tree: entries own children by name and inherit
//!   further children through associated type entries.
//! - [`LexiconHandle`] is the single serialized access point to the shared
//!   tree; it is passed explicitly into every tree-reading transition.
//! - [`NavState`] is an immutable session value; each transition returns a
//!   new state and records anomalies on `last_error` instead of throwing.
//! - [`Suggester`] is the pure ordering/filtering protocol behind the
//!   suggestion list.
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no file I/O (pure Rust)
//! - Deterministic: `BTreeMap` only, no `HashMap`, no floats, no randomness
//! - Transitions never panic and never return `Result`; errors are data

// =============================================================================
// MODULES
// =============================================================================

pub mod command;
pub mod handle;
pub mod lexicon;
pub mod primitives;
pub mod state;
pub mod suggest;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{EntryId, LexiconError, NavError, Revision};

// =============================================================================
// RE-EXPORTS: Tree & Navigation
// =============================================================================

pub use command::NavCommand;
pub use handle::LexiconHandle;
pub use lexicon::{Entry, Lexicon};
pub use state::NavState;
pub use suggest::{SuggestionGroup, Suggester};
