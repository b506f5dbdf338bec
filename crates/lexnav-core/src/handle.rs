//! # Tree Access Handle
//!
//! The single serialization point for lexicon reads and writes.
//!
//! The tree is shared, mutable, process-wide state: editors may mutate it
//! while navigation sessions are open. Every tree-reading transition
//! acquires the read side of this handle exactly once, computes against
//! that consistent snapshot, and releases. No transition re-enters the
//! handle, so it cannot deadlock against itself.
//!
//! The handle is passed explicitly into each transition; it is not a
//! hidden singleton.

use crate::lexicon::Lexicon;
use crate::types::Revision;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, serialized access to a [`Lexicon`].
///
/// Cloning the handle clones the reference, not the tree.
#[derive(Debug, Clone)]
pub struct LexiconHandle {
    inner: Arc<RwLock<Lexicon>>,
}

impl LexiconHandle {
    /// Wrap a lexicon in a handle.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            inner: Arc::new(RwLock::new(lexicon)),
        }
    }

    /// Run a closure against one consistent read snapshot of the tree.
    ///
    /// A poisoned lock is recovered: the lexicon is a plain value and this
    /// crate's own code never panics while holding the guard, so the inner
    /// tree is always structurally sound.
    pub fn read<T>(&self, f: impl FnOnce(&Lexicon) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run a closure with exclusive write access to the tree.
    ///
    /// This is the writer side used by whatever owns the lexicon; the
    /// navigation core itself never writes.
    pub fn write<T>(&self, f: impl FnOnce(&mut Lexicon) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Current tree revision without exposing the tree.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.read(Lexicon::revision)
    }
}

// =============================================================================
// TESTS
// =============================================================================
