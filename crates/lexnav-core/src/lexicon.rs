//! # Lexicon Tree
//!
//! The hierarchy of named, typed entries the navigation core walks.
//!
//! This module implements the reference in-memory tree. All data structures
//! use `BTreeMap`/`BTreeSet` for deterministic ordering; entries are
//! addressed by stable `EntryId` so navigation state survives mutation.
//!
//! An entry offers two kinds of children:
//! - its OWN children, keyed by name;
//! - children INHERITED from associated type entries: each type is itself
//!   an entry whose own children are offered through every entry carrying
//!   that type.
//!
//! Inheritance is an explicit two-level lookup, not delegation: the combined
//! child mapping consults own children first, then each type in id order.

use crate::primitives::{MAX_LINEAGE_DEPTH, is_valid_name};
use crate::types::{EntryId, LexiconError, Revision};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// ENTRY
// =============================================================================

/// A named, identifiable node in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identity, orderable for deterministic traversal.
    pub id: EntryId,
    /// The lemma name. Unique among siblings, validated against the
    /// naming contract.
    pub name: String,
    /// Human-readable description for presentation layers.
    pub description: String,
    /// Parent link; `None` only for the tree root.
    parent: Option<EntryId>,
    /// Own children, keyed by name. BTreeMap iteration yields the
    /// case-sensitive ascending name order the suggestion contract needs.
    own_children: BTreeMap<String, EntryId>,
    /// Associated type entries, ordered by identity.
    own_types: BTreeSet<EntryId>,
}

impl Entry {
    fn new(id: EntryId, name: impl Into<String>, parent: Option<EntryId>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            parent,
            own_children: BTreeMap::new(),
            own_types: BTreeSet::new(),
        }
    }

    /// The parent entry, if any.
    #[must_use]
    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    /// Own children in name order.
    pub fn own_children(&self) -> impl Iterator<Item = (&str, EntryId)> {
        self.own_children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Look up an own child by name.
    #[must_use]
    pub fn own_child(&self, name: &str) -> Option<EntryId> {
        self.own_children.get(name).copied()
    }

    /// Associated type entries in identity order.
    pub fn own_types(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.own_types.iter().copied()
    }

    /// Number of own children.
    #[must_use]
    pub fn own_child_count(&self) -> usize {
        self.own_children.len()
    }
}

// =============================================================================
// LEXICON
// =============================================================================

/// The full tree of entries.
///
/// The navigation core only reads this structure; mutation happens through
/// the builder methods below, each of which bumps the tree revision so open
/// navigation sessions can detect staleness and rebase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Entry storage: EntryId -> Entry.
    entries: BTreeMap<EntryId, Entry>,
    /// The distinguished root entry.
    root: EntryId,
    /// Monotone mutation clock.
    revision: Revision,
    /// Next available EntryId.
    next_id: u64,
}

impl Lexicon {
    /// Create a lexicon containing only a root entry with the given name.
    ///
    /// The root name is validated like any other; the conventional root
    /// name in lexicon files is a single word such as `"lexicon"`.
    pub fn new(root_name: impl Into<String>) -> Result<Self, LexiconError> {
        let root_name = root_name.into();
        if !is_valid_name(&root_name) {
            return Err(LexiconError::InvalidName(root_name));
        }
        let root = EntryId(0);
        let mut entries = BTreeMap::new();
        entries.insert(root, Entry::new(root, root_name, None));
        Ok(Self {
            entries,
            root,
            revision: Revision::new(0),
            next_id: 1,
        })
    }

    /// The root entry id.
    #[must_use]
    pub fn root(&self) -> EntryId {
        self.root
    }

    /// Current mutation clock.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Check whether an entry exists.
    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Look up an entry.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Entry name, empty for unknown ids.
    #[must_use]
    pub fn name(&self, id: EntryId) -> &str {
        self.entries.get(&id).map_or("", |e| e.name.as_str())
    }

    /// Total number of entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// All entries in identity order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    // =========================================================================
    // LINEAGE
    // =========================================================================

    /// Path from the root to the given entry, inclusive.
    ///
    /// Returns just `[id]` for an unknown entry so callers always get a
    /// non-empty trail. The walk is bounded by `MAX_LINEAGE_DEPTH`; a
    /// longer chain indicates a corrupted parent link and truncates at the
    /// bound rather than looping.
    #[must_use]
    pub fn lineage(&self, id: EntryId) -> Vec<EntryId> {
        let mut trail = vec![id];
        let mut current = id;
        while let Some(parent) = self.entries.get(&current).and_then(Entry::parent) {
            if trail.len() >= MAX_LINEAGE_DEPTH {
                break;
            }
            trail.push(parent);
            current = parent;
        }
        trail.reverse();
        trail
    }

    // =========================================================================
    // COMBINED CHILD LOOKUP
    // =========================================================================

    /// Resolve a child key through the combined mapping of an entry:
    /// own children first, then each associated type's own children in
    /// type-identity order.
    ///
    /// Own children shadow type-contributed keys.
    #[must_use]
    pub fn child(&self, of: EntryId, key: &str) -> Option<EntryId> {
        let entry = self.entries.get(&of)?;
        if let Some(own) = entry.own_child(key) {
            return Some(own);
        }
        for type_id in entry.own_types() {
            if let Some(inherited) = self.entries.get(&type_id).and_then(|t| t.own_child(key)) {
                return Some(inherited);
            }
        }
        None
    }

    // =========================================================================
    // BUILDER MUTATIONS
    // =========================================================================

    /// Add a child entry under a parent. Returns the new entry's id.
    pub fn add_entry(
        &mut self,
        parent: EntryId,
        name: impl Into<String>,
    ) -> Result<EntryId, LexiconError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(LexiconError::InvalidName(name));
        }
        let parent_entry = self
            .entries
            .get(&parent)
            .ok_or(LexiconError::UnknownEntry(parent))?;
        if parent_entry.own_child(&name).is_some() {
            return Err(LexiconError::DuplicateChild { parent, name });
        }

        let id = EntryId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        self.entries.insert(id, Entry::new(id, name.clone(), Some(parent)));
        if let Some(parent_entry) = self.entries.get_mut(&parent) {
            parent_entry.own_children.insert(name, id);
        }
        self.revision = self.revision.tick();
        Ok(id)
    }

    /// Associate a type entry with an entry, so the type's own children are
    /// offered through it.
    pub fn attach_type(&mut self, entry: EntryId, type_entry: EntryId) -> Result<(), LexiconError> {
        if !self.entries.contains_key(&type_entry) {
            return Err(LexiconError::UnknownEntry(type_entry));
        }
        let target = self
            .entries
            .get_mut(&entry)
            .ok_or(LexiconError::UnknownEntry(entry))?;
        target.own_types.insert(type_entry);
        self.revision = self.revision.tick();
        Ok(())
    }

    /// Set the human-readable description of an entry.
    pub fn set_description(
        &mut self,
        entry: EntryId,
        description: impl Into<String>,
    ) -> Result<(), LexiconError> {
        let target = self
            .entries
            .get_mut(&entry)
            .ok_or(LexiconError::UnknownEntry(entry))?;
        target.description = description.into();
        self.revision = self.revision.tick();
        Ok(())
    }

    /// Remove an entry and its entire subtree. The root cannot be removed.
    ///
    /// Type associations pointing at removed entries are dropped from the
    /// survivors so the combined child lookup never resolves into the void.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<(), LexiconError> {
        if id == self.root {
            return Err(LexiconError::UnknownEntry(id));
        }
        let entry = self.entries.get(&id).ok_or(LexiconError::UnknownEntry(id))?;
        let parent = entry.parent();
        let name = entry.name.clone();

        // Collect the subtree with a bounded worklist.
        let mut doomed = BTreeSet::new();
        let mut queue = vec![id];
        while let Some(current) = queue.pop() {
            if !doomed.insert(current) {
                continue;
            }
            if let Some(e) = self.entries.get(&current) {
                queue.extend(e.own_children.values().copied());
            }
        }

        for dead in &doomed {
            self.entries.remove(dead);
        }
        if let Some(parent) = parent {
            if let Some(parent_entry) = self.entries.get_mut(&parent) {
                parent_entry.own_children.remove(&name);
            }
        }
        for entry in self.entries.values_mut() {
            entry.own_types.retain(|t| !doomed.contains(t));
        }
        self.revision = self.revision.tick();
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
