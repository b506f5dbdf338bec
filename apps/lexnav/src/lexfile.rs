//! # Lexicon Documents
//!
//! JSON loading for lexicon trees.
//!
//! A document is a nested entry tree; type associations reference other
//! entries by dotted path from the root (e.g. `"grammar.noun"`) and are
//! resolved in a second pass once every entry exists.
//!
//! ```json
//! {
//!   "name": "lexicon",
//!   "children": [
//!     { "name": "noun", "children": [ { "name": "plural" } ] },
//!     { "name": "word", "types": ["noun"] }
//!   ]
//! }
//! ```

use lexnav_core::{EntryId, Lexicon, LexiconError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Maximum lexicon document size (10 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

// =============================================================================
// DOCUMENT SCHEMA
// =============================================================================

/// One entry in a lexicon document.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDoc {
    /// Lemma name; validated by the core naming contract on build.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Nested own children.
    #[serde(default)]
    pub children: Vec<EntryDoc>,
    /// Dotted paths (from the root) of associated type entries.
    #[serde(default)]
    pub types: Vec<String>,
}

// =============================================================================
// LOADING
// =============================================================================

/// Validate a document path and read it within the size limit.
fn read_document(path: &Path) -> Result<Vec<u8>, LexiconError> {
    let canonical = path
        .canonicalize()
        .map_err(|e| LexiconError::Io(format!("invalid lexicon path '{}': {}", path.display(), e)))?;
    if !canonical.is_file() {
        return Err(LexiconError::Io(format!(
            "path '{}' is not a regular file",
            path.display()
        )));
    }
    let metadata = std::fs::metadata(&canonical)
        .map_err(|e| LexiconError::Io(format!("cannot read file metadata: {}", e)))?;
    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(LexiconError::Parse(format!(
            "document size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_DOCUMENT_SIZE
        )));
    }
    std::fs::read(&canonical).map_err(|e| LexiconError::Io(format!("read document: {}", e)))
}

/// Load a lexicon from a JSON document on disk.
pub fn load_lexicon(path: &PathBuf) -> Result<Lexicon, LexiconError> {
    let bytes = read_document(path)?;
    let doc: EntryDoc =
        serde_json::from_slice(&bytes).map_err(|e| LexiconError::Parse(e.to_string()))?;
    build_lexicon(&doc)
}

/// Build a core lexicon from a parsed document.
///
/// First pass creates every entry depth-first; second pass resolves type
/// paths and attaches them, so forward references are fine.
pub fn build_lexicon(doc: &EntryDoc) -> Result<Lexicon, LexiconError> {
    let mut lex = Lexicon::new(doc.name.as_str())?;
    if !doc.description.is_empty() {
        lex.set_description(lex.root(), doc.description.as_str())?;
    }

    let mut pending_types: Vec<(EntryId, String)> = Vec::new();
    let root = lex.root();
    for child in &doc.children {
        build_subtree(&mut lex, root, child, &mut pending_types)?;
    }
    for (entry, path) in pending_types {
        let type_entry = resolve_path(&lex, &path)?;
        lex.attach_type(entry, type_entry)?;
    }
    Ok(lex)
}

fn build_subtree(
    lex: &mut Lexicon,
    parent: EntryId,
    doc: &EntryDoc,
    pending_types: &mut Vec<(EntryId, String)>,
) -> Result<(), LexiconError> {
    let id = lex.add_entry(parent, doc.name.as_str())?;
    if !doc.description.is_empty() {
        lex.set_description(id, doc.description.as_str())?;
    }
    for path in &doc.types {
        pending_types.push((id, path.clone()));
    }
    for child in &doc.children {
        build_subtree(lex, id, child, pending_types)?;
    }
    Ok(())
}

/// Resolve a dotted name trail from the root through own children.
///
/// An empty path names the root itself.
pub fn resolve_path(lex: &Lexicon, path: &str) -> Result<EntryId, LexiconError> {
    let mut current = lex.root();
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        current = lex
            .entry(current)
            .and_then(|e| e.own_child(segment))
            .ok_or_else(|| LexiconError::UnresolvedPath(path.to_string()))?;
    }
    Ok(current)
}

// =============================================================================
// TESTS
// =============================================================================
