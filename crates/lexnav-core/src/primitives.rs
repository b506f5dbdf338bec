//! # Naming Primitives
//!
//! Hardcoded constants and the entry-naming contract for the lexnav core.
//!
//! The character sets below are the validity contract the state machine
//! checks typed input against. They are compiled into the binary and are
//! immutable at runtime; the tree and the state machine consume the same
//! contract, so a name that was accepted at build time can always be typed.

/// Valid first character of an entry name.
///
/// Names open with a letter. Case is significant for ordering but not for
/// prefix filtering.
#[must_use]
pub fn is_valid_name_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Valid subsequent character of an entry name.
///
/// Letters, digits, and the connective marks that occur in lemmas
/// (hyphen, underscore, apostrophe).
#[must_use]
pub fn is_valid_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '\'')
}

/// Check a whole name against the contract.
///
/// A valid name is non-empty, within `MAX_NAME_LENGTH`, opens with a valid
/// first character and continues with valid subsequent characters.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_valid_name_start(first) => chars.all(is_valid_name_char),
        _ => false,
    }
}

/// Maximum length of an entry name, in characters.
///
/// Names longer than this are rejected by the lexicon builder.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum lineage depth for parent-chain walks.
///
/// All tree walks must be computationally bounded. A chain longer than
/// this indicates a corrupted parent link (cycle) and aborts the walk.
pub const MAX_LINEAGE_DEPTH: usize = 128;
