//! # Command Module
//!
//! A tagged-command surface over the navigation transitions.
//!
//! Presentation layers that translate keystrokes into transitions can
//! build [`NavCommand`] values and feed them through [`NavState::apply`]
//! instead of calling the individual transition methods. Both surfaces are
//! equivalent; `apply` is a pure dispatch.

use crate::handle::LexiconHandle;
use crate::state::NavState;
use crate::types::EntryId;

/// Navigation transitions as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Append one typed character to the pending filter.
    Append(char),
    /// Swap the whole pending filter.
    Replace(String),
    /// Erase one character, or step back up the trail.
    Backspace,
    /// Move the cursor one suggestion back.
    SelectPrevious { cycle: bool },
    /// Move the cursor one suggestion forward.
    SelectNext { cycle: bool },
    /// Set the cursor to an explicit index.
    Select { index: i64, cycle: bool },
    /// Descend into the selected suggestion.
    Enter,
    /// Re-synchronize against the (possibly mutated) tree.
    Update,
    /// Discard the session and open a fresh one.
    Reset {
        to: Option<EntryId>,
        selecting: Option<EntryId>,
    },
}

impl NavCommand {
    /// Select helper.
    #[must_use]
    pub fn select(index: i64, cycle: bool) -> Self {
        Self::Select { index, cycle }
    }

    /// Reset-in-place helper.
    #[must_use]
    pub fn reset() -> Self {
        Self::Reset {
            to: None,
            selecting: None,
        }
    }
}

impl NavState {
    /// Apply a command, producing the successor state.
    #[must_use]
    pub fn apply(&self, handle: &LexiconHandle, command: &NavCommand) -> Self {
        match command {
            NavCommand::Append(c) => self.append(handle, *c),
            NavCommand::Replace(input) => self.replace(handle, input),
            NavCommand::Backspace => self.backspace(handle),
            NavCommand::SelectPrevious { cycle } => self.select_previous(*cycle),
            NavCommand::SelectNext { cycle } => self.select_next(*cycle),
            NavCommand::Select { index, cycle } => self.select(*index, *cycle),
            NavCommand::Enter => self.enter(handle),
            NavCommand::Update => self.update(handle),
            NavCommand::Reset { to, selecting } => self.reset(handle, *to, *selecting),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
