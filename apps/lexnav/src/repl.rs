//! # Browse REPL
//!
//! The line-oriented interactive loop: each input line is parsed into an
//! action, applied to the navigation state, and the resulting suggestion
//! list is rendered with the cursor and any transition error.
//!
//! The core never sees a terminal; this module owns the keystroke-to-
//! transition translation.

use lexnav_core::{LexiconHandle, NavCommand, NavState, Suggester};
use std::io::{BufRead, Write};

// =============================================================================
// LINE PARSING
// =============================================================================

/// One parsed REPL input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Apply navigation commands in order.
    Apply(Vec<NavCommand>),
    /// Render the suggestion list.
    List,
    /// Render suggestions grouped by source.
    Groups,
    /// Render the breadcrumb trail and focus description.
    Describe,
    /// Print command help.
    Help,
    /// Leave the loop.
    Quit,
    /// Blank line; nothing to do.
    Noop,
}

/// Parse one input line.
///
/// Bare words type their characters into the filter; everything else is a
/// command keyword. `cycle` controls how cursor moves wrap.
#[must_use]
pub fn parse_line(line: &str, cycle: bool) -> ReplAction {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return ReplAction::Noop;
    };

    match head {
        "quit" | "exit" | "q" => ReplAction::Quit,
        "help" | "?" => ReplAction::Help,
        "ls" => ReplAction::List,
        "groups" => ReplAction::Groups,
        "desc" | "where" => ReplAction::Describe,
        "next" | ">" => ReplAction::Apply(vec![NavCommand::SelectNext { cycle }]),
        "prev" | "<" => ReplAction::Apply(vec![NavCommand::SelectPrevious { cycle }]),
        "sel" => match words.next().and_then(|w| w.parse::<i64>().ok()) {
            Some(index) => ReplAction::Apply(vec![NavCommand::select(index, cycle)]),
            None => ReplAction::Help,
        },
        "enter" | "." => ReplAction::Apply(vec![NavCommand::Enter]),
        "up" | ".." | "bs" => ReplAction::Apply(vec![NavCommand::Backspace]),
        "clear" => ReplAction::Apply(vec![NavCommand::Replace(String::new())]),
        "update" => ReplAction::Apply(vec![NavCommand::Update]),
        "reset" => ReplAction::Apply(vec![NavCommand::reset()]),
        word => ReplAction::Apply(word.chars().map(NavCommand::Append).collect()),
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render the current suggestion list with the cursor marker.
#[must_use]
pub fn render_suggestions(handle: &LexiconHandle, state: &NavState) -> String {
    let mut out = String::new();
    handle.read(|lex| {
        for (index, &id) in state.suggestions().iter().enumerate() {
            let marker = if state.selected_index() == Some(index) {
                '>'
            } else {
                ' '
            };
            out.push_str(&format!("{marker} {:2}  {}\n", index, lex.name(id)));
        }
    });
    if state.suggestions().is_empty() {
        out.push_str("  (no suggestions)\n");
    }
    if let Some(error) = state.last_error() {
        out.push_str(&format!("! {error}\n"));
    }
    out
}

/// Render suggestions grouped by contributing source.
#[must_use]
pub fn render_groups(handle: &LexiconHandle, state: &NavState) -> String {
    let mut out = String::new();
    handle.read(|lex| {
        for group in Suggester::grouped(lex, state.focus()) {
            out.push_str(&format!("[{}]\n", lex.name(group.source)));
            for id in group.members {
                out.push_str(&format!("    {}\n", lex.name(id)));
            }
        }
    });
    out
}

/// Render the trail, focus description, and pending filter.
#[must_use]
pub fn render_describe(handle: &LexiconHandle, state: &NavState) -> String {
    let trail = state.describe(handle);
    let description = handle.read(|lex| {
        lex.entry(state.focus())
            .map(|e| e.description.clone())
            .unwrap_or_default()
    });
    if description.is_empty() {
        format!("{trail}\n")
    } else {
        format!("{trail}\n  {description}\n")
    }
}

const HELP: &str = "\
Commands:
  <word>     type characters into the filter
  up | ..    backspace (erase one char, or step back up)
  enter | .  descend into the selected suggestion
  next | >   move cursor forward        prev | <   move cursor back
  sel <n>    select index n             clear      drop the filter
  ls         list suggestions           groups     list by source
  desc       show trail + description   update     rebase onto the tree
  reset      restart at the focus       quit       leave
";

// =============================================================================
// THE LOOP
// =============================================================================

/// Run the interactive loop until `quit` or end of input.
///
/// Returns the final state so callers can inspect where the session ended.
pub fn run<R: BufRead, W: Write>(
    handle: &LexiconHandle,
    mut state: NavState,
    cycle: bool,
    input: R,
    out: &mut W,
) -> std::io::Result<NavState> {
    writeln!(out, "{}", state.describe(handle))?;
    write!(out, "{}", render_suggestions(handle, &state))?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line, cycle) {
            ReplAction::Quit => break,
            ReplAction::Noop => {}
            ReplAction::Help => write!(out, "{HELP}")?,
            ReplAction::List => write!(out, "{}", render_suggestions(handle, &state))?,
            ReplAction::Groups => write!(out, "{}", render_groups(handle, &state))?,
            ReplAction::Describe => write!(out, "{}", render_describe(handle, &state))?,
            ReplAction::Apply(commands) => {
                for command in &commands {
                    state = state.apply(handle, command);
                }
                tracing::debug!(
                    focus = %handle.read(|lex| lex.name(state.focus()).to_string()),
                    pending = %state.pending_input(),
                    "applied {} command(s)",
                    commands.len()
                );
                writeln!(out, "{}", state.describe(handle))?;
                write!(out, "{}", render_suggestions(handle, &state))?;
            }
        }
    }
    Ok(state)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lexnav_core::Lexicon;

    fn orchard_handle() -> (LexiconHandle, lexnav_core::EntryId) {
        let mut lex = Lexicon::new("lexicon").expect("root");
        let fruit = lex.add_entry(lex.root(), "fruit").expect("add");
        lex.add_entry(fruit, "apple").expect("add");
        lex.add_entry(fruit, "Banana").expect("add");
        (LexiconHandle::new(lex), fruit)
    }

    #[test]
    fn bare_word_types_each_character() {
        assert_eq!(
            parse_line("ap", true),
            ReplAction::Apply(vec![NavCommand::Append('a'), NavCommand::Append('p')])
        );
    }

    #[test]
    fn keywords_parse_to_commands() {
        assert_eq!(parse_line("quit", true), ReplAction::Quit);
        assert_eq!(
            parse_line(">", false),
            ReplAction::Apply(vec![NavCommand::SelectNext { cycle: false }])
        );
        assert_eq!(
            parse_line("sel -1", true),
            ReplAction::Apply(vec![NavCommand::select(-1, true)])
        );
        assert_eq!(parse_line("..", true), ReplAction::Apply(vec![NavCommand::Backspace]));
        assert_eq!(parse_line("", true), ReplAction::Noop);
        assert_eq!(parse_line("sel notanumber", true), ReplAction::Help);
    }

    #[test]
    fn render_marks_the_cursor() {
        let (handle, fruit) = orchard_handle();
        let state = NavState::open(&handle, fruit);
        let rendered = render_suggestions(&handle, &state);
        assert!(rendered.contains(">  0  Banana"));
        assert!(rendered.contains("   1  apple"));
    }

    #[test]
    fn render_reports_errors() {
        let (handle, fruit) = orchard_handle();
        let state = NavState::open(&handle, fruit).append(&handle, 'z');
        let rendered = render_suggestions(&handle, &state);
        assert!(rendered.contains("(no suggestions)"));
        assert!(rendered.contains("no children match input"));
    }

    #[test]
    fn loop_walks_a_session() {
        let (handle, fruit) = orchard_handle();
        let state = NavState::open(&handle, fruit);
        let script = b"ap\nenter\nquit\n" as &[u8];
        let mut out = Vec::new();

        let finished = run(&handle, state, true, script, &mut out).expect("run");

        assert_eq!(
            handle.read(|lex| lex.name(finished.focus()).to_string()),
            "apple"
        );
    }
}
