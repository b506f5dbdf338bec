//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::lexfile::{load_lexicon, resolve_path};
use crate::repl;
use lexnav_core::{
    EntryId, Lexicon, LexiconError, LexiconHandle, NavState, Suggester,
};
use std::path::PathBuf;

/// Load the lexicon document and wrap it in the shared access handle.
fn load_handle(lexicon_path: &PathBuf) -> Result<LexiconHandle, LexiconError> {
    tracing::info!("loading lexicon from {:?}", lexicon_path);
    let lexicon = load_lexicon(lexicon_path)?;
    tracing::debug!(entries = lexicon.entry_count(), "lexicon loaded");
    Ok(LexiconHandle::new(lexicon))
}

/// Resolve an optional dotted path against the loaded tree.
fn resolve_start(handle: &LexiconHandle, path: Option<&str>) -> Result<EntryId, LexiconError> {
    match path {
        Some(path) => handle.read(|lex| resolve_path(lex, path)),
        None => Ok(handle.read(Lexicon::root)),
    }
}

// =============================================================================
// BROWSE COMMAND
// =============================================================================

/// Run the interactive browse REPL on stdin/stdout.
pub fn cmd_browse(
    lexicon_path: &PathBuf,
    start: Option<&str>,
    cycle: bool,
) -> Result<(), LexiconError> {
    let handle = load_handle(lexicon_path)?;
    let focus = resolve_start(&handle, start)?;
    let state = NavState::open(&handle, focus);

    println!("Browsing {:?} (type `help` for commands)", lexicon_path);
    println!();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let finished = repl::run(&handle, state, cycle, stdin.lock(), &mut stdout)
        .map_err(|e| LexiconError::Io(format!("terminal I/O: {}", e)))?;

    println!();
    println!("Left session at: {}", finished.describe(&handle));
    Ok(())
}

// =============================================================================
// SUGGEST COMMAND
// =============================================================================

/// One-shot suggestion query: resolve the focus, apply the input text,
/// print the filtered suggestions.
pub fn cmd_suggest(
    lexicon_path: &PathBuf,
    path: Option<&str>,
    input: &str,
    json_mode: bool,
) -> Result<(), LexiconError> {
    let handle = load_handle(lexicon_path)?;
    let focus = resolve_start(&handle, path)?;
    let state = NavState::open(&handle, focus).replace(&handle, input);

    if json_mode {
        let suggestions: Vec<_> = handle.read(|lex| {
            state
                .suggestions()
                .iter()
                .map(|&id| {
                    serde_json::json!({
                        "id": id.0,
                        "name": lex.name(id),
                    })
                })
                .collect()
        });
        let output = serde_json::json!({
            "focus": handle.read(|lex| lex.name(state.focus()).to_string()),
            "input": state.pending_input(),
            "suggestions": suggestions,
            "selected": state.selected_index(),
            "error": state.last_error().map(|e| e.to_string()),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", state.describe(&handle));
    print!("{}", repl::render_suggestions(&handle, &state));
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Describe an entry: lineage, description, types, offered children.
pub fn cmd_show(
    lexicon_path: &PathBuf,
    path: Option<&str>,
    json_mode: bool,
) -> Result<(), LexiconError> {
    let handle = load_handle(lexicon_path)?;
    let focus = resolve_start(&handle, path)?;

    handle.read(|lex| {
        let trail: Vec<String> = lex
            .lineage(focus)
            .iter()
            .map(|&id| lex.name(id).to_string())
            .collect();
        let types: Vec<String> = lex
            .entry(focus)
            .map(|e| e.own_types().map(|t| lex.name(t).to_string()).collect())
            .unwrap_or_default();
        let offered: Vec<String> = Suggester::offered(lex, focus)
            .iter()
            .map(|&id| lex.name(id).to_string())
            .collect();
        let description = lex
            .entry(focus)
            .map(|e| e.description.clone())
            .unwrap_or_default();

        if json_mode {
            let output = serde_json::json!({
                "id": focus.0,
                "name": lex.name(focus),
                "description": description,
                "lineage": trail,
                "types": types,
                "offered": offered,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output).unwrap_or_default()
            );
            return;
        }

        println!("Entry:   {}", lex.name(focus));
        println!("Trail:   {}", trail.join(" > "));
        if !description.is_empty() {
            println!("About:   {}", description);
        }
        if !types.is_empty() {
            println!("Types:   {}", types.join(", "));
        }
        println!("Offers:  {}", if offered.is_empty() { "(nothing)".to_string() } else { offered.join(", ") });
    });
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Load and validate a lexicon document, printing its vital counts.
pub fn cmd_check(lexicon_path: &PathBuf, json_mode: bool) -> Result<(), LexiconError> {
    let handle = load_handle(lexicon_path)?;

    handle.read(|lex| {
        let entry_count = lex.entry_count();
        let typed_count = lex.entries().filter(|e| e.own_types().count() > 0).count();
        let leaf_count = lex.entries().filter(|e| e.own_child_count() == 0).count();

        if json_mode {
            let output = serde_json::json!({
                "document": lexicon_path.to_string_lossy(),
                "root": lex.name(lex.root()),
                "entries": entry_count,
                "typed_entries": typed_count,
                "leaves": leaf_count,
                "revision": lex.revision().value(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output).unwrap_or_default()
            );
            return;
        }

        println!("Lexicon Document Check");
        println!("======================");
        println!("Document: {:?}", lexicon_path);
        println!();
        println!("Root:          {}", lex.name(lex.root()));
        println!("Entries:       {}", entry_count);
        println!("Typed entries: {}", typed_count);
        println!("Leaves:        {}", leaf_count);
    });
    Ok(())
}
