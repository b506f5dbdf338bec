//! # lexnav application library
//!
//! Modules behind the `lexnav` binary: CLI definitions, lexicon document
//! loading, the browse REPL, and configuration.

pub mod cli;
pub mod config;
pub mod lexfile;
pub mod repl;
