//! # CLI Layer
//!
//! One possible UI client for stockpile. This is the only place that knows
//! about the terminal: argument parsing, colors, exit codes and the log
//! subscriber.
//!
//! - `setup`: clap definitions and logging
//! - `commands`: dispatch from parsed arguments to the API
//! - `print`: turns `CmdResult`s into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
