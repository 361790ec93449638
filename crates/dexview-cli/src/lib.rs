// NOTE: Architecture decision - the CLI is a thin presentation layer.
// Parsing and normalizing exports lives in dexview-source, and every
// filtering/navigation rule lives in dexview-engine so it can be tested
// without a terminal. Handlers here only wire arguments to the engine
// and choose how to print the result (plain text, JSON, or the TUI).

pub mod args;
pub mod commands;
pub mod config;
pub mod context;
pub mod handlers;
pub mod output;
pub mod types;
pub mod ui;

pub use args::{Cli, Commands, FilterArgs};
pub use commands::run;
