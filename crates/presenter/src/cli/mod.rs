//! Command-line interface module.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_presentation;
