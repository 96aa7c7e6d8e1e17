//! # EcoNotes CLI
//!
//! The binary is intentionally thin: the terminal client lives in `cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: context wiring, logging setup and dispatch to the API
//! - `cli/print.rs`: terminal rendering of `CmdResult`s and notes
//!
//! Data lives in the OS data directory for `econotes`, or in `$ECONOTES_HOME`
//! when set. Logging goes to stderr through `env_logger`; `RUST_LOG` overrides
//! the default level.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
