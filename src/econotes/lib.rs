//! # EcoNotes Architecture
//!
//! EcoNotes is a **UI-agnostic note library** with an eco-task checklist: each
//! note carries a list of small sustainability actions, and completing them
//! earns points. The terminal client in `cli/` is one consumer of the library,
//! not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The store object: notes + current view filter            │
//! │  - Derived views: filtered notes, total points              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, toggle, list, points                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore over a StorageBackend slot                     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Suggestions (`suggest/`) sit beside the stack: they read draft text and
//! return candidate tasks, and never touch the store.
//!
//! ## Invariants
//!
//! - Note ids are unique and strictly increasing in creation order.
//! - `points == 10 × completed tasks` after every mutation.
//! - Completed tasks are always a subset of the note's attached tasks.
//! - Total points are derived on demand and never stored.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>` or plain values, never writes to stdout/stderr and
//! never exits the process. Diagnostics go through the `log` facade.
//!
//! ## Module Overview
//!
//! - [`api`]: The store facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Persistence slot abstraction and implementations
//! - [`model`]: Core data types (`Note`, `Category`, `NoteId`)
//! - [`suggest`]: Keyword-based eco-task suggestions
//! - [`draft`]: The note being composed and the "analyzing" flag
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod model;
pub mod store;
pub mod suggest;
