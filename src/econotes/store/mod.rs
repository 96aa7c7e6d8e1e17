//! # Storage Layer
//!
//! Notes are persisted as a single snapshot: the whole note sequence is
//! serialized to one JSON array and stored under one key. There is no partial
//! update format and no migration; the last writer wins.
//!
//! ## Load Policy
//!
//! Loading is fail-soft. An absent slot, an I/O error or a parse failure all
//! produce an empty store (logged at `warn`). Records that parse are
//! normalized: completion entries that are not attached tasks are dropped and
//! points are recomputed, so the invariants hold from the first read.
//!
//! ## Write Policy
//!
//! Every mutation writes the full sequence back. Writes are fire-and-forget:
//! a failure is logged and the in-memory state stays authoritative until the
//! next successful write. [`note_store::NoteStore::flush`] is available when
//! the caller wants the error.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per slot, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── econotes_data.json   # The note snapshot (JSON array)
//! └── config.json          # Optional configuration
//! ```
//!
//! Record format:
//!
//! ```json
//! {"id": 1718000000000, "title": "Bike", "content": "I will bike to work",
//!  "category": "Eco", "ecoTasks": ["Walk or bike instead of driving"],
//!  "completedEcoTasks": [], "points": 0}
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use note_store::NoteStore;
