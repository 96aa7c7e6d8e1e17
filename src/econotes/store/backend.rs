use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
///
/// The persistence model is a key-value store of whole snapshots: a slot holds
/// one serialized value and is always replaced as a unit. This trait handles
/// the "how" (filesystem vs memory), while [`super::note_store::NoteStore`]
/// handles the "what" (decoding, normalization, id allocation).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) so readers never see a
    /// partial snapshot.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Location of the slot. For FsBackend this is the real path, for
    /// MemBackend a virtual one.
    fn slot_path(&self, key: &str) -> PathBuf;
}
