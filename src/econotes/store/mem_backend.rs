use super::backend::StorageBackend;
use crate::error::{EcoError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since econotes is single-threaded.
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            writes: RefCell::new(0),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a raw value, e.g. to simulate corrupted data.
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(EcoError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_reads_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read_slot("missing").unwrap(), None);
    }

    #[test]
    fn write_replaces_whole_value() {
        let backend = MemBackend::new().with_slot("k", "old");
        backend.write_slot("k", "new").unwrap();
        assert_eq!(backend.read_slot("k").unwrap(), Some("new".to_string()));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_previous_value() {
        let backend = MemBackend::new().with_slot("k", "old");
        backend.set_simulate_write_error(true);
        assert!(backend.write_slot("k", "new").is_err());
        assert_eq!(backend.read_slot("k").unwrap(), Some("old".to_string()));
        assert_eq!(backend.write_count(), 0);
    }
}
