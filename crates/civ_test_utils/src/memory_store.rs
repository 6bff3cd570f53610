//! In-memory save store.

use std::collections::HashMap;

use civ_core::error::Result;
use civ_core::persistence::{decode_session, encode_session, LoadOutcome, SaveStore};
use civ_core::session::GameSessionState;

/// Save slots held in memory, encoded exactly as the file store encodes
/// them.
#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    slots: HashMap<String, Vec<u8>>,
    /// Number of successful saves.
    pub saves: usize,
}

impl MemorySaveStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw bytes into a slot, e.g. to simulate a corrupt save.
    pub fn insert_raw(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.slots.insert(name.into(), bytes.into());
    }

    /// Raw bytes of a slot.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&[u8]> {
        self.slots.get(name).map(Vec::as_slice)
    }
}

impl SaveStore for MemorySaveStore {
    fn exists(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    fn load(&self, name: &str) -> LoadOutcome {
        match self.slots.get(name) {
            None => LoadOutcome::NotFound,
            Some(bytes) => match decode_session(bytes) {
                Ok(session) => LoadOutcome::Loaded(Box::new(session)),
                Err(e) => LoadOutcome::Corrupt(e.to_string()),
            },
        }
    }

    fn save(&mut self, name: &str, session: &GameSessionState) -> Result<()> {
        let bytes = encode_session(session)?;
        self.slots.insert(name.to_string(), bytes);
        self.saves += 1;
        Ok(())
    }
}
