//! Saving and loading game sessions.
//!
//! Saves are bincode-encoded envelopes carrying [`SAVE_VERSION`] ahead of
//! the session body. A save written by a different version is treated as
//! corrupt, the same as undecodable bytes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bincode::Options;
use serde::Serialize;

use crate::error::{GameError, Result};
use crate::session::GameSessionState;

/// Save file format version.
pub const SAVE_VERSION: u32 = 1;

/// Largest save accepted when decoding. Guards against allocating for a
/// garbage length prefix.
const MAX_SAVE_BYTES: u64 = 64 * 1024 * 1024;

/// Result of reading a save slot.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The save decoded cleanly.
    Loaded(Box<GameSessionState>),
    /// No save under that name.
    NotFound,
    /// The save exists but cannot be used.
    Corrupt(String),
}

/// Named save slots.
pub trait SaveStore {
    /// Whether a save with this name exists.
    fn exists(&self, name: &str) -> bool;

    /// Read a save.
    fn load(&self, name: &str) -> LoadOutcome;

    /// Write a save, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Save`] if the save cannot be written.
    fn save(&mut self, name: &str, session: &GameSessionState) -> Result<()>;
}

#[derive(Serialize)]
struct SaveEnvelope<'a> {
    version: u32,
    session: &'a GameSessionState,
}

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_SAVE_BYTES)
}

/// Encode a session into save bytes.
///
/// # Errors
///
/// Returns [`GameError::InvalidState`] if the session cannot be serialized.
pub fn encode_session(session: &GameSessionState) -> Result<Vec<u8>> {
    let envelope = SaveEnvelope {
        version: SAVE_VERSION,
        session,
    };
    codec()
        .serialize(&envelope)
        .map_err(|e| GameError::InvalidState(format!("Failed to serialize session: {e}")))
}

/// Decode save bytes into a session.
///
/// Transients are not set.
///
/// # Errors
///
/// Returns [`GameError::InvalidState`] on a version mismatch or undecodable
/// bytes.
pub fn decode_session(bytes: &[u8]) -> Result<GameSessionState> {
    // Envelope fields are laid out in order, so the version can be checked
    // before the body is parsed.
    let mut reader = bytes;
    let version: u32 = codec()
        .deserialize_from(&mut reader)
        .map_err(|e| GameError::InvalidState(format!("Failed to read save header: {e}")))?;

    if version != SAVE_VERSION {
        return Err(GameError::InvalidState(format!(
            "Save version mismatch: expected {SAVE_VERSION}, got {version}"
        )));
    }

    codec()
        .deserialize_from(&mut reader)
        .map_err(|e| GameError::InvalidState(format!("Failed to deserialize session: {e}")))
}

/// Saves stored as `<dir>/<name>.sav`.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    dir: PathBuf,
}

impl FileSaveStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path of a save slot.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.sav"))
    }
}

impl SaveStore for FileSaveStore {
    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    fn load(&self, name: &str) -> LoadOutcome {
        let path = self.path_for(name);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::NotFound,
            Err(e) => return LoadOutcome::Corrupt(format!("{}: {e}", path.display())),
        };

        match decode_session(&bytes) {
            Ok(session) => LoadOutcome::Loaded(Box::new(session)),
            Err(e) => LoadOutcome::Corrupt(e.to_string()),
        }
    }

    fn save(&mut self, name: &str, session: &GameSessionState) -> Result<()> {
        let to_error = |message: String| GameError::Save {
            name: name.to_string(),
            message,
        };

        let bytes = encode_session(session).map_err(|e| to_error(e.to_string()))?;
        std::fs::create_dir_all(&self.dir).map_err(|e| to_error(e.to_string()))?;

        // Write then rename so a crash never leaves a half-written save.
        let path = self.path_for(name);
        let staging = path.with_extension("sav.tmp");
        std::fs::write(&staging, bytes).map_err(|e| to_error(e.to_string()))?;
        std::fs::rename(&staging, &path).map_err(|e| to_error(e.to_string()))?;

        tracing::debug!("Saved game '{}' to {}", name, path.display());
        Ok(())
    }
}
