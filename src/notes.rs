//! Per-image notes persistence.
//!
//! `NotesStore` implements the notes contract on top of a pluggable
//! key-value backend: notes are trimmed before storing, an empty note
//! deletes the key instead of storing an empty value, and a missing note
//! reads back as a fixed placeholder. The WASM build plugs in
//! localStorage; tests and native consumers use the in-memory backend.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::GalleryError;
use crate::constants::NOTES_PLACEHOLDER;

/// Durable key-value storage seam for notes.
///
/// Keys are image URLs, values are trimmed note text. All operations are
/// fallible because browser storage can be disabled or over quota; callers
/// treat a failed read as "note absent" and log-and-drop a failed write.
pub trait NotesBackend {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, GalleryError>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> Result<(), GalleryError>;

    /// Delete the value stored under `key`. No-op if absent.
    fn remove(&self, key: &str) -> Result<(), GalleryError>;
}

/// Notes store enforcing the trim/upsert/delete contract over a backend.
#[derive(Debug)]
pub struct NotesStore<B> {
    backend: B,
}

impl<B: NotesBackend> NotesStore<B> {
    /// Create a notes store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the note stored for `url`.
    ///
    /// Returns the placeholder text when no note is stored. Never fails:
    /// backend read errors degrade to "note absent".
    pub fn load(&self, url: &str) -> String {
        match self.backend.get(url) {
            Ok(Some(note)) => note,
            Ok(None) => NOTES_PLACEHOLDER.to_string(),
            Err(e) => {
                log::warn!("Failed to load note for {url}: {e}");
                NOTES_PLACEHOLDER.to_string()
            }
        }
    }

    /// Save the note for `url`, trimming whitespace first.
    ///
    /// A note that is empty after trimming deletes the stored entry rather
    /// than storing an empty value. The only mutator of the notes mapping.
    /// Backend failures are logged and dropped.
    pub fn save(&self, url: &str, raw_text: &str) {
        let trimmed = raw_text.trim();
        let result = if trimmed.is_empty() {
            self.backend.remove(url)
        } else {
            self.backend.set(url, trimmed)
        };

        if let Err(e) = result {
            log::warn!("Failed to save note for {url}: {e}");
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// In-memory backend for tests and native use.
///
/// Interior mutability keeps the trait object-safe with `&self` receivers,
/// matching the browser storage API it stands in for.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the backend holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl NotesBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, GalleryError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GalleryError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), GalleryError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
