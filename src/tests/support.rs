//! Test doubles and helpers shared by the gallery tests.

use std::cell::{Cell, RefCell};

use crate::error::GalleryError;
use crate::gallery::GallerySurface;
use crate::model::CatalogEntry;
use crate::notes::NotesBackend;

/// Initialize test logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small fixed catalog in page order.
pub fn catalog(urls: &[(&str, &str)]) -> Vec<CatalogEntry> {
    urls.iter()
        .map(|(url, description)| CatalogEntry::new(url, description))
        .collect()
}

/// Surface double recording everything the controller renders.
pub struct RecordingSurface {
    /// Currently rendered featured image as (url, description)
    pub featured: RefCell<Option<(String, String)>>,
    /// Number of featured updates, for idempotence checks
    pub show_calls: Cell<usize>,
    /// Per-entry highlight marker state
    pub highlights: RefCell<Vec<bool>>,
    /// Current text of the notes editing surface
    pub notes_text: RefCell<String>,
}

impl RecordingSurface {
    /// Create a surface for a catalog of `entry_count` entries.
    pub fn new(entry_count: usize) -> Self {
        Self {
            featured: RefCell::new(None),
            show_calls: Cell::new(0),
            highlights: RefCell::new(vec![false; entry_count]),
            notes_text: RefCell::new(String::new()),
        }
    }

    /// Indices currently carrying the highlight marker.
    pub fn highlighted_indices(&self) -> Vec<usize> {
        self.highlights
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect()
    }
}

impl GallerySurface for RecordingSurface {
    fn show_featured(&self, url: &str, description: &str) {
        *self.featured.borrow_mut() = Some((url.to_string(), description.to_string()));
        self.show_calls.set(self.show_calls.get() + 1);
    }

    fn featured_url(&self) -> Option<String> {
        self.featured.borrow().as_ref().map(|(url, _)| url.clone())
    }

    fn clear_highlights(&self) {
        self.highlights.borrow_mut().fill(false);
    }

    fn highlight(&self, index: usize) {
        if let Some(slot) = self.highlights.borrow_mut().get_mut(index) {
            *slot = true;
        }
    }

    fn notes_text(&self) -> String {
        self.notes_text.borrow().clone()
    }

    fn set_notes_text(&self, text: &str) {
        *self.notes_text.borrow_mut() = text.to_string();
    }
}

/// Backend double where every operation fails, as when storage is disabled.
pub struct FailingBackend;

impl NotesBackend for FailingBackend {
    fn get(&self, key: &str) -> Result<Option<String>, GalleryError> {
        Err(GalleryError::Storage(format!("read refused for {key}")))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), GalleryError> {
        Err(GalleryError::Storage(format!("write refused for {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), GalleryError> {
        Err(GalleryError::Storage(format!("remove refused for {key}")))
    }
}
