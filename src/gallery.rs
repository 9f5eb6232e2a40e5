//! Gallery controller: startup sequencing, thumbnail selection, and note
//! commits.
//!
//! The controller owns the catalog snapshot and the featured/highlight
//! state explicitly (no module-level globals) and drives a
//! [`GallerySurface`], the seam behind which the DOM lives. Everything here
//! runs single-threaded and event-driven: each operation is invoked by one
//! host event and runs to completion, so no synchronization is needed.

use crate::GalleryError;
use crate::model::{CatalogEntry, FeaturedState, HighlightState};
use crate::notes::{NotesBackend, NotesStore};
use crate::random::uniform_random_int;

/// Presentation seam for the gallery.
///
/// The WASM build implements this over the host page's elements; tests
/// implement it over plain fields. Methods take `&self` because the DOM is
/// interior-mutable by nature.
pub trait GallerySurface {
    /// Update the featured image display: source, alt text, and caption.
    /// Idempotent; a broken URL simply renders as a broken image.
    fn show_featured(&self, url: &str, description: &str);

    /// The URL the featured display currently renders, or `None` if no
    /// image has been shown yet. Read fresh from the rendered state, not
    /// from captured values.
    fn featured_url(&self) -> Option<String>;

    /// Remove the highlight marker from every catalog entry.
    fn clear_highlights(&self);

    /// Apply the highlight marker to the entry at `index`.
    fn highlight(&self, index: usize);

    /// Current text of the notes editing surface.
    fn notes_text(&self) -> String;

    /// Replace the text of the notes editing surface.
    fn set_notes_text(&self, text: &str);
}

/// Orchestrates the gallery over a surface and a notes store.
///
/// Constructed once per page session with the catalog snapshot taken at
/// load time; the catalog is never mutated afterwards.
pub struct GalleryController<S, B> {
    entries: Vec<CatalogEntry>,
    featured: Option<FeaturedState>,
    highlight: HighlightState,
    surface: S,
    notes: NotesStore<B>,
}

impl<S: GallerySurface, B: NotesBackend> GalleryController<S, B> {
    /// Create a controller over a fixed catalog snapshot.
    pub fn new(entries: Vec<CatalogEntry>, surface: S, notes: NotesStore<B>) -> Self {
        Self {
            entries,
            featured: None,
            highlight: None,
            surface,
            notes,
        }
    }

    /// The catalog snapshot, in page order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The currently featured image, if startup selection has run.
    pub fn featured(&self) -> Option<&FeaturedState> {
        self.featured.as_ref()
    }

    /// Index of the currently highlighted entry, if any.
    pub fn highlighted(&self) -> HighlightState {
        self.highlight
    }

    /// The presentation surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The notes store.
    pub fn notes(&self) -> &NotesStore<B> {
        &self.notes
    }

    /// Startup selection: feature one uniformly chosen entry and highlight
    /// it. Returns the chosen index.
    ///
    /// An empty catalog has no valid draw; it is reported as an error
    /// without touching the surface. The notes surface is left as the page
    /// delivered it until the first click.
    pub fn start(&mut self) -> Result<usize, GalleryError> {
        if self.entries.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }

        let index = uniform_random_int(0.0, self.entries.len() as f64) as usize;
        log::debug!(
            "Startup selection: entry {index} of {}",
            self.entries.len()
        );

        self.show(index);
        self.set_current(index);
        Ok(index)
    }

    /// Handle a thumbnail activation: move the highlight, swap the featured
    /// image, and load the entry's note into the notes surface.
    pub fn select(&mut self, index: usize) -> Result<(), GalleryError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(GalleryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })?;
        let url = entry.image_url.clone();

        self.set_current(index);
        self.show(index);

        let note = self.notes.load(&url);
        self.surface.set_notes_text(&note);
        Ok(())
    }

    /// Commit the notes surface's current text under the featured image.
    ///
    /// The key is read fresh from the rendered featured display so a commit
    /// always lands on whatever image is actually shown. Before any image
    /// has been featured there is nothing to key on; the commit is dropped.
    pub fn commit_notes(&self) {
        let Some(url) = self.surface.featured_url() else {
            log::debug!("Note commit with no featured image; ignoring");
            return;
        };

        self.notes.save(&url, &self.surface.notes_text());
    }

    /// Move the highlight marker to `index`.
    ///
    /// Clearing every entry first is equivalent to clearing the single
    /// previously-set one (at most one ever carries the marker) and must
    /// happen before the new marker is applied.
    fn set_current(&mut self, index: usize) {
        self.surface.clear_highlights();
        self.surface.highlight(index);
        self.highlight = Some(index);
    }

    /// Replace the featured display with the entry at `index`.
    fn show(&mut self, index: usize) {
        let entry = &self.entries[index];
        self.surface
            .show_featured(&entry.image_url, &entry.description);
        self.featured = Some(FeaturedState {
            url: entry.image_url.clone(),
            description: entry.description.clone(),
        });
    }
}
