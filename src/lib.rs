//! Galerie - Browser Image Gallery with Per-Image Notes
//!
//! A small gallery widget compiled to WebAssembly: thumbnails in the host
//! page become clickable, a random image is featured on load, and free-text
//! notes are persisted per image in the browser's localStorage.
//!
//! The core (catalog model, controller, notes semantics, random selection)
//! is target-independent and unit tested natively; all DOM access lives in
//! the `wasm` module behind `target_arch = "wasm32"`.

mod constants;
mod error;
mod gallery;
mod model;
mod notes;
mod random;

pub use constants::NOTES_PLACEHOLDER;
pub use error::GalleryError;
pub use gallery::{GalleryController, GallerySurface};
pub use model::{CatalogEntry, FeaturedState, HighlightState};
pub use notes::{MemoryBackend, NotesBackend, NotesStore};
pub use random::uniform_random_int;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(test)]
mod tests;
