//! Error types for gallery setup and storage access.

use thiserror::Error;

/// Errors that can occur while wiring up or driving the gallery.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The thumbnail container held no usable entries, so there is nothing
    /// to feature or select.
    #[error("gallery catalog is empty")]
    EmptyCatalog,

    /// A selection referred to an entry index outside the catalog.
    #[error("catalog index {index} out of range (catalog has {len} entries)")]
    IndexOutOfRange {
        /// The requested entry index
        index: usize,
        /// Number of entries in the catalog
        len: usize,
    },

    /// A required page element was not found. The surrounding markup is
    /// malformed; no recovery is attempted.
    #[error("required element not found: {selector}")]
    MissingElement {
        /// The selector or element id that failed to resolve
        selector: String,
    },

    /// Durable storage could not be accessed (disabled, quota exceeded, ...).
    #[error("storage error: {0}")]
    Storage(String),
}
