//! Data model for the gallery: catalog entries and the per-page view state.

/// One thumbnail-to-full-image association from the host page.
///
/// The catalog is a fixed, ordered snapshot taken once at startup; entries
/// are never mutated afterwards. The image URL doubles as the key into the
/// notes store. The entry's presentation anchor stays with the DOM wiring
/// layer so this type compiles on every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// URL of the full-size image (unique key into the notes store)
    pub image_url: String,
    /// Display description, used for the alt text and the caption
    pub description: String,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(image_url: &str, description: &str) -> Self {
        Self {
            image_url: image_url.to_string(),
            description: description.to_string(),
        }
    }
}

/// The image currently shown large, plus its caption text.
///
/// One per page session. Replacing it discards the prior value; no history
/// is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedState {
    /// URL of the featured image
    pub url: String,
    /// Description shown as alt text and caption
    pub description: String,
}

/// Which catalog entry currently carries the highlight marker.
///
/// `None` only before startup selection has run; afterwards exactly one
/// entry is highlighted at any time.
pub type HighlightState = Option<usize>;
