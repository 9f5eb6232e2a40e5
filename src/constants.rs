//! Global constants for the gallery widget

/// Selector for the thumbnail anchors inside the host page.
pub const THUMBNAIL_LINKS_SELECTOR: &str = "#thumbnails a";

/// Selector for the featured image element.
pub const FEATURED_IMAGE_SELECTOR: &str = "figure img";

/// Selector for the featured image's caption element.
pub const FEATURED_CAPTION_SELECTOR: &str = "figure figcaption";

/// Element id of the notes editing surface.
pub const NOTES_FIELD_ID: &str = "notes";

/// Selector for the card ancestor of a thumbnail anchor.
pub const CARD_SELECTOR: &str = ".card";

/// Selector for the card body that carries the highlight marker.
pub const CARD_BODY_SELECTOR: &str = ".card-body";

/// CSS classes marking the currently selected thumbnail's card body.
pub const HIGHLIGHT_CLASSES: [&str; 2] = ["bg-dark", "text-white"];

/// Text shown in the notes field when no note is stored for an image.
pub const NOTES_PLACEHOLDER: &str = "Enter your notes here!";
