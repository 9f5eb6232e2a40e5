//! WASM glue for the gallery.
//!
//! Scans the host page for the thumbnail catalog, binds the controller to
//! the page's elements, wires the click and blur handlers, and persists
//! notes in localStorage. Uses web_sys to interact with browser APIs.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlElement, HtmlImageElement, Storage};

use crate::GalleryError;
use crate::constants::{
    CARD_BODY_SELECTOR, CARD_SELECTOR, FEATURED_CAPTION_SELECTOR, FEATURED_IMAGE_SELECTOR,
    HIGHLIGHT_CLASSES, NOTES_FIELD_ID, THUMBNAIL_LINKS_SELECTOR,
};
use crate::gallery::{GalleryController, GallerySurface};
use crate::model::CatalogEntry;
use crate::notes::{NotesBackend, NotesStore};

type DomController = GalleryController<DomSurface, LocalStorageBackend>;

/// Notes backend over the browser's origin-scoped localStorage.
///
/// Storage can be unavailable (disabled by the user, private browsing
/// modes); the gallery still runs then, it just stops persisting notes.
pub struct LocalStorageBackend {
    storage: Option<Storage>,
}

impl LocalStorageBackend {
    /// Resolve localStorage from the window, if the browser exposes it.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage access error: {e:?}");
                None
            }
        });

        if storage.is_none() {
            log::warn!("localStorage not available; notes will not persist");
        }

        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, GalleryError> {
        self.storage
            .as_ref()
            .ok_or_else(|| GalleryError::Storage("localStorage not available".to_string()))
    }
}

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, GalleryError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| GalleryError::Storage(format!("failed to read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GalleryError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| GalleryError::Storage(format!("failed to write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), GalleryError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| GalleryError::Storage(format!("failed to remove {key}: {e:?}")))
    }
}

/// Presentation surface over the host page's elements.
///
/// Holds the featured image, its caption, the notes field, and the card
/// bodies carrying the highlight marker, resolved once at startup. Card
/// bodies are kept parallel to the catalog; an entry whose card body is
/// missing simply never shows a highlight.
pub struct DomSurface {
    full_image: HtmlImageElement,
    caption: Element,
    notes_field: HtmlElement,
    card_bodies: Vec<Option<Element>>,
}

impl DomSurface {
    /// Resolve the featured display and notes field from the document.
    ///
    /// Missing elements are a fatal setup precondition; the page is
    /// malformed and no recovery is attempted.
    fn from_document(
        document: &Document,
        card_bodies: Vec<Option<Element>>,
    ) -> Result<Self, GalleryError> {
        let full_image = query_required(document, FEATURED_IMAGE_SELECTOR)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| missing(FEATURED_IMAGE_SELECTOR))?;

        let caption = query_required(document, FEATURED_CAPTION_SELECTOR)?;

        let notes_field = document
            .get_element_by_id(NOTES_FIELD_ID)
            .ok_or_else(|| missing(NOTES_FIELD_ID))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| missing(NOTES_FIELD_ID))?;

        Ok(Self {
            full_image,
            caption,
            notes_field,
            card_bodies,
        })
    }

    fn notes_field(&self) -> &HtmlElement {
        &self.notes_field
    }
}

impl GallerySurface for DomSurface {
    fn show_featured(&self, url: &str, description: &str) {
        self.full_image.set_src(url);
        self.full_image.set_alt(description);
        self.caption.set_text_content(Some(description));
    }

    fn featured_url(&self) -> Option<String> {
        // src is empty until the first show; afterwards the browser reports
        // the resolved absolute URL, which is also what anchors report as
        // href, so note keys always agree.
        let src = self.full_image.src();
        if src.is_empty() { None } else { Some(src) }
    }

    fn clear_highlights(&self) {
        for body in self.card_bodies.iter().flatten() {
            let classes = body.class_list();
            for class in HIGHLIGHT_CLASSES {
                let _ = classes.remove_1(class);
            }
        }
    }

    fn highlight(&self, index: usize) {
        if let Some(Some(body)) = self.card_bodies.get(index) {
            let classes = body.class_list();
            for class in HIGHLIGHT_CLASSES {
                let _ = classes.add_1(class);
            }
        }
    }

    fn notes_text(&self) -> String {
        self.notes_field.inner_text()
    }

    fn set_notes_text(&self, text: &str) {
        self.notes_field.set_inner_text(text);
    }
}

fn missing(selector: &str) -> GalleryError {
    GalleryError::MissingElement {
        selector: selector.to_string(),
    }
}

fn query_required(document: &Document, selector: &str) -> Result<Element, GalleryError> {
    document
        .query_selector(selector)
        .map_err(|_| missing(selector))?
        .ok_or_else(|| missing(selector))
}

/// Scan the thumbnail container into a catalog snapshot.
///
/// Returns the entries together with the parallel anchor and card-body
/// lists. Anchors that do not wrap an image are malformed and skipped with
/// a warning; an empty container yields empty lists.
fn enumerate_catalog(
    document: &Document,
) -> Result<(Vec<CatalogEntry>, Vec<HtmlAnchorElement>, Vec<Option<Element>>), GalleryError> {
    let nodes = document
        .query_selector_all(THUMBNAIL_LINKS_SELECTOR)
        .map_err(|_| missing(THUMBNAIL_LINKS_SELECTOR))?;

    let mut entries = Vec::new();
    let mut anchors = Vec::new();
    let mut card_bodies = Vec::new();

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(anchor) = node.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };

        let image = anchor
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok());
        let Some(image) = image else {
            log::warn!("Thumbnail anchor {} wraps no image; skipping", anchor.href());
            continue;
        };

        let card_body = anchor
            .closest(CARD_SELECTOR)
            .ok()
            .flatten()
            .and_then(|card| card.query_selector(CARD_BODY_SELECTOR).ok().flatten());
        if card_body.is_none() {
            log::warn!("No card body for thumbnail {}; it will not highlight", anchor.href());
        }

        entries.push(CatalogEntry::new(&anchor.href(), &image.alt()));
        anchors.push(anchor);
        card_bodies.push(card_body);
    }

    Ok((entries, anchors, card_bodies))
}

/// Intercept clicks on every thumbnail anchor.
///
/// Each handler suppresses the anchor's navigation and routes the entry
/// through the controller. Closures are leaked to keep them alive for the
/// page session.
fn prepare_links(controller: &Rc<RefCell<DomController>>, anchors: &[HtmlAnchorElement]) {
    for (index, anchor) in anchors.iter().enumerate() {
        let controller = Rc::clone(controller);
        let onclick = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            if let Err(e) = controller.borrow_mut().select(index) {
                log::error!("Thumbnail selection failed: {e}");
            }
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) =
            anchor.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        {
            log::error!("Failed to attach click handler: {e:?}");
        }
        onclick.forget(); // Leak the closure to keep it alive
    }
}

/// Commit notes when the editing surface loses focus.
fn prepare_notes_commit(controller: &Rc<RefCell<DomController>>) {
    let notes_field = controller.borrow().surface().notes_field().clone();

    let controller = Rc::clone(controller);
    let onblur = Closure::wrap(Box::new(move |_event: Event| {
        controller.borrow().commit_notes();
    }) as Box<dyn FnMut(Event)>);

    if let Err(e) =
        notes_field.add_event_listener_with_callback("blur", onblur.as_ref().unchecked_ref())
    {
        log::error!("Failed to attach blur handler: {e:?}");
    }
    onblur.forget(); // Leak the closure to keep it alive
}

fn run(document: &Document) -> Result<(), GalleryError> {
    let (entries, anchors, card_bodies) = enumerate_catalog(document)?;
    log::info!("Found {} thumbnail entries", entries.len());

    let surface = DomSurface::from_document(document, card_bodies)?;
    let notes = NotesStore::new(LocalStorageBackend::new());

    let mut controller = GalleryController::new(entries, surface, notes);
    controller.start()?;

    let controller = Rc::new(RefCell::new(controller));
    prepare_links(&controller, &anchors);
    prepare_notes_commit(&controller);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Galerie starting...");

    let document = web_sys::window().and_then(|window| window.document());
    let Some(document) = document else {
        log::error!("No document available; gallery not started");
        return;
    };

    if let Err(e) = run(&document) {
        log::error!("Gallery setup failed: {e}");
    }
}
