//! Host gallery discovery
//!
//! One pass over the DOM at attach time. Entries added to the page later
//! are not observed; the item list is fixed for the viewer's lifetime.

use tracing::debug;
use vitrine_core::{GalleryEntry, MediaItem};
use wasm_bindgen::JsCast;

/// Scan `document` for gallery entries matching `selector`.
///
/// Returns the classified items together with the elements they came from,
/// index-aligned, so the caller can wire one click target per item. Entries
/// with no usable media are dropped from both lists without complaint.
pub fn scan_gallery(
    document: &web_sys::Document,
    selector: &str,
) -> (Vec<MediaItem>, Vec<web_sys::Element>) {
    let mut items = Vec::new();
    let mut elements = Vec::new();

    let Ok(nodes) = document.query_selector_all(selector) else {
        debug!(selector, "gallery selector did not parse");
        return (items, elements);
    };

    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if let Some(item) = MediaItem::from_entry(&read_entry(&element)) {
            items.push(item);
            elements.push(element);
        }
    }

    debug!(count = items.len(), "gallery scan complete");
    (items, elements)
}

/// Pull the raw media references out of one gallery element.
fn read_entry(element: &web_sys::Element) -> GalleryEntry {
    let image = element
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlImageElement>().ok())
        .map(|img| (img.src(), img.alt()));

    let video = element
        .query_selector("video")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlVideoElement>().ok())
        .and_then(|video| resolve_video_source(&video));

    GalleryEntry { image, video }
}

/// A video's source is its own `src`, or the first `<source>` child's.
/// Both come back resolved against the page URL, like `HTMLImageElement.src`.
fn resolve_video_source(video: &web_sys::HtmlVideoElement) -> Option<String> {
    let own = video.src();
    if !own.is_empty() {
        return Some(own);
    }
    video
        .query_selector("source")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlSourceElement>().ok())
        .map(|source| source.src())
        .filter(|src| !src.is_empty())
}
