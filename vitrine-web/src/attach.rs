//! Bootstrap: wiring the lightbox onto a host page
//!
//! `attach` is the one place errors surface instead of degrading silently.
//! A page that asks for the viewer and doesn't get one deserves to hear
//! about it; once the viewer runs, everything degrades quietly.

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::LightboxRoot;

/// Selector host pages get when they don't configure one
pub const DEFAULT_GALLERY_SELECTOR: &str = ".gallery-item";

/// Host-page configuration for [`attach`]
#[derive(Clone, Debug, PartialEq)]
pub struct AttachOptions {
    /// CSS selector for the gallery entries
    pub gallery_selector: String,
    /// `id` given to the overlay container appended to `<body>`
    pub mount_id: String,
}

impl Default for AttachOptions {
    fn default() -> Self {
        Self {
            gallery_selector: DEFAULT_GALLERY_SELECTOR.to_string(),
            mount_id: "vitrine-lightbox".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error("no window object; not running in a browser")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body to mount into")]
    NoBody,
    #[error("could not register the readiness listener")]
    ListenerFailed,
    #[error("mount failed: {0}")]
    Mount(String),
}

/// Wire a viewer onto the current page.
///
/// Waits for `DOMContentLoaded` when the document is still loading, so the
/// gallery markup exists before discovery runs. Each call constructs an
/// independent viewer instance; nothing is stored globally. A page with no
/// matching gallery entries still attaches, the viewer just never opens.
pub fn attach(options: AttachOptions) -> Result<(), AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;

    if document.ready_state() == "loading" {
        // Fires once and the registration lives for the page, so the
        // closure can be forgotten.
        let deferred = Closure::once(move || {
            if let Err(err) = mount(options) {
                warn!(%err, "vitrine attach failed");
            }
        });
        document
            .add_event_listener_with_callback(
                "DOMContentLoaded",
                deferred.as_ref().unchecked_ref(),
            )
            .map_err(|_| AttachError::ListenerFailed)?;
        deferred.forget();
        return Ok(());
    }

    mount(options)
}

/// Create the overlay container and launch the app into it.
fn mount(options: AttachOptions) -> Result<(), AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;
    let body = document.body().ok_or(AttachError::NoBody)?;

    let container = document
        .create_element("div")
        .map_err(|_| AttachError::Mount("could not create the overlay container".to_string()))?;
    container.set_id(&options.mount_id);
    body.append_child(&container)
        .map_err(|_| AttachError::Mount("could not append the overlay container".to_string()))?;

    info!(mount_id = %options.mount_id, "mounting vitrine");

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootelement(container))
        .with_context(options)
        .launch(LightboxRoot);

    Ok(())
}

/// JS entry point. `attach()` uses the default selector; pass one to
/// override it.
#[wasm_bindgen(js_name = attach)]
pub fn attach_js(gallery_selector: Option<String>) -> Result<(), JsValue> {
    let mut options = AttachOptions::default();
    if let Some(selector) = gallery_selector {
        options.gallery_selector = selector;
    }
    attach(options).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AttachOptions::default();
        assert_eq!(options.gallery_selector, ".gallery-item");
        assert_eq!(options.mount_id, "vitrine-lightbox");
    }

    #[test]
    fn test_attach_error_messages() {
        assert_eq!(
            AttachError::NoWindow.to_string(),
            "no window object; not running in a browser"
        );
        assert_eq!(
            AttachError::Mount("container rejected".to_string()).to_string(),
            "mount failed: container rejected"
        );
    }
}
