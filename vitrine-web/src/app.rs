//! The attachable lightbox components
//!
//! `LightboxOverlay` renders the viewer over a controller taken from
//! context; `Lightbox` is the discovery-driven wrapper the attach path
//! mounts, which also turns the host gallery's entries into click targets.

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use tracing::info;
use vitrine_ui::LightboxView;
use wasm_bindgen::JsCast;

use crate::attach::{AttachOptions, DEFAULT_GALLERY_SELECTOR};
use crate::controller::LightboxController;
use crate::dom::scan_gallery;
use crate::listeners::{DocumentEventListener, ElementEventListener};

/// Root component for the attach path. Reads `AttachOptions` from the
/// launch context, falling back to defaults when launched without one.
#[component]
pub fn LightboxRoot() -> Element {
    let options = use_hook(|| try_consume_context::<AttachOptions>().unwrap_or_default());
    rsx! {
        Lightbox { selector: options.gallery_selector.clone() }
    }
}

/// Lightbox over every gallery entry matching `selector`.
///
/// Discovers the gallery once on first render, owns the controller, and
/// wires one click listener per entry. Dropping the component unregisters
/// the listeners and releases the scroll lock.
#[component]
pub fn Lightbox(#[props(default = DEFAULT_GALLERY_SELECTOR.to_string())] selector: String) -> Element {
    let (controller, gallery_elements) = use_hook(|| {
        let (items, elements) = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => scan_gallery(&document, &selector),
            None => (Vec::new(), Vec::new()),
        };
        info!(items = items.len(), "vitrine gallery discovered");
        (LightboxController::new(items), elements)
    });
    use_context_provider(|| controller);

    // Click-to-open on the host gallery entries. The closures run from
    // wasm-bindgen outside the Dioxus runtime, so they restore it before
    // touching any signal.
    let mut gallery_listeners: Signal<Vec<ElementEventListener>> = use_signal(Vec::new);
    use_effect(move || {
        let runtime = Runtime::current();
        let registered = gallery_elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let runtime = runtime.clone();
                ElementEventListener::new(element.clone(), "click", move |_| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    controller.open(index);
                })
            })
            .collect();
        gallery_listeners.set(registered);
    });

    rsx! {
        LightboxOverlay {}
    }
}

/// The overlay plus document-level keyboard handling.
///
/// Expects a `LightboxController` in context; `Lightbox` provides one for
/// the attach path and the demo provides its own. The keydown listener
/// stays registered for the component's lifetime and checks `is_open`
/// itself, so a closed viewer never swallows the page's keys.
#[component]
pub fn LightboxOverlay() -> Element {
    let controller = use_context::<LightboxController>();

    let mut keyboard_listener: Signal<Option<DocumentEventListener>> = use_signal(|| None);
    use_effect(move || {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let runtime = Runtime::current();
        let listener = DocumentEventListener::new(document, "keydown", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            controller.handle_key(&event.key());
        });
        keyboard_listener.set(Some(listener));
    });

    let state = controller.view_state();

    rsx! {
        LightboxView {
            state,
            on_close: move |_| controller.close(),
            on_prev: move |_| controller.prev(),
            on_next: move |_| controller.next(),
            on_jump: move |index| controller.jump(index),
            on_playback: move |event| controller.handle_playback(event),
            on_video_mounted: move |evt: MountedEvent| {
                let video = evt
                    .downcast::<web_sys::Element>()
                    .cloned()
                    .and_then(|element| element.dyn_into::<web_sys::HtmlVideoElement>().ok());
                controller.set_video(video);
            },
        }
    }
}
