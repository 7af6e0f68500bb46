//! RAII wrappers for JS event listeners
//!
//! The `Closure` backing a JS listener has to stay alive for as long as the
//! listener is registered, and `Closure::forget()` leaks it. Both wrappers
//! here keep the closure in the struct and remove the listener on `Drop`,
//! which ties the registration to Rust ownership. Parked in a
//! `Signal<Option<...>>` (or `Signal<Vec<...>>`) owned by a component, the
//! listener disappears together with the component.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Document-level event listener that removes itself when dropped.
///
/// Used for the keyboard handling that has to see keys no matter what has
/// focus.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attach `callback` to the document for `event_name`.
    pub fn new(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));
        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();
        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Event listener on a specific element, removed when dropped.
///
/// One of these per discovered gallery entry turns the host page's
/// thumbnails into open buttons.
pub struct ElementEventListener {
    target: web_sys::Element,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl ElementEventListener {
    /// Attach `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys::Element,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));
        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();
        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for ElementEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
