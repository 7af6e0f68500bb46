//! Page scroll suppression while the viewer is open

use tracing::debug;

/// RAII lock over the host page's scroll.
///
/// Construction sets `overflow: hidden` as an inline style on `<body>`;
/// dropping the lock removes the inline property again, so whatever value
/// the page's stylesheets assign takes back over. Outside a browser
/// document this degrades to a no-op.
pub struct ScrollLock {
    body: Option<web_sys::HtmlElement>,
}

impl ScrollLock {
    pub fn take() -> Self {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());
        if let Some(body) = &body {
            if body.style().set_property("overflow", "hidden").is_err() {
                debug!("could not suppress page scroll");
            }
        }
        Self { body }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(body) = &self.body {
            let _ = body.style().remove_property("overflow");
        }
    }
}
