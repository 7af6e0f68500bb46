//! vitrine-web - Browser glue for the vitrine lightbox
//!
//! Discovers the host gallery in the DOM, mounts the overlay app, and owns
//! every real side effect: pausing the outgoing video, locking page scroll,
//! document-level keyboard handling.

pub mod app;
pub mod attach;
pub mod controller;
pub mod dom;
pub mod listeners;
pub mod scroll;

pub use app::{Lightbox, LightboxOverlay};
pub use attach::{attach, AttachError, AttachOptions};
pub use controller::LightboxController;
