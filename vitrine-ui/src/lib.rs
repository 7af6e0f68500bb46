//! vitrine-ui - Pure view components for the vitrine lightbox
//!
//! The overlay, its controls, and the gallery grid, all rendered as
//! functions of viewer state. Everything that touches the real DOM lives
//! in vitrine-web.

pub mod components;

pub use components::*;
