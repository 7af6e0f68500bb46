//! vitrine-core - Pure viewer logic for the vitrine lightbox
//!
//! Media classification and the viewer state machine, with no DOM or
//! renderer dependency so the whole crate tests natively.

pub mod media;
pub mod viewer;

pub use media::{GalleryEntry, MediaItem, MediaKind};
pub use viewer::{action_for_key, PlaybackEvent, ViewerAction, ViewerState};
