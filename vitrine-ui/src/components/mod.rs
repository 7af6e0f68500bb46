//! Lightbox view components

pub mod gallery;
pub mod icons;
pub mod lightbox;

pub use gallery::GalleryGridView;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, PlayIcon, XIcon};
pub use lightbox::LightboxView;
