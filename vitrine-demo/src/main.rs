//! vitrine demo - Portfolio gallery exercising the lightbox
//!
//! A single-page app that renders a media grid from fixture data and
//! drives the viewer through explicit component state (the library path;
//! real host pages would go through `vitrine_web::attach` instead).

use dioxus::prelude::*;
use vitrine_core::{MediaItem, MediaKind};
use vitrine_ui::GalleryGridView;
use vitrine_web::{LightboxController, LightboxOverlay};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Portfolio fixture: clips first, then stills.
fn demo_items() -> Vec<MediaItem> {
    vec![
        MediaItem {
            kind: MediaKind::Video,
            source: "/media/reel-2025.mp4".to_string(),
            alt_text: String::new(),
        },
        MediaItem {
            kind: MediaKind::Video,
            source: "/media/timelapse-harbor.webm".to_string(),
            alt_text: String::new(),
        },
        MediaItem {
            kind: MediaKind::Image,
            source: "/media/dune-ridge.jpg".to_string(),
            alt_text: "Wind-carved dune ridge at dusk".to_string(),
        },
        MediaItem {
            kind: MediaKind::Image,
            source: "/media/glasshouse.jpg".to_string(),
            alt_text: "Condensation on a glasshouse roof".to_string(),
        },
        MediaItem {
            kind: MediaKind::Image,
            source: "/media/north-pier.jpg".to_string(),
            alt_text: "North pier in fog".to_string(),
        },
        MediaItem {
            kind: MediaKind::Image,
            source: "/media/signal-box.jpg".to_string(),
            alt_text: "Abandoned signal box interior".to_string(),
        },
    ]
}

/// Demo page: header, gallery grid, and the viewer overlay.
#[component]
fn Home() -> Element {
    let items = use_hook(demo_items);
    let controller = use_hook(|| LightboxController::new(demo_items()));
    use_context_provider(|| controller);

    rsx! {
        div { class: "min-h-screen bg-gray-950 text-gray-100",
            header { class: "max-w-5xl mx-auto px-6 pt-10",
                h1 { class: "text-2xl font-semibold tracking-tight", "vitrine" }
                p { class: "mt-1 text-sm text-gray-400",
                    "Click a thumbnail to open the viewer. Arrow keys navigate, Escape closes."
                }
            }
            main { class: "max-w-5xl mx-auto px-6 py-10",
                GalleryGridView {
                    items: items.clone(),
                    on_activate: move |index| controller.open(index),
                }
            }
            LightboxOverlay {}
        }
    }
}

/// Main demo app component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Home {}
    }
}

fn main() {
    dioxus::launch(App);
}
