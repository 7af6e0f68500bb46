//! Thumbnail grid for the host gallery

use dioxus::prelude::*;
use vitrine_core::MediaItem;

use crate::components::icons::PlayIcon;

/// Grid of clickable media thumbnails.
///
/// The demo page uses this as its gallery; real host pages bring their own
/// markup and the viewer finds it through DOM discovery instead. Video
/// thumbnails get a play badge and never load more than metadata.
#[component]
pub fn GalleryGridView(items: Vec<MediaItem>, on_activate: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
            for (i , item) in items.iter().enumerate() {
                {
                    let source = item.source.clone();
                    let alt = item.alt_text.clone();
                    let is_video = item.is_video();
                    rsx! {
                        button {
                            key: "{source}-{i}",
                            class: "gallery-item group relative aspect-square overflow-clip rounded-lg bg-gray-800",
                            onclick: move |_| on_activate.call(i),
                            if is_video {
                                video {
                                    class: "w-full h-full object-cover pointer-events-none",
                                    src: "{source}",
                                    muted: true,
                                    preload: "metadata",
                                }
                                div { class: "absolute inset-0 flex items-center justify-center",
                                    div { class: "w-12 h-12 rounded-full bg-black/50 flex items-center justify-center",
                                        PlayIcon { class: "w-6 h-6 text-white translate-x-0.5" }
                                    }
                                }
                            } else {
                                img {
                                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform",
                                    src: "{source}",
                                    alt: "{alt}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
