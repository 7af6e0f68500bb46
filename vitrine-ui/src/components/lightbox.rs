//! Full-screen lightbox overlay
//!
//! Pure view over `ViewerState`: the stage shows the active item, arrows and
//! dots retarget it, clicking the backdrop closes. All media side effects
//! (pausing, scroll lock) happen in the owner via the event handler props.

use dioxus::prelude::*;
use vitrine_core::{MediaKind, PlaybackEvent, ViewerState};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};

/// Accessible label for the dot that jumps to `index`
fn slide_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// The lightbox overlay.
///
/// Renders nothing while closed. While open, exactly one media element is
/// mounted for the active item, keyed by its source URL so navigation swaps
/// the element out instead of mutating it in place. Clicks inside the stage
/// and on the controls stop propagation; anything that reaches the backdrop
/// closes the viewer.
#[component]
pub fn LightboxView(
    state: ViewerState,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_jump: EventHandler<usize>,
    on_playback: EventHandler<PlaybackEvent>,
    on_video_mounted: EventHandler<MountedEvent>,
) -> Element {
    if !state.is_open() {
        return rsx! {};
    }
    let Some(item) = state.active_item().cloned() else {
        return rsx! {};
    };

    let total = state.items().len();
    let active = state.active_index();
    let show_nav = state.show_nav();

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/90 flex items-center justify-center",
            onclick: move |_| on_close.call(()),

            // Stage first, controls after: matches the DOM order screen
            // readers walk through
            match item.kind {
                MediaKind::Image => rsx! {
                    img {
                        key: "{item.source}",
                        class: "max-w-[90vw] max-h-[85vh] object-contain rounded-lg shadow-2xl",
                        src: "{item.source}",
                        alt: "{item.alt_text}",
                        onclick: move |e| e.stop_propagation(),
                    }
                },
                MediaKind::Video => rsx! {
                    video {
                        key: "{item.source}",
                        class: "max-w-[90vw] max-h-[85vh] rounded-lg shadow-2xl",
                        src: "{item.source}",
                        controls: true,
                        autoplay: true,
                        playsinline: true,
                        onclick: move |e| e.stop_propagation(),
                        onplay: move |_| on_playback.call(PlaybackEvent::Playing),
                        onpause: move |_| on_playback.call(PlaybackEvent::Paused),
                        onended: move |_| on_playback.call(PlaybackEvent::Ended),
                        onmounted: move |evt| on_video_mounted.call(evt),
                    }
                },
            }

            // Close button
            button {
                class: "absolute top-4 right-4 text-gray-400 hover:text-white transition-colors z-10",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "w-6 h-6" }
            }

            // Previous button; hidden (but kept in the tree) for single-item galleries
            button {
                class: "absolute left-4 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                hidden: !show_nav,
                aria_label: "Previous",
                onclick: move |e| {
                    e.stop_propagation();
                    on_prev.call(());
                },
                ChevronLeftIcon {
                    class: "w-8 h-8 text-gray-300 -translate-x-0.5",
                    stroke_width: "1.5",
                }
            }

            // Next button
            button {
                class: "absolute right-4 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                hidden: !show_nav,
                aria_label: "Next",
                onclick: move |e| {
                    e.stop_propagation();
                    on_next.call(());
                },
                ChevronRightIcon {
                    class: "w-8 h-8 text-gray-300 translate-x-0.5",
                    stroke_width: "1.5",
                }
            }

            // Dot indicators
            div { class: "absolute bottom-6 left-1/2 -translate-x-1/2 flex gap-2 z-10",
                for i in 0..total {
                    {
                        let dot_class = if i == active {
                            "bg-white"
                        } else {
                            "bg-gray-500/70 hover:bg-gray-300"
                        };
                        let label = slide_label(i);
                        rsx! {
                            button {
                                key: "{i}",
                                class: "w-3 h-3 rounded-full transition-colors {dot_class}",
                                aria_label: "{label}",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    on_jump.call(i);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_labels_are_one_indexed() {
        assert_eq!(slide_label(0), "Go to slide 1");
        assert_eq!(slide_label(2), "Go to slide 3");
    }
}
