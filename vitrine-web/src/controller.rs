//! Side-effect layer between the state machine and the browser
//!
//! Every viewer transition that needs a real-world effect goes through
//! `LightboxController`: pausing the outgoing video before its element
//! unmounts, taking and releasing the page scroll lock, and tracking the
//! handle of whichever video element is currently on the stage.

use dioxus::prelude::*;
use tracing::{debug, warn};
use vitrine_core::{action_for_key, MediaItem, PlaybackEvent, ViewerAction, ViewerState};

use crate::scroll::ScrollLock;

/// Signal-backed controller shared by the overlay component and the
/// host-page listeners. Cheap to copy; every copy observes the same state.
///
/// All mutating methods tolerate the owning component having unmounted
/// (listener callbacks can fire during teardown), so they go through
/// `try_write` and simply do nothing once the signals are gone.
#[derive(Clone, Copy)]
pub struct LightboxController {
    state: Signal<ViewerState>,
    video: Signal<Option<web_sys::HtmlVideoElement>>,
    scroll_lock: Signal<Option<ScrollLock>>,
}

impl LightboxController {
    /// Build a controller over the discovered items.
    ///
    /// Creates signals, so this belongs inside a component hook; the
    /// controller dies with the component that created it, dropping any
    /// held scroll lock on the way out.
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            state: Signal::new(ViewerState::new(items)),
            video: Signal::new(None),
            scroll_lock: Signal::new(None),
        }
    }

    /// Current state for rendering. Subscribes the calling scope.
    pub fn view_state(&self) -> ViewerState {
        self.state.read().clone()
    }

    /// Open the viewer on `index`.
    ///
    /// Refuses on an empty gallery: no state change and, importantly, no
    /// scroll lock taken.
    pub fn open(mut self, index: usize) {
        let has_items = self
            .state
            .try_read()
            .map(|state| !state.items().is_empty())
            .unwrap_or(false);
        if !has_items {
            return;
        }
        if let Ok(mut lock) = self.scroll_lock.try_write() {
            if lock.is_none() {
                *lock = Some(ScrollLock::take());
            }
        }
        if let Ok(mut state) = self.state.try_write() {
            state.open(index);
        }
        debug!(index, "viewer opened");
    }

    /// Close the viewer, pausing whatever plays and restoring page scroll.
    /// Safe to call repeatedly; the second call finds nothing to do.
    pub fn close(mut self) {
        self.pause_current();
        if let Ok(mut video) = self.video.try_write() {
            *video = None;
        }
        if let Ok(mut state) = self.state.try_write() {
            state.close();
        }
        if let Ok(mut lock) = self.scroll_lock.try_write() {
            *lock = None;
        }
        debug!("viewer closed");
    }

    /// Advance to the next item, wrapping at the end.
    pub fn next(self) {
        self.retarget(|state| state.next());
    }

    /// Go back to the previous item, wrapping at the start.
    pub fn prev(self) {
        self.retarget(|state| state.prev());
    }

    /// Jump straight to `index` (dot indicator click).
    pub fn jump(self, index: usize) {
        self.retarget(move |state| state.jump(index));
    }

    /// Apply a navigation transition with its surrounding effects.
    ///
    /// The transition is tried on a scratch copy first; when it would not
    /// move the cursor (single-item wraparound, clicking the active dot)
    /// the whole thing is a no-op and a playing video keeps playing.
    /// Otherwise the outgoing video is paused before the state commit
    /// triggers the re-render that unmounts its element.
    fn retarget(mut self, transition: impl FnOnce(&mut ViewerState)) {
        let Ok(current) = self.state.try_read().map(|state| state.clone()) else {
            return;
        };
        let mut target = current.clone();
        transition(&mut target);
        if target.active_index() == current.active_index() {
            return;
        }
        self.pause_current();
        if let Ok(mut video) = self.video.try_write() {
            *video = None;
        }
        let index = target.active_index();
        if let Ok(mut state) = self.state.try_write() {
            *state = target;
        }
        debug!(index, "stage retargeted");
    }

    /// Feed a playback report from the mounted video into the state.
    pub fn handle_playback(mut self, event: PlaybackEvent) {
        if let Ok(mut state) = self.state.try_write() {
            state.handle_playback(event);
        }
    }

    /// Decode and apply a key while the viewer is open; otherwise the key
    /// belongs to the host page and nothing happens.
    pub fn handle_key(self, key: &str) {
        let open = self
            .state
            .try_read()
            .map(|state| state.is_open())
            .unwrap_or(false);
        if !open {
            return;
        }
        match action_for_key(key) {
            Some(ViewerAction::Close) => self.close(),
            Some(ViewerAction::Prev) => self.prev(),
            Some(ViewerAction::Next) => self.next(),
            None => {}
        }
    }

    /// Record (or clear) the handle of the video element on the stage.
    /// Called from the view's `onmounted`.
    pub fn set_video(mut self, element: Option<web_sys::HtmlVideoElement>) {
        if let Ok(mut video) = self.video.try_write() {
            *video = element;
        }
    }

    /// Pause the held video if its element is still in the document.
    ///
    /// The attachment check covers teardown races where the element was
    /// already removed out from under us.
    fn pause_current(&self) {
        let Ok(video) = self.video.try_read() else {
            return;
        };
        if let Some(video) = video.as_ref() {
            if video.is_connected() && video.pause().is_err() {
                warn!("could not pause outgoing video");
            }
        }
    }
}
