use crate::MediaItem;

/// Playback state reported by the mounted video element.
///
/// The state machine never drives the element; it only consumes what the
/// render layer reports back from the DOM events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    Playing,
    Paused,
    Ended,
}

/// What a keyboard event means to an open viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    Close,
    Prev,
    Next,
}

/// Map a DOM `KeyboardEvent.key` value to a viewer action.
///
/// Only consulted while the viewer is open; every other key belongs to the
/// host page.
pub fn action_for_key(key: &str) -> Option<ViewerAction> {
    match key {
        "Escape" => Some(ViewerAction::Close),
        "ArrowLeft" => Some(ViewerAction::Prev),
        "ArrowRight" => Some(ViewerAction::Next),
        _ => None,
    }
}

/// Pure state machine behind the lightbox.
///
/// Holds the discovered items (fixed for the lifetime of the viewer) plus
/// the cursor, visibility, and playback flags. Transitions clamp rather
/// than panic on out-of-range indices and collapse to no-ops on an empty
/// gallery, so callers never pre-validate.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    items: Vec<MediaItem>,
    active_index: usize,
    is_open: bool,
    is_playing: bool,
}

impl ViewerState {
    /// Closed viewer over a fixed item list, cursor at the start.
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            active_index: 0,
            is_open: false,
            is_playing: false,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Item the stage is showing, `None` when the gallery came up empty
    pub fn active_item(&self) -> Option<&MediaItem> {
        self.items.get(self.active_index)
    }

    /// Arrow buttons only make sense with somewhere to go
    pub fn show_nav(&self) -> bool {
        self.items.len() > 1
    }

    /// Open the viewer on `index`. A viewer with no items refuses to open.
    pub fn open(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.show(index);
        self.is_open = true;
    }

    /// Close the viewer. Safe to call on an already-closed viewer.
    pub fn close(&mut self) {
        self.is_open = false;
        self.is_playing = false;
    }

    /// Point the stage at `index`, clamped into range.
    ///
    /// Every retarget resets the playing flag; whatever was playing is
    /// paused by the caller before the old element unmounts, and the new
    /// element reports its own state once mounted.
    pub fn show(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.active_index = index.min(self.items.len() - 1);
        self.is_playing = false;
    }

    /// Advance with wraparound: the last item leads back to the first.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.show((self.active_index + 1) % self.items.len());
    }

    /// Retreat with wraparound: the first item leads back to the last.
    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.show((self.active_index + len - 1) % len);
    }

    /// Jump straight to `index` (dot indicator click)
    pub fn jump(&mut self, index: usize) {
        self.show(index);
    }

    pub fn handle_playback(&mut self, event: PlaybackEvent) {
        self.is_playing = matches!(event, PlaybackEvent::Playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaKind;

    fn image(name: &str) -> MediaItem {
        MediaItem {
            kind: MediaKind::Image,
            source: format!("/media/{name}.jpg"),
            alt_text: name.to_string(),
        }
    }

    fn video(name: &str) -> MediaItem {
        MediaItem {
            kind: MediaKind::Video,
            source: format!("/media/{name}.mp4"),
            alt_text: String::new(),
        }
    }

    fn three_item_viewer() -> ViewerState {
        ViewerState::new(vec![image("a"), video("b"), image("c")])
    }

    #[test]
    fn test_new_viewer_starts_closed() {
        let state = three_item_viewer();
        assert!(!state.is_open());
        assert!(!state.is_playing());
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_open_targets_index() {
        let mut state = three_item_viewer();
        state.open(2);
        assert!(state.is_open());
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.active_item(), Some(&image("c")));
    }

    #[test]
    fn test_open_clamps_out_of_range_index() {
        let mut state = three_item_viewer();
        state.open(17);
        assert!(state.is_open());
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_open_on_empty_gallery_is_a_no_op() {
        let mut state = ViewerState::new(vec![]);
        state.open(0);
        assert!(!state.is_open());
        assert_eq!(state.active_item(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = three_item_viewer();
        state.open(1);
        state.close();
        let after_first = state.clone();
        state.close();
        assert_eq!(state, after_first);
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_on_never_opened_viewer() {
        let mut state = three_item_viewer();
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let mut state = three_item_viewer();
        state.open(2);
        state.next();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_prev_wraps_from_first_to_last() {
        let mut state = three_item_viewer();
        state.open(0);
        state.prev();
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_next_then_prev_is_identity_on_index() {
        let mut state = three_item_viewer();
        state.open(1);
        state.next();
        state.prev();
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut state = three_item_viewer();
        state.open(0);
        for _ in 0..3 {
            state.next();
        }
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_single_item_navigation_stays_put() {
        let mut state = ViewerState::new(vec![image("only")]);
        state.open(0);
        state.next();
        assert_eq!(state.active_index(), 0);
        state.prev();
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_jump_targets_index() {
        let mut state = three_item_viewer();
        state.open(0);
        state.jump(2);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_jump_clamps_out_of_range_index() {
        let mut state = three_item_viewer();
        state.open(0);
        state.jump(99);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_playback_events_track_playing_flag() {
        let mut state = three_item_viewer();
        state.open(1);
        state.handle_playback(PlaybackEvent::Playing);
        assert!(state.is_playing());
        state.handle_playback(PlaybackEvent::Paused);
        assert!(!state.is_playing());
        state.handle_playback(PlaybackEvent::Playing);
        state.handle_playback(PlaybackEvent::Ended);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_navigation_clears_playing_flag() {
        let mut state = three_item_viewer();
        state.open(1);
        state.handle_playback(PlaybackEvent::Playing);
        state.next();
        assert!(!state.is_playing());

        state.jump(1);
        state.handle_playback(PlaybackEvent::Playing);
        state.prev();
        assert!(!state.is_playing());
    }

    #[test]
    fn test_close_clears_playing_flag() {
        let mut state = three_item_viewer();
        state.open(1);
        state.handle_playback(PlaybackEvent::Playing);
        state.close();
        assert!(!state.is_playing());
    }

    #[test]
    fn test_show_nav_requires_two_items() {
        assert!(three_item_viewer().show_nav());
        assert!(!ViewerState::new(vec![image("only")]).show_nav());
        assert!(!ViewerState::new(vec![]).show_nav());
    }

    #[test]
    fn test_empty_gallery_every_operation_is_safe() {
        let mut state = ViewerState::new(vec![]);
        state.open(3);
        state.show(1);
        state.next();
        state.prev();
        state.jump(7);
        state.handle_playback(PlaybackEvent::Playing);
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.active_item(), None);
        assert!(!state.show_nav());
    }

    // End-to-end pass over a mixed gallery: image, video, image.
    #[test]
    fn test_walkthrough_image_video_image() {
        let mut state = three_item_viewer();

        state.open(0);
        assert_eq!(state.active_item(), Some(&image("a")));
        assert!(!state.is_playing());

        state.next();
        assert_eq!(state.active_item(), Some(&video("b")));
        // autoplay kicks in and the element reports it
        state.handle_playback(PlaybackEvent::Playing);
        assert!(state.is_playing());

        state.next();
        assert_eq!(state.active_item(), Some(&image("c")));
        assert!(!state.is_playing());

        state.jump(1);
        assert_eq!(state.active_item(), Some(&video("b")));
        assert!(!state.is_playing());

        state.close();
        assert!(!state.is_open());
        assert!(!state.is_playing());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_key("Escape"), Some(ViewerAction::Close));
        assert_eq!(action_for_key("ArrowLeft"), Some(ViewerAction::Prev));
        assert_eq!(action_for_key("ArrowRight"), Some(ViewerAction::Next));
        assert_eq!(action_for_key("ArrowUp"), None);
        assert_eq!(action_for_key("Enter"), None);
        assert_eq!(action_for_key(""), None);
    }
}
