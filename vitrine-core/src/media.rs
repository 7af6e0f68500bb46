/// What kind of media a gallery item holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// A single viewable item discovered in the host gallery
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    /// URL the media element loads
    pub source: String,
    /// Accessible description; empty when the entry carried none
    pub alt_text: String,
}

/// Raw media references pulled from one gallery entry, before classification.
///
/// DOM discovery only records what it finds; deciding whether that makes a
/// usable item (or the entry gets skipped) lives here, where it tests
/// without a browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryEntry {
    /// `src` and `alt` of the first image child, if any
    pub image: Option<(String, String)>,
    /// Resolved source of the first video child, if any
    pub video: Option<String>,
}

impl MediaItem {
    /// Classify one discovered entry.
    ///
    /// An image child wins over a video child; entries with neither yield
    /// `None` and get skipped by the caller.
    pub fn from_entry(entry: &GalleryEntry) -> Option<MediaItem> {
        if let Some((src, alt)) = &entry.image {
            return Some(MediaItem {
                kind: MediaKind::Image,
                source: src.clone(),
                alt_text: alt.clone(),
            });
        }
        if let Some(src) = &entry.video {
            return Some(MediaItem {
                kind: MediaKind::Video,
                source: src.clone(),
                alt_text: String::new(),
            });
        }
        None
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_entry(src: &str, alt: &str) -> GalleryEntry {
        GalleryEntry {
            image: Some((src.to_string(), alt.to_string())),
            video: None,
        }
    }

    fn video_entry(src: &str) -> GalleryEntry {
        GalleryEntry {
            image: None,
            video: Some(src.to_string()),
        }
    }

    #[test]
    fn test_image_entry_classifies_as_image() {
        let item = MediaItem::from_entry(&image_entry("/pics/a.jpg", "sunrise")).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.source, "/pics/a.jpg");
        assert_eq!(item.alt_text, "sunrise");
        assert!(!item.is_video());
    }

    #[test]
    fn test_video_entry_classifies_as_video() {
        let item = MediaItem::from_entry(&video_entry("/clips/b.mp4")).unwrap();
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.source, "/clips/b.mp4");
        assert_eq!(item.alt_text, "");
        assert!(item.is_video());
    }

    #[test]
    fn test_empty_entry_is_skipped() {
        assert_eq!(MediaItem::from_entry(&GalleryEntry::default()), None);
    }

    #[test]
    fn test_image_wins_when_entry_has_both() {
        let entry = GalleryEntry {
            image: Some(("/pics/a.jpg".to_string(), String::new())),
            video: Some("/clips/b.mp4".to_string()),
        };
        let item = MediaItem::from_entry(&entry).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.source, "/pics/a.jpg");
    }

    #[test]
    fn test_discovery_order_survives_skips() {
        let entries = vec![
            image_entry("/pics/a.jpg", "a"),
            GalleryEntry::default(),
            video_entry("/clips/b.mp4"),
        ];
        let items: Vec<MediaItem> = entries.iter().filter_map(MediaItem::from_entry).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].source, "/pics/a.jpg");
        assert_eq!(items[1].source, "/clips/b.mp4");
    }

    #[test]
    fn test_empty_src_image_is_kept() {
        let item = MediaItem::from_entry(&image_entry("", "broken")).unwrap();
        assert_eq!(item.source, "");
    }
}
