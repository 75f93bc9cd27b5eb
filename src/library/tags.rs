use std::path::Path;
use std::time::Duration;

use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};

use crate::error::TagError;

/// What the catalog needs from one audio file. Blank tag values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub date: Option<String>,
    pub duration: Duration,
}

/// Reads tags and stream info from an audio file.
pub trait TagReader {
    fn read(&self, path: &Path) -> Result<TagInfo, TagError>;
}

/// `TagReader` backed by lofty.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyReader;

impl TagReader for LoftyReader {
    fn read(&self, path: &Path) -> Result<TagInfo, TagError> {
        let tagged = lofty::read_from_path(path)?;

        let mut info = TagInfo {
            duration: tagged.properties().duration(),
            ..TagInfo::default()
        };

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            let text = |key: ItemKey| {
                tag.get_string(key)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };

            info.title = text(ItemKey::TrackTitle);
            info.artist = text(ItemKey::TrackArtist);
            info.date = text(ItemKey::RecordingDate).or_else(|| text(ItemKey::Year));
        }

        Ok(info)
    }
}
