use std::collections::HashMap;

use super::naming::{display_name, image_path};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_YEAR: &str = "0000";

/// One readable audio file as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    /// Manifest path: prefix segment plus the `/`-separated path below the songs root.
    pub path: String,
    /// `M:SS`
    pub duration: String,
}

/// Grouping key. Distinct folders that derive the same key share one album.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumKey {
    pub artist: String,
    pub folder: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub artist: String,
    /// Directory relative to the songs root, `/`-separated.
    pub folder: String,
    pub year: String,
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn key(&self) -> AlbumKey {
        AlbumKey {
            artist: self.artist.clone(),
            folder: self.folder.clone(),
            year: self.year.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        display_name(&self.folder)
    }

    pub fn image_path(&self, image_dir: &str) -> String {
        image_path(image_dir, &self.display_name())
    }
}

/// Albums in the order their key was first seen.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: Vec<Album>,
    index: HashMap<AlbumKey, usize>,
}

impl Catalog {
    /// Add an album, appending its tracks to an existing album with the same key.
    pub fn insert(&mut self, album: Album) {
        let key = album.key();
        match self.index.get(&key) {
            Some(&i) => self.albums[i].tracks.extend(album.tracks),
            None => {
                self.index.insert(key, self.albums.len());
                self.albums.push(album);
            }
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn get(&self, key: &AlbumKey) -> Option<&Album> {
        self.index.get(key).map(|&i| &self.albums[i])
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|a| a.tracks.len()).sum()
    }
}
