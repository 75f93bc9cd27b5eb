use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::CatalogSettings;
use crate::error::CatalogError;

use super::model::{Album, Catalog, Track, UNKNOWN_ARTIST, UNKNOWN_YEAR};
use super::naming::{format_duration, join_segments, relative_key, release_year};
use super::tags::TagReader;

fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Audio files directly inside `dir`, sorted by file name.
fn audio_files_in(
    dir: &Path,
    exts: &[String],
    include_hidden: bool,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && (include_hidden || !is_hidden(&path)) && is_audio_file(&path, exts) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Walk `root` and build the album catalog.
///
/// Directories are visited depth-first with entries sorted by name, so the
/// result only depends on the tree's contents. A missing root is fatal; an
/// unreadable file or subdirectory is logged and skipped.
pub fn build_catalog<R: TagReader + ?Sized>(
    root: &Path,
    settings: &CatalogSettings,
    reader: &R,
) -> Result<Catalog, CatalogError> {
    if !root.is_dir() {
        return Err(CatalogError::RootMissing(root.to_path_buf()));
    }

    let exts = settings.normalized_extensions();
    let mut catalog = Catalog::default();

    let walker = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let files = match audio_files_in(dir, &exts, settings.include_hidden) {
            Ok(files) => files,
            Err(err) if entry.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "skipping unreadable directory");
                continue;
            }
        };
        if files.is_empty() {
            continue;
        }

        let album = scan_album(root, dir, &files, settings, reader);
        debug!(folder = %album.folder, tracks = album.tracks.len(), "scanned album folder");
        catalog.insert(album);
    }

    info!(
        albums = catalog.len(),
        tracks = catalog.track_count(),
        "catalog built"
    );
    Ok(catalog)
}

/// Read every file of one folder. Artist and year come from the first file
/// that reads successfully; later files only contribute their title and length.
fn scan_album<R: TagReader + ?Sized>(
    root: &Path,
    dir: &Path,
    files: &[PathBuf],
    settings: &CatalogSettings,
    reader: &R,
) -> Album {
    let mut album = Album {
        artist: UNKNOWN_ARTIST.to_string(),
        folder: relative_key(root, dir),
        year: UNKNOWN_YEAR.to_string(),
        tracks: Vec::with_capacity(files.len()),
    };
    let mut first = true;

    for path in files {
        let info = match reader.read(path) {
            Ok(info) => info,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };

        if first {
            first = false;
            if let Some(artist) = &info.artist {
                album.artist = artist.clone();
            }
            if let Some(date) = &info.date {
                album.year = release_year(date);
            }
        }

        let title = info.title.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        album.tracks.push(Track {
            title,
            path: join_segments(&settings.track_path_prefix, &relative_key(root, path)),
            duration: format_duration(info.duration.as_secs()),
        });
    }

    album
}
