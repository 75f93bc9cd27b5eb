//! Line-oriented manifest writer.
//!
//! The file starts with the album count. Each album is then written as
//! artist, album name, year, the format version, image path and track count,
//! followed by title, path and duration for each of its tracks. One value per
//! line; values are written verbatim, so a newline inside a tag breaks the layout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::library::Catalog;

/// Literal written after each album's year.
pub const FORMAT_VERSION: u32 = 2;

pub fn write_manifest<W: Write>(catalog: &Catalog, image_dir: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", catalog.len())?;
    for album in catalog.albums() {
        writeln!(out, "{}", album.artist)?;
        writeln!(out, "{}", album.display_name())?;
        writeln!(out, "{}", album.year)?;
        writeln!(out, "{FORMAT_VERSION}")?;
        writeln!(out, "{}", album.image_path(image_dir))?;
        writeln!(out, "{}", album.tracks.len())?;
        for track in &album.tracks {
            writeln!(out, "{}", track.title)?;
            writeln!(out, "{}", track.path)?;
            writeln!(out, "{}", track.duration)?;
        }
    }
    Ok(())
}

pub fn render(catalog: &Catalog, image_dir: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_manifest(catalog, image_dir, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create or truncate `path` and write the manifest into it.
pub fn write_to_path(catalog: &Catalog, image_dir: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_manifest(catalog, image_dir, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{Album, Track};

    fn track(title: &str, path: &str, duration: &str) -> Track {
        Track {
            title: title.into(),
            path: path.into(),
            duration: duration.into(),
        }
    }

    fn sample() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.insert(Album {
            artist: "Artist X".into(),
            folder: "AlbumA".into(),
            year: "1999".into(),
            tracks: vec![
                track("Song One", "sounds/AlbumA/track1.mp3", "2:05"),
                track("Song Two", "sounds/AlbumA/track2.mp3", "1:00"),
            ],
        });
        catalog
    }

    #[test]
    fn renders_single_album_manifest() {
        let expected = "1\nArtist X\nAlbumA\n1999\n2\nmedia/AlbumA.png\n2\n\
                        Song One\nsounds/AlbumA/track1.mp3\n2:05\n\
                        Song Two\nsounds/AlbumA/track2.mp3\n1:00\n";
        assert_eq!(render(&sample(), "media"), expected);
    }

    #[test]
    fn album_name_shows_spaces_and_image_path_uses_underscores() {
        let mut catalog = Catalog::default();
        catalog.insert(Album {
            artist: "Band".into(),
            folder: "Greatest_Hits".into(),
            year: "0000".into(),
            tracks: Vec::new(),
        });
        assert_eq!(
            render(&catalog, "media"),
            "1\nBand\nGreatest Hits\n0000\n2\nmedia/Greatest_Hits.png\n0\n"
        );
    }

    #[test]
    fn empty_catalog_is_just_a_zero_count() {
        assert_eq!(render(&Catalog::default(), "media"), "0\n");
    }

    #[test]
    fn write_to_path_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("albums.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale contents that are longer than the manifest\n".repeat(20))
            .unwrap();

        write_to_path(&sample(), "media", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render(&sample(), "media"));
    }
}
