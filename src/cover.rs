//! Embedded cover-art extraction.

use std::ffi::OsString;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader};
use lofty::picture::{Picture, PictureType};
use lofty::prelude::TaggedFileExt;
use tracing::debug;

use crate::error::CoverError;

/// The song path when exactly one argument was given. Paths are kept as raw
/// `OsString`s, so names that are not valid UTF-8 work too.
pub fn song_argument(args: impl IntoIterator<Item = OsString>) -> Option<PathBuf> {
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(song), None) => Some(PathBuf::from(song)),
        _ => None,
    }
}

/// `<out_dir>/<song stem>_cover.png`
pub fn cover_output_path(song: &Path, out_dir: &Path) -> PathBuf {
    let mut name = song.file_stem().unwrap_or_default().to_os_string();
    name.push("_cover.png");
    out_dir.join(name)
}

/// Save the embedded picture of `song` as a PNG in `out_dir`.
///
/// Returns the written path, or `None` when the file carries no picture.
pub fn extract_cover(song: &Path, out_dir: &Path) -> Result<Option<PathBuf>, CoverError> {
    let tagged = lofty::read_from_path(song)?;
    let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
        return Ok(None);
    };
    let Some(picture) = pick_picture(tag.pictures()) else {
        return Ok(None);
    };
    debug!(
        song = %song.display(),
        kind = ?picture.pic_type(),
        bytes = picture.data().len(),
        "found embedded picture"
    );

    let out = cover_output_path(song, out_dir);
    save_as_png(picture.data(), &out)?;
    Ok(Some(out))
}

fn pick_picture(pictures: &[Picture]) -> Option<&Picture> {
    pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
}

/// Decode an embedded image in whatever format it was stored and re-encode it as PNG.
pub fn save_as_png(data: &[u8], out: &Path) -> Result<(), CoverError> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;
    img.save_with_format(out, ImageFormat::Png)?;
    Ok(())
}
