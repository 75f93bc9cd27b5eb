//! Catalog builder: walks the songs tree and groups tracks into albums.

mod model;
mod naming;
mod scan;
mod tags;

pub use model::{Album, AlbumKey, Catalog, Track, UNKNOWN_ARTIST, UNKNOWN_YEAR};
pub use naming::{display_name, format_duration, image_path, release_year};
pub use scan::build_catalog;
pub use tags::{LoftyReader, TagInfo, TagReader};
