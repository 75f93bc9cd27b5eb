use std::path::PathBuf;

use lofty::error::LoftyError;
use thiserror::Error;

/// Fatal failures of a catalog pass. Nothing is written when one of these occurs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("songs directory {0} does not exist or is not a directory")]
    RootMissing(PathBuf),

    #[error("failed to walk songs directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-file tag read failure. The scan logs it and skips the file.
#[derive(Debug, Error)]
pub enum TagError {
    #[error(transparent)]
    Lofty(#[from] LoftyError),
}

#[derive(Debug, Error)]
pub enum CoverError {
    #[error(transparent)]
    Lofty(#[from] LoftyError),

    #[error("failed to decode embedded image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
