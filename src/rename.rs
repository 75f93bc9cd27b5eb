//! Filename normalization: spaces in file names become underscores.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::RenameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// `name` with every space byte replaced by `_`. Other bytes are kept as is,
/// including ones that are not valid UTF-8.
pub fn normalized_name(name: &OsStr) -> OsString {
    let bytes: Vec<u8> = name
        .as_encoded_bytes()
        .iter()
        .map(|&b| if b == b' ' { b'_' } else { b })
        .collect();
    // SAFETY: only ASCII bytes were swapped for ASCII bytes, which keeps the
    // platform encoding valid.
    unsafe { OsString::from_encoded_bytes_unchecked(bytes) }
}

/// Rename every file under `root` whose name contains a space.
///
/// The tree is walked bottom-up. Directory names are left alone, and a file
/// whose normalized name is already taken is skipped.
pub fn normalize_names(root: &Path) -> Result<Vec<Rename>, RenameError> {
    let mut pending = Vec::new();
    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.as_encoded_bytes().contains(&b' ') {
            let from = entry.path().to_path_buf();
            let to = from.with_file_name(normalized_name(name));
            pending.push(Rename { from, to });
        }
    }

    let mut done = Vec::with_capacity(pending.len());
    for rename in pending {
        if rename.to.exists() {
            warn!(
                from = %rename.from.display(),
                to = %rename.to.display(),
                "target already exists, leaving file as is"
            );
            continue;
        }
        fs::rename(&rename.from, &rename.to).map_err(|source| RenameError::Rename {
            from: rename.from.clone(),
            to: rename.to.clone(),
            source,
        })?;
        info!("renamed {} -> {}", rename.from.display(), rename.to.display());
        done.push(rename);
    }
    Ok(done)
}
