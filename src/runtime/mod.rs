use std::env;
use std::process::ExitCode;

use tracing::{error, info, warn};

use crate::config::CatalogSettings;
use crate::error::CatalogError;
use crate::library::{Catalog, LoftyReader, TagReader, build_catalog};
use crate::manifest;

mod settings;

pub use settings::load_settings;

/// Entry point of the `music-catalog` binary. A failure is reported through
/// the log only.
pub fn run() -> ExitCode {
    if env::args_os().len() > 1 {
        warn!("music-catalog takes no arguments; ignoring them");
    }

    let settings = load_settings();
    if report(generate(&settings.catalog, &LoftyReader)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log a failed run; true when the manifest was written.
fn report(result: Result<Catalog, CatalogError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            error!(error = %e, "catalog generation failed");
            false
        }
    }
}

/// Scan `songs_dir` and overwrite `output` with the manifest.
///
/// Nothing is written if the scan fails.
pub fn generate<R: TagReader + ?Sized>(
    settings: &CatalogSettings,
    reader: &R,
) -> Result<Catalog, CatalogError> {
    info!(root = %settings.songs_dir.display(), "scanning songs directory");
    let catalog = build_catalog(&settings.songs_dir, settings, reader)?;

    manifest::write_to_path(&catalog, &settings.image_dir, &settings.output)?;
    info!(
        path = %settings.output.display(),
        albums = catalog.len(),
        "manifest written"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagError;
    use crate::library::TagInfo;
    use crate::test_support::capture_logs;
    use std::path::Path;
    use std::time::Duration;

    /// Every file reads as a 90 second track titled after its parent folder.
    struct FolderTitleReader;

    impl TagReader for FolderTitleReader {
        fn read(&self, path: &Path) -> Result<TagInfo, TagError> {
            let folder = path
                .parent()
                .and_then(|p| p.file_name())
                .map(|s| s.to_string_lossy().into_owned());
            Ok(TagInfo {
                title: folder,
                artist: Some("Various".into()),
                date: Some("2001-09-11".into()),
                duration: Duration::from_secs(90),
            })
        }
    }

    fn settings_for(root: &Path) -> CatalogSettings {
        CatalogSettings {
            songs_dir: root.join("sounds"),
            output: root.join("albums.txt"),
            ..CatalogSettings::default()
        }
    }

    #[test]
    fn rerun_on_unchanged_tree_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());
        for (folder, file) in [("Zeta", "b.mp3"), ("Zeta", "a.mp3"), ("Alpha", "x.mp3")] {
            let d = settings.songs_dir.join(folder);
            std::fs::create_dir_all(&d).unwrap();
            std::fs::write(d.join(file), b"x").unwrap();
        }

        generate(&settings, &FolderTitleReader).unwrap();
        let first = std::fs::read(&settings.output).unwrap();
        generate(&settings, &FolderTitleReader).unwrap();
        let second = std::fs::read(&settings.output).unwrap();

        assert_eq!(first, second);
        let text = String::from_utf8(first).unwrap();
        assert!(text.starts_with("2\nVarious\nAlpha\n2001\n2\nmedia/Alpha.png\n1\n"));
        assert!(text.ends_with("Zeta\nsounds/Zeta/a.mp3\n1:30\nZeta\nsounds/Zeta/b.mp3\n1:30\n"));
    }

    #[test]
    fn missing_songs_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());

        let err = generate(&settings, &FolderTitleReader).unwrap_err();
        assert!(matches!(err, CatalogError::RootMissing(_)));
        assert!(!settings.output.exists());
    }

    #[test]
    fn failed_run_is_reported_once() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());

        let (ok, logs) = capture_logs(|| report(generate(&settings, &FolderTitleReader)));
        assert!(!ok);

        let logs = logs.text();
        assert_eq!(logs.matches("catalog generation failed").count(), 1);
        let line = logs
            .lines()
            .find(|l| l.contains("catalog generation failed"))
            .unwrap();
        assert!(line.contains("ERROR"));
        assert!(line.contains("does not exist"));
    }

    #[test]
    fn successful_run_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(dir.path());
        std::fs::create_dir_all(&settings.songs_dir).unwrap();

        let (ok, logs) = capture_logs(|| report(generate(&settings, &FolderTitleReader)));
        assert!(ok);
        assert!(!logs.text().contains("ERROR"));
        assert_eq!(std::fs::read_to_string(&settings.output).unwrap(), "0\n");
    }
}
