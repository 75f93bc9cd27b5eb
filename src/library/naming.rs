use std::path::Path;

/// Album name shown in the manifest: the folder key with `_` read as a space.
pub fn display_name(folder: &str) -> String {
    folder.replace('_', " ")
}

/// Image path for an album, recomputed from the display name.
pub fn image_path(image_dir: &str, display_name: &str) -> String {
    let file = format!("{}.png", display_name.replace(' ', "_"));
    join_segments(image_dir, &file)
}

/// `minutes:seconds`, seconds zero-padded. Minutes are not wrapped into hours.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Year portion of a date tag: everything before the first `-`.
pub fn release_year(date: &str) -> String {
    date.split('-').next().unwrap_or(date).trim().to_string()
}

/// `/`-separated form of `path` relative to `root`; `.` for the root itself.
pub(crate) fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

pub(crate) fn join_segments(prefix: &str, rest: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{prefix}/{rest}")
    }
}
