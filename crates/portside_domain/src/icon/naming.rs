//! Stable, filesystem- and URL-safe names for stored icons.

pub const FALLBACK_EXTENSION: &str = "png";

/// Replaces every character outside `[A-Za-z0-9]` with `-`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// `{container_id}-{sanitized_name}.{extension}`
pub fn icon_filename(container_id: &str, sanitized_name: &str, extension: &str) -> String {
    format!("{}-{}.{}", container_id, sanitized_name, extension)
}

/// Site-relative path under which the dashboard serves a stored icon.
pub fn asset_path(filename: &str) -> String {
    format!("/assets/{}", filename)
}

/// Extension of an uploaded file's original name.
pub fn extension_from_filename(filename: &str) -> String {
    let ext = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    };
    normalize_extension(ext)
}

/// Extension of the last path segment of a URL; query and fragment are ignored.
pub fn extension_from_url(url: &str) -> String {
    let without_suffix = url
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(url);
    let after_scheme = without_suffix
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_suffix);
    // The host is not a path segment.
    let segment = match after_scheme.split_once('/') {
        Some((_, path)) => path.rsplit('/').next().unwrap_or(""),
        None => "",
    };
    extension_from_filename(segment)
}

fn normalize_extension(ext: &str) -> String {
    let cleaned: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        cleaned
    }
}
