//! Extension handling for path-like values.

/// Splits a path-like value into its stem and the extension of its last
/// `/` segment. The extension keeps its leading dot; it is empty when the
/// last segment has no `.`.
pub fn split_extension(value: &str) -> (&str, &str) {
    let segment_start = value.rfind('/').map_or(0, |i| i + 1);
    match value[segment_start..].rfind('.') {
        Some(dot) => value.split_at(segment_start + dot),
        None => (value, ""),
    }
}

/// Extension of the last path segment without the dot, e.g. `js` for `/a/b.js`.
pub fn extension_token(path: &str) -> &str {
    let (_, ext) = split_extension(path);
    ext.strip_prefix('.').unwrap_or("")
}
