//! virtual path helpers. paths are plain strings; no filesystem access is
//! ever performed against them.

/// prepend `/` if `path` doesn't already start with it
pub fn to_absolute(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// concatenate `base` and `suffix` with a single `/` separator, avoiding
/// doubled delimiters
pub fn resolve(base: &str, suffix: &str) -> String {
    let base_trimmed = base.strip_suffix('/').unwrap_or(base);
    let suffix_trimmed = suffix.strip_prefix('/').unwrap_or(suffix);
    if base_trimmed.is_empty() {
        format!("/{suffix_trimmed}")
    } else {
        format!("{base_trimmed}/{suffix_trimmed}")
    }
}

/// tokenize on `/`, dropping empty tokens (so `"/"` splits to an empty sequence)
pub fn split_into_parts(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
