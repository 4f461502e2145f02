//! Lazy-load path resolution for `data-src` placeholders.

/// Resolve a `data-src` value against the configured base path.
///
/// A single leading separator is stripped before concatenation so that both
/// `/images/p1.webp` and `images/p1.webp` land under the base. Empty values
/// resolve to `None` and the caller skips the image entirely.
pub fn resolve(base: &str, data_src: &str) -> Option<String> {
    let trimmed = data_src.strip_prefix('/').unwrap_or(data_src);
    if trimmed.is_empty() {
        return None;
    }
    if base.is_empty() {
        return Some(trimmed.to_owned());
    }
    let mut path = String::with_capacity(base.len() + 1 + trimmed.len());
    path.push_str(base);
    if !base.ends_with('/') {
        path.push('/');
    }
    path.push_str(trimmed);
    Some(path)
}
