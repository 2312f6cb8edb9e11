//! Relative-path validation and component-wise confinement checks.

use crate::error::ResolveError;

/// Rejects paths that could not have come from a repository listing:
/// empty, absolute, carrying a URL scheme, containing NUL, or walking up
/// with `..` (which would let a request slip past a confinement prefix).
pub fn validate_relative_path(path: &str) -> Result<(), ResolveError> {
    if path.is_empty() {
        return Err(ResolveError::malformed("relative path is empty"));
    }
    if path.starts_with('/') || path.starts_with('\\') {
        return Err(ResolveError::malformed(format!(
            "relative path {path:?} is absolute"
        )));
    }
    if path.contains('\0') {
        return Err(ResolveError::malformed("relative path contains NUL"));
    }
    if has_scheme(path) {
        return Err(ResolveError::malformed(format!(
            "relative path {path:?} carries a URL scheme"
        )));
    }
    if path.split('/').any(|seg| seg == "..") {
        return Err(ResolveError::malformed(format!(
            "relative path {path:?} contains a '..' component"
        )));
    }
    if components(path).next().is_none() {
        return Err(ResolveError::malformed(format!(
            "relative path {path:?} has no components"
        )));
    }
    Ok(())
}

/// `scheme:` per RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":".
fn has_scheme(path: &str) -> bool {
    let Some((head, _)) = path.split_once(':') else {
        return false;
    };
    let mut chars = head.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Non-empty path components, with `.` dropped.
pub fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty() && *seg != ".")
}

/// Components of `base` joined with `rel`, as a filesystem join would produce.
pub fn join_components<'a>(base: &'a str, rel: &'a str) -> Vec<&'a str> {
    components(base).chain(components(rel)).collect()
}

/// True if `prefix` names `full` or one of its ancestors. A prefix with no
/// components (`""`, `"/"`) matches everything.
pub fn has_prefix(full: &[&str], prefix: &str) -> bool {
    let mut want = components(prefix);
    let mut have = full.iter();
    loop {
        match (want.next(), have.next()) {
            (None, _) => return true,
            (Some(_), None) => return false,
            (Some(w), Some(h)) if w == *h => continue,
            _ => return false,
        }
    }
}

/// Confinement rule: an empty list allows everything, otherwise one prefix must match.
pub fn in_confined_paths(full: &[&str], confined: &[String]) -> bool {
    confined.is_empty() || confined.iter().any(|prefix| has_prefix(full, prefix))
}
