//! Lexical path normalization.
//!
//! Normalization works on the string form only. It never touches the
//! filesystem and never consults `std::path`, so the result is identical on
//! every host platform:
//! - Backslashes are treated as separators and rewritten to `/`
//! - Repeated separators collapse to one
//! - `.` segments are dropped
//! - `..` segments cancel the preceding segment when there is one
//! - A trailing separator is removed

/// Normalize a path to canonical forward-slash form.
///
/// A `..` that has nothing to cancel is kept, so a path that climbs above
/// its starting point still starts with `..` afterwards. Rooted inputs keep
/// their root marker (`/`, or `//` for UNC-like input) so the validator can
/// reject them. A non-empty relative input that resolves to nothing becomes
/// `"."`; the empty string stays empty.
///
/// `normalize` is idempotent.
///
/// # Examples
///
/// ```
/// use actkit::path::normalize;
///
/// assert_eq!(normalize("./a//b/../c"), "a/c");
/// assert_eq!(normalize("x/"), "x");
/// assert_eq!(normalize("a/../../b"), "../b");
/// assert_eq!(normalize("locales\\en"), "locales/en");
/// assert_eq!(normalize("."), ".");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let unified = path.replace('\\', "/");
    let root = if unified.starts_with("//") {
        "//"
    } else if unified.starts_with('/') {
        "/"
    } else {
        ""
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                let parent = segments.last().copied();
                match parent {
                    Some(p) if p != ".." => {
                        segments.pop();
                    }
                    // Nothing lies above a root.
                    _ if !root.is_empty() => {}
                    _ => segments.push(".."),
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if root.is_empty() {
        if joined.is_empty() {
            ".".to_string()
        } else {
            joined
        }
    } else {
        format!("{root}{joined}")
    }
}
