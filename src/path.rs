//! Path utilities for the `ofs://` namespace.
//!
//! An ofs path has the shape `ofs://<service_id>/<volume>/<bucket>/<key…>`.
//! Backends list entries under service-relative parents (`/<volume>/…`), so
//! building a fully-qualified path is a two-step affair: [`join`] the parent
//! and the leaf, then [`serviceid_join`] the owning service in front.

use std::borrow::Cow;

use crate::error::OfsError;

/// Scheme prefix shared by every fully-qualified ofs path.
pub const OFS_ROOT: &str = "ofs://";

/// Split an `ofs://` URI into `(netloc, path)`.
///
/// The scheme is matched case-insensitively. `path` always starts with `/`
/// and is `"/"` when the URI names only a netloc.
///
/// ```rust
/// let (netloc, path) = ofsstat::path::parse_uri("ofs://ozone1/vol/bucket").unwrap();
/// assert_eq!(netloc, "ozone1");
/// assert_eq!(path, "/vol/bucket");
/// ```
pub fn parse_uri(uri: &str) -> Result<(String, String), OfsError> {
    let rest = strip_scheme(uri).ok_or_else(|| OfsError::InvalidUri(uri.to_string()))?;
    let (netloc, path) = split_netloc(rest);
    let path = if path.is_empty() { "/" } else { path };
    Ok((netloc.to_string(), path.to_string()))
}

/// Whether `uri` carries the `ofs://` scheme (case-insensitive).
pub fn has_scheme(uri: &str) -> bool {
    strip_scheme(uri).is_some()
}

/// Whether `uri` is the bare scheme root, `ofs://`.
pub fn is_root(uri: &str) -> bool {
    uri.eq_ignore_ascii_case(OFS_ROOT)
}

/// Join two path components.
///
/// See [`join_all`] for the rules.
pub fn join(first: &str, second: &str) -> String {
    join_all(first, &[second])
}

/// Join path components with POSIX rules and re-qualify absolute results.
///
/// - Components that are `ofs://` URIs are reduced to `/<netloc><path>` first
///   (the root URI reduces to `/`).
/// - Exactly one `/` separates components; a separator already present at the
///   boundary is not doubled.
/// - An absolute component discards everything before it.
/// - An absolute result is prefixed with the scheme; a relative one is returned as is.
///
/// ```rust
/// use ofsstat::path::join;
///
/// assert_eq!(join("/vol/dir", "file.txt"), "ofs://vol/dir/file.txt");
/// assert_eq!(join("/vol/dir/", "file.txt"), "ofs://vol/dir/file.txt");
/// assert_eq!(join("ofs://vol/dir", "file.txt"), "ofs://vol/dir/file.txt");
/// ```
pub fn join_all<S: AsRef<str>>(first: &str, rest: &[S]) -> String {
    let mut joined = prep(first).into_owned();

    for component in rest {
        let component = prep(component.as_ref());
        if component.starts_with('/') {
            joined = component.into_owned();
        } else if joined.is_empty() || joined.ends_with('/') {
            joined.push_str(&component);
        } else {
            joined.push('/');
            joined.push_str(&component);
        }
    }

    if joined.starts_with('/') {
        format!("ofs:/{joined}")
    } else {
        joined
    }
}

/// Qualify `path` with its owning service id.
///
/// - No service id (absent or empty): `path` is returned unchanged.
/// - Relative paths carry no scheme and are returned unchanged.
/// - `already_qualified` means the service segment is already the first
///   segment of `path` (a volume named after the service); nothing is added.
/// - Anything else gets the service segment inserted after the scheme.
///
/// Qualified results always carry the lowercase scheme.
///
/// ```rust
/// use ofsstat::path::serviceid_join;
///
/// let path = "ofs://vol/dir/file.txt";
/// assert_eq!(serviceid_join(path, Some("svc"), false), "ofs://svc/vol/dir/file.txt");
/// assert_eq!(serviceid_join(path, None, false), path);
/// ```
pub fn serviceid_join(path: &str, service_id: Option<&str>, already_qualified: bool) -> String {
    let service_id = match service_id {
        Some(id) if !id.is_empty() => id,
        _ => return path.to_string(),
    };

    let Some(rest) = strip_scheme(path) else {
        return path.to_string();
    };

    if already_qualified {
        return format!("{OFS_ROOT}{rest}");
    }

    format!("{OFS_ROOT}{service_id}/{rest}")
}

/// Whether `parent_path` begins with `/` followed by `service_id`.
///
/// This is the volume/service collision heuristic: a volume that was named
/// after the cluster's service id makes `/<service_id>/…` ambiguous between
/// "volume X" and "service X". The check is a plain textual prefix test, so
/// `/cluster10` matches a service id of `cluster1` as well. Always `false`
/// without a service id.
pub fn volume_matches_service(parent_path: &str, service_id: Option<&str>) -> bool {
    match service_id {
        Some(id) if !id.is_empty() => parent_path
            .strip_prefix('/')
            .is_some_and(|rest| rest.starts_with(id)),
        _ => false,
    }
}

/// Lexically normalize a path.
///
/// Collapses repeated separators, drops `.` segments, resolves `..` (never
/// above the root) and drops a trailing separator. The `ofs://<netloc>`
/// prefix of a qualified path is kept verbatim.
///
/// ```rust
/// use ofsstat::path::normpath;
///
/// assert_eq!(normpath("ofs://svc/vol//a/./b/../c/"), "ofs://svc/vol/a/c");
/// assert_eq!(normpath("a/../../b"), "../b");
/// ```
pub fn normpath(path: &str) -> String {
    if is_root(path) {
        return OFS_ROOT.to_string();
    }

    let (prefix, body) = match strip_scheme(path) {
        Some(rest) => {
            let (netloc, body) = split_netloc(rest);
            (format!("{OFS_ROOT}{netloc}"), body)
        }
        None => (String::new(), path),
    };
    let absolute = !prefix.is_empty() || body.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in body.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("{prefix}/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The part of `uri` after a case-insensitive `ofs://`, if present.
fn strip_scheme(uri: &str) -> Option<&str> {
    let head = uri.get(..OFS_ROOT.len())?;
    if head.eq_ignore_ascii_case(OFS_ROOT) {
        Some(&uri[OFS_ROOT.len()..])
    } else {
        None
    }
}

/// Split `netloc/rest…` at the first separator; the path keeps its `/`.
fn split_netloc(rest: &str) -> (&str, &str) {
    match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    }
}

/// Reduce an ofs URI to a scheme-less absolute path so POSIX joining applies.
fn prep(component: &str) -> Cow<'_, str> {
    if is_root(component) {
        return Cow::Borrowed("/");
    }
    match parse_uri(component) {
        Ok((netloc, path)) => Cow::Owned(format!("/{netloc}{path}")),
        Err(_) => Cow::Borrowed(component),
    }
}
