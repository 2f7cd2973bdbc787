use std::fmt::{self, Write as _};

use serde::{Serialize, Serializer};

use crate::path;
use crate::status::RawStatus;

/// Status of one entry in the `ofs://` namespace.
///
/// Composes the backend's [`RawStatus`] with a fully-qualified `path`. The
/// path is the only computed field; everything else is read straight from the
/// raw record.
///
/// # Rendering
///
/// - [`Display`](fmt::Display) gives the fixed-width listing line:
///   `[OzoneFSStat] <mode> <user> <group> <size> <path>` with a trailing `/`
///   for directories.
/// - [`Debug`] gives `<OzoneFSStat <path>>`, with control characters escaped.
/// - [`Serialize`] gives the listing-API object (`path`, `size`, `atime`,
///   `mtime`, `mode`, `user`, `group`, `blockSize`, `replication`).
#[derive(Clone, PartialEq, Eq)]
pub struct OzoneStat {
    status: RawStatus,
    path:   String,
}

impl OzoneStat {
    /// Build the stat for `status`, listed under `parent_path`, owned by
    /// `service_id`.
    ///
    /// See [`qualify_path`] for how the path is computed.
    ///
    /// ```rust
    /// use ofsstat::{OzoneStat, RawStatus};
    ///
    /// let stat = OzoneStat::new(RawStatus::file("file.txt", 42), "/myvol/mydir", Some("cluster1"));
    /// assert_eq!(stat.path(), "ofs://cluster1/myvol/mydir/file.txt");
    /// assert_eq!(stat.size(), 42);
    /// ```
    pub fn new(status: RawStatus, parent_path: &str, service_id: Option<&str>) -> Self {
        let path = qualify_path(parent_path, &status.name, service_id);
        tracing::trace!(path = %path, is_dir = status.is_dir, "built ofs stat");
        Self { status, path }
    }

    /// Fully-qualified `ofs://` path of the entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.status.name
    }

    pub fn mode(&self) -> u32 {
        self.status.mode
    }

    pub fn user(&self) -> &str {
        &self.status.user
    }

    pub fn group(&self) -> &str {
        &self.status.group
    }

    pub fn size(&self) -> u64 {
        self.status.size
    }

    pub fn is_dir(&self) -> bool {
        self.status.is_dir
    }

    /// The raw record this stat was built from.
    pub fn status(&self) -> &RawStatus {
        &self.status
    }

    pub fn into_status(self) -> RawStatus {
        self.status
    }
}

/// Compute the fully-qualified path for `name` listed under `parent_path`.
///
/// 1. [`path::join`] the parent and the leaf.
/// 2. Check whether the parent starts with `/<service_id>`
///    ([`path::volume_matches_service`]). This is the case where a volume
///    was named after the service id.
/// 3. [`path::serviceid_join`] the result, passing that flag so a colliding
///    volume name is not mistaken for a missing service segment.
///
/// A parent that is itself a qualified `ofs://<service_id>/…` URI already
/// names its service and is only joined, never re-qualified. The bare
/// `ofs://` root names no service and is treated like `/`.
///
/// ```rust
/// use ofsstat::qualify_path;
///
/// assert_eq!(
///     qualify_path("/cluster1/mydir", "file.txt", Some("cluster1")),
///     "ofs://cluster1/mydir/file.txt",
/// );
/// assert_eq!(qualify_path("/vol", "key", None), "ofs://vol/key");
/// ```
pub fn qualify_path(parent_path: &str, name: &str, service_id: Option<&str>) -> String {
    let joined = path::join(parent_path, name);
    let qualified_parent = path::has_scheme(parent_path) && !path::is_root(parent_path);
    let collision = path::volume_matches_service(parent_path, service_id);
    if collision {
        tracing::debug!(
            parent = parent_path,
            service_id = service_id.unwrap_or_default(),
            "volume name matches service id, keeping existing service segment"
        );
    }
    path::serviceid_join(&joined, service_id, qualified_parent || collision)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl fmt::Display for OzoneStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = format!("{:#o}", self.status.mode);
        write!(
            f,
            "[OzoneFSStat] {:>7} {:>8} {:>8} {:>12} {}{}",
            mode,
            self.status.user,
            self.status.group,
            self.status.size,
            self.path,
            if self.status.is_dir { "/" } else { "" },
        )
    }
}

impl fmt::Debug for OzoneStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<OzoneFSStat ")?;
        // Printable text, non-ASCII included, is written verbatim.
        for c in self.path.chars() {
            if c.is_control() {
                write!(f, "{}", c.escape_default())?;
            } else {
                f.write_char(c)?;
            }
        }
        f.write_char('>')
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatJson<'a> {
    path:        &'a str,
    size:        u64,
    atime:       u64,
    mtime:       u64,
    mode:        u32,
    user:        &'a str,
    group:       &'a str,
    block_size:  u64,
    replication: u32,
}

impl Serialize for OzoneStat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StatJson {
            path:        &self.path,
            size:        self.status.size,
            atime:       self.status.atime,
            mtime:       self.status.mtime,
            mode:        self.status.mode,
            user:        &self.status.user,
            group:       &self.status.group,
            block_size:  self.status.block_size,
            replication: self.status.replication,
        }
        .serialize(serializer)
    }
}
