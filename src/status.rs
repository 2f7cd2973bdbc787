use serde::Deserialize;
use serde_json::Value;

use crate::error::OfsError;

/// File-type bits OR-ed into [`RawStatus::mode`] by the WebHDFS parser.
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFLNK: u32 = 0o120000;

/// Highest value a WebHDFS `permission` string may encode (sticky + rwx×3).
const MAX_PERMISSION: u32 = 0o7777;

/// Backend-provided metadata for one filesystem entry.
///
/// This is the generic half of an [`OzoneStat`](crate::OzoneStat): every field
/// passes through to the stat unchanged. Producers are responsible for
/// filling in the required scalars; nothing here validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStatus {
    /// Leaf name of the entry, not a path.
    pub name: String,

    /// Permission bits, plus file-type bits when the producer supplies them.
    pub mode: u32,

    /// Owning user.
    pub user: String,

    /// Owning group.
    pub group: String,

    /// Length in bytes. Backends report 0 for directories.
    pub size: u64,

    /// Whether the entry is a directory.
    pub is_dir: bool,

    /// Last access time, whole seconds since the epoch.
    pub atime: u64,

    /// Last modification time, whole seconds since the epoch.
    pub mtime: u64,

    pub block_size: u64,
    pub replication: u32,
    pub acl_bit: Option<bool>,
    pub file_id: Option<u64>,
}

impl RawStatus {
    /// A regular file with `0o644` permissions and no owner.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::blank(name.into(), 0o644, size, false)
    }

    /// A directory with `0o755` permissions and no owner.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::blank(name.into(), 0o755, 0, true)
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_owner(mut self, user: impl Into<String>, group: impl Into<String>) -> Self {
        self.user = user.into();
        self.group = group.into();
        self
    }

    pub fn with_times(mut self, atime: u64, mtime: u64) -> Self {
        self.atime = atime;
        self.mtime = mtime;
        self
    }

    /// Replace the name with one decoded from raw backend bytes.
    ///
    /// Invalid UTF-8 sequences become U+FFFD; decoding never fails.
    pub fn with_name_bytes(mut self, bytes: &[u8]) -> Self {
        self.name = String::from_utf8_lossy(bytes).into_owned();
        self
    }

    /// Parse a WebHDFS `FileStatus` JSON document.
    ///
    /// Accepts both the bare object and the `GETFILESTATUS` envelope
    /// `{"FileStatus": {...}}`.
    ///
    /// ```rust
    /// use ofsstat::RawStatus;
    ///
    /// let raw = RawStatus::from_json(r#"{
    ///     "pathSuffix": "logs", "permission": "755", "owner": "om", "group": "om",
    ///     "length": 0, "type": "DIRECTORY", "modificationTime": 1700000000123
    /// }"#).unwrap();
    ///
    /// assert!(raw.is_dir);
    /// assert_eq!(raw.mode, 0o40755);
    /// assert_eq!(raw.mtime, 1700000000);
    /// ```
    pub fn from_json(body: &str) -> Result<Self, OfsError> {
        let value: Value = serde_json::from_str(body).map_err(OfsError::MalformedStatus)?;
        let status = value.get("FileStatus").unwrap_or(&value);
        Self::from_value(status)
    }

    /// Convert one already-parsed WebHDFS `FileStatus` object.
    pub fn from_value(value: &Value) -> Result<Self, OfsError> {
        let wire = FileStatusWire::deserialize(value).map_err(OfsError::MalformedStatus)?;
        Self::from_wire(wire)
    }

    fn blank(name: String, mode: u32, size: u64, is_dir: bool) -> Self {
        Self {
            name,
            mode,
            user: String::new(),
            group: String::new(),
            size,
            is_dir,
            atime: 0,
            mtime: 0,
            block_size: 0,
            replication: 0,
            acl_bit: None,
            file_id: None,
        }
    }
}

// ---------------------------------------------------------------------------
// WebHDFS wire format
// ---------------------------------------------------------------------------

#[derive(Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum WireType {
    File,
    Directory,
    Symlink,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileStatusWire {
    path_suffix: String,
    permission: String,
    owner: String,
    group: String,
    length: u64,
    #[serde(rename = "type")]
    kind: WireType,
    // milliseconds
    #[serde(default)]
    access_time: u64,
    #[serde(default)]
    modification_time: u64,
    #[serde(default)]
    block_size: u64,
    #[serde(default)]
    replication: u32,
    #[serde(default)]
    acl_bit: Option<bool>,
    #[serde(default)]
    file_id: Option<u64>,
}

impl RawStatus {
    fn from_wire(wire: FileStatusWire) -> Result<Self, OfsError> {
        // from_str_radix alone would also take a leading sign
        let permission = Some(&wire.permission)
            .filter(|p| !p.is_empty() && p.bytes().all(|b| matches!(b, b'0'..=b'7')))
            .and_then(|p| u32::from_str_radix(p, 8).ok())
            .filter(|bits| *bits <= MAX_PERMISSION)
            .ok_or_else(|| OfsError::InvalidPermission(wire.permission.clone()))?;

        let type_bits = match wire.kind {
            WireType::Directory => S_IFDIR,
            WireType::File      => S_IFREG,
            WireType::Symlink   => S_IFLNK,
        };

        Ok(Self {
            name:        wire.path_suffix,
            mode:        permission | type_bits,
            user:        wire.owner,
            group:       wire.group,
            size:        wire.length,
            is_dir:      wire.kind == WireType::Directory,
            atime:       wire.access_time / 1000,
            mtime:       wire.modification_time / 1000,
            block_size:  wire.block_size,
            replication: wire.replication,
            acl_bit:     wire.acl_bit,
            file_id:     wire.file_id,
        })
    }
}
