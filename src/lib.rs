//! # ofsstat
//!
//! Status records for `ofs://` object-store listings: namespace-qualified
//! paths, zero I/O.
//!
//! ofsstat sits between a backend client and whatever renders or serializes
//! a directory listing. It owns the status type ([`OzoneStat`]), the path
//! rules that qualify an entry with its service id ([`path`]), and a small
//! builder for whole listings. It does **not** talk to the backend: records
//! arrive already fetched, as [`RawStatus`] values or WebHDFS JSON bodies.
//!
//! # Quick Start
//!
//! ```rust
//! use ofsstat::{OzoneStat, RawStatus};
//!
//! let dir = RawStatus::directory("mydir").with_owner("om", "hadoop");
//! let stat = OzoneStat::new(dir, "/myvol", Some("cluster1"));
//!
//! assert_eq!(stat.path(), "ofs://cluster1/myvol/mydir");
//! assert!(stat.to_string().ends_with("ofs://cluster1/myvol/mydir/"));
//! assert_eq!(format!("{stat:?}"), "<OzoneFSStat ofs://cluster1/myvol/mydir>");
//! ```
//!
//! # Volume named after the service
//!
//! When a volume carries the same name as the service id, the parent path
//! already starts with the service segment and it is not added again:
//!
//! ```rust
//! use ofsstat::{OzoneStat, RawStatus};
//!
//! let stat = OzoneStat::new(RawStatus::file("file.txt", 0), "/cluster1/mydir", Some("cluster1"));
//! assert_eq!(stat.path(), "ofs://cluster1/mydir/file.txt");
//! ```
//!
//! # Listings
//!
//! ```rust
//! use ofsstat::{OfsConfig, WebHdfsListing};
//!
//! let config = OfsConfig::from_toml_str("[ofs]\nfs_defaultfs = \"ofs://ozone1\"\n").unwrap();
//! let body = r#"{"FileStatuses": {"FileStatus": [
//!     {"pathSuffix": "logs", "permission": "755", "owner": "om", "group": "om",
//!      "length": 0, "type": "DIRECTORY"},
//!     {"pathSuffix": "data.csv", "permission": "644", "owner": "om", "group": "om",
//!      "length": 2048, "type": "FILE"}
//! ]}}"#;
//!
//! let listing = ofsstat::listing()
//!     .parent("/vol1/bucket1")
//!     .config(&config).unwrap()
//!     .source(WebHdfsListing::from_json(body).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(listing.stats.dirs, 1);
//! assert_eq!(listing.stats.total_bytes, 2048);
//! assert_eq!(listing.entries[1].path(), "ofs://ozone1/vol1/bucket1/data.csv");
//! ```

#![forbid(unsafe_code)]

pub mod path;

mod builder;
mod config;
mod error;
mod listing;
mod results;
mod stat;
mod status;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::ListingBuilder;
pub use config::OfsConfig;
pub use error::OfsError;
pub use listing::WebHdfsListing;
pub use results::{Listing, ListingStats};
pub use stat::{qualify_path, OzoneStat};
pub use status::{RawStatus, S_IFDIR, S_IFLNK, S_IFREG};
pub use traits::StatusSource;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ListingBuilder`] to turn a backend listing into stats.
pub fn listing() -> ListingBuilder {
    ListingBuilder::default()
}
