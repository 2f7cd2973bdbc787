use serde::Deserialize;
use serde_json::Value;

use crate::error::OfsError;
use crate::status::RawStatus;
use crate::traits::StatusSource;

/// A WebHDFS `LISTSTATUS` response body.
///
/// Only the envelope is validated up front. Each `FileStatus` object is
/// converted lazily by [`StatusSource::statuses`], so one malformed entry
/// surfaces as a per-entry error instead of sinking the whole listing.
///
/// ```rust
/// use ofsstat::WebHdfsListing;
///
/// let body = r#"{"FileStatuses": {"FileStatus": [
///     {"pathSuffix": "a.txt", "permission": "644", "owner": "om", "group": "om",
///      "length": 3, "type": "FILE"}
/// ]}}"#;
///
/// let listing = ofsstat::listing()
///     .parent("/vol/bucket")
///     .service_id("ozone1")
///     .source(WebHdfsListing::from_json(body).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(listing.entries[0].path(), "ofs://ozone1/vol/bucket/a.txt");
/// ```
#[derive(Debug, Clone)]
pub struct WebHdfsListing {
    entries: Vec<Value>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "FileStatuses")]
    file_statuses: FileStatuses,
}

#[derive(Deserialize)]
struct FileStatuses {
    #[serde(rename = "FileStatus", default)]
    file_status: Vec<Value>,
}

impl WebHdfsListing {
    /// Parse a `{"FileStatuses": {"FileStatus": [...]}}` body.
    pub fn from_json(body: &str) -> Result<Self, OfsError> {
        let envelope: Envelope = serde_json::from_str(body).map_err(OfsError::MalformedListing)?;
        Ok(Self {
            entries: envelope.file_statuses.file_status,
        })
    }

    /// Number of `FileStatus` objects in the body, valid or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatusSource for WebHdfsListing {
    fn statuses(&self) -> Box<dyn Iterator<Item = Result<RawStatus, OfsError>> + '_> {
        Box::new(self.entries.iter().map(RawStatus::from_value))
    }
}
