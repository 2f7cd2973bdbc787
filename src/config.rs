use std::path::Path;

use serde::Deserialize;

use crate::error::OfsError;
use crate::path::parse_uri;

/// Which ofs service a client talks to.
///
/// Loaded from the `[ofs]` table of a TOML document:
///
/// ```toml
/// [ofs]
/// fs_defaultfs = "ofs://ozone1"
/// # service_id = "ozone1"   # optional, overrides the netloc above
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfsConfig {
    /// Default filesystem URI, e.g. `ofs://ozone1`.
    pub fs_defaultfs: Option<String>,

    /// Explicit service id. Wins over the netloc of `fs_defaultfs`.
    pub service_id: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    ofs: OfsConfig,
}

impl OfsConfig {
    /// Parse a TOML document. A missing `[ofs]` table yields the default config.
    pub fn from_toml_str(text: &str) -> Result<Self, OfsError> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(file.ofs)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OfsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| OfsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The service id paths should be qualified with, if any.
    ///
    /// # Errors
    ///
    /// [`OfsError::InvalidUri`] when no explicit id is set and `fs_defaultfs`
    /// is not an `ofs://` URI.
    pub fn resolved_service_id(&self) -> Result<Option<String>, OfsError> {
        if let Some(id) = self.service_id.as_deref().filter(|id| !id.is_empty()) {
            return Ok(Some(id.to_string()));
        }

        match self.fs_defaultfs.as_deref() {
            Some(fs) => {
                let (netloc, _) = parse_uri(fs)?;
                Ok((!netloc.is_empty()).then_some(netloc))
            }
            None => Ok(None),
        }
    }
}
