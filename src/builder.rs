use crate::config::OfsConfig;
use crate::error::OfsError;
use crate::results::{Listing, ListingStats};
use crate::stat::OzoneStat;
use crate::traits::StatusSource;

// ---------------------------------------------------------------------------
// ListingBuilder
// ---------------------------------------------------------------------------

/// Entry point for turning a backend listing into [`OzoneStat`]s.
///
/// Created via [`ofsstat::listing()`](crate::listing). Configure with chained
/// builder methods, then call [`build()`](ListingBuilder::build).
///
/// # Example
///
/// ```rust,ignore
/// let listing = ofsstat::listing()
///     .parent("/vol/bucket")
///     .config(&config)?
///     .source(WebHdfsListing::from_json(&body)?)
///     .collect_errors(true)
///     .build()?;
/// ```
#[derive(Default)]
pub struct ListingBuilder {
    parent:         Option<String>,
    service_id:     Option<String>,
    source:         Option<Box<dyn StatusSource>>,
    limit:          Option<usize>,
    collect_errors: bool,
}

impl ListingBuilder {
    // ── Location ──────────────────────────────────────────────────────────

    /// The directory the entries were listed under, e.g. `/vol/bucket`.
    pub fn parent(mut self, path: impl Into<String>) -> Self {
        self.parent = Some(path.into());
        self
    }

    /// Service id to qualify paths with. An empty id means "none".
    pub fn service_id(mut self, id: impl Into<String>) -> Self {
        self.service_id = Some(id.into());
        self
    }

    /// Take the service id from a loaded [`OfsConfig`].
    ///
    /// Replaces any id set earlier, including with "none" when the config
    /// does not name one.
    ///
    /// # Errors
    ///
    /// Propagates [`OfsConfig::resolved_service_id`] failures.
    pub fn config(mut self, config: &OfsConfig) -> Result<Self, OfsError> {
        self.service_id = config.resolved_service_id()?;
        Ok(self)
    }

    // ── Source ────────────────────────────────────────────────────────────

    /// Set the source of raw status records.
    pub fn source(mut self, s: impl StatusSource + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Stop after `n` entries have been built.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Collect recoverable per-entry errors into [`Listing::errors`].
    ///
    /// Disabled by default, in which case the first bad entry fails the build.
    pub fn collect_errors(mut self, yes: bool) -> Self {
        self.collect_errors = yes;
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Build one [`OzoneStat`] per record from the source.
    ///
    /// # Errors
    ///
    /// [`OfsError::MissingParent`] / [`OfsError::MissingSource`] when not
    /// configured, and any per-entry error from the source that is either
    /// fatal or arrives while `.collect_errors(false)`.
    pub fn build(self) -> Result<Listing, OfsError> {
        let parent = self.parent.ok_or(OfsError::MissingParent)?;
        let source = self.source.ok_or(OfsError::MissingSource)?;
        let service_id = self.service_id.as_deref();

        let mut entries = Vec::new();
        let mut errors = Vec::new();

        for status in source.statuses() {
            if self.limit.is_some_and(|lim| entries.len() >= lim) {
                break;
            }

            match status {
                Ok(status) => entries.push(OzoneStat::new(status, &parent, service_id)),
                Err(e) if self.collect_errors && e.is_recoverable() => {
                    tracing::warn!(parent = %parent, error = %e, "skipping listing entry");
                    errors.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Listing {
            stats: ListingStats::compute(&entries),
            parent,
            entries,
            errors,
        })
    }
}
