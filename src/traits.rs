use crate::error::OfsError;
use crate::status::RawStatus;

/// A source of raw status records for one directory listing.
///
/// Implement this to feed [`ListingBuilder`](crate::ListingBuilder) from
/// whatever the backend client hands back: a parsed WebHDFS response, an
/// in-memory vector, a test fixture.
///
/// # Error Handling
///
/// A record that cannot be turned into a [`RawStatus`] should be yielded as
/// `Err(OfsError)` rather than skipped. Per-entry errors that report
/// [`OfsError::is_recoverable`] are collected into
/// [`Listing::errors`](crate::Listing::errors) when `.collect_errors(true)`
/// is set on the builder.
///
/// # Example
///
/// ```rust
/// use ofsstat::{OfsError, RawStatus, StatusSource};
///
/// struct Names(Vec<&'static str>);
///
/// impl StatusSource for Names {
///     fn statuses(&self) -> Box<dyn Iterator<Item = Result<RawStatus, OfsError>> + '_> {
///         Box::new(self.0.iter().map(|name| Ok::<_, OfsError>(RawStatus::file(*name, 0))))
///     }
/// }
///
/// let listing = ofsstat::listing()
///     .parent("/vol/bucket")
///     .source(Names(vec!["a", "b"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(listing.entries.len(), 2);
/// ```
pub trait StatusSource {
    /// Yield the raw records of the listing, in backend order.
    fn statuses(&self) -> Box<dyn Iterator<Item = Result<RawStatus, OfsError>> + '_>;
}

impl StatusSource for Vec<RawStatus> {
    fn statuses(&self) -> Box<dyn Iterator<Item = Result<RawStatus, OfsError>> + '_> {
        Box::new(self.iter().cloned().map(Ok::<RawStatus, OfsError>))
    }
}
