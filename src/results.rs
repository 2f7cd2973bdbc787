use crate::error::OfsError;
use crate::stat::OzoneStat;

/// The output of a built listing.
///
/// `errors` is opt-in. Enable it on the builder with `.collect_errors(true)`;
/// otherwise the first bad entry fails the build.
#[derive(Debug)]
pub struct Listing {
    /// Parent path the entries were listed under, as given to the builder.
    pub parent: String,

    /// One stat per accepted entry, in source order.
    pub entries: Vec<OzoneStat>,

    /// Counts over `entries`.
    pub stats: ListingStats,

    /// Per-entry errors that were skipped.
    /// Only populated if `.collect_errors(true)` was set on the builder.
    pub errors: Vec<OfsError>,
}

/// Summary counts for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    /// Entries that are not directories.
    pub files: usize,

    pub dirs: usize,

    /// Sum of file sizes. Directories never contribute, whatever size the
    /// backend reported for them.
    pub total_bytes: u64,
}

impl ListingStats {
    pub(crate) fn compute(entries: &[OzoneStat]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, stat| {
            if stat.is_dir() {
                acc.dirs += 1;
            } else {
                acc.files += 1;
                acc.total_bytes = acc.total_bytes.saturating_add(stat.size());
            }
            acc
        })
    }
}
