use std::path::PathBuf;
use std::time::Duration;

use crate::entry::Entry;

/// The output of a completed ranking.
///
/// `combinations` is the full sorted pair list unless a limit was set on the
/// builder, in which case it holds the closest pairs only. [`RankStats`]
/// always reflects the complete enumeration.
#[derive(Debug)]
pub struct Report {
    /// Number of entries the source produced.
    pub entries: usize,

    /// All unordered pairs, ascending by distance. Equal distances keep the
    /// order in which the pairs were generated, so the list is deterministic
    /// for a given listing order.
    pub combinations: Vec<Combination>,

    /// Ranking performance statistics.
    pub stats: RankStats,
}

/// One unordered pair of entries plus its computed distance.
#[derive(Debug)]
pub struct Combination {
    /// The pair member with the lower listing index.
    pub first: Contender,

    /// The pair member with the higher listing index.
    pub second: Contender,

    /// Levenshtein distance between the two keys below.
    pub dist: usize,
}

/// One side of a [`Combination`]: the raw entry data plus the canonical key
/// that was actually compared for this pair.
#[derive(Debug)]
pub struct Contender {
    /// The entry's raw, unmodified name.
    pub name: String,

    /// Full path to the entry.
    pub path: PathBuf,

    /// Size in bytes, as reported by the source.
    pub size: u64,

    /// The canonical key used for this slot — extension kept or stripped
    /// depending on the pair's extension policy.
    pub key: String,
}

impl Contender {
    pub(crate) fn new(entry: &Entry, key: &str) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
            size: entry.size,
            key:  key.to_owned(),
        }
    }
}

/// Performance statistics for a completed ranking.
#[derive(Debug)]
pub struct RankStats {
    /// Total number of pairs enumerated — `n·(n-1)/2` for `n` entries,
    /// regardless of any output limit.
    pub pairs: usize,

    /// Wall-clock time from key precomputation to the end of the sort.
    pub duration: Duration,

    /// Pairs compared per second. Convenience field — equals
    /// `pairs / duration.as_secs_f64()`, clamped to 0 on zero-duration runs.
    pub pairs_per_sec: usize,
}

impl RankStats {
    /// Compute `pairs_per_sec` from the raw count and duration.
    pub(crate) fn compute(pairs: usize, duration: Duration) -> Self {
        let pps = if duration.as_secs_f64() > 0.0 {
            (pairs as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            pairs,
            duration,
            pairs_per_sec: pps,
        }
    }
}
