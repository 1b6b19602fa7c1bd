//! # simpair
//!
//! Pairwise name-similarity ranker — generic, embeddable, zero opinions.
//!
//! simpair surfaces likely duplicate, renamed or near-identical entries in a
//! flat collection by reducing every name to a canonical token-sorted key,
//! measuring the Levenshtein distance between the keys of every unordered
//! pair, and ranking the pairs from closest to farthest. It owns the
//! normalization pipeline ([`Normalizer`]), the distance engine
//! ([`distance`]), the pair ranker, the input contract ([`Source`]), the
//! error type and the builder API. It does **not** own output formatting or
//! directory policy — those belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use simpair::{Entry, EntryKind};
//!
//! let entry = |name: &str, size: u64| Entry {
//!     path: name.into(),
//!     name: name.to_string(),
//!     kind: EntryKind::File,
//!     size,
//! };
//!
//! let report = simpair::rank()
//!     .entries(vec![
//!         entry("Movie.Title.2020.1080p.mkv", 700_000_000),
//!         entry("Movie Title (2020).mkv", 650_000_000),
//!         entry("report.txt", 12_000),
//!     ])
//!     .run()
//!     .unwrap();
//!
//! // 3 entries -> 3 unordered pairs; the renamed movie pair ranks first
//! // because both names normalize to the same key.
//! assert_eq!(report.combinations.len(), 3);
//! assert_eq!(report.combinations[0].dist, 0);
//! assert_eq!(report.combinations[0].first.key, "2020 mkv movie title");
//! ```
//!
//! # Custom Sources
//!
//! Implement [`Source`] to rank anything listable:
//!
//! ```rust
//! use simpair::{Source, Entry, EntryKind, SimpairError};
//!
//! struct NameSource(Vec<&'static str>);
//!
//! impl Source for NameSource {
//!     fn list(&self) -> Result<Vec<Entry>, SimpairError> {
//!         Ok(self.0.iter().map(|name| Entry {
//!             path: name.into(),
//!             name: name.to_string(),
//!             kind: EntryKind::File,
//!             size: 0,
//!         }).collect())
//!     }
//! }
//!
//! let report = simpair::rank()
//!     .source(NameSource(vec!["invoice_jan.txt", "invoice_feb.txt", "report.txt"]))
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(report.entries, 3);
//! assert_eq!(report.stats.pairs, 3);
//! ```
//!
//! For real directories the built-in [`DirSource`] lists one directory's
//! immediate children, non-recursively.

#![forbid(unsafe_code)]

mod builder;
mod distance;
mod engine;
mod entry;
mod error;
mod normalize;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::RankBuilder;
pub use distance::distance;
pub use entry::{Entry, EntryKind};
pub use error::SimpairError;
pub use normalize::{KeyPair, Normalizer};
pub use results::{Combination, Contender, RankStats, Report};
pub use traits::{DirSource, Source};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`RankBuilder`] to configure and run a ranking.
///
/// # Example
///
/// ```rust
/// use simpair::{Entry, EntryKind};
///
/// let entries = vec![
///     Entry { path: "d.txt".into(), name: "d.txt".into(), kind: EntryKind::File, size: 0 },
///     Entry { path: "e.txt".into(), name: "e.txt".into(), kind: EntryKind::File, size: 0 },
///     Entry { path: "f.txt".into(), name: "f.txt".into(), kind: EntryKind::File, size: 0 },
/// ];
///
/// let report = simpair::rank()
///     .entries(entries)
///     .run()
///     .unwrap();
///
/// // All three pairs tie at distance 1 and keep generation order.
/// assert!(report.combinations.iter().all(|c| c.dist == 1));
/// assert_eq!(report.combinations[0].first.name, "d.txt");
/// assert_eq!(report.combinations[0].second.name, "e.txt");
/// ```
pub fn rank() -> RankBuilder {
    RankBuilder::default()
}
