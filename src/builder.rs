use crate::engine::{run, EngineOptions};
use crate::entry::Entry;
use crate::error::SimpairError;
use crate::results::Report;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// RankBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a simpair ranking.
///
/// Created via [`simpair::rank()`](crate::rank). Configure with chained
/// builder methods, then call [`run()`](RankBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let report = simpair::rank()
///     .source(DirSource::new("/some/dir"))
///     .limit(10)
///     .run()?;
/// ```
#[derive(Default)]
pub struct RankBuilder {
    source: Option<Box<dyn Source>>,
    limit:  Option<usize>,
}

impl RankBuilder {
    // ── Source ────────────────────────────────────────────────────────────

    /// Set the source to list entries from.
    ///
    /// Any type implementing [`Source`] is accepted — directories, archives,
    /// in-memory collections, etc.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    /// Shorthand for ranking an already-materialized entry list.
    ///
    /// Equivalent to `.source(ListSource(entries))`. Useful when the caller
    /// has done its own listing — degenerate-size handling, filtering — and
    /// only wants the ranking.
    pub fn entries(mut self, entries: Vec<Entry>) -> Self {
        self.source = Some(Box::new(ListSource(entries)));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Keep only the `n` closest pairs in the report.
    ///
    /// Applied after the sort — every pair is still enumerated and scored,
    /// and [`RankStats::pairs`](crate::RankStats::pairs) reflects the full
    /// count.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// List the source and rank every unordered pair of its entries.
    ///
    /// # Errors
    ///
    /// Returns `Err` when no source was provided, or when the source fails
    /// to produce its listing — listing failures are fatal, there is no
    /// partial-result mode.
    pub fn run(self) -> Result<Report, SimpairError> {
        let source = self
            .source
            .ok_or_else(|| SimpairError::InvalidSource("no source provided".into()))?;

        let entries = source.list()?;

        Ok(run(entries, EngineOptions { limit: self.limit }))
    }
}

// ---------------------------------------------------------------------------
// Built-in sources (simpair ships these as conveniences)
// ---------------------------------------------------------------------------

/// Yields a pre-built entry list verbatim. Used by `.entries()`.
struct ListSource(Vec<Entry>);

impl Source for ListSource {
    fn list(&self) -> Result<Vec<Entry>, SimpairError> {
        Ok(self.0.clone())
    }
}
