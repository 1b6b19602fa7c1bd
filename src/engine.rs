use std::time::Instant;

use log::debug;

use crate::distance::distance;
use crate::entry::Entry;
use crate::normalize::{KeyPair, Normalizer};
use crate::results::{Combination, Contender, RankStats, Report};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Enumerate, score and rank every unordered pair of `entries`.
///
/// This is the core engine. Called by `RankBuilder::run()` after the source
/// has produced the entry list. Total for any entry count — zero or one
/// entries simply yield an empty combination list.
pub(crate) fn run(entries: Vec<Entry>, opts: EngineOptions) -> Report {
    let normalizer = Normalizer::new();
    let start = Instant::now();

    // Both key variants per entry, up front. Pair enumeration only ever
    // selects from these — keys are never derived inside the pair loop.
    let keys: Vec<KeyPair> = entries
        .iter()
        .map(|e| normalizer.key_pair(&e.name))
        .collect();

    let n = entries.len();
    let mut combinations = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            let first = &entries[i];
            let second = &entries[j];

            // The extension is kept unless both entries are directories.
            // One decision per pair, applied to both slots.
            let keep_ext = !first.is_dir() || (first.is_dir() != second.is_dir());

            let first_key = if keep_ext { &keys[i].kept } else { &keys[i].stripped };
            let second_key = if keep_ext { &keys[j].kept } else { &keys[j].stripped };

            combinations.push(Combination {
                first:  Contender::new(first, first_key),
                second: Contender::new(second, second_key),
                dist:   distance(first_key, second_key),
            });
        }
    }

    // Stable sort: equal distances keep generation order, so two runs over
    // the same listing produce identical output.
    combinations.sort_by_key(|c| c.dist);

    let pairs = combinations.len();
    if let Some(limit) = opts.limit {
        combinations.truncate(limit);
    }

    let duration = start.elapsed();
    debug!("ranked {pairs} pairs across {n} entries in {duration:?}");

    Report {
        entries: n,
        combinations,
        stats: RankStats::compute(pairs, duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn file(name: &str) -> Entry {
        Entry {
            path: name.into(),
            name: name.to_string(),
            kind: EntryKind::File,
            size: 0,
        }
    }

    fn dir(name: &str) -> Entry {
        Entry {
            path: name.into(),
            name: name.to_string(),
            kind: EntryKind::Dir,
            size: 0,
        }
    }

    fn run_all(entries: Vec<Entry>) -> Report {
        run(entries, EngineOptions { limit: None })
    }

    #[test]
    fn file_pairs_keep_extensions() {
        let report = run_all(vec![file("report1.txt"), file("report2.txt")]);
        let comb = &report.combinations[0];
        assert_eq!(comb.first.key, "report1 txt");
        assert_eq!(comb.second.key, "report2 txt");
        assert_eq!(comb.dist, 1);
    }

    #[test]
    fn directory_pairs_strip_extensions() {
        // "Photos.2020" vs "Photos.2021" as directories: the dotted suffix
        // is treated as an extension and cut, so the keys coincide.
        let report = run_all(vec![dir("Photos.2020"), dir("Photos.2021")]);
        let comb = &report.combinations[0];
        assert_eq!(comb.first.key, "photos");
        assert_eq!(comb.second.key, "photos");
        assert_eq!(comb.dist, 0);

        // The same names as files keep their suffixes and differ.
        let report = run_all(vec![file("Photos.2020"), file("Photos.2021")]);
        assert_eq!(report.combinations[0].dist, 1);
    }

    #[test]
    fn mixed_pairs_keep_extensions_regardless_of_slot_order() {
        let report = run_all(vec![dir("Photos"), file("Photos.zip")]);
        let comb = &report.combinations[0];
        assert_eq!(comb.first.key, "photos");
        assert_eq!(comb.second.key, "photos zip");
        assert_eq!(comb.dist, 4);

        let report = run_all(vec![file("Photos.zip"), dir("Photos")]);
        assert_eq!(report.combinations[0].dist, 4);
    }

    #[test]
    fn degenerate_sizes_yield_empty_or_single_lists() {
        assert!(run_all(vec![]).combinations.is_empty());
        assert!(run_all(vec![file("only.txt")]).combinations.is_empty());
        assert_eq!(run_all(vec![file("a1.txt"), file("a2.txt")]).combinations.len(), 1);
    }

    #[test]
    fn limit_truncates_output_but_not_stats() {
        let entries = vec![file("d.txt"), file("e.txt"), file("f.txt"), file("g.txt")];
        let report = run(entries, EngineOptions { limit: Some(2) });
        assert_eq!(report.combinations.len(), 2);
        assert_eq!(report.stats.pairs, 6);
    }
}
