/// Unweighted Levenshtein edit distance between `a` and `b`.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`, operating on Unicode scalar
/// values so a multi-byte character costs one edit, not several. Symmetric,
/// and a true metric (the triangle inequality holds).
///
/// Runs the classic DP with a single rolling row of length `|b| + 1`
/// instead of a full matrix. Identical inputs short-circuit to 0.
///
/// # Example
///
/// ```rust
/// use simpair::distance;
///
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let n = b.chars().count();
    let mut row: Vec<usize> = (0..=n).collect();

    for ca in a.chars() {
        // diag holds row[j] from the previous iteration, i.e. the
        // diagonal cell of the full matrix.
        let mut diag = row[0];
        row[0] += 1;
        for (j, cb) in b.chars().enumerate() {
            let mut best = (row[j + 1] + 1).min(row[j] + 1); // delete & insert
            best = best.min(if cb == ca { diag } else { diag + 1 }); // match & substitute
            diag = row[j + 1];
            row[j + 1] = best;
        }
    }

    row[n]
}
