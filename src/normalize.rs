use regex::Regex;

/// The two canonical-key variants precomputed for each entry.
///
/// Which variant a pair uses is decided per comparison by the engine's
/// extension policy, so both are derived up front — once per entry, never
/// per pair.
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// Canonical key with the file extension retained.
    pub kept: String,

    /// Canonical key with the trailing extension removed before
    /// normalization.
    pub stripped: String,
}

/// Converts raw names into canonical comparison keys.
///
/// All rule tables are compiled once in [`Normalizer::new`] and held as
/// read-only state; the pipeline itself is a pure function of its input.
/// Normalization is idempotent: feeding a canonical key back in returns it
/// unchanged.
///
/// # Example
///
/// ```rust
/// use simpair::Normalizer;
///
/// let n = Normalizer::new();
/// assert_eq!(n.normalize("Movie.Title.2020.1080p.mkv"), "2020 mkv movie title");
/// assert_eq!(n.normalize("Movie Title (2020).mkv"),     "2020 mkv movie title");
/// ```
pub struct Normalizer {
    separators:  Regex,
    resolutions: Regex,
    stopwords:   Regex,
    whitespace:  Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Compile the rule tables. Patterns are literals, so compilation cannot
    /// fail at runtime.
    pub fn new() -> Self {
        Self {
            separators:  Regex::new(r"[-_.&,()\[\]{}]+").unwrap(),
            resolutions: Regex::new(r"(\d+x\d+px\b)|(\d+px\b)|(\bx\d+)|(\d+p\b)|(\b720\b)|(\b1080\b)")
                .unwrap(),
            stopwords:   Regex::new(
                r"(\bthe\b)|(\ba\b)|(\bto\b)|(\bfrom\b)|(\bby\b)|(\bis\b)|(\bon\b)|(\bat\b)|(\bin\b)|(\bx\b)|(\band\b)|(\bfor\b)|(\bwith\b)",
            )
            .unwrap(),
            whitespace:  Regex::new(r"\s+").unwrap(),
        }
    }

    /// Reduce `name` to its canonical comparison key.
    ///
    /// Lowercases, collapses separator runs to spaces, drops resolution
    /// markers and stopwords, collapses whitespace, then sorts the remaining
    /// tokens so word order never affects the key. Total — every input maps
    /// to a key, possibly the empty string.
    pub fn normalize(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        let s = self.separators.replace_all(&lower, " ");
        let s = self.resolutions.replace_all(&s, " ");
        let s = self.stopwords.replace_all(&s, " ");
        let s = self.whitespace.replace_all(&s, " ");
        let mut tokens: Vec<&str> = s.trim().split(' ').collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }

    /// Derive both key variants for `name`.
    pub fn key_pair(&self, name: &str) -> KeyPair {
        KeyPair {
            kept:     self.normalize(name),
            stripped: self.normalize(cut_ext(name)),
        }
    }
}

/// Drop the trailing extension (everything from the last `.`).
///
/// Leading-dot names follow the hidden-file convention and have no
/// extension to cut.
fn cut_ext(name: &str) -> &str {
    if name.starts_with('.') {
        return name;
    }
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_tokens_so_word_order_is_irrelevant() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("Title Movie"), n.normalize("Movie Title"));
        assert_eq!(n.normalize("b a"), n.normalize("a b"));
    }

    #[test]
    fn is_idempotent() {
        let n = Normalizer::new();
        for name in ["Movie.Title.2020.1080p.mkv", "- x -", "résumé_v2.pdf", ""] {
            let once = n.normalize(name);
            assert_eq!(n.normalize(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn collapses_mixed_separators() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("foo_bar-baz.qux"), n.normalize("foo bar baz qux"));
        assert_eq!(n.normalize("[foo]{bar}(baz)"), "bar baz foo");
    }

    #[test]
    fn strips_resolution_markers() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("wallpaper 1080p"), "wallpaper");
        assert_eq!(n.normalize("wallpaper 720"), "wallpaper");
        assert_eq!(n.normalize("icon 32px"), "icon");
        assert_eq!(n.normalize("thumb 640x480px"), "thumb");
    }

    #[test]
    fn strips_stopwords_as_whole_words_only() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("The Name of the Rose"), "name of rose");
        // "theater" contains "the" but is not a stopword
        assert_eq!(n.normalize("theater"), "theater");
        assert_eq!(n.normalize("format"), "format");
    }

    #[test]
    fn noise_only_names_normalize_to_empty() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("- x -"), "");
        assert_eq!(n.normalize("the a to"), "");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn renamed_release_collapses_to_one_key() {
        let n = Normalizer::new();
        assert_eq!(
            n.normalize("Movie.Title.2020.1080p.mkv"),
            n.normalize("Movie Title (2020).mkv"),
        );
    }

    #[test]
    fn cut_ext_drops_only_the_last_extension() {
        assert_eq!(cut_ext("archive.tar.gz"), "archive.tar");
        assert_eq!(cut_ext("plain"), "plain");
        assert_eq!(cut_ext("name."), "name");
    }

    #[test]
    fn cut_ext_leaves_hidden_names_alone() {
        assert_eq!(cut_ext(".bashrc"), ".bashrc");
        assert_eq!(cut_ext(".config.bak"), ".config.bak");
    }

    #[test]
    fn key_pair_differs_only_by_extension() {
        let n = Normalizer::new();
        let keys = n.key_pair("Photos.zip");
        assert_eq!(keys.kept, "photos zip");
        assert_eq!(keys.stripped, "photos");
    }
}
