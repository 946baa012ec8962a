use regex_automata::meta;
use regex_automata::util::syntax;

/// Regex flags applied to every regex [`Pattern`](crate::Pattern) of an
/// [`Extractor`](crate::Extractor)
///
/// Literal patterns ignore these flags and always match verbatim.
/// Inline flags such as `(?i)` inside a pattern still override them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Match letters regardless of case (`i` flag)
    pub case_insensitive: bool,
    /// `^` and `$` also match at line boundaries (`m` flag)
    pub multi_line: bool,
    /// `.` also matches `\n` (`s` flag)
    pub dot_matches_new_line: bool,
    /// Unicode-aware classes and case folding (`u` flag)
    pub unicode: bool,
    /// Upper bound in bytes on the compiled NFA of each pattern
    pub size_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    pub(crate) fn syntax(&self) -> syntax::Config {
        syntax::Config::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .unicode(self.unicode)
    }

    /// Literals never fold case
    pub(crate) fn literal_syntax(&self) -> syntax::Config {
        syntax::Config::new()
    }

    pub(crate) fn meta(&self) -> meta::Config {
        let cfg = meta::Config::new();
        match self.size_limit {
            Some(limit) => cfg.nfa_size_limit(Some(limit)),
            None => cfg,
        }
    }
}
