mod claims;

use std::ops::Range;

use log::trace;
use regex_automata::meta::Regex;
use regex_automata::Input;

pub use claims::{Claim, Claims, Gaps};

/// One match of a single pattern, in byte offsets of the full text
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Found {
    pub span: Range<usize>,
    /// Capture groups 1.., only filled when groups were requested
    pub groups: Vec<Option<Range<usize>>>,
}

impl Found {
    fn shift(mut self, by: usize) -> Self {
        self.span = self.span.start + by..self.span.end + by;
        for group in self.groups.iter_mut().flatten() {
            *group = group.start + by..group.end + by;
        }
        self
    }

    /// `[full, group 1, ...]` as slices of `text`
    pub fn slices<'t>(&self, text: &'t str) -> Vec<Option<&'t str>> {
        std::iter::once(Some(&text[self.span.clone()]))
            .chain(self.groups.iter().map(|g| g.clone().map(|g| &text[g])))
            .collect()
    }
}

/// A compiled pattern, searching one haystack at a time
#[derive(Debug, Clone)]
pub(crate) struct Matcher {
    regex: Regex,
}

impl Matcher {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Leftmost-first match in `haystack`
    pub fn find(&self, haystack: &str, groups: bool) -> Option<Found> {
        let input = Input::new(haystack);

        if !groups {
            return self.regex.search(&input).map(|m| Found {
                span: m.range(),
                groups: vec![],
            });
        }

        let mut caps = self.regex.create_captures();
        self.regex.search_captures(&input, &mut caps);
        let span = caps.get_match()?.range();
        let groups = caps.iter().skip(1).map(|g| g.map(|g| g.range())).collect();
        Some(Found { span, groups })
    }

    /// All matches of this pattern that fit in the gaps left by `claims`
    ///
    /// Each search only sees the unclaimed rest of the current gap, so the
    /// gap edges behave as the start and end of text. Zero-width matches
    /// never claim anything; the cursor steps over one character instead.
    pub fn find_all(
        &self,
        text: &str,
        claims: &Claims,
        groups: bool,
        limit: Option<usize>,
    ) -> Vec<Found> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut found = vec![];

        'gaps: for gap in claims.gaps(text.len()) {
            let mut cursor = gap.start;

            while cursor < gap.end {
                if found.len() >= limit {
                    break 'gaps;
                }

                let Some(m) = self.find(&text[cursor..gap.end], groups) else {
                    break;
                };
                let m = m.shift(cursor);

                if m.span.is_empty() {
                    trace!("skipping empty match at {}", m.span.start);
                    cursor = next_char(text, m.span.start);
                    continue;
                }

                cursor = m.span.end;
                if claims.is_free(&m.span) {
                    found.push(m);
                }
            }
        }

        found
    }
}

/// Offset just past the character at `pos`
fn next_char(text: &str, pos: usize) -> usize {
    pos + text[pos..].chars().next().map_or(1, char::len_utf8)
}
