use std::ops::Range;

/// A span of the original text owned by one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub span: Range<usize>,
    pub pattern: usize,
    pub display: String,
}

/// Sorted, non-overlapping set of [`Claim`]s
///
/// Every claim is non-empty. Claims are ordered by start, and since they
/// never overlap, by end too.
#[derive(Debug, Default, Clone)]
pub struct Claims {
    claims: Vec<Claim>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first claim ending after `pos`
    fn first_ending_after(&self, pos: usize) -> usize {
        self.claims.partition_point(|c| c.span.end <= pos)
    }

    /// True if `span` intersects no existing claim
    pub fn is_free(&self, span: &Range<usize>) -> bool {
        if span.is_empty() {
            return true;
        }

        let i = self.first_ending_after(span.start);
        self.claims.get(i).map_or(true, |c| c.span.start >= span.end)
    }

    /// Claim `span` for `pattern`
    ///
    /// Returns false, leaving the set untouched, if `span` is empty or
    /// not free.
    pub fn claim(&mut self, span: Range<usize>, pattern: usize, display: String) -> bool {
        if span.is_empty() || !self.is_free(&span) {
            return false;
        }

        let i = self.first_ending_after(span.start);
        self.claims.insert(
            i,
            Claim {
                span,
                pattern,
                display,
            },
        );
        true
    }

    /// The non-empty unclaimed ranges of a text of `len` bytes
    pub fn gaps(&self, len: usize) -> Gaps<'_> {
        Gaps {
            claims: self.claims.iter(),
            pos: 0,
            len,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl IntoIterator for Claims {
    type Item = Claim;
    type IntoIter = std::vec::IntoIter<Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.into_iter()
    }
}

/// Iterator over the unclaimed ranges, see [`Claims::gaps`]
pub struct Gaps<'a> {
    claims: std::slice::Iter<'a, Claim>,
    pos: usize,
    len: usize,
}

impl<'a> Iterator for Gaps<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        for claim in self.claims.by_ref() {
            let gap = self.pos..claim.span.start;
            self.pos = claim.span.end;
            if !gap.is_empty() {
                return Some(gap);
            }
        }

        if self.pos < self.len {
            let gap = self.pos..self.len;
            self.pos = self.len;
            Some(gap)
        } else {
            None
        }
    }
}
