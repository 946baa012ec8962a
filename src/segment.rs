use std::ops::Range;

use crate::search::Claims;
use crate::Pattern;

/// One piece of segmented text
///
/// Plain segments hold the original text of `span`. Matched segments hold
/// the display value of the pattern that claimed `span`, which is the
/// matched text unless the pattern renders something else.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<H = (), X = ()> {
    pub children: String,
    /// Byte range in the original text
    pub span: Range<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub matched: Option<Matched<H, X>>,
}

/// Data copied from the pattern that claimed a [`Segment`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matched<H = (), X = ()> {
    /// Index of the pattern in the list it was supplied in
    pub pattern: usize,
    pub handle: Option<H>,
    pub extra: X,
}

impl<H, X> Segment<H, X> {
    pub fn plain(text: &str, span: Range<usize>) -> Self {
        Self {
            children: text[span.clone()].to_owned(),
            span,
            matched: None,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.matched.is_none()
    }

    pub fn handle(&self) -> Option<&H> {
        self.matched.as_ref().and_then(|m| m.handle.as_ref())
    }

    /// The original text this segment covers, before any rendering
    pub fn source<'t>(&self, text: &'t str) -> &'t str {
        &text[self.span.clone()]
    }
}

/// Lay out `claims` over `text`, filling the gaps with plain segments
///
/// Text with no claims at all yields exactly one plain segment, even when
/// empty.
pub(crate) fn build<H: Clone, X: Clone>(
    text: &str,
    claims: Claims,
    patterns: &[Pattern<H, X>],
) -> Vec<Segment<H, X>> {
    if claims.is_empty() {
        return vec![Segment::plain(text, 0..text.len())];
    }

    let mut segments = Vec::with_capacity(claims.len() * 2 + 1);
    let mut pos = 0;

    for claim in claims {
        if claim.span.start > pos {
            segments.push(Segment::plain(text, pos..claim.span.start));
        }

        pos = claim.span.end;
        let pattern = &patterns[claim.pattern];
        segments.push(Segment {
            children: claim.display,
            span: claim.span,
            matched: Some(Matched {
                pattern: claim.pattern,
                handle: pattern.handle.clone(),
                extra: pattern.extra.clone(),
            }),
        });
    }

    if pos < text.len() {
        segments.push(Segment::plain(text, pos..text.len()));
    }

    segments
}
