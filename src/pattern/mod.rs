mod compile;
mod render;

pub use render::Render;

use crate::BoxError;

/// What a [`Pattern`] searches for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A regular expression in `regex` crate syntax
    Regex(String),
    /// A case-sensitive substring, matched verbatim
    Literal(String),
}

/// One pattern to extract from text, with the data attached to the
/// segments it claims
///
/// `H` is an interaction handle (e.g. a press callback) and `X` any other
/// data the caller wants back on matched segments. Neither is ever
/// inspected or invoked here, only cloned onto the segments.
///
/// Patterns earlier in a list take precedence over later ones.
#[derive(Debug, Clone)]
pub struct Pattern<H = (), X = ()> {
    pub(crate) source: Source,
    pub(crate) render: Option<Render>,
    pub(crate) handle: Option<H>,
    pub(crate) extra: X,
    pub(crate) max_matches: Option<usize>,
}

impl<H, X: Default> Pattern<H, X> {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            render: None,
            handle: None,
            extra: X::default(),
            max_matches: None,
        }
    }

    pub fn regex(code: impl Into<String>) -> Self {
        Self::new(Source::Regex(code.into()))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(Source::Literal(text.into()))
    }
}

impl<H, X> Pattern<H, X> {
    /// Display something other than the matched text
    pub fn render(mut self, render: impl Into<Render>) -> Self {
        self.render = Some(render.into());
        self
    }

    pub fn handle(mut self, handle: H) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn extra(mut self, extra: X) -> Self {
        self.extra = extra;
        self
    }

    /// Stop after claiming `n` spans. `0` disables the pattern.
    pub fn max_matches(mut self, n: usize) -> Self {
        self.max_matches = Some(n);
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn get_handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn get_extra(&self) -> &X {
        &self.extra
    }

    pub(crate) fn wants_groups(&self) -> bool {
        self.render.as_ref().is_some_and(Render::is_computed)
    }

    /// Display value for a match; `groups[0]` is the full match
    pub(crate) fn display(&self, groups: &[Option<&str>]) -> Result<String, BoxError> {
        let full = groups.first().copied().flatten().unwrap_or_default();
        match &self.render {
            Some(render) => render.apply(full, groups),
            None => Ok(full.to_owned()),
        }
    }
}
