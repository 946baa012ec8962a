use std::fmt;
use std::sync::Arc;

use crate::BoxError;

type RenderFn = dyn Fn(&str, &[Option<&str>]) -> Result<String, BoxError> + Send + Sync;

/// What a matched segment displays instead of the matched text
///
/// A `Computed` render receives the full match and its groups as
/// `[full, group 1, group 2, ...]`. Groups that did not participate
/// in the match are `None`. Literal patterns only pass `[full]`.
#[derive(Clone)]
pub enum Render {
    Static(String),
    Computed(Arc<RenderFn>),
}

impl Render {
    /// Always display `text`, whatever was matched
    pub fn text(text: impl Into<String>) -> Self {
        Self::Static(text.into())
    }

    /// Compute the display value from the match
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&str, &[Option<&str>]) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(move |full, groups| Ok(f(full, groups))))
    }

    /// Compute the display value from the match, failing the whole
    /// segmentation call if `f` returns an error
    pub fn try_with<F, E>(f: F) -> Self
    where
        F: Fn(&str, &[Option<&str>]) -> Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::Computed(Arc::new(move |full, groups| f(full, groups).map_err(Into::into)))
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    pub(crate) fn apply(&self, full: &str, groups: &[Option<&str>]) -> Result<String, BoxError> {
        match self {
            Self::Static(text) => Ok(text.clone()),
            Self::Computed(f) => f(full, groups),
        }
    }
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Render {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Render {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}
