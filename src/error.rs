use regex_automata::meta::BuildError;
use thiserror::Error;

/// Error type returned by a failing [`Render`](crate::Render) function
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error raised while compiling patterns or segmenting text
#[derive(Debug, Error)]
pub enum Error {
    /// A regex pattern could not be compiled
    #[error("pattern {index}: invalid regular expression: {source}")]
    Regex {
        /// Position of the offending pattern in the pattern list
        index: usize,
        source: BuildError,
    },

    /// A render function returned an error
    #[error("pattern {index}: render failed: {source}")]
    Render {
        /// Position of the pattern whose render function failed
        index: usize,
        source: BoxError,
    },
}

impl Error {
    /// Index of the pattern that caused this error
    pub fn index(&self) -> usize {
        match self {
            Self::Regex { index, .. } | Self::Render { index, .. } => *index,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
