use regex_automata::meta::{BuildError, Regex};

use super::Source;
use crate::Config;

impl Source {
    /// The regex this source compiles to
    ///
    /// Literals are escaped so every byte matches verbatim.
    pub fn to_regex(&self) -> String {
        match self {
            Self::Regex(code) => code.clone(),
            Self::Literal(text) => regex_syntax::escape(text),
        }
    }

    pub(crate) fn compile(&self, config: &Config) -> Result<Regex, BuildError> {
        let syntax = match self {
            Self::Regex(_) => config.syntax(),
            Self::Literal(_) => config.literal_syntax(),
        };

        Regex::builder()
            .configure(config.meta())
            .syntax(syntax)
            .build(&self.to_regex())
    }
}
