mod config;
mod error;
mod pattern;
pub mod search;
mod segment;

use log::{debug, trace};

pub use config::Config;
pub use error::{BoxError, Error, Result};
pub use pattern::{Pattern, Render, Source};
pub use segment::{Matched, Segment};

use search::{Claims, Matcher};

/// A compiled, ordered list of patterns
///
/// Compiling is the only fallible step for bad regexes; once built, an
/// `Extractor` can segment any number of texts, from any number of threads.
#[derive(Debug, Clone)]
pub struct Extractor<H = (), X = ()> {
    patterns: Vec<Pattern<H, X>>,
    matchers: Vec<Matcher>,
}

impl<H, X> Extractor<H, X> {
    pub fn new(patterns: impl IntoIterator<Item = Pattern<H, X>>) -> Result<Self> {
        Self::with_config(patterns, &Config::default())
    }

    pub fn with_config(
        patterns: impl IntoIterator<Item = Pattern<H, X>>,
        config: &Config,
    ) -> Result<Self> {
        let patterns: Vec<_> = patterns.into_iter().collect();
        let matchers = compile(&patterns, config)?;
        Ok(Self { patterns, matchers })
    }

    pub fn patterns(&self) -> &[Pattern<H, X>] {
        &self.patterns
    }
}

impl<H: Clone, X: Clone> Extractor<H, X> {
    /// Split `text` into plain and matched segments
    ///
    /// Concatenating the original text of every segment (see
    /// [`Segment::source`]) gives back `text`.
    pub fn segment(&self, text: &str) -> Result<Vec<Segment<H, X>>> {
        run(text, &self.patterns, &self.matchers)
    }
}

/// Compile `patterns` and segment `text` in one go
pub fn segment<H: Clone, X: Clone>(
    text: &str,
    patterns: &[Pattern<H, X>],
) -> Result<Vec<Segment<H, X>>> {
    let matchers = compile(patterns, &Config::default())?;
    run(text, patterns, &matchers)
}

fn compile<H, X>(patterns: &[Pattern<H, X>], config: &Config) -> Result<Vec<Matcher>> {
    let matchers = patterns
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.source
                .compile(config)
                .map(Matcher::new)
                .map_err(|source| Error::Regex { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("compiled {} patterns", matchers.len());
    Ok(matchers)
}

fn run<H: Clone, X: Clone>(
    text: &str,
    patterns: &[Pattern<H, X>],
    matchers: &[Matcher],
) -> Result<Vec<Segment<H, X>>> {
    let mut claims = Claims::new();

    for (index, (pattern, matcher)) in patterns.iter().zip(matchers).enumerate() {
        let found = matcher.find_all(text, &claims, pattern.wants_groups(), pattern.max_matches);

        for m in found {
            let display = pattern
                .display(&m.slices(text))
                .map_err(|source| Error::Render { index, source })?;

            trace!("pattern {} claims {:?}", index, m.span);
            claims.claim(m.span, index, display);
        }
    }

    let segments = segment::build(text, claims, patterns);
    debug!(
        "segmented {} bytes into {} segments",
        text.len(),
        segments.len()
    );
    Ok(segments)
}
