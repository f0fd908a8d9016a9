use anyhow::Result;

use crate::glob::{lexer, matcher, parser};

/// A compiled content glob pattern.
///
/// Patterns are segment-oriented: `/` splits the pattern into segments,
/// and each segment matches exactly one path component, except `**`
/// which matches any number of whole components (including zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// `**` — matches zero or more whole path components.
    AnyDirs,
    /// A sequence of parts matched against a single path component.
    Parts(Vec<Part>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// A run of literal characters.
    Literal(String),
    /// `*` — any run of characters within the component.
    AnyRun,
    /// `?` — exactly one character.
    AnyChar,
    /// `[...]` — a character class.
    Class { negated: bool, items: Vec<ClassItem> },
    /// `{a,b}` — alternation over literal fragments.
    Alternates(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassItem {
    Char(char),
    Range(char, char),
}

impl Pattern {
    /// Compiles a glob pattern string into its segment form.
    ///
    /// # Arguments
    /// * `input` - The glob pattern, e.g. `"./src/**/*.rs"`
    ///
    /// # Returns
    /// * `Ok(Pattern)` - Compiled pattern on success
    /// * `Err(anyhow::Error)` - Tokenization or parse error
    pub fn compile(input: &str) -> Result<Self> {
        let tokens = lexer::tokenize(input)?;
        parser::parse(tokens)
    }

    /// Matches a relative path against this pattern.
    ///
    /// A leading `./` on the path is ignored, mirroring pattern
    /// compilation. Paths are split on `/` and matched component by
    /// component.
    pub fn matches(&self, path: &str) -> bool {
        matcher::matches(self, path)
    }
}
