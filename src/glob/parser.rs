use anyhow::Result;

use crate::glob::ast::{Part, Pattern, Segment};
use crate::glob::lexer::Token;

/// Parses a vector of glob tokens into a compiled pattern
///
/// # Arguments
/// * `tokens` - Vector of tokens from the lexer
///
/// # Returns
/// * `Ok(Pattern)` - Compiled pattern on success
/// * `Err(anyhow::Error)` - Parse error
///
/// # Examples
/// ```rust
/// use twconf::glob::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("./src/**/*.rs").unwrap();
/// let pattern = parse(tokens).unwrap();
/// assert_eq!(pattern.segments.len(), 3);
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Pattern> {
    let mut parser = Parser::new(tokens);
    parser.parse_pattern()
}

/// Parser state for tracking the current token position
#[derive(Debug)]
struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    fn parse_pattern(&mut self) -> Result<Pattern> {
        if self.peek() == Some(&Token::Eof) {
            anyhow::bail!("Empty glob pattern");
        }
        if self.peek() == Some(&Token::Separator) {
            anyhow::bail!("Glob pattern must be relative, not start with '/'");
        }

        let mut segments = Vec::new();

        loop {
            let segment = self.parse_segment()?;
            segments.push(segment);

            match self.peek() {
                Some(Token::Separator) => {
                    self.advance(); // consume '/'
                    if self.peek() == Some(&Token::Eof) {
                        anyhow::bail!("Glob pattern must not end with '/'");
                    }
                }
                Some(Token::Eof) | None => break,
                Some(other) => {
                    anyhow::bail!("Unexpected token in glob pattern: {:?}", other);
                }
            }
        }

        // A leading `./` is accepted and ignored.
        if segments.len() > 1 && segments[0] == Segment::Parts(vec![Part::Literal(".".to_string())])
        {
            segments.remove(0);
        }

        Ok(Pattern { segments })
    }

    /// Parse one path segment, up to the next separator or end of input.
    fn parse_segment(&mut self) -> Result<Segment> {
        let mut parts = Vec::new();
        let mut saw_double_star = false;

        loop {
            match self.peek() {
                Some(Token::Separator) | Some(Token::Eof) | None => break,
                Some(Token::DoubleStar) => {
                    saw_double_star = true;
                    parts.push(Part::AnyRun); // placeholder, rejected below if mixed
                    self.advance();
                }
                Some(Token::Star) => {
                    parts.push(Part::AnyRun);
                    self.advance();
                }
                Some(Token::Question) => {
                    parts.push(Part::AnyChar);
                    self.advance();
                }
                Some(Token::Literal(_)) => {
                    if let Some(Token::Literal(s)) = self.advance() {
                        parts.push(Part::Literal(s));
                    }
                }
                Some(Token::Class { .. }) => {
                    if let Some(Token::Class { negated, items }) = self.advance() {
                        parts.push(Part::Class { negated, items });
                    }
                }
                Some(Token::Alternates(_)) => {
                    if let Some(Token::Alternates(alts)) = self.advance() {
                        parts.push(Part::Alternates(alts));
                    }
                }
            }
        }

        if parts.is_empty() {
            anyhow::bail!("Empty segment in glob pattern (check for '//')");
        }

        if saw_double_star {
            if parts.len() > 1 {
                anyhow::bail!("'**' must be the only element of its path segment");
            }
            return Ok(Segment::AnyDirs);
        }

        Ok(Segment::Parts(parts))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned();
        if token.is_some() {
            self.current += 1;
        }
        token
    }
}
