use anyhow::Result;

use crate::glob::ast::ClassItem;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of literal characters.
    Literal(String),
    /// `*`
    Star,
    /// `**`
    DoubleStar,
    /// `?`
    Question,
    /// `/`
    Separator,
    /// `[...]` character class.
    Class { negated: bool, items: Vec<ClassItem> },
    /// `{a,b}` alternation over literal fragments.
    Alternates(Vec<String>),
    Eof,
}

/// Tokenizes a glob pattern string into a vector of tokens
///
/// # Arguments
/// * `input` - The glob pattern to tokenize
///
/// # Returns
/// * `Ok(Vec<Token>)` - Vector of tokens on success
/// * `Err(anyhow::Error)` - Tokenization error
///
/// # Examples
/// ```rust
/// use twconf::glob::lexer::{tokenize, Token};
///
/// let tokens = tokenize("*.rs").unwrap();
/// assert_eq!(tokens[0], Token::Star);
/// assert_eq!(tokens[1], Token::Literal(".rs".to_string()));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut literal = String::new();

    while let Some((pos, ch)) = chars.next() {
        // Literal runs are flushed before any structural token.
        match ch {
            '/' | '*' | '?' | '[' | '{' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
            }
            _ => {}
        }

        match ch {
            '/' => tokens.push(Token::Separator),
            '?' => tokens.push(Token::Question),
            '*' => {
                if chars.peek().map(|(_, c)| *c) == Some('*') {
                    chars.next(); // consume second '*'
                    tokens.push(Token::DoubleStar);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '[' => {
                let (token, consumed) = parse_class(input, pos)?;
                tokens.push(token);
                // Advance chars by consumed amount - 1 (the '[' is already consumed)
                for _ in 0..consumed.saturating_sub(1) {
                    chars.next();
                }
            }
            '{' => {
                let (token, consumed) = parse_alternates(input, pos)?;
                tokens.push(token);
                for _ in 0..consumed.saturating_sub(1) {
                    chars.next();
                }
            }
            ']' => return Err(anyhow::anyhow!("Unmatched ']' at position {}", pos)),
            '}' => return Err(anyhow::anyhow!("Unmatched '}}' at position {}", pos)),
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

/// Parses a `[...]` character class starting at `start` (the `[`).
///
/// Returns the token and the number of characters consumed, including
/// both brackets. A `]` immediately after the opening bracket (or after
/// `!`) is a literal member, not the terminator.
fn parse_class(input: &str, start: usize) -> Result<(Token, usize)> {
    let rest: Vec<char> = input[start..].chars().collect();
    let mut i = 1; // skip '['

    let negated = rest.get(i) == Some(&'!');
    if negated {
        i += 1;
    }

    let mut items = Vec::new();
    let mut first = true;

    loop {
        let ch = match rest.get(i) {
            Some(c) => *c,
            None => return Err(anyhow::anyhow!("Unclosed '[' at position {}", start)),
        };

        if ch == ']' && !first {
            i += 1;
            break;
        }
        first = false;

        // Range like `a-z`, unless the '-' is the last member before ']'.
        if rest.get(i + 1) == Some(&'-') && rest.get(i + 2).is_some_and(|c| *c != ']') {
            let end = rest[i + 2];
            if end < ch {
                return Err(anyhow::anyhow!(
                    "Invalid range '{}-{}' in character class at position {}",
                    ch,
                    end,
                    start
                ));
            }
            items.push(ClassItem::Range(ch, end));
            i += 3;
        } else if ch == '-' && rest.get(i + 1) == Some(&']') {
            return Err(anyhow::anyhow!(
                "Dangling '-' in character class at position {}",
                start
            ));
        } else {
            items.push(ClassItem::Char(ch));
            i += 1;
        }
    }

    if items.is_empty() {
        return Err(anyhow::anyhow!(
            "Empty character class at position {}",
            start
        ));
    }

    Ok((Token::Class { negated, items }, i))
}

/// Parses a `{a,b}` alternation group starting at `start` (the `{`).
///
/// Alternatives are literal fragments only; nested groups and path
/// separators inside the braces are errors.
fn parse_alternates(input: &str, start: usize) -> Result<(Token, usize)> {
    let rest: Vec<char> = input[start..].chars().collect();
    let mut i = 1; // skip '{'

    let mut alternates = Vec::new();
    let mut current = String::new();

    loop {
        let ch = match rest.get(i) {
            Some(c) => *c,
            None => return Err(anyhow::anyhow!("Unclosed '{{' at position {}", start)),
        };

        match ch {
            '}' => {
                alternates.push(current);
                i += 1;
                break;
            }
            ',' => {
                alternates.push(std::mem::take(&mut current));
                i += 1;
            }
            '{' => {
                return Err(anyhow::anyhow!(
                    "Nested '{{' in alternation at position {}",
                    start + i
                ));
            }
            '/' => {
                return Err(anyhow::anyhow!(
                    "'/' not allowed in alternation at position {}",
                    start + i
                ));
            }
            _ => {
                current.push(ch);
                i += 1;
            }
        }
    }

    if alternates.iter().all(|a| a.is_empty()) {
        return Err(anyhow::anyhow!("Empty alternation at position {}", start));
    }

    Ok((Token::Alternates(alternates), i))
}
