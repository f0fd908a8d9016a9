use crate::glob::ast::{ClassItem, Part, Pattern, Segment};

/// Matches a relative path against a compiled pattern.
///
/// Paths are split on `/`; each pattern segment consumes exactly one
/// path component, except `**` which may consume any number (including
/// zero). `*` and alternations backtrack within a component.
pub fn matches(pattern: &Pattern, path: &str) -> bool {
    let path = path.strip_prefix("./").unwrap_or(path);
    let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
    if components.is_empty() {
        return false;
    }
    match_segments(&pattern.segments, &components)
}

fn match_segments(segments: &[Segment], components: &[&str]) -> bool {
    match segments.split_first() {
        None => components.is_empty(),
        Some((Segment::AnyDirs, rest)) => {
            // `**` consumes zero or more whole components.
            (0..=components.len()).any(|skip| match_segments(rest, &components[skip..]))
        }
        Some((Segment::Parts(parts), rest)) => match components.split_first() {
            None => false,
            Some((component, remaining)) => {
                let chars: Vec<char> = component.chars().collect();
                match_parts(parts, &chars) && match_segments(rest, remaining)
            }
        },
    }
}

fn match_parts(parts: &[Part], chars: &[char]) -> bool {
    match parts.split_first() {
        None => chars.is_empty(),
        Some((Part::Literal(lit), rest)) => {
            let lit_chars: Vec<char> = lit.chars().collect();
            chars.starts_with(&lit_chars) && match_parts(rest, &chars[lit_chars.len()..])
        }
        Some((Part::AnyChar, rest)) => !chars.is_empty() && match_parts(rest, &chars[1..]),
        Some((Part::AnyRun, rest)) => {
            (0..=chars.len()).any(|n| match_parts(rest, &chars[n..]))
        }
        Some((Part::Class { negated, items }, rest)) => match chars.split_first() {
            None => false,
            Some((ch, remaining)) => {
                class_contains(items, *ch) != *negated && match_parts(rest, remaining)
            }
        },
        Some((Part::Alternates(alternates), rest)) => alternates.iter().any(|alt| {
            let alt_chars: Vec<char> = alt.chars().collect();
            chars.starts_with(&alt_chars) && match_parts(rest, &chars[alt_chars.len()..])
        }),
    }
}

fn class_contains(items: &[ClassItem], ch: char) -> bool {
    items.iter().any(|item| match item {
        ClassItem::Char(c) => *c == ch,
        ClassItem::Range(start, end) => (*start..=*end).contains(&ch),
    })
}
