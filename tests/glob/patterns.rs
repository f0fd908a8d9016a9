use twconf::glob::{Part, Pattern, Segment, tokenize};
use twconf::glob::lexer::Token;

#[test]
fn test_tokenize_simple_literal() {
    let tokens = tokenize("index.html").unwrap();
    assert_eq!(
        tokens,
        vec![Token::Literal("index.html".to_string()), Token::Eof]
    );
}

#[test]
fn test_tokenize_star_and_double_star() {
    let tokens = tokenize("src/**/*.rs").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal("src".to_string()),
            Token::Separator,
            Token::DoubleStar,
            Token::Separator,
            Token::Star,
            Token::Literal(".rs".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_tokenize_question_mark() {
    let tokens = tokenize("file?.txt").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Literal("file".to_string()),
            Token::Question,
            Token::Literal(".txt".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_tokenize_alternation() {
    let tokens = tokenize("*.{rs,html}").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Star,
            Token::Literal(".".to_string()),
            Token::Alternates(vec!["rs".to_string(), "html".to_string()]),
            Token::Eof,
        ]
    );
}

#[test]
fn test_parse_strips_leading_dot_slash() {
    let with_prefix = Pattern::compile("./src/**/*.rs").unwrap();
    let without_prefix = Pattern::compile("src/**/*.rs").unwrap();
    assert_eq!(with_prefix, without_prefix);
}

#[test]
fn test_parse_segment_structure() {
    let pattern = Pattern::compile("src/**/*.rs").unwrap();
    assert_eq!(pattern.segments.len(), 3);
    assert_eq!(
        pattern.segments[0],
        Segment::Parts(vec![Part::Literal("src".to_string())])
    );
    assert_eq!(pattern.segments[1], Segment::AnyDirs);
    assert_eq!(
        pattern.segments[2],
        Segment::Parts(vec![Part::AnyRun, Part::Literal(".rs".to_string())])
    );
}

#[test]
fn test_parse_original_project_patterns() {
    // The two patterns shipped in the default record must always compile.
    Pattern::compile("./src/**/*.rs").unwrap();
    Pattern::compile("./index.html").unwrap();
}

#[test]
fn test_parse_character_class() {
    let pattern = Pattern::compile("file[0-9].txt").unwrap();
    assert_eq!(pattern.segments.len(), 1);
    match &pattern.segments[0] {
        Segment::Parts(parts) => {
            assert_eq!(parts.len(), 3);
            assert!(matches!(parts[1], Part::Class { negated: false, .. }));
        }
        other => panic!("expected Parts segment, got {:?}", other),
    }
}

#[test]
fn test_parse_negated_character_class() {
    let pattern = Pattern::compile("[!a-z]*").unwrap();
    match &pattern.segments[0] {
        Segment::Parts(parts) => {
            assert!(matches!(parts[0], Part::Class { negated: true, .. }));
        }
        other => panic!("expected Parts segment, got {:?}", other),
    }
}
