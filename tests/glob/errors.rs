use twconf::glob::Pattern;

/// Test helper asserting that compilation fails with a message
/// containing `fragment`.
fn assert_compile_error(pattern: &str, fragment: &str) {
    let err = Pattern::compile(pattern)
        .expect_err(&format!("pattern '{}' should not compile", pattern));
    let message = err.to_string();
    assert!(
        message.contains(fragment),
        "error for '{}' was '{}', expected it to mention '{}'",
        pattern, message, fragment
    );
}

#[test]
fn test_empty_pattern() {
    assert_compile_error("", "Empty glob pattern");
}

#[test]
fn test_absolute_pattern() {
    assert_compile_error("/src/*.rs", "relative");
}

#[test]
fn test_trailing_separator() {
    assert_compile_error("src/", "must not end with '/'");
}

#[test]
fn test_empty_segment() {
    assert_compile_error("src//main.rs", "Empty segment");
}

#[test]
fn test_unclosed_bracket() {
    assert_compile_error("file[0-9.txt", "Unclosed '['");
}

#[test]
fn test_unmatched_closing_bracket() {
    assert_compile_error("file0-9].txt", "Unmatched ']'");
}

#[test]
fn test_empty_character_class() {
    assert_compile_error("file[].txt", "Unclosed '['");
}

#[test]
fn test_reversed_range() {
    assert_compile_error("file[9-0].txt", "Invalid range");
}

#[test]
fn test_dangling_range_dash() {
    assert_compile_error("file[a-].txt", "Dangling '-'");
}

#[test]
fn test_unclosed_brace() {
    assert_compile_error("*.{rs,html", "Unclosed '{'");
}

#[test]
fn test_nested_brace() {
    assert_compile_error("*.{a{b}}", "Nested '{'");
}

#[test]
fn test_separator_inside_alternation() {
    assert_compile_error("{src/pages}", "'/' not allowed in alternation");
}

#[test]
fn test_empty_alternation() {
    assert_compile_error("*.{}", "Empty alternation");
}

#[test]
fn test_double_star_mixed_with_literal() {
    assert_compile_error("src/x**/main.rs", "'**' must be the only element");
    assert_compile_error("src/**x/main.rs", "'**' must be the only element");
}
