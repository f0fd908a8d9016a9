use super::assert_glob;

#[test]
fn test_literal_match() {
    assert_glob("index.html", "index.html", true);
    assert_glob("index.html", "index.htm", false);
    assert_glob("index.html", "src/index.html", false);
}

#[test]
fn test_leading_dot_slash_on_either_side() {
    assert_glob("./index.html", "index.html", true);
    assert_glob("index.html", "./index.html", true);
}

#[test]
fn test_star_within_segment() {
    assert_glob("*.rs", "main.rs", true);
    assert_glob("*.rs", "lib.rs", true);
    assert_glob("*.rs", "main.ts", false);
    // `*` never crosses a separator
    assert_glob("*.rs", "src/main.rs", false);
}

#[test]
fn test_star_matches_empty_run() {
    assert_glob("*.rs", ".rs", true);
    assert_glob("a*b", "ab", true);
}

#[test]
fn test_question_mark() {
    assert_glob("file?.txt", "file1.txt", true);
    assert_glob("file?.txt", "fileA.txt", true);
    assert_glob("file?.txt", "file.txt", false);
    assert_glob("file?.txt", "file12.txt", false);
}

#[test]
fn test_double_star_spans_directories() {
    assert_glob("src/**/*.rs", "src/main.rs", true);
    assert_glob("src/**/*.rs", "src/pages/home.rs", true);
    assert_glob("src/**/*.rs", "src/pages/stations/signin.rs", true);
    assert_glob("src/**/*.rs", "tests/main.rs", false);
    assert_glob("src/**/*.rs", "src/main.ts", false);
}

#[test]
fn test_double_star_matches_zero_segments() {
    assert_glob("src/**/lib.rs", "src/lib.rs", true);
    assert_glob("**/lib.rs", "lib.rs", true);
}

#[test]
fn test_double_star_at_end() {
    assert_glob("assets/**", "assets/logo.png", true);
    assert_glob("assets/**", "assets/icons/close.svg", true);
    assert_glob("assets/**", "style/output.css", false);
}

#[test]
fn test_character_class() {
    assert_glob("file[0-9].txt", "file1.txt", true);
    assert_glob("file[0-9].txt", "fileA.txt", false);
    assert_glob("file[abc].txt", "fileb.txt", true);
    assert_glob("file[abc].txt", "filed.txt", false);
}

#[test]
fn test_negated_character_class() {
    assert_glob("file[!0-9].txt", "fileA.txt", true);
    assert_glob("file[!0-9].txt", "file1.txt", false);
}

#[test]
fn test_class_with_leading_bracket_member() {
    assert_glob("file[]x].txt", "file].txt", true);
    assert_glob("file[]x].txt", "filex.txt", true);
    assert_glob("file[]x].txt", "filey.txt", false);
}

#[test]
fn test_alternation() {
    assert_glob("*.{rs,html}", "main.rs", true);
    assert_glob("*.{rs,html}", "index.html", true);
    assert_glob("*.{rs,html}", "style.css", false);
}

#[test]
fn test_alternation_with_empty_branch() {
    assert_glob("main{,.rs}", "main", true);
    assert_glob("main{,.rs}", "main.rs", true);
    assert_glob("main{,.rs}", "main.ts", false);
}

#[test]
fn test_backtracking_star_before_literal() {
    assert_glob("*st*.rs", "test_most.rs", true);
    assert_glob("a*a*a", "aXaYa", true);
    assert_glob("a*a*a", "aXaY", false);
}

#[test]
fn test_empty_path_never_matches() {
    let pattern = twconf::glob::Pattern::compile("*").unwrap();
    assert!(!pattern.matches(""));
}
