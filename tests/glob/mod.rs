/// Content glob pattern tests
///
/// This module contains tests for the glob pattern language,
/// organized by functionality area.

pub mod errors;
pub mod matching;
pub mod patterns;

use twconf::glob::Pattern;

/// Test helper that compiles a pattern and checks it against a path
pub fn assert_glob(pattern: &str, path: &str, expected: bool) {
    println!("Testing pattern: {} against path: {}", pattern, path);

    let compiled = Pattern::compile(pattern)
        .unwrap_or_else(|e| panic!("pattern '{}' failed to compile: {}", pattern, e));
    println!("Compiled: {:?}", compiled);

    let got = compiled.matches(path);
    assert_eq!(
        got, expected,
        "pattern '{}' against '{}': expected {}, got {}",
        pattern, path, expected, got
    );
}
