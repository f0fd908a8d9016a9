use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

use crate::config::Config;
use crate::glob::Pattern;

/// Severity of a validation problem.
///
/// Errors make `twconf check` exit non-zero; warnings are reported but
/// do not fail the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Problem {
    pub severity: Severity,
    pub message: String,
}

impl Problem {
    fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }
}

/// npm-style package names, e.g. `tailwindcss-animate` or
/// `@tailwindcss/typography`.
static PLUGIN_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(@[a-z0-9][a-z0-9._-]*/)?[a-z0-9][a-z0-9._-]*$").expect("valid plugin name regex")
});

/// Theme-token categories the external tool defines out of the box.
/// Other categories are legal but usually typos.
const KNOWN_THEME_CATEGORIES: [&str; 9] = [
    "colors",
    "spacing",
    "fontFamily",
    "fontSize",
    "screens",
    "borderRadius",
    "boxShadow",
    "keyframes",
    "animation",
];

impl Config {
    /// Validates the record and returns every problem found.
    ///
    /// # Returns
    /// * Empty vector - the record is clean
    /// * Errors - content patterns that fail to compile, duplicates
    /// * Warnings - empty content list, implausible plugin names,
    ///   unrecognized theme categories
    pub fn validate(&self) -> Vec<Problem> {
        let mut problems = Vec::new();

        if self.content.is_empty() {
            problems.push(Problem::warning(
                "content is empty: the build tool will discover no class names and emit an empty stylesheet".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for pattern in &self.content {
            if let Err(e) = Pattern::compile(pattern) {
                problems.push(Problem::error(format!(
                    "invalid content pattern '{}': {}",
                    pattern, e
                )));
            }
            if !seen.insert(pattern.as_str()) {
                problems.push(Problem::error(format!(
                    "duplicate content pattern '{}'",
                    pattern
                )));
            }
        }

        for plugin in &self.plugins {
            if !PLUGIN_NAME_RE.is_match(plugin) {
                problems.push(Problem::warning(format!(
                    "plugin '{}' does not look like a package name",
                    plugin
                )));
            }
        }

        for category in self.theme.extend.keys() {
            if !KNOWN_THEME_CATEGORIES.contains(&category.as_str()) {
                problems.push(Problem::warning(format!(
                    "unrecognized theme category '{}' (known categories: {})",
                    category,
                    KNOWN_THEME_CATEGORIES.join(", ")
                )));
            }
        }

        problems
    }
}
