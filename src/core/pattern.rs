//! Service name and output patterns.
//!
//! A pattern written as `/body/` is a regular expression searched anywhere in
//! the value. Anything else is a case-sensitive shell glob matched against the
//! whole value; globs without metacharacters compare by equality.

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::error::{CheckError, Result};

const GLOB_METACHARS: &[char] = &['*', '?', '['];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Exact,
    Wildcard,
    Regex,
}

impl PatternKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Exact => "exact",
            PatternKind::Wildcard => "wildcard",
            PatternKind::Regex => "regex",
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact,
    Wildcard(GlobMatcher),
    Regex(Regex),
}

/// A parsed, immutable pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    matcher: Matcher,
}

impl Pattern {
    /// Parse a single pattern.
    ///
    /// Returns `Ok(None)` for patterns that are empty after trimming.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let source = raw.trim();
        if source.is_empty() {
            return Ok(None);
        }

        let matcher = if is_regex_literal(source) {
            let body = &source[1..source.len() - 1];
            let regex =
                Regex::new(body).map_err(|e| CheckError::pattern(source, e.to_string()))?;
            Matcher::Regex(regex)
        } else if source.contains(GLOB_METACHARS) {
            // Braces are literal. An unbalanced class like `disk [sda` is taken literally
            let escaped = source.replace('{', "\\{").replace('}', "\\}");
            match GlobBuilder::new(&escaped)
                .literal_separator(false)
                .backslash_escape(true)
                .build()
            {
                Ok(glob) => Matcher::Wildcard(glob.compile_matcher()),
                Err(e) => {
                    log::debug!("pattern '{}' is not a valid glob ({}), matching exactly", source, e);
                    Matcher::Exact
                }
            }
        } else {
            Matcher::Exact
        };

        Ok(Some(Self {
            source: source.to_string(),
            matcher,
        }))
    }

    /// Parse a comma-separated list, dropping empty entries
    pub fn parse_list(raw: &str) -> Result<Vec<Self>> {
        let mut patterns = Vec::new();
        for part in raw.split(',') {
            if let Some(pattern) = Self::parse(part)? {
                patterns.push(pattern);
            }
        }
        Ok(patterns)
    }

    pub fn kind(&self) -> PatternKind {
        match self.matcher {
            Matcher::Exact => PatternKind::Exact,
            Matcher::Wildcard(_) => PatternKind::Wildcard,
            Matcher::Regex(_) => PatternKind::Regex,
        }
    }

    /// The trimmed pattern text as given by the user
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, value: &str) -> bool {
        match &self.matcher {
            Matcher::Exact => self.source == value,
            Matcher::Wildcard(glob) => glob.is_match(value),
            Matcher::Regex(regex) => regex.is_match(value),
        }
    }
}

fn is_regex_literal(source: &str) -> bool {
    source.len() >= 2 && source.starts_with('/') && source.ends_with('/')
}
