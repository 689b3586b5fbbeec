//! Path matching strategies for include-pattern filtering.
//!
//! The configuration layer never validates include patterns up front; the
//! active [`PathMatcher`] interprets them when the pipeline asks whether a
//! discovered path is part of the documented surface. The default
//! implementation treats patterns as regular expressions.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;

/// Strategy deciding whether a request-mapping path matches an include pattern.
///
/// Implementations interpret the pattern syntax; invalid patterns surface as
/// [`Error::InvalidPattern`] at match time, in keeping with the crate's
/// deferred-validation policy.
pub trait PathMatcher: Send + Sync {
    /// Returns true when `path` matches `pattern`
    fn matches(&self, pattern: &str, path: &str) -> Result<bool>;

    /// Returns true when `path` matches at least one of `patterns`
    fn any_match(&self, patterns: &[String], path: &str) -> Result<bool> {
        for pattern in patterns {
            if self.matches(pattern, path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Default matcher: include patterns are regular expressions.
///
/// A pattern matches when the regex finds a match anywhere in the path, so the
/// catch-all default pattern `.*?` includes every path.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexPathMatcher;

impl PathMatcher for RegexPathMatcher {
    fn matches(&self, pattern: &str, path: &str) -> Result<bool> {
        let regex = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        let matched = regex.is_match(path);
        debug!("Pattern '{}' against '{}': {}", pattern, path, matched);
        Ok(matched)
    }
}
