//! Path pattern matching.
//!
//! Patterns are raw regular expressions in which the wildcard tokens
//! `:seg`, `:num` and `:any` are replaced by fixed fragments before the
//! pattern is anchored and compiled.

use regex::Regex;
use tracing::warn;

use crate::handler::Params;

/// Wildcard tokens and the regex fragment each one expands to.
pub const WILDCARDS: [(&str, &str); 3] = [
    (":seg", "([^/]+)"),
    (":num", "([0-9]+)"),
    (":any", "(.+)"),
];

/// Replaces every wildcard token in `pattern` with its regex fragment.
///
/// This is plain text substitution: anything that is not one of the three
/// tokens, including other `:words`, is left as it is.
///
/// # Example
///
/// ```
/// use litero::translate;
///
/// assert_eq!(translate("/page/:num"), "/page/([0-9]+)");
/// assert_eq!(translate("/about"), "/about");
/// ```
pub fn translate(pattern: &str) -> String {
    if !pattern.contains(':') {
        return pattern.to_string();
    }

    WILDCARDS
        .iter()
        .fold(pattern.to_string(), |acc, &(token, fragment)| {
            acc.replace(token, fragment)
        })
}

/// A route pattern compiled for full-path matching.
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The pattern string as registered.
    pattern: String,
    /// Anchored regex, `None` when the translated pattern is not valid regex.
    regex: Option<Regex>,
}

impl PathPattern {
    /// Translates and compiles a pattern.
    ///
    /// A pattern that fails to compile is kept, but only ever matches
    /// through an exact string comparison in the router.
    pub fn new(pattern: &str) -> Self {
        let source = format!("^{}$", translate(pattern));
        let regex = match Regex::new(&source) {
            Ok(regex) => Some(regex),
            Err(err) => {
                warn!(pattern, error = %err, "route pattern is not a valid regex");
                None
            }
        };

        Self {
            pattern: pattern.to_string(),
            regex,
        }
    }

    /// Attempts to match a full path against this pattern.
    ///
    /// Returns the capture groups, left to right, if the path matches.
    /// Unmatched groups at the end are left out; unmatched groups before
    /// a matched one come back empty.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let caps = self.regex.as_ref()?.captures(path)?;

        let mut groups: Vec<Option<&str>> =
            caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect();
        while groups.last().is_some_and(Option::is_none) {
            groups.pop();
        }

        Some(groups.into_iter().map(Option::unwrap_or_default).collect())
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if the pattern compiled.
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }
}
