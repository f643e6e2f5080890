//! Pattern core - template compilation and path matching.

use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maximum number of captured parameters before heap allocation.
/// View routes rarely carry more than two or three (`/class/:id/tab/:tab`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Upper bound on the compiled size of one pattern's regex.
const MAX_PATTERN_REGEX_SIZE: usize = 1 << 20;

/// Inline parameter storage.
///
/// Names are `Arc<str>` shared with the compiled pattern; values are owned
/// because they come from the navigated path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Parameters captured by a successful match, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(ParamVec);

impl RouteParams {
    /// An empty parameter set (used for the not-found fallback).
    #[must_use]
    pub fn new() -> Self {
        Self(ParamVec::new())
    }

    /// Get a captured value by parameter name.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Convert to an owned map.
    /// Note: This allocates - use [`RouteParams::get`] when a single value is enough
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    pub(crate) fn push(&mut self, name: Arc<str>, value: String) {
        self.0.push((name, value));
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (Arc::from(k), v.to_string()))
                .collect(),
        )
    }
}

/// Error returned when a route template cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `:` sentinel with no name after it (e.g. `/class/:`)
    EmptyParamName {
        /// The offending template
        pattern: String,
    },
    /// The same parameter name appears twice
    DuplicateParam {
        /// The offending template
        pattern: String,
        /// The repeated name
        name: String,
    },
    /// A `:name(` custom expression is never closed
    Unclosed {
        /// The offending template
        pattern: String,
    },
    /// The generated regex was rejected by the regex engine
    InvalidRegex {
        /// The offending template
        pattern: String,
        /// Message from the regex engine
        source: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyParamName { pattern } => {
                write!(f, "route pattern '{pattern}' has a parameter without a name")
            }
            PatternError::DuplicateParam { pattern, name } => {
                write!(
                    f,
                    "route pattern '{pattern}' declares parameter '{name}' more than once"
                )
            }
            PatternError::Unclosed { pattern } => {
                write!(
                    f,
                    "route pattern '{pattern}' has an unclosed custom expression"
                )
            }
            PatternError::InvalidRegex { pattern, source } => {
                write!(f, "route pattern '{pattern}' does not compile: {source}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Normalize a path to its canonical form for matching.
///
/// Ensures a leading slash and strips trailing slashes; the empty path and
/// `/` both become `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// A compiled route template.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl RoutePattern {
    /// Compile a route template.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when a parameter is unnamed or repeated, a
    /// custom expression is unclosed, or the resulting regex is invalid.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let (regex_src, param_names) = Self::compile(pattern)?;
        let regex = RegexBuilder::new(&regex_src)
            .case_insensitive(true)
            .size_limit(MAX_PATTERN_REGEX_SIZE)
            .build()
            .map_err(|e| PatternError::InvalidRegex {
                pattern: pattern.to_string(),
                source: e.to_string(),
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// The template this pattern was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parameter names in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.param_names.iter().map(|n| n.as_ref())
    }

    /// Test a concrete path against this pattern.
    ///
    /// The path is normalized first, so `/class/2/` and `class/2` both match
    /// `/class/:id`. It is expected to be decoded already (see
    /// [`ParsedRoute`](crate::navigation::ParsedRoute)); captured values are
    /// returned as they appear in it.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = normalize_path(path);
        let caps = self.regex.captures(&path)?;

        let mut params = RouteParams::new();
        for name in &self.param_names {
            if let Some(m) = caps.name(name) {
                params.push(Arc::clone(name), m.as_str().to_string());
            }
        }
        Some(params)
    }

    /// Translate a template into regex source and its parameter names.
    ///
    /// `/class/:id` becomes `^/class/(?P<id>[^/]+)$`.
    fn compile(pattern: &str) -> Result<(String, Vec<Arc<str>>), PatternError> {
        let normalized = normalize_path(pattern);
        if normalized == "/" {
            return Ok(("^/$".to_string(), Vec::new()));
        }

        let mut regex_src = String::with_capacity(normalized.len() + 8);
        regex_src.push('^');
        let mut names: Vec<Arc<str>> = Vec::new();
        let mut all_optional = true;

        for segment in split_segments(&normalized, pattern)? {
            let tokens = tokenize(segment, pattern)?;
            for token in &tokens {
                if let Token::Param { name, .. } = token {
                    if names.iter().any(|n| n.as_ref() == *name) {
                        return Err(PatternError::DuplicateParam {
                            pattern: pattern.to_string(),
                            name: (*name).to_string(),
                        });
                    }
                    names.push(Arc::from(*name));
                }
            }

            match tokens.as_slice() {
                // A lone parameter owns its slash: `/:tab?` may vanish entirely.
                [Token::Param {
                    name,
                    expr,
                    optional,
                }] => {
                    let body = expr.unwrap_or("[^/]+");
                    if *optional {
                        regex_src.push_str(&format!("(?:/(?P<{name}>{body}))?"));
                    } else {
                        all_optional = false;
                        regex_src.push_str(&format!("/(?P<{name}>{body})"));
                    }
                }
                _ => {
                    all_optional = false;
                    regex_src.push('/');
                    for token in &tokens {
                        match token {
                            Token::Literal(text) => regex_src.push_str(&regex::escape(text)),
                            Token::Param {
                                name,
                                expr,
                                optional,
                            } => {
                                let body = expr.unwrap_or("[^/]+?");
                                if *optional {
                                    regex_src.push_str(&format!("(?:(?P<{name}>{body}))?"));
                                } else {
                                    regex_src.push_str(&format!("(?P<{name}>{body})"));
                                }
                            }
                        }
                    }
                }
            }
        }

        // Only optional segments: the normalized root must match too.
        if all_optional {
            regex_src.push_str("/?");
        }
        regex_src.push('$');
        Ok((regex_src, names))
    }
}

/// One piece of a template segment.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Param {
        name: &'a str,
        expr: Option<&'a str>,
        optional: bool,
    },
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// End (exclusive) of the parenthesized group opening at `open`.
fn group_end(segment: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in segment[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split one segment into literal text and `:name`, `:name(expr)`,
/// `:name?` parameters. `/files/:name.json` yields a parameter followed by
/// the literal `.json`; parenthesized text outside a parameter is literal.
fn tokenize<'a>(segment: &'a str, original: &str) -> Result<Vec<Token<'a>>, PatternError> {
    let unclosed = || PatternError::Unclosed {
        pattern: original.to_string(),
    };

    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < segment.len() {
        let rest = &segment[i..];
        if rest.starts_with('(') {
            i = group_end(segment, i).ok_or_else(unclosed)?;
            continue;
        }
        if !rest.starts_with(':') {
            i += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        }

        if literal_start < i {
            tokens.push(Token::Literal(&segment[literal_start..i]));
        }

        let name_start = i + 1;
        let name_len = segment[name_start..]
            .find(|c: char| !is_name_char(c))
            .unwrap_or(segment.len() - name_start);
        if name_len == 0 {
            return Err(PatternError::EmptyParamName {
                pattern: original.to_string(),
            });
        }
        let name = &segment[name_start..name_start + name_len];
        i = name_start + name_len;

        let mut expr = None;
        if segment[i..].starts_with('(') {
            let end = group_end(segment, i).ok_or_else(unclosed)?;
            let inner = &segment[i + 1..end - 1];
            if inner.is_empty() {
                return Err(PatternError::InvalidRegex {
                    pattern: original.to_string(),
                    source: format!("parameter '{name}' has an empty custom expression"),
                });
            }
            expr = Some(inner);
            i = end;
        }

        let optional = segment[i..].starts_with('?');
        if optional {
            i += 1;
        }

        tokens.push(Token::Param {
            name,
            expr,
            optional,
        });
        literal_start = i;
    }

    if literal_start < segment.len() {
        tokens.push(Token::Literal(&segment[literal_start..]));
    }
    Ok(tokens)
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a normalized template on `/`, keeping slashes inside custom
/// `(...)` expressions attached to their segment.
fn split_segments<'a>(normalized: &'a str, original: &str) -> Result<Vec<&'a str>, PatternError> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 1; // skip the leading slash

    for (i, c) in normalized.char_indices().skip(1) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| PatternError::Unclosed {
                    pattern: original.to_string(),
                })?;
            }
            '/' if depth == 0 => {
                if i > start {
                    segments.push(&normalized[start..i]);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(PatternError::Unclosed {
            pattern: original.to_string(),
        });
    }
    if start < normalized.len() {
        segments.push(&normalized[start..]);
    }
    Ok(segments)
}
