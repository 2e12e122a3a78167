//! Skeleton parsing (linearization string → nested expression)
//!
//! The upstream renderer annotates each expression root with a parenthesized,
//! space-separated linearization of its semantic structure, e.g.
//! `(1 (2 3) 4)`. This module turns that string into an explicit [`Sexp`]
//! by textual substitution (`(` → `[`, `)` → `]`, space → `,`, tokens
//! quoted) followed by strict JSON parsing. Anything that survives both
//! steps is a well-formed linearization; everything else is a
//! [`RewriteError::MalformedSkeleton`].
//!
//! The parser is pure: no DOM access, no side effects.

use crate::error::RewriteError;
use serde_json::Value;

/// A parsed linearization: a bare token or a nested list of tokens.
///
/// List order is semantically meaningful (left-to-right reading order)
/// and is preserved exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sexp {
    /// A single semantic-id token
    Atom(String),
    /// A parenthesized group; by the grammar the first element is the
    /// group's own token, the rest are its children
    List(Vec<Sexp>),
}

impl Sexp {
    /// Render back to the parenthesized skeleton form.
    ///
    /// Inverse of [`parse_skeleton`] for well-formed input.
    pub fn to_skeleton(&self) -> String {
        match self {
            Sexp::Atom(token) => token.clone(),
            Sexp::List(items) => {
                let inner: Vec<String> = items.iter().map(Sexp::to_skeleton).collect();
                format!("({})", inner.join(" "))
            }
        }
    }
}

/// Parse a skeleton string into a nested expression.
///
/// The input alphabet is restricted to parentheses, single spaces and bare
/// alphanumeric tokens; any other character is a malformed-input error, as
/// is any structurally invalid string (unbalanced parentheses, doubled
/// separators, empty input).
pub fn parse_skeleton(input: &str) -> Result<Sexp, RewriteError> {
    let skeleton = input.trim();
    if let Some(bad) = skeleton
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | ' ')))
    {
        return Err(malformed(input, format!("unexpected character '{bad}'")));
    }

    let json = substitute(skeleton);
    let value: Value =
        serde_json::from_str(&json).map_err(|e| malformed(input, e.to_string()))?;
    from_value(&value, input)
}

/// The textual substitution step: parens become brackets, spaces become
/// commas, and each bare token is quoted so the result is strict JSON.
fn substitute(skeleton: &str) -> String {
    let mut json = String::with_capacity(skeleton.len() * 2);
    let mut in_token = false;
    for c in skeleton.chars() {
        match c {
            '(' | ')' | ' ' => {
                if in_token {
                    json.push('"');
                    in_token = false;
                }
                json.push(match c {
                    '(' => '[',
                    ')' => ']',
                    _ => ',',
                });
            }
            _ => {
                if !in_token {
                    json.push('"');
                    in_token = true;
                }
                json.push(c);
            }
        }
    }
    if in_token {
        json.push('"');
    }
    json
}

fn from_value(value: &Value, input: &str) -> Result<Sexp, RewriteError> {
    match value {
        Value::String(token) => Ok(Sexp::Atom(token.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| from_value(item, input))
            .collect::<Result<Vec<_>, _>>()
            .map(Sexp::List),
        other => Err(malformed(input, format!("unexpected value {other}"))),
    }
}

fn malformed(input: &str, detail: String) -> RewriteError {
    RewriteError::MalformedSkeleton {
        skeleton: input.to_string(),
        detail,
    }
}
