//! Error types for the rewrite pipeline.
//!
//! Errors are expression-local by design: a bad linearization or a missing
//! DOM node degrades one expression, never the whole document. Callers
//! collect these and keep going.

use std::fmt;

/// Error that can occur while enriching an expression
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteError {
    /// The skeleton string did not parse into a valid nested structure
    MalformedSkeleton {
        /// The offending skeleton attribute value
        skeleton: String,
        /// Underlying parse failure
        detail: String,
    },
    /// The parsed linearization has an invalid shape (e.g. an empty list)
    Structure(String),
    /// No DOM node carries the given semantic id
    DomLookup {
        /// The semantic id that could not be located
        id: String,
    },
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::MalformedSkeleton { skeleton, detail } => {
                write!(f, "Malformed skeleton '{skeleton}': {detail}")
            }
            RewriteError::Structure(msg) => write!(f, "Invalid linearization structure: {msg}"),
            RewriteError::DomLookup { id } => {
                write!(f, "No DOM node found for semantic id '{id}'")
            }
        }
    }
}

impl std::error::Error for RewriteError {}
