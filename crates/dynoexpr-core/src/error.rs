//! Builder error types.

use thiserror::Error;

/// Errors produced by the expression builder.
///
/// The taxonomy is deliberately minimal: construction is the only fallible
/// operation. Every other input is accepted permissively and degrades to a
/// plausible (if possibly unintended) expression rather than failing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// No table name was supplied at construction.
    #[error("table name must be included")]
    MissingTableName,
}
