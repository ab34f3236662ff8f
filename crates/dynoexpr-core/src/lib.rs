//! Fluent expression builder for DynamoDB-style request parameters.
//!
//! A builder session accumulates condition, filter, projection, and update
//! tokens through chained calls, resolving attribute names and marshalled
//! values to deduplicated placeholders as it goes, and assembles the
//! query / condition / update request shapes a network client sends.
//!
//! Methods mutate the session and return `&mut Self`; rendering is pure and
//! can be repeated or interleaved with further building.
//!
//! ```
//! use dynoexpr_core::ExpressionBuilder;
//!
//! # fn main() -> Result<(), dynoexpr_core::BuilderError> {
//! let mut builder = ExpressionBuilder::new("accounts")?;
//! builder.eq("Name", "Alice").and().ge("Age", 21);
//!
//! let request = builder.build_condition_expressions();
//! assert_eq!(
//!     request.condition_expression,
//!     "#eb_a = :eb_a AND #eb_b >= :eb_b"
//! );
//! # Ok(())
//! # }
//! ```
#![allow(clippy::doc_markdown)]

pub mod builder;
pub mod error;

mod channels;
mod ops;
mod path;
mod placeholder;
mod symbols;

pub use builder::ExpressionBuilder;
pub use error::BuilderError;

// The model crate's types appear throughout the public surface.
pub use dynoexpr_model::{
    AttributeType, AttributeValue, ConditionRequest, OrderedMap, QueryRequest, UpdateRequest,
};
