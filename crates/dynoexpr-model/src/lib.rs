//! Wire-value model types for dynoexpr.
//!
//! This crate owns everything the expression-builder core consumes but does
//! not implement itself: the typed wire representation of values
//! ([`AttributeValue`]) together with the marshalling rules that map native
//! scalars and collections into it, the insertion-ordered placeholder tables
//! ([`OrderedMap`]), and the three request shapes the builder assembles for a
//! network client to send.
// "DynamoDB" appears in most doc comments in this crate.
#![allow(clippy::doc_markdown)]

pub mod attribute_value;
pub mod ordered;
pub mod request;
pub mod types;

pub use attribute_value::AttributeValue;
pub use ordered::OrderedMap;
pub use request::{ConditionRequest, QueryRequest, UpdateRequest};
pub use types::AttributeType;
