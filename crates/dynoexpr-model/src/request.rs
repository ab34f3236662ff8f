//! Request shapes assembled by the expression builder.
//!
//! All structs use `PascalCase` JSON field naming to match the wire protocol.
//! Optional members are omitted when absent, and placeholder tables that may
//! legitimately be empty are omitted when empty, so the serialized payloads
//! stay minimal and match what a hand-written request would contain.

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::ordered::OrderedMap;

/// Parameters for a `Query` call: key condition plus optional projection and
/// filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryRequest {
    /// The table to query.
    pub table_name: String,

    /// The key condition expression text.
    pub key_condition_expression: String,

    /// Placeholder-to-attribute-name substitutions.
    #[serde(default)]
    pub expression_attribute_names: OrderedMap<String>,

    /// Placeholder-to-value substitutions.
    #[serde(default)]
    pub expression_attribute_values: OrderedMap<AttributeValue>,

    /// Attributes to return, when a projection was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,

    /// Post-read filter, when one was built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
}

/// Parameters for a conditional write: the condition expression and its
/// placeholder tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConditionRequest {
    /// The table the write targets.
    pub table_name: String,

    /// The condition expression text.
    pub condition_expression: String,

    /// Placeholder-to-attribute-name substitutions.
    #[serde(default)]
    pub expression_attribute_names: OrderedMap<String>,

    /// Placeholder-to-value substitutions; a purely structural condition
    /// (existence checks alone) has none.
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub expression_attribute_values: OrderedMap<AttributeValue>,
}

/// Parameters for an `UpdateItem` call: the item key, the update expression,
/// and its placeholder tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRequest {
    /// The table the update targets.
    pub table_name: String,

    /// The primary key of the item, attribute name to value (no
    /// placeholders).
    #[serde(default)]
    pub key: OrderedMap<AttributeValue>,

    /// The update expression text.
    pub update_expression: String,

    /// Placeholder-to-attribute-name substitutions.
    #[serde(default)]
    pub expression_attribute_names: OrderedMap<String>,

    /// Placeholder-to-value substitutions; a pure REMOVE update has none.
    #[serde(default, skip_serializing_if = "OrderedMap::is_empty")]
    pub expression_attribute_values: OrderedMap<AttributeValue>,

    /// Guard condition for the update, when one was built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
}
