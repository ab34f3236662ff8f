//! The fluent expression builder.
//!
//! One builder instance is one expression-construction session: it owns the
//! placeholder tables, the token channels, and the routing flag, and every
//! operator method mutates that state and returns `&mut Self` for chaining.
//! A `build_*` call renders a snapshot; the instance stays usable afterward
//! and can be queried again (rendering is idempotent) or extended further.
//!
//! Instances are not meant to be shared: one session per expression, one
//! owner per session. Misuse short of a missing table name is tolerated
//! rather than rejected — an unbalanced `group_end` or a dangling `and`
//! produces a structurally odd expression for the server to reject, not a
//! local error.

use dynoexpr_model::{
    AttributeType, AttributeValue, ConditionRequest, OrderedMap, QueryRequest, UpdateRequest,
};
use tracing::debug;

use crate::channels::{Channels, TokenTarget};
use crate::error::BuilderError;
use crate::ops::{self, CompareOp, UpdateClause};
use crate::path;
use crate::symbols::{KeyTable, NameTable, ValueTable};

/// Fluent builder for condition, filter, projection, and update expressions
/// and their placeholder tables.
#[derive(Debug)]
pub struct ExpressionBuilder {
    table_name: String,
    names: NameTable,
    values: ValueTable,
    keys: KeyTable,
    channels: Channels,
}

impl ExpressionBuilder {
    /// Start a session against the named table.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingTableName`] when `table_name` is
    /// empty.
    pub fn new(table_name: impl Into<String>) -> Result<Self, BuilderError> {
        let table_name = table_name.into();
        if table_name.is_empty() {
            return Err(BuilderError::MissingTableName);
        }

        Ok(Self {
            table_name,
            names: NameTable::new(),
            values: ValueTable::new(),
            keys: KeyTable::new(),
            channels: Channels::new(),
        })
    }

    /// The table this session targets.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    // -- Placeholder resolution ---------------------------------------------

    /// Resolve a dotted, optionally indexed attribute path to its rendered
    /// placeholder form, minting name placeholders as needed. Index groups
    /// are reattached to the placeholder, never stored in the table.
    fn render_path(&mut self, attr: &str) -> String {
        let rendered: Vec<String> = path::parse(attr)
            .into_iter()
            .map(|segment| {
                let hash = self.names.resolve(&segment.base);
                format!("{hash}{}", segment.indices)
            })
            .collect();
        rendered.join(".")
    }

    fn compare(&mut self, lhs: String, op: CompareOp, value: AttributeValue) -> &mut Self {
        let value_hash = self.values.resolve(value);
        self.channels.push(format!("{lhs} {op} {value_hash}"));
        self
    }

    fn compare_path(
        &mut self,
        attr: &str,
        op: CompareOp,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        let lhs = self.render_path(attr);
        self.compare(lhs, op, value.into())
    }

    fn compare_size(
        &mut self,
        attr: &str,
        op: CompareOp,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        let lhs = format!("size({})", self.render_path(attr));
        self.compare(lhs, op, value.into())
    }

    fn push_between(
        &mut self,
        lhs: String,
        low: impl Into<AttributeValue>,
        high: impl Into<AttributeValue>,
    ) -> &mut Self {
        let low_hash = self.values.resolve(low.into());
        let high_hash = self.values.resolve(high.into());
        self.channels.push(format!(
            "{lhs} {} {low_hash} {} {high_hash}",
            ops::BETWEEN,
            ops::AND
        ));
        self
    }

    // -- Comparisons --------------------------------------------------------

    /// `path = value`.
    pub fn eq(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_path(attr, CompareOp::Eq, value)
    }

    /// `path <> value`.
    pub fn ne(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_path(attr, CompareOp::Ne, value)
    }

    /// `path < value`.
    pub fn lt(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_path(attr, CompareOp::Lt, value)
    }

    /// `path > value`.
    pub fn gt(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_path(attr, CompareOp::Gt, value)
    }

    /// `path <= value`.
    pub fn le(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_path(attr, CompareOp::Le, value)
    }

    /// `path >= value`.
    pub fn ge(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_path(attr, CompareOp::Ge, value)
    }

    /// `path BETWEEN low AND high`. The `AND` here is structural, not the
    /// logical connective.
    pub fn between(
        &mut self,
        attr: &str,
        low: impl Into<AttributeValue>,
        high: impl Into<AttributeValue>,
    ) -> &mut Self {
        let lhs = self.render_path(attr);
        self.push_between(lhs, low, high)
    }

    // -- Size comparisons ---------------------------------------------------

    /// `size(path) = value`.
    pub fn size_eq(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_size(attr, CompareOp::Eq, value)
    }

    /// `size(path) <> value`.
    pub fn size_ne(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_size(attr, CompareOp::Ne, value)
    }

    /// `size(path) < value`.
    pub fn size_lt(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_size(attr, CompareOp::Lt, value)
    }

    /// `size(path) > value`.
    pub fn size_gt(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_size(attr, CompareOp::Gt, value)
    }

    /// `size(path) <= value`.
    pub fn size_le(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_size(attr, CompareOp::Le, value)
    }

    /// `size(path) >= value`.
    pub fn size_ge(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        self.compare_size(attr, CompareOp::Ge, value)
    }

    /// `size(path) BETWEEN low AND high`.
    pub fn size_between(
        &mut self,
        attr: &str,
        low: impl Into<AttributeValue>,
        high: impl Into<AttributeValue>,
    ) -> &mut Self {
        let lhs = format!("size({})", self.render_path(attr));
        self.push_between(lhs, low, high)
    }

    // -- Connectives and grouping -------------------------------------------

    /// Push the logical `AND` connective. Callers sequence connectives
    /// between predicate calls themselves.
    pub fn and(&mut self) -> &mut Self {
        self.channels.push(ops::AND.to_owned());
        self
    }

    /// Push the logical `OR` connective.
    pub fn or(&mut self) -> &mut Self {
        self.channels.push(ops::OR.to_owned());
        self
    }

    /// Push an opening parenthesis.
    pub fn group_start(&mut self) -> &mut Self {
        self.channels.push(ops::GROUP_START.to_owned());
        self
    }

    /// Push a closing parenthesis.
    pub fn group_end(&mut self) -> &mut Self {
        self.channels.push(ops::GROUP_END.to_owned());
        self
    }

    // -- Predicates ---------------------------------------------------------

    /// `attribute_exists(path)`.
    pub fn attr_exists(&mut self, attr: &str) -> &mut Self {
        let lhs = self.render_path(attr);
        self.channels.push(format!("attribute_exists({lhs})"));
        self
    }

    /// `attribute_not_exists(path)`.
    pub fn attr_not_exists(&mut self, attr: &str) -> &mut Self {
        let lhs = self.render_path(attr);
        self.channels.push(format!("attribute_not_exists({lhs})"));
        self
    }

    /// `contains(path, value)`.
    pub fn contains(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels.push(format!("contains({lhs}, {value_hash})"));
        self
    }

    /// `begins_with(path, value)`.
    pub fn begins_with(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels
            .push(format!("begins_with({lhs}, {value_hash})"));
        self
    }

    // -- Type assertions ----------------------------------------------------

    /// `attribute_type(path, tag)`. The tag literal goes through the value
    /// table, so repeated assertions of one type share a single placeholder
    /// across the whole session.
    fn assert_type(&mut self, attr: &str, tag: AttributeType) -> &mut Self {
        let lhs = self.render_path(attr);
        let tag_hash = self.values.resolve(tag.into());
        self.channels
            .push(format!("attribute_type({lhs}, {tag_hash})"));
        self
    }

    /// Assert the attribute holds a string.
    pub fn assert_string_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::S)
    }

    /// Assert the attribute holds a string set.
    pub fn assert_string_set_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::Ss)
    }

    /// Assert the attribute holds a number.
    pub fn assert_number_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::N)
    }

    /// Assert the attribute holds a number set.
    pub fn assert_number_set_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::Ns)
    }

    /// Assert the attribute holds a binary value.
    pub fn assert_binary_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::B)
    }

    /// Assert the attribute holds a binary set.
    pub fn assert_binary_set_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::Bs)
    }

    /// Assert the attribute holds a boolean.
    pub fn assert_boolean_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::Bool)
    }

    /// Assert the attribute holds a null.
    pub fn assert_null_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::Null)
    }

    /// Assert the attribute holds a list.
    pub fn assert_list_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::L)
    }

    /// Assert the attribute holds a map.
    pub fn assert_map_type(&mut self, attr: &str) -> &mut Self {
        self.assert_type(attr, AttributeType::M)
    }

    // -- Filter scoping -----------------------------------------------------

    /// Route subsequent predicate tokens into the filter channel. Tokens
    /// already pushed stay where they landed.
    pub fn filter_start(&mut self) -> &mut Self {
        self.channels.set_target(TokenTarget::Filter);
        self
    }

    /// Route subsequent predicate tokens back into the condition channel.
    pub fn filter_end(&mut self) -> &mut Self {
        self.channels.set_target(TokenTarget::Condition);
        self
    }

    // -- Keys ---------------------------------------------------------------

    /// Record primary-key attributes. Entries are marshalled and stored
    /// verbatim, bypassing the placeholder tables.
    pub fn key<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        for (name, value) in entries {
            self.keys.insert(name, value.into());
        }
        self
    }

    // -- Mutation clauses ---------------------------------------------------

    /// `SET path = value`.
    pub fn set(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels
            .push_clause(UpdateClause::Set, format!("{lhs} = {value_hash}"));
        self
    }

    /// `SET path = if_not_exists(path, value)`.
    pub fn set_if_not_exists(
        &mut self,
        attr: &str,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels.push_clause(
            UpdateClause::Set,
            format!("{lhs} = if_not_exists({lhs}, {value_hash})"),
        );
        self
    }

    /// `SET path = path + value`.
    pub fn set_plus(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels.push_clause(
            UpdateClause::Set,
            format!("{lhs} = {lhs} {} {value_hash}", ops::PLUS),
        );
        self
    }

    /// `SET path = path - value`.
    pub fn set_minus(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels.push_clause(
            UpdateClause::Set,
            format!("{lhs} = {lhs} {} {value_hash}", ops::MINUS),
        );
        self
    }

    /// `SET path = list_append(path, value)`.
    pub fn set_list_append(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels.push_clause(
            UpdateClause::Set,
            format!("{lhs} = list_append({lhs}, {value_hash})"),
        );
        self
    }

    /// `ADD path value`.
    pub fn add(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels
            .push_clause(UpdateClause::Add, format!("{lhs} {value_hash}"));
        self
    }

    /// `ADD path` with no operand, for callers composing the operand
    /// themselves.
    pub fn add_attr(&mut self, attr: &str) -> &mut Self {
        let lhs = self.render_path(attr);
        self.channels.push_clause(UpdateClause::Add, lhs);
        self
    }

    /// `REMOVE path`.
    pub fn remove(&mut self, attr: &str) -> &mut Self {
        let lhs = self.render_path(attr);
        self.channels.push_clause(UpdateClause::Remove, lhs);
        self
    }

    /// `DELETE path value`.
    pub fn delete(&mut self, attr: &str, value: impl Into<AttributeValue>) -> &mut Self {
        let lhs = self.render_path(attr);
        let value_hash = self.values.resolve(value.into());
        self.channels
            .push_clause(UpdateClause::Delete, format!("{lhs} {value_hash}"));
        self
    }

    // -- Projection ---------------------------------------------------------

    /// Add attribute paths to the projection. Placeholders are resolved in
    /// iteration order; duplicates collapse into the first occurrence.
    pub fn projections<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for p in paths {
            let rendered = self.render_path(p.as_ref());
            self.channels.push_projection(rendered);
        }
        self
    }

    // -- Rendering ----------------------------------------------------------

    /// The condition / key-condition expression text.
    #[must_use]
    pub fn condition_expression(&self) -> String {
        self.channels.condition_text()
    }

    /// The filter expression text.
    #[must_use]
    pub fn filter_expression(&self) -> String {
        self.channels.filter_text()
    }

    /// The projection expression text.
    #[must_use]
    pub fn projection_expression(&self) -> String {
        self.channels.projection_text()
    }

    /// The SET clause (with trailing space), or empty.
    #[must_use]
    pub fn set_expression(&self) -> String {
        self.channels.clause_text(UpdateClause::Set)
    }

    /// The REMOVE clause (with trailing space), or empty.
    #[must_use]
    pub fn remove_expression(&self) -> String {
        self.channels.clause_text(UpdateClause::Remove)
    }

    /// The ADD clause (with trailing space), or empty.
    #[must_use]
    pub fn add_expression(&self) -> String {
        self.channels.clause_text(UpdateClause::Add)
    }

    /// The DELETE clause (with trailing space), or empty.
    #[must_use]
    pub fn delete_expression(&self) -> String {
        self.channels.clause_text(UpdateClause::Delete)
    }

    /// The full update expression: non-empty clauses in fixed SET, REMOVE,
    /// ADD, DELETE order, trimmed of surrounding whitespace.
    #[must_use]
    pub fn update_expression(&self) -> String {
        let concatenated: String = UpdateClause::ORDER
            .iter()
            .map(|clause| self.channels.clause_text(*clause))
            .collect();
        concatenated.trim().to_owned()
    }

    /// Snapshot of the key table.
    #[must_use]
    pub fn key_expression(&self) -> OrderedMap<AttributeValue> {
        self.keys.clone()
    }

    /// Snapshot of the attribute-name placeholder table.
    #[must_use]
    pub fn expression_attribute_names(&self) -> OrderedMap<String> {
        self.names.entries().clone()
    }

    /// Snapshot of the attribute-value placeholder table.
    #[must_use]
    pub fn expression_attribute_values(&self) -> OrderedMap<AttributeValue> {
        self.values.entries().clone()
    }

    // -- Assembly -----------------------------------------------------------

    /// Assemble query parameters. `ProjectionExpression` and
    /// `FilterExpression` are present only when non-empty.
    #[must_use]
    pub fn build_query_expressions(&self) -> QueryRequest {
        debug!(table = %self.table_name, "assembling query expressions");
        let projection = self.projection_expression();
        let filter = self.filter_expression();

        QueryRequest {
            table_name: self.table_name.clone(),
            key_condition_expression: self.condition_expression(),
            expression_attribute_names: self.expression_attribute_names(),
            expression_attribute_values: self.expression_attribute_values(),
            projection_expression: (!projection.is_empty()).then_some(projection),
            filter_expression: (!filter.is_empty()).then_some(filter),
        }
    }

    /// Assemble conditional-write parameters. The value table serializes
    /// only when a value placeholder was minted.
    #[must_use]
    pub fn build_condition_expressions(&self) -> ConditionRequest {
        debug!(table = %self.table_name, "assembling condition expressions");
        ConditionRequest {
            table_name: self.table_name.clone(),
            condition_expression: self.condition_expression(),
            expression_attribute_names: self.expression_attribute_names(),
            expression_attribute_values: self.expression_attribute_values(),
        }
    }

    /// Assemble update parameters. `ConditionExpression` is present only
    /// when condition tokens exist; the value table serializes only when
    /// non-empty (a pure REMOVE update has no values).
    #[must_use]
    pub fn build_update_expressions(&self) -> UpdateRequest {
        debug!(table = %self.table_name, "assembling update expressions");
        let condition = self.condition_expression();

        UpdateRequest {
            table_name: self.table_name.clone(),
            key: self.keys.clone(),
            update_expression: self.update_expression(),
            expression_attribute_names: self.expression_attribute_names(),
            expression_attribute_values: self.expression_attribute_values(),
            condition_expression: (!condition.is_empty()).then_some(condition),
        }
    }
}
