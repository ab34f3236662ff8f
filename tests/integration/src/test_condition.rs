//! Condition-shape scenarios.

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use dynoexpr_core::{BuilderError, ExpressionBuilder};
    use dynoexpr_model::AttributeValue;
    use serde_json::json;

    use crate::init_tracing;

    #[test]
    fn test_should_fail_construction_without_table_name() {
        init_tracing();
        assert_eq!(
            ExpressionBuilder::new("").unwrap_err(),
            BuilderError::MissingTableName
        );
        assert_eq!(
            BuilderError::MissingTableName.to_string(),
            "table name must be included"
        );
    }

    #[test]
    fn test_should_build_equality_condition_shape() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder.eq("Name", "Alice");
        let payload = serde_json::to_value(builder.build_condition_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "T",
                "ConditionExpression": "#eb_a = :eb_a",
                "ExpressionAttributeNames": { "#eb_a": "Name" },
                "ExpressionAttributeValues": { ":eb_a": { "S": "Alice" } },
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_omit_value_table_for_structural_condition() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder.attr_exists("Name").and().attr_not_exists("Deleted");
        let payload = serde_json::to_value(builder.build_condition_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "T",
                "ConditionExpression":
                    "attribute_exists(#eb_a) AND attribute_not_exists(#eb_b)",
                "ExpressionAttributeNames": { "#eb_a": "Name", "#eb_b": "Deleted" },
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_dedup_values_marshalled_from_different_native_inputs() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder
            .eq("A", AttributeValue::from_json(&json!(5)))
            .and()
            .eq("B", 5);
        let payload = serde_json::to_value(builder.build_condition_expressions())?;
        assert_eq!(
            payload["ConditionExpression"],
            "#eb_a = :eb_a AND #eb_b = :eb_a"
        );
        assert_eq!(
            payload["ExpressionAttributeValues"],
            json!({ ":eb_a": { "N": "5" } })
        );
        Ok(())
    }

    #[test]
    fn test_should_build_grouped_type_assertion_condition() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder
            .group_start()
            .assert_string_type("Name")
            .or()
            .assert_null_type("Name")
            .group_end();
        let payload = serde_json::to_value(builder.build_condition_expressions())?;
        assert_eq!(
            payload["ConditionExpression"],
            "( attribute_type(#eb_a, :eb_a) OR attribute_type(#eb_a, :eb_b) )"
        );
        assert_eq!(
            payload["ExpressionAttributeValues"],
            json!({ ":eb_a": { "S": "S" }, ":eb_b": { "S": "NULL" } })
        );
        Ok(())
    }
}
