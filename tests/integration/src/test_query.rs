//! Query-shape scenarios.

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use dynoexpr_core::ExpressionBuilder;
    use serde_json::json;

    use crate::init_tracing;

    #[test]
    fn test_should_build_default_query_shape() -> Result<()> {
        init_tracing();
        let builder = ExpressionBuilder::new("test-table")?;
        let payload = serde_json::to_value(builder.build_query_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "test-table",
                "KeyConditionExpression": "",
                "ExpressionAttributeNames": {},
                "ExpressionAttributeValues": {},
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_build_equality_query_shape() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("test-table")?;
        builder.eq("Test", "Value");
        let payload = serde_json::to_value(builder.build_query_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "test-table",
                "KeyConditionExpression": "#eb_a = :eb_a",
                "ExpressionAttributeNames": { "#eb_a": "Test" },
                "ExpressionAttributeValues": { ":eb_a": { "S": "Value" } },
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_reuse_name_placeholder_across_range_bounds() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("test-table")?;
        builder.le("Test", 42).and().ge("Test", 0);
        let payload = serde_json::to_value(builder.build_query_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "test-table",
                "KeyConditionExpression": "#eb_a <= :eb_a AND #eb_a >= :eb_b",
                "ExpressionAttributeNames": { "#eb_a": "Test" },
                "ExpressionAttributeValues": {
                    ":eb_a": { "N": "42" },
                    ":eb_b": { "N": "0" },
                },
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_build_between_query_shape() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("test-table")?;
        builder.between("Test", 0, 42);
        let payload = serde_json::to_value(builder.build_query_expressions())?;
        assert_eq!(
            payload["KeyConditionExpression"],
            "#eb_a BETWEEN :eb_a AND :eb_b"
        );
        Ok(())
    }

    #[test]
    fn test_should_include_filter_and_projection_when_built() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("test-table")?;
        builder
            .eq("K", "v")
            .filter_start()
            .lt("F", 5)
            .filter_end()
            .projections(["K", "F"]);
        let payload = serde_json::to_value(builder.build_query_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "test-table",
                "KeyConditionExpression": "#eb_a = :eb_a",
                "ExpressionAttributeNames": { "#eb_a": "K", "#eb_b": "F" },
                "ExpressionAttributeValues": {
                    ":eb_a": { "S": "v" },
                    ":eb_b": { "N": "5" },
                },
                "FilterExpression": "#eb_b < :eb_b",
                "ProjectionExpression": "#eb_a, #eb_b",
            })
        );
        Ok(())
    }
}
