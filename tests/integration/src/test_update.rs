//! Update-shape scenarios.

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use dynoexpr_core::ExpressionBuilder;
    use serde_json::json;

    use crate::init_tracing;

    #[test]
    fn test_should_build_combined_update_shape() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder
            .key([("PK", "p"), ("SK", "s")])
            .remove("X")
            .set("Y", "v2")
            .delete("Z", vec![1, 2, 3]);
        let payload = serde_json::to_value(builder.build_update_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "T",
                "Key": { "PK": { "S": "p" }, "SK": { "S": "s" } },
                "UpdateExpression": "SET #eb_b = :eb_a REMOVE #eb_a DELETE #eb_c :eb_b",
                "ExpressionAttributeNames": {
                    "#eb_a": "X",
                    "#eb_b": "Y",
                    "#eb_c": "Z",
                },
                "ExpressionAttributeValues": {
                    ":eb_a": { "S": "v2" },
                    ":eb_b": { "L": [ { "N": "1" }, { "N": "2" }, { "N": "3" } ] },
                },
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_omit_value_table_for_pure_remove_update() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder.key([("PK", "p")]).remove("Legacy");
        let payload = serde_json::to_value(builder.build_update_expressions())?;
        assert_eq!(
            payload,
            json!({
                "TableName": "T",
                "Key": { "PK": { "S": "p" } },
                "UpdateExpression": "REMOVE #eb_a",
                "ExpressionAttributeNames": { "#eb_a": "Legacy" },
            })
        );
        Ok(())
    }

    #[test]
    fn test_should_guard_update_with_condition_expression() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder
            .key([("PK", "p")])
            .attr_exists("Version")
            .set_plus("Version", 1);
        let payload = serde_json::to_value(builder.build_update_expressions())?;
        assert_eq!(payload["ConditionExpression"], "attribute_exists(#eb_a)");
        assert_eq!(
            payload["UpdateExpression"],
            "SET #eb_a = #eb_a + :eb_a"
        );
        Ok(())
    }

    #[test]
    fn test_should_support_indexed_paths_in_mutation_targets() -> Result<()> {
        init_tracing();
        let mut builder = ExpressionBuilder::new("T")?;
        builder
            .key([("PK", "p")])
            .set("info.scores[0]", 10)
            .set_list_append("info.history", vec!["x"]);
        let payload = serde_json::to_value(builder.build_update_expressions())?;
        assert_eq!(
            payload["UpdateExpression"],
            "SET #eb_a.#eb_b[0] = :eb_a, #eb_a.#eb_c = list_append(#eb_a.#eb_c, :eb_b)"
        );
        assert_eq!(
            payload["ExpressionAttributeNames"],
            json!({ "#eb_a": "info", "#eb_b": "scores", "#eb_c": "history" })
        );
        Ok(())
    }
}
