use super::decode::TypeTable;
use super::error::ProjectionError;
use super::types::{Record, ResultSet};

/// Projects every row of `result` into a [`Record`].
///
/// Decoders are chosen once per column from `types`. Output keeps the
/// source row order and the column order inside each record. A result
/// without rows yields an empty vector. The first value that cannot be
/// decoded aborts the projection.
pub fn project(result: &ResultSet, types: &TypeTable) -> Result<Vec<Record>, ProjectionError> {
    let decoders: Vec<_> = result
        .columns
        .iter()
        .map(|column| types.decoder_for(column.decl_type.as_deref()))
        .collect();

    let mut records = Vec::with_capacity(result.rows.len());

    for (row_index, row) in result.rows.iter().enumerate() {
        if row.len() != result.columns.len() {
            return Err(ProjectionError::ArityMismatch {
                row: row_index,
                expected: result.columns.len(),
                found: row.len(),
            });
        }

        let mut record = Record::with_capacity(row.len());
        for ((column, decoder), value) in result.columns.iter().zip(&decoders).zip(row) {
            let scalar = decoder
                .decode(value)
                .map_err(|_| ProjectionError::Coercion {
                    column: column.name.clone(),
                    row: row_index,
                    target: decoder.target(),
                    found: value.kind(),
                })?;
            record.insert(column.name.as_str(), scalar);
        }
        records.push(record);
    }

    Ok(records)
}

/// Projects `result` and encodes the records as a compact JSON array.
pub fn project_json(result: &ResultSet, types: &TypeTable) -> Result<String, ProjectionError> {
    let records = project(result, types)?;
    serde_json::to_string(&records).map_err(|e| ProjectionError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ColumnMeta, Scalar, SqlValue};

    fn paste_columns() -> Vec<ColumnMeta> {
        vec![
            ColumnMeta::new("id", Some("INTEGER")),
            ColumnMeta::new("userid", Some("INTEGER")),
            ColumnMeta::new("content", Some("TEXT")),
        ]
    }

    #[test]
    fn test_project_paste_rows() {
        let result = ResultSet {
            columns: paste_columns(),
            rows: vec![
                vec![
                    SqlValue::Integer(1),
                    SqlValue::Integer(1),
                    SqlValue::Text("hello".to_string()),
                ],
                vec![
                    SqlValue::Integer(2),
                    SqlValue::Integer(7),
                    SqlValue::Text("world".to_string()),
                ],
            ],
            rows_affected: 0,
        };

        let json = project_json(&result, &TypeTable::default()).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1,"userid":1,"content":"hello"},{"id":2,"userid":7,"content":"world"}]"#
        );
    }

    #[test]
    fn test_project_no_rows_is_empty_array() {
        let result = ResultSet {
            columns: paste_columns(),
            rows: Vec::new(),
            rows_affected: 0,
        };

        let records = project(&result, &TypeTable::default()).unwrap();
        assert!(records.is_empty());
        assert_eq!(project_json(&result, &TypeTable::default()).unwrap(), "[]");
    }

    #[test]
    fn test_project_written_result_is_empty_array() {
        let json = project_json(&ResultSet::written(1), &TypeTable::default()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_null_coercion_for_each_branch() {
        let result = ResultSet {
            columns: vec![
                ColumnMeta::new("label", Some("VARCHAR")),
                ColumnMeta::new("active", Some("BOOL")),
                ColumnMeta::new("count", Some("INT4")),
                ColumnMeta::new("payload", Some("JSONB")),
            ],
            rows: vec![vec![
                SqlValue::Null,
                SqlValue::Null,
                SqlValue::Null,
                SqlValue::Null,
            ]],
            rows_affected: 0,
        };

        let records = project(&result, &TypeTable::default()).unwrap();
        let record = &records[0];
        assert_eq!(record.get("label"), Some(&Scalar::Text(String::new())));
        assert_eq!(record.get("active"), Some(&Scalar::Bool(false)));
        assert_eq!(record.get("count"), Some(&Scalar::Int(0)));
        assert_eq!(record.get("payload"), Some(&Scalar::Text(String::new())));

        let json = serde_json::to_string(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"","active":false,"count":0,"payload":""}]"#
        );
    }

    #[test]
    fn test_undeclared_aggregate_projects_as_string() {
        let result = ResultSet {
            columns: vec![ColumnMeta::new("count", None)],
            rows: vec![vec![SqlValue::Integer(2)]],
            rows_affected: 0,
        };

        let json = project_json(&result, &TypeTable::default()).unwrap();
        assert_eq!(json, r#"[{"count":"2"}]"#);
    }

    #[test]
    fn test_coercion_failure_aborts_projection() {
        let result = ResultSet {
            columns: paste_columns(),
            rows: vec![
                vec![
                    SqlValue::Integer(1),
                    SqlValue::Integer(1),
                    SqlValue::Text("ok".to_string()),
                ],
                vec![
                    SqlValue::Integer(2),
                    SqlValue::Text("not a number".to_string()),
                    SqlValue::Text("bad".to_string()),
                ],
            ],
            rows_affected: 0,
        };

        let err = project(&result, &TypeTable::default()).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::Coercion {
                column: "userid".to_string(),
                row: 1,
                target: "int64",
                found: "text",
            }
        );
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let result = ResultSet {
            columns: paste_columns(),
            rows: vec![vec![SqlValue::Integer(1)]],
            rows_affected: 0,
        };

        assert!(matches!(
            project(&result, &TypeTable::default()),
            Err(ProjectionError::ArityMismatch {
                row: 0,
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn test_custom_table_changes_strategy() {
        let result = ResultSet {
            columns: vec![ColumnMeta::new("flag", Some("TINYINT"))],
            rows: vec![vec![SqlValue::Integer(1)]],
            rows_affected: 0,
        };

        let default_json = project_json(&result, &TypeTable::default()).unwrap();
        assert_eq!(default_json, r#"[{"flag":"1"}]"#);

        let table = TypeTable::default().with("TINYINT", crate::projection::Decoder::BOOL);
        let custom_json = project_json(&result, &table).unwrap();
        assert_eq!(custom_json, r#"[{"flag":true}]"#);
    }
}
