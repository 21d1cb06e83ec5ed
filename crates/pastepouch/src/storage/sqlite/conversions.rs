//! SQLite row conversion functions.
//!
//! Reads rusqlite statements into the backend-neutral [`ResultSet`] shape the
//! projector consumes. Column declarations come from `sqlite3_column_decltype`.

use pastepouch_core::projection::{ColumnMeta, ResultSet, SqlValue};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Statement};

/// Convert a borrowed SQLite value into an owned [`SqlValue`].
pub fn value_from_ref(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(n) => SqlValue::Integer(n),
        ValueRef::Real(f) => SqlValue::Real(f),
        ValueRef::Text(bytes) => SqlValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => SqlValue::Blob(bytes.to_vec()),
    }
}

/// Column names and declared types of a prepared statement.
pub fn column_meta(stmt: &Statement<'_>) -> Vec<ColumnMeta> {
    stmt.columns()
        .iter()
        .map(|column| ColumnMeta::new(column.name(), column.decl_type()))
        .collect()
}

/// Run a query and collect every row into a [`ResultSet`].
pub fn query_result_set<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<ResultSet> {
    let mut stmt = conn.prepare(sql)?;
    let columns = column_meta(&stmt);
    let width = columns.len();

    let mut rows = stmt.query(params)?;
    let mut values = Vec::new();
    while let Some(row) = rows.next()? {
        let mut row_values = Vec::with_capacity(width);
        for index in 0..width {
            row_values.push(value_from_ref(row.get_ref(index)?));
        }
        values.push(row_values);
    }

    Ok(ResultSet {
        columns,
        rows: values,
        rows_affected: 0,
    })
}

/// Run a write statement; the result carries only the affected row count.
pub fn execute_result_set<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<ResultSet> {
    let rows_affected = conn.execute(sql, params)?;
    Ok(ResultSet::written(rows_affected))
}
