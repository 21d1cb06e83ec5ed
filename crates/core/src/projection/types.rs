use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name and declared storage type of one result column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    pub name: String,
    /// Declared type as reported by the store. `None` for expressions
    /// such as `COUNT(*)` that carry no declaration.
    pub decl_type: Option<String>,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, decl_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            decl_type: decl_type.map(str::to_string),
        }
    }
}

/// A raw value read from a result row, before decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Storage class name, used in coercion error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Real(_) => "real",
            SqlValue::Text(_) => "text",
            SqlValue::Blob(_) => "blob",
        }
    }
}

/// Tabular result of one data-access statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<SqlValue>>,
    /// Rows touched by a write statement. Always 0 for queries.
    pub rows_affected: usize,
}

impl ResultSet {
    /// Result of a write statement: no columns, no rows.
    pub fn written(rows_affected: usize) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            rows_affected,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A decoded, non-null scalar ready for JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One projected row: column name to scalar, in column order.
///
/// Serializes as a JSON object whose keys keep the source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field. A repeated column name replaces the earlier value,
    /// matching how a JSON object keeps only one value per key.
    pub fn insert(&mut self, name: impl Into<String>, value: Scalar) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_in_column_order() {
        let mut record = Record::default();
        record.insert("id", Scalar::Int(1));
        record.insert("name", Scalar::Text("Ada".to_string()));
        record.insert("email", Scalar::Text("ada@example.com".to_string()));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ada","email":"ada@example.com"}"#);
    }

    #[test]
    fn test_record_duplicate_column_keeps_last_value() {
        let mut record = Record::default();
        record.insert("id", Scalar::Int(1));
        record.insert("id", Scalar::Int(2));

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("id"), Some(&Scalar::Int(2)));
    }

    #[test]
    fn test_scalar_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Scalar::Bool(false)).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Scalar::Int(0)).unwrap(), "0");
        assert_eq!(
            serde_json::to_string(&Scalar::Text(String::new())).unwrap(),
            r#""""#
        );
    }

    #[test]
    fn test_written_result_set_is_empty() {
        let result = ResultSet::written(3);
        assert!(result.is_empty());
        assert!(result.columns.is_empty());
        assert_eq!(result.rows_affected, 3);
    }
}
