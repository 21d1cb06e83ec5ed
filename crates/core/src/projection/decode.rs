//! Decode strategies keyed by declared column type.
//!
//! A [`TypeTable`] maps a normalized declared type name to a [`Decoder`].
//! Every decoder reads a raw [`SqlValue`] into a nullable [`Scalar`] and
//! knows the zero value that replaces a null. Types missing from the table
//! fall back to the string decoder.

use std::collections::HashMap;

use super::types::{Scalar, SqlValue};

/// The raw value cannot be read as the decoder's target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incompatible;

/// Decodes a raw value into a nullable scalar.
pub type DecodeFn = fn(&SqlValue) -> Result<Option<Scalar>, Incompatible>;

/// A decode strategy: how to read a value and what a null becomes.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    target: &'static str,
    decode: DecodeFn,
    zero: fn() -> Scalar,
}

impl Decoder {
    /// Nullable string; null becomes `""`.
    pub const STRING: Decoder = Decoder::new("string", decode_string, zero_string);
    /// Nullable boolean; null becomes `false`.
    pub const BOOL: Decoder = Decoder::new("bool", decode_bool, zero_bool);
    /// Nullable 64-bit integer; null becomes `0`.
    pub const INT64: Decoder = Decoder::new("int64", decode_int64, zero_int64);

    pub const fn new(target: &'static str, decode: DecodeFn, zero: fn() -> Scalar) -> Self {
        Self {
            target,
            decode,
            zero,
        }
    }

    /// Name of the scalar type this decoder produces.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Reads `value` as a nullable scalar.
    pub fn decode_nullable(&self, value: &SqlValue) -> Result<Option<Scalar>, Incompatible> {
        (self.decode)(value)
    }

    /// Reads `value`, replacing null with the zero value.
    pub fn decode(&self, value: &SqlValue) -> Result<Scalar, Incompatible> {
        Ok(self.decode_nullable(value)?.unwrap_or_else(self.zero))
    }
}

fn zero_string() -> Scalar {
    Scalar::Text(String::new())
}

fn zero_bool() -> Scalar {
    Scalar::Bool(false)
}

fn zero_int64() -> Scalar {
    Scalar::Int(0)
}

fn decode_string(value: &SqlValue) -> Result<Option<Scalar>, Incompatible> {
    let text = match value {
        SqlValue::Null => return Ok(None),
        SqlValue::Text(s) => s.clone(),
        SqlValue::Integer(n) => n.to_string(),
        SqlValue::Real(f) => f.to_string(),
        SqlValue::Blob(bytes) => String::from_utf8(bytes.clone()).map_err(|_| Incompatible)?,
    };
    Ok(Some(Scalar::Text(text)))
}

fn decode_bool(value: &SqlValue) -> Result<Option<Scalar>, Incompatible> {
    match value {
        SqlValue::Null => Ok(None),
        SqlValue::Integer(n) => Ok(Some(Scalar::Bool(*n != 0))),
        SqlValue::Text(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => Ok(Some(Scalar::Bool(true))),
            "false" | "f" | "0" => Ok(Some(Scalar::Bool(false))),
            _ => Err(Incompatible),
        },
        SqlValue::Real(_) | SqlValue::Blob(_) => Err(Incompatible),
    }
}

fn decode_int64(value: &SqlValue) -> Result<Option<Scalar>, Incompatible> {
    match value {
        SqlValue::Null => Ok(None),
        SqlValue::Integer(n) => Ok(Some(Scalar::Int(*n))),
        SqlValue::Text(s) => s
            .trim()
            .parse()
            .map(|n| Some(Scalar::Int(n)))
            .map_err(|_| Incompatible),
        SqlValue::Real(_) | SqlValue::Blob(_) => Err(Incompatible),
    }
}

/// Normalizes a declared type for table lookup: upper-cased, trimmed, and
/// without a length suffix (`varchar(255)` becomes `VARCHAR`).
pub fn normalize_type_name(decl_type: &str) -> String {
    let base = decl_type.split('(').next().unwrap_or(decl_type);
    base.trim().to_ascii_uppercase()
}

/// Lookup table from declared column type to decode strategy.
#[derive(Debug, Clone)]
pub struct TypeTable {
    decoders: HashMap<String, Decoder>,
    fallback: Decoder,
}

impl TypeTable {
    /// An empty table where every type uses `fallback`.
    pub fn empty(fallback: Decoder) -> Self {
        Self {
            decoders: HashMap::new(),
            fallback,
        }
    }

    /// Registers `decoder` for `decl_type`, replacing any earlier entry.
    pub fn register(&mut self, decl_type: &str, decoder: Decoder) -> &mut Self {
        self.decoders.insert(normalize_type_name(decl_type), decoder);
        self
    }

    /// Builder form of [`TypeTable::register`].
    pub fn with(mut self, decl_type: &str, decoder: Decoder) -> Self {
        self.register(decl_type, decoder);
        self
    }

    /// Decoder for a column's declared type; unknown or missing types use the fallback.
    pub fn decoder_for(&self, decl_type: Option<&str>) -> &Decoder {
        decl_type
            .and_then(|name| self.decoders.get(&normalize_type_name(name)))
            .unwrap_or(&self.fallback)
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        let mut table = Self::empty(Decoder::STRING);
        for name in ["VARCHAR", "CHAR", "TEXT", "UUID", "TIMESTAMP"] {
            table.register(name, Decoder::STRING);
        }
        for name in ["BOOL", "BOOLEAN"] {
            table.register(name, Decoder::BOOL);
        }
        for name in ["INT4", "INT", "INTEGER"] {
            table.register(name, Decoder::INT64);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_type_name() {
        assert_eq!(normalize_type_name("varchar(255)"), "VARCHAR");
        assert_eq!(normalize_type_name(" Integer "), "INTEGER");
        assert_eq!(normalize_type_name("TEXT"), "TEXT");
    }

    #[test]
    fn test_default_table_lookup() {
        let table = TypeTable::default();
        assert_eq!(table.decoder_for(Some("text")).target(), "string");
        assert_eq!(table.decoder_for(Some("UUID")).target(), "string");
        assert_eq!(table.decoder_for(Some("TIMESTAMP")).target(), "string");
        assert_eq!(table.decoder_for(Some("bool")).target(), "bool");
        assert_eq!(table.decoder_for(Some("INT4")).target(), "int64");
        assert_eq!(table.decoder_for(Some("INTEGER")).target(), "int64");
    }

    #[test]
    fn test_unknown_and_missing_types_fall_back_to_string() {
        let table = TypeTable::default();
        assert_eq!(table.decoder_for(Some("INT8")).target(), "string");
        assert_eq!(table.decoder_for(Some("JSONB")).target(), "string");
        assert_eq!(table.decoder_for(None).target(), "string");
    }

    #[test]
    fn test_register_extends_table() {
        let table = TypeTable::default().with("BIGINT", Decoder::INT64);
        assert_eq!(table.decoder_for(Some("bigint")).target(), "int64");
    }

    #[test]
    fn test_null_decodes_to_zero_value() {
        assert_eq!(
            Decoder::STRING.decode(&SqlValue::Null),
            Ok(Scalar::Text(String::new()))
        );
        assert_eq!(Decoder::BOOL.decode(&SqlValue::Null), Ok(Scalar::Bool(false)));
        assert_eq!(Decoder::INT64.decode(&SqlValue::Null), Ok(Scalar::Int(0)));
    }

    #[test]
    fn test_nullable_decode_keeps_null() {
        assert_eq!(Decoder::INT64.decode_nullable(&SqlValue::Null), Ok(None));
    }

    #[test]
    fn test_string_accepts_numbers() {
        assert_eq!(
            Decoder::STRING.decode(&SqlValue::Integer(42)),
            Ok(Scalar::Text("42".to_string()))
        );
    }

    #[test]
    fn test_string_rejects_invalid_utf8_blob() {
        assert_eq!(
            Decoder::STRING.decode(&SqlValue::Blob(vec![0xff, 0xfe])),
            Err(Incompatible)
        );
    }

    #[test]
    fn test_bool_from_integer_and_text() {
        assert_eq!(Decoder::BOOL.decode(&SqlValue::Integer(1)), Ok(Scalar::Bool(true)));
        assert_eq!(Decoder::BOOL.decode(&SqlValue::Integer(0)), Ok(Scalar::Bool(false)));
        assert_eq!(
            Decoder::BOOL.decode(&SqlValue::Text("TRUE".to_string())),
            Ok(Scalar::Bool(true))
        );
        assert_eq!(
            Decoder::BOOL.decode(&SqlValue::Text("maybe".to_string())),
            Err(Incompatible)
        );
    }

    #[test]
    fn test_int64_rejects_non_numeric_text() {
        assert_eq!(
            Decoder::INT64.decode(&SqlValue::Text("12".to_string())),
            Ok(Scalar::Int(12))
        );
        assert_eq!(
            Decoder::INT64.decode(&SqlValue::Text("twelve".to_string())),
            Err(Incompatible)
        );
        assert_eq!(Decoder::INT64.decode(&SqlValue::Real(1.5)), Err(Incompatible));
    }
}
