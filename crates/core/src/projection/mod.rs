//! Result-set to record projection.
//!
//! Turns any tabular result (column metadata plus raw rows) into an ordered
//! list of JSON-ready records. Column decoding is driven by the declared
//! column type through a [`TypeTable`], and nulls collapse to the decoder's
//! zero value.

mod decode;
mod error;
mod project;
mod types;

pub use decode::{normalize_type_name, DecodeFn, Decoder, Incompatible, TypeTable};
pub use error::ProjectionError;
pub use project::{project, project_json};
pub use types::{ColumnMeta, Record, ResultSet, Scalar, SqlValue};
