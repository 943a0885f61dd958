//! Error types for the fallible configuration edges of the crate.
//!
//! The compositor itself never fails: undersized or out-of-range geometry is
//! clamped. Only parsing user-supplied configuration can be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("expected `X,Y,WIDTHxHEIGHT`, got `{0}`")]
    Malformed(String),
    #[error("invalid {field} `{value}`: {source}")]
    Number {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
