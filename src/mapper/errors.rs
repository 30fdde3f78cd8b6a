//! # Mapper Error Types
//!
//! Every contract violation of the mapper is a programmer error: a mistyped
//! column, a struct that maps two fields onto one column, a destination of
//! the wrong type. None of them is transient, so there is nothing to retry.
//!
//! ## Error Categories
//!
//! - **Construction errors**: raised while resolving fields to columns. Build
//!   mappers early (at startup) so these surface before the first query.
//! - **Usage errors**: raised by the extraction helpers when handed an instance
//!   that is not the mapped record, or a record whose hand written field
//!   accessors disagree with its description.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapperError {
    #[error("Mapper MUST have a non empty struct tag key.")]
    EmptyTagKey,
    #[error("Mapper target MUST be a struct or a struct pointer, got `{type_name}`")]
    NotAStruct { type_name: String },
    #[error("Mapper MUST select at least one field")]
    NoColumns,
    #[error("Field {column} is mapped more than once")]
    DuplicateColumn { column: String },
    #[error("Some fields are missing from target: {}", .columns.join(","))]
    MissingFields { columns: Vec<String> },
    #[error("destination is not a `{expected}` record")]
    WrongDestination { expected: &'static str },
    #[error("Record `{target}` describes {described} fields but exposes {exposed}")]
    FieldCountMismatch {
        target: &'static str,
        described: usize,
        exposed: usize,
    },
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, MapperError>;
