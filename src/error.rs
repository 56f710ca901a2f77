use std::path::PathBuf;

use thiserror::Error;

/// A single input line that could not be turned into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: &'static str, found: usize },

    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("release date {value:?} is not in DD-Mon-YYYY form")]
    InvalidDate { value: String },
}

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("cannot resync the {table} id sequence: table is empty")]
    EmptyTable { table: &'static str },

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} line {line}: {source}")]
    Record {
        file: &'static str,
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("create schema: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
