//! Movie ratings: users, movies and ratings in PostgreSQL, a seed importer for the
//! MovieLens flat files, and a small HTML front end for listing and registering users.

use std::fmt::Display;

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod movies;
pub mod pages;
pub mod ratings;
pub mod seed;
pub mod sequence;
pub mod state;
pub mod users;

pub use error::{RecordError, SeedError, SequenceError};
pub use movies::repo_types::Movie;
pub use ratings::repo_types::Rating;
pub use seed::{ImportSummary, Importer};
pub use sequence::SequenceTarget;
pub use state::AppState;
pub use users::repo_types::User;

/// `None` for a missing value, the value itself otherwise.
pub(crate) fn display_opt<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "None".to_string(), ToString::to_string)
}
