//! Shared helpers.
//!
//! - [`db_error`] - Classification of SQLite constraint failures

pub mod db_error;
