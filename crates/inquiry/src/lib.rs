//! Storage side of the contact form: accepts validated inquiries and reads
//! them back for the JSON API.

mod command;
mod query;
pub mod table;

pub use command::*;
pub use query::*;

/// Embedded schema migrations for the inquiry store.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
