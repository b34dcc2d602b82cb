//! Schema introspection for modelgen.
//!
//! The generator only needs two things from a database: the base tables of
//! the current schema and the name/type pairs of a table's columns. Both go
//! through [`SchemaProvider`] so the MySQL implementation can be swapped for
//! the in-memory [`StaticSchemaProvider`] in tests.

pub mod enumerate;
pub mod error;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod provider;

pub use enumerate::{TableSelector, enumerate_tables};
pub use error::SchemaError;
#[cfg(feature = "mysql")]
pub use mysql::MySqlSchemaProvider;
pub use provider::{SchemaProvider, StaticSchemaProvider};
