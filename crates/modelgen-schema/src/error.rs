use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to connect to database")]
    Connect(#[source] BoxError),
    #[error("failed to list base tables")]
    ListTables(#[source] BoxError),
    #[error("failed to describe table '{table}'")]
    DescribeTable {
        table: String,
        #[source]
        source: BoxError,
    },
    #[error("table not found: {0}")]
    TableNotFound(String),
}
