use std::future::Future;
use std::sync::{Mutex, PoisonError};

use modelgen_core::ColumnDescriptor;

use crate::error::SchemaError;

/// Read-only access to the tables and columns of one database connection.
pub trait SchemaProvider {
    /// Columns of `table` in ordinal order. An unknown table, or one without
    /// columns, is [`SchemaError::TableNotFound`].
    fn list_columns(
        &self,
        table: &str,
    ) -> impl Future<Output = Result<Vec<ColumnDescriptor>, SchemaError>> + Send;

    /// Names of all base tables (views excluded).
    fn list_base_tables(&self) -> impl Future<Output = Result<Vec<String>, SchemaError>> + Send;
}

#[derive(Debug, Clone)]
struct StaticTable {
    name: String,
    columns: Vec<ColumnDescriptor>,
    is_view: bool,
}

/// In-memory schema. Records every call so callers can check which queries
/// were issued.
#[derive(Debug, Default)]
pub struct StaticSchemaProvider {
    tables: Vec<StaticTable>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticSchemaProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        self.tables.push(StaticTable {
            name: name.into(),
            columns,
            is_view: false,
        });
        self
    }

    pub fn with_view(mut self, name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        self.tables.push(StaticTable {
            name: name.into(),
            columns,
            is_view: true,
        });
        self
    }

    /// Make `list_columns` fail for `name` as if the query errored.
    pub fn with_failing_table(mut self, name: impl Into<String>) -> Self {
        self.failing.push(name.into());
        self
    }

    /// Calls made so far: `list_base_tables` or `list_columns:<table>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl SchemaProvider for StaticSchemaProvider {
    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SchemaError> {
        self.record(format!("list_columns:{table}"));

        if self.failing.iter().any(|t| t == table) {
            return Err(SchemaError::DescribeTable {
                table: table.to_string(),
                source: "simulated query failure".into(),
            });
        }

        self.tables
            .iter()
            .find(|t| t.name == table && !t.columns.is_empty())
            .map(|t| t.columns.clone())
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))
    }

    async fn list_base_tables(&self) -> Result<Vec<String>, SchemaError> {
        self.record("list_base_tables".to_string());
        Ok(self
            .tables
            .iter()
            .filter(|t| !t.is_view)
            .map(|t| t.name.clone())
            .collect())
    }
}
