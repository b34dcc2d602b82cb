use modelgen_core::ColumnDescriptor;
use sqlx::Row;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::error::SchemaError;
use crate::provider::SchemaProvider;

// information_schema columns come back as binary strings on some servers,
// hence the casts.
const BASE_TABLES_QUERY: &str = "SELECT CAST(TABLE_NAME AS CHAR) AS table_name \
     FROM information_schema.TABLES \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_TYPE = 'BASE TABLE' \
     ORDER BY TABLE_NAME";

const COLUMNS_QUERY: &str = "SELECT CAST(COLUMN_NAME AS CHAR) AS column_name, \
     CAST(COLUMN_TYPE AS CHAR) AS column_type \
     FROM information_schema.COLUMNS \
     WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
     ORDER BY ORDINAL_POSITION";

/// Schema provider backed by a MySQL/MariaDB connection pool. Tables are
/// looked up in the database selected by the connection URL.
#[derive(Debug, Clone)]
pub struct MySqlSchemaProvider {
    pool: MySqlPool,
}

impl MySqlSchemaProvider {
    pub async fn connect(url: &str) -> Result<Self, SchemaError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|e| SchemaError::Connect(Box::new(e)))?;
        Ok(Self { pool })
    }
}

impl SchemaProvider for MySqlSchemaProvider {
    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, SchemaError> {
        let describe_error = |e: sqlx::Error| SchemaError::DescribeTable {
            table: table.to_string(),
            source: Box::new(e),
        };

        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(describe_error)?;

        if rows.is_empty() {
            return Err(SchemaError::TableNotFound(table.to_string()));
        }

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get(0).map_err(describe_error)?;
            let sql_type: String = row.try_get(1).map_err(describe_error)?;
            columns.push(ColumnDescriptor { name, sql_type });
        }
        tracing::debug!(table, columns = columns.len(), "described table");
        Ok(columns)
    }

    async fn list_base_tables(&self) -> Result<Vec<String>, SchemaError> {
        let rows = sqlx::query(BASE_TABLES_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SchemaError::ListTables(Box::new(e)))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>(0)
                    .map_err(|e| SchemaError::ListTables(Box::new(e)))
            })
            .collect()
    }
}
