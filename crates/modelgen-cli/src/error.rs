use std::path::PathBuf;

use modelgen_config::ConfigError;
use modelgen_exporter::ExportError;
use modelgen_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No --table specified or --all")]
    NoTables,
    #[error("unknown connection '{0}': add it to \"connections\" in the config file")]
    UnknownConnection(String),
    #[error("DATABASE_URL is not set and no --connection was given")]
    MissingDatabaseUrl,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("failed to render model for table '{table}'")]
    Export {
        table: String,
        #[source]
        source: ExportError,
    },
    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
