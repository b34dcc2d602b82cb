use std::path::{Path, PathBuf};

use clap::Args;
use modelgen_config::{DEFAULT_MODEL_FOLDER, DEFAULT_NAMESPACE, ModelgenConfig, TableFilter};
use modelgen_core::PrimaryKeyPolicy;
use modelgen_schema::TableSelector;

use crate::error::GenerateError;

/// Environment variable holding the default database URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "modelgen.json";

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Comma separated list of tables to generate.
    #[arg(long)]
    pub table: Option<String>,
    /// Connection name from the `connections` map of the config file.
    #[arg(long)]
    pub connection: Option<String>,
    /// Print per-table progress.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = parse_bool)]
    pub debug: Option<bool>,
    /// Output folder, relative to the project root.
    #[arg(long)]
    pub folder: Option<String>,
    /// Namespace of the generated models; `/` is accepted as separator.
    #[arg(long)]
    pub namespace: Option<String>,
    /// Singularize class names.
    #[arg(long)]
    pub singular: bool,
    /// Generate every base table.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = parse_bool)]
    pub all: Option<bool>,
    /// Replace model files that already exist.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = parse_bool)]
    pub overwrite: Option<bool>,
    /// Set `$timestamps` in the generated models.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = parse_bool)]
    pub timestamps: Option<bool>,
    /// Config file path.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Boolean option value with the loose spellings used by PHP's
/// `FILTER_VALIDATE_BOOLEAN`.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" | "" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'")),
    }
}

/// Options of one run after merging command line, config file and defaults.
#[derive(Debug)]
pub struct GenerationOptions {
    pub connection: Option<String>,
    pub namespace: String,
    pub folder: PathBuf,
    pub selector: Option<TableSelector>,
    pub singular: bool,
    pub overwrite: bool,
    pub timestamps: bool,
    pub debug: bool,
    pub primary_key: PrimaryKeyPolicy,
    pub delimiter: String,
    pub filter: TableFilter,
    pub filename_pattern: String,
}

impl GenerationOptions {
    /// Merge `args` over `config`. Relative folders are resolved against
    /// `project_root`.
    pub fn resolve(
        args: &GenerateArgs,
        config: &ModelgenConfig,
        project_root: &Path,
    ) -> Result<Self, GenerateError> {
        let table = args.table.as_deref().unwrap_or(&config.table);
        let all = args.all.unwrap_or(config.all);
        let connection = pick(args.connection.as_deref(), &config.connection);
        let folder = pick(args.folder.as_deref(), &config.folder);
        let namespace = pick(args.namespace.as_deref(), &config.namespace);

        let (folder, namespace) = resolve_location(folder, namespace, project_root);

        Ok(Self {
            connection: connection.map(str::to_string),
            namespace,
            folder,
            selector: TableSelector::from_options(table, all),
            singular: args.singular || config.singular,
            overwrite: args.overwrite.unwrap_or(config.overwrite),
            timestamps: args.timestamps.unwrap_or(config.timestamps),
            debug: args.debug.unwrap_or(config.debug),
            primary_key: config.primary_key_policy(),
            delimiter: config.delimiter().to_string(),
            filter: config.table_filter()?,
            filename_pattern: config.filename_pattern().to_string(),
        })
    }

    /// Database URL for the selected connection.
    ///
    /// Named connections come from the config map; the default connection
    /// reads `env_url`, normally the `DATABASE_URL` variable.
    pub fn database_url(
        &self,
        config: &ModelgenConfig,
        env_url: Option<String>,
    ) -> Result<String, GenerateError> {
        match self.connection.as_deref() {
            Some(name) => config
                .connection_url(name)
                .map(str::to_string)
                .ok_or_else(|| GenerateError::UnknownConnection(name.to_string())),
            None => env_url
                .filter(|url| !url.is_empty())
                .ok_or(GenerateError::MissingDatabaseUrl),
        }
    }
}

fn pick<'a>(cli: Option<&'a str>, config: &'a str) -> Option<&'a str> {
    Some(cli.unwrap_or(config)).filter(|v| !v.is_empty())
}

/// Output folder and model namespace.
///
/// Without either, models go to `app/Models` in namespace `App`. A given
/// namespace is used as is; otherwise the folder doubles as the namespace.
fn resolve_location(
    folder: Option<&str>,
    namespace: Option<&str>,
    project_root: &Path,
) -> (PathBuf, String) {
    let namespace = match (namespace, folder) {
        (Some(ns), _) => ns.replace('/', "\\"),
        (None, Some(folder)) => folder.trim_end_matches('/').replace('/', "\\"),
        (None, None) => DEFAULT_NAMESPACE.to_string(),
    };

    let folder = folder
        .map(|f| f.trim_end_matches('/'))
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_MODEL_FOLDER);

    (project_root.join(folder), namespace)
}
