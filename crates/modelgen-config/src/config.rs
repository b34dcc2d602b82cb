use std::collections::BTreeMap;

use modelgen_core::PrimaryKeyPolicy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::filter::TableFilter;
use crate::primary_key::PrimaryKeySetting;

/// Output folder used when neither a folder nor a namespace is configured.
pub const DEFAULT_MODEL_FOLDER: &str = "app/Models";

/// Namespace used when neither a folder nor a namespace is configured.
pub const DEFAULT_NAMESPACE: &str = "App";

/// File name pattern used when `filename` is empty.
pub const DEFAULT_FILENAME_PATTERN: &str = "{class}.php";

pub fn default_blacklist() -> Vec<String> {
    vec!["migrations".to_string()]
}

pub fn default_delimiter() -> String {
    ", ".to_string()
}

/// Persisted defaults for `generate-model`, read from `modelgen.json`.
///
/// Every key is optional; command-line options take precedence over the
/// values stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelgenConfig {
    /// Connection name; empty means the default connection.
    pub connection: String,
    pub namespace: String,
    /// Comma separated table list.
    pub table: String,
    pub primary_key: PrimaryKeySetting,
    pub folder: String,
    /// Output file name pattern, `{class}` is replaced by the class name.
    pub filename: String,
    pub debug: bool,
    pub all: bool,
    pub singular: bool,
    pub overwrite: bool,
    /// Glob patterns of tables skipped by `--all`.
    pub blacklist: Vec<String>,
    /// Glob patterns of tables kept by `--all`; empty keeps everything.
    pub whitelist: Vec<String>,
    /// Separator placed between list entries in the generated arrays.
    pub delimiter: String,
    pub timestamps: bool,
    /// Named database URLs selectable with `--connection`.
    pub connections: BTreeMap<String, String>,
}

impl Default for ModelgenConfig {
    fn default() -> Self {
        Self {
            connection: String::new(),
            namespace: String::new(),
            table: String::new(),
            primary_key: PrimaryKeySetting::default(),
            folder: String::new(),
            filename: String::new(),
            debug: false,
            all: false,
            singular: false,
            overwrite: false,
            blacklist: default_blacklist(),
            whitelist: Vec::new(),
            delimiter: default_delimiter(),
            timestamps: false,
            connections: BTreeMap::new(),
        }
    }
}

impl ModelgenConfig {
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// File name pattern, falling back to `{class}.php`.
    pub fn filename_pattern(&self) -> &str {
        if self.filename.is_empty() {
            DEFAULT_FILENAME_PATTERN
        } else {
            &self.filename
        }
    }

    /// Compile the blacklist and whitelist.
    pub fn table_filter(&self) -> Result<TableFilter, ConfigError> {
        TableFilter::new(&self.blacklist, &self.whitelist)
    }

    pub fn primary_key_policy(&self) -> PrimaryKeyPolicy {
        self.primary_key.to_policy()
    }

    /// Database URL registered for a connection name.
    pub fn connection_url(&self, name: &str) -> Option<&str> {
        self.connections.get(name).map(String::as_str)
    }
}
