use modelgen_core::PrimaryKeyPolicy;
use modelgen_naming::{class_name, singularize};
use serde::{Deserialize, Serialize};

/// Primary key as written in the config file: either a fixed column name or
/// a pattern computed per table.
///
/// ```json
/// { "primaryKey": "id" }
/// { "primaryKey": { "derive": "{singular}_id" } }
/// ```
///
/// Pattern placeholders: `{table}` (table name), `{singular}` (singular table
/// name) and `{class}` (studly class name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKeySetting {
    Fixed(String),
    Derived { derive: String },
}

impl Default for PrimaryKeySetting {
    fn default() -> Self {
        PrimaryKeySetting::Fixed("id".to_string())
    }
}

impl PrimaryKeySetting {
    pub fn to_policy(&self) -> PrimaryKeyPolicy {
        match self {
            PrimaryKeySetting::Fixed(name) => PrimaryKeyPolicy::Fixed(name.clone()),
            PrimaryKeySetting::Derived { derive } => {
                let pattern = derive.clone();
                PrimaryKeyPolicy::derived(move |table| expand_pattern(&pattern, table))
            }
        }
    }
}

fn expand_pattern(pattern: &str, table: &str) -> String {
    pattern
        .replace("{table}", table)
        .replace("{singular}", &singularize(table))
        .replace("{class}", &class_name(table, false))
}
