use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A column as reported by the database driver: its name and the raw SQL
/// type string (e.g. `int(11) unsigned`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub sql_type: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Normalized form of the column's SQL type.
    pub fn normalized_type(&self) -> SqlType {
        SqlType::parse(&self.sql_type)
    }
}

static TYPE_WITH_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w*)\((?:(\d+)(?:,(\d+))*)\)").expect("valid type pattern"));

/// Normalized SQL type: lower-cased base name plus the declared length or
/// precision, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlType {
    pub base: String,
    pub length: Option<String>,
}

impl SqlType {
    /// Normalize a raw SQL type string.
    ///
    /// The string is lower-cased and cut at the first whitespace, then a
    /// `type(len[,scale])` prefix is split into base and length. Anything that
    /// does not have that shape (`text`, `enum('a','b')`) becomes the base as is.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let truncated = lowered
            .split(char::is_whitespace)
            .next()
            .unwrap_or_default();

        match TYPE_WITH_LENGTH.captures(truncated) {
            Some(caps) => Self {
                base: caps
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                length: caps.get(2).map(|m| m.as_str().to_string()),
            },
            None => Self {
                base: truncated.to_string(),
                length: None,
            },
        }
    }

    /// True when the declared length is exactly one (`tinyint(1)`).
    pub fn has_unit_length(&self) -> bool {
        self.length
            .as_deref()
            .and_then(|len| len.parse::<u64>().ok())
            == Some(1)
    }
}
