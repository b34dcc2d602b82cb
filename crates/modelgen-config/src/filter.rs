use glob::Pattern;

use crate::error::ConfigError;

/// Blacklist/whitelist of shell-glob table patterns applied to `--all`.
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    blacklist: Vec<Pattern>,
    whitelist: Vec<Pattern>,
}

impl TableFilter {
    pub fn new(blacklist: &[String], whitelist: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            blacklist: compile(blacklist)?,
            whitelist: compile(whitelist)?,
        })
    }

    /// A table passes when no blacklist pattern matches it and the whitelist
    /// is either empty or has a matching pattern.
    pub fn allows(&self, table: &str) -> bool {
        if self.blacklist.iter().any(|p| p.matches(table)) {
            return false;
        }
        self.whitelist.is_empty() || self.whitelist.iter().any(|p| p.matches(table))
    }

    /// Keep the allowed tables, preserving order.
    pub fn apply(&self, tables: Vec<String>) -> Vec<String> {
        tables.into_iter().filter(|t| self.allows(t)).collect()
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ConfigError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}
