use std::fmt;
use std::sync::Arc;

/// How the primary key column name is found for a table.
#[derive(Clone)]
pub enum PrimaryKeyPolicy {
    /// Every table uses the same column name.
    Fixed(String),
    /// The name is computed from the table name.
    DerivedFromTable(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl PrimaryKeyPolicy {
    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        PrimaryKeyPolicy::DerivedFromTable(Arc::new(f))
    }

    /// Resolve the primary key column name for `table`.
    pub fn resolve(&self, table: &str) -> String {
        match self {
            PrimaryKeyPolicy::Fixed(name) => name.clone(),
            PrimaryKeyPolicy::DerivedFromTable(f) => f(table),
        }
    }
}

impl Default for PrimaryKeyPolicy {
    fn default() -> Self {
        PrimaryKeyPolicy::Fixed("id".to_string())
    }
}

impl fmt::Debug for PrimaryKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKeyPolicy::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            PrimaryKeyPolicy::DerivedFromTable(_) => f.write_str("DerivedFromTable(..)"),
        }
    }
}
