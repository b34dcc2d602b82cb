use modelgen_config::TableFilter;

use crate::error::SchemaError;
use crate::provider::SchemaProvider;

/// Which tables a run generates models for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelector {
    /// Tables named on the command line, in that order.
    Explicit(Vec<String>),
    /// Every base table, filtered by the blacklist and whitelist.
    All,
}

impl TableSelector {
    /// Build the selector from the `--table` and `--all` options.
    ///
    /// `all` wins when both are given. Returns `None` when there is nothing
    /// to generate.
    pub fn from_options(table: &str, all: bool) -> Option<Self> {
        if all {
            return Some(TableSelector::All);
        }
        let tables = split_table_list(table);
        if tables.is_empty() {
            None
        } else {
            Some(TableSelector::Explicit(tables))
        }
    }
}

/// Split a comma separated table list. Entries are trimmed, empty entries
/// dropped; existence is not checked here.
pub fn split_table_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve the ordered list of tables to generate.
///
/// Explicit lists are returned untouched without asking the provider;
/// `All` lists the base tables and applies `filter`.
pub async fn enumerate_tables<P: SchemaProvider>(
    provider: &P,
    selector: &TableSelector,
    filter: &TableFilter,
) -> Result<Vec<String>, SchemaError> {
    match selector {
        TableSelector::Explicit(tables) => Ok(tables.clone()),
        TableSelector::All => {
            let tables = provider.list_base_tables().await?;
            let total = tables.len();
            let kept = filter.apply(tables);
            tracing::debug!(total, kept = kept.len(), "filtered base tables");
            Ok(kept)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticSchemaProvider;
    use rstest::rstest;

    fn provider(tables: &[&str]) -> StaticSchemaProvider {
        tables
            .iter()
            .fold(StaticSchemaProvider::new(), |p, t| p.with_table(*t, vec![]))
    }

    fn filter(blacklist: &[&str], whitelist: &[&str]) -> TableFilter {
        let b: Vec<String> = blacklist.iter().map(|s| s.to_string()).collect();
        let w: Vec<String> = whitelist.iter().map(|s| s.to_string()).collect();
        TableFilter::new(&b, &w).unwrap()
    }

    #[rstest]
    #[case("a,b,c", false, Some(TableSelector::Explicit(vec!["a".into(), "b".into(), "c".into()])))]
    #[case("users", false, Some(TableSelector::Explicit(vec!["users".into()])))]
    #[case(" a , b ", false, Some(TableSelector::Explicit(vec!["a".into(), "b".into()])))]
    #[case("", true, Some(TableSelector::All))]
    #[case("users", true, Some(TableSelector::All))]
    #[case("", false, None)]
    #[case(" , ", false, None)]
    fn selector_from_options(
        #[case] table: &str,
        #[case] all: bool,
        #[case] expected: Option<TableSelector>,
    ) {
        assert_eq!(TableSelector::from_options(table, all), expected);
    }

    #[tokio::test]
    async fn explicit_list_never_queries_catalog() {
        let p = provider(&["x", "y"]);
        let selector = TableSelector::from_options("a,b,c", false).unwrap();
        let tables = enumerate_tables(&p, &selector, &filter(&["a"], &[]))
            .await
            .unwrap();
        assert_eq!(tables, vec!["a", "b", "c"]);
        assert!(p.calls().is_empty());
    }

    #[tokio::test]
    async fn all_applies_blacklist() {
        let p = provider(&["users", "migrations", "posts"]);
        let tables = enumerate_tables(&p, &TableSelector::All, &filter(&["migrations"], &[]))
            .await
            .unwrap();
        assert_eq!(tables, vec!["users", "posts"]);
        assert_eq!(p.calls(), vec!["list_base_tables"]);
    }

    #[tokio::test]
    async fn all_applies_whitelist() {
        let p = provider(&["users", "posts", "user_roles"]);
        let tables = enumerate_tables(&p, &TableSelector::All, &filter(&[], &["user_*"]))
            .await
            .unwrap();
        assert_eq!(tables, vec!["user_roles"]);
    }

    #[tokio::test]
    async fn all_skips_views() {
        let p = StaticSchemaProvider::new()
            .with_table("users", vec![])
            .with_view("user_stats", vec![]);
        let tables = enumerate_tables(&p, &TableSelector::All, &TableFilter::default())
            .await
            .unwrap();
        assert_eq!(tables, vec!["users"]);
    }
}
