use std::path::{Path, PathBuf};

use modelgen_core::classify;
use modelgen_exporter::{EloquentExporter, ModelSpec};
use modelgen_naming::class_name;
use modelgen_schema::{SchemaProvider, TableSelector, enumerate_tables};

use crate::error::GenerateError;
use crate::logger::Logger;
use crate::options::GenerationOptions;

/// Files touched by one run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Renders one model file per selected table.
pub struct Generator<'a, P, L> {
    provider: &'a P,
    logger: &'a L,
    options: &'a GenerationOptions,
    exporter: EloquentExporter,
}

impl<'a, P: SchemaProvider, L: Logger> Generator<'a, P, L> {
    pub fn new(provider: &'a P, logger: &'a L, options: &'a GenerationOptions) -> Self {
        Self {
            provider,
            logger,
            options,
            exporter: EloquentExporter::new(options.delimiter.clone()),
        }
    }

    /// Generate every table picked by `selector`, in order.
    ///
    /// The first schema or filesystem error stops the run; files written
    /// before it are kept.
    pub async fn run(&self, selector: &TableSelector) -> Result<GenerateReport, GenerateError> {
        let tables = enumerate_tables(self.provider, selector, &self.options.filter).await?;
        tracing::debug!(count = tables.len(), "tables selected");

        self.ensure_folder().await?;

        let mut report = GenerateReport::default();
        for table in &tables {
            self.generate_table(table, &mut report).await?;
        }
        Ok(report)
    }

    async fn generate_table(
        &self,
        table: &str,
        report: &mut GenerateReport,
    ) -> Result<(), GenerateError> {
        let class = class_name(table, self.options.singular);
        let file_name = self.options.filename_pattern.replace("{class}", &class);
        let path = self.options.folder.join(&file_name);

        if !self.options.overwrite && file_exists(&path).await? {
            self.comment(&format!("Skipping file: {file_name}"), true);
            report.skipped.push(path);
            return Ok(());
        }

        self.comment(&format!("Generating file: {file_name}"), false);
        self.comment(
            &format!("Retrieving column information for : {table}"),
            false,
        );
        let columns = self.provider.list_columns(table).await?;

        let primary_key = self.options.primary_key.resolve(table);
        let classification = classify(&columns, &primary_key);
        let spec = ModelSpec {
            class_name: &class,
            table,
            primary_key: &primary_key,
            namespace: &self.options.namespace,
            connection: self.options.connection.as_deref(),
            timestamps: self.options.timestamps,
        };
        let source = self
            .exporter
            .render(&spec, &classification)
            .map_err(|source| GenerateError::Export {
                table: table.to_string(),
                source,
            })?;

        self.comment(&format!("Writing model: {}", path.display()), true);
        tokio::fs::write(&path, source)
            .await
            .map_err(|source| GenerateError::Filesystem {
                action: "write",
                path: path.clone(),
                source,
            })?;
        report.written.push(path);
        Ok(())
    }

    async fn ensure_folder(&self) -> Result<(), GenerateError> {
        let folder = &self.options.folder;
        if file_exists(folder).await? {
            return Ok(());
        }
        tracing::debug!(folder = %folder.display(), "creating output folder");
        tokio::fs::create_dir_all(folder)
            .await
            .map_err(|source| GenerateError::Filesystem {
                action: "create",
                path: folder.clone(),
                source,
            })
    }

    /// Progress line, shown only in debug mode unless `force` is set.
    fn comment(&self, text: &str, force: bool) {
        if self.options.debug || force {
            self.logger.comment(text);
        }
    }
}

async fn file_exists(path: &Path) -> Result<bool, GenerateError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|source| GenerateError::Filesystem {
            action: "inspect",
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use modelgen_config::ModelgenConfig;
    use modelgen_core::{ColumnDescriptor, PrimaryKeyPolicy};
    use modelgen_schema::{SchemaError, StaticSchemaProvider};
    use tempfile::tempdir;

    use crate::logger::RecordingLogger;
    use crate::options::GenerateArgs;

    fn orders() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "int(11)"),
            ColumnDescriptor::new("total", "decimal(10,2)"),
            ColumnDescriptor::new("created_at", "timestamp"),
        ]
    }

    fn provider() -> StaticSchemaProvider {
        StaticSchemaProvider::new()
            .with_table("orders", orders())
            .with_table(
                "users",
                vec![
                    ColumnDescriptor::new("id", "int(10) unsigned"),
                    ColumnDescriptor::new("name", "varchar(255)"),
                    ColumnDescriptor::new("active", "tinyint(1)"),
                ],
            )
            .with_table("migrations", vec![ColumnDescriptor::new("id", "int(11)")])
            .with_view("order_totals", orders())
            .with_failing_table("broken")
    }

    fn options(folder: &Path, args: GenerateArgs) -> GenerationOptions {
        GenerationOptions::resolve(&args, &ModelgenConfig::default(), folder).unwrap()
    }

    fn args(folder: &str) -> GenerateArgs {
        GenerateArgs {
            folder: Some(folder.to_string()),
            ..Default::default()
        }
    }

    fn explicit(tables: &[&str]) -> TableSelector {
        TableSelector::Explicit(tables.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn writes_orders_model() {
        let tmp = tempdir().unwrap();
        let opts = options(tmp.path(), args("Models"));
        let logger = RecordingLogger::default();
        let provider = provider();

        let report = Generator::new(&provider, &logger, &opts)
            .run(&explicit(&["orders"]))
            .await
            .unwrap();

        let path = tmp.path().join("Models/Orders.php");
        assert_eq!(report.written, vec![path.clone()]);
        let out = fs::read_to_string(&path).unwrap();
        assert!(out.contains("namespace Models;"));
        assert!(out.contains("class Orders extends Model"));
        assert!(out.contains("protected $fillable = ['total', 'created_at'];"));
        assert!(out.contains("protected $hidden = ['id'];"));
        assert!(out.contains("protected $casts = ['created_at' => 'timestamp'];"));
        assert!(out.contains("protected $dates = ['created_at'];"));
        assert!(out.contains("public $timestamps = false;"));
        assert_eq!(
            logger.lines(),
            vec![format!("comment: Writing model: {}", path.display())]
        );
    }

    #[tokio::test]
    async fn explicit_tables_in_order_without_catalog_query() {
        let tmp = tempdir().unwrap();
        let opts = options(tmp.path(), args("out"));
        let logger = RecordingLogger::default();
        let provider = provider();

        let report = Generator::new(&provider, &logger, &opts)
            .run(&explicit(&["users", "orders"]))
            .await
            .unwrap();

        assert_eq!(
            report.written,
            vec![
                tmp.path().join("out/Users.php"),
                tmp.path().join("out/Orders.php")
            ]
        );
        assert_eq!(
            provider.calls(),
            vec!["list_columns:users", "list_columns:orders"]
        );
    }

    #[tokio::test]
    async fn second_run_skips_existing_file() {
        let tmp = tempdir().unwrap();
        let opts = options(tmp.path(), args("out"));
        let provider = provider();

        Generator::new(&provider, &RecordingLogger::default(), &opts)
            .run(&explicit(&["orders"]))
            .await
            .unwrap();
        let path = tmp.path().join("out/Orders.php");
        fs::write(&path, "hand edited").unwrap();

        let logger = RecordingLogger::default();
        let report = Generator::new(&provider, &logger, &opts)
            .run(&explicit(&["orders"]))
            .await
            .unwrap();

        assert_eq!(report.skipped, vec![path.clone()]);
        assert!(report.written.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited");
        assert_eq!(logger.lines(), vec!["comment: Skipping file: Orders.php"]);
    }

    #[tokio::test]
    async fn overwrite_replaces_existing_file() {
        let tmp = tempdir().unwrap();
        let folder = tmp.path().join("out");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("Orders.php"), "old").unwrap();
        let opts = options(
            tmp.path(),
            GenerateArgs {
                overwrite: Some(true),
                ..args("out")
            },
        );

        let report = Generator::new(&provider(), &RecordingLogger::default(), &opts)
            .run(&explicit(&["orders"]))
            .await
            .unwrap();

        assert_eq!(report.written.len(), 1);
        assert!(
            fs::read_to_string(folder.join("Orders.php"))
                .unwrap()
                .starts_with("<?php")
        );
    }

    #[tokio::test]
    async fn all_tables_respect_blacklist_and_views() {
        let tmp = tempdir().unwrap();
        let opts = options(tmp.path(), args("out"));
        let provider = provider();

        let report = Generator::new(&provider, &RecordingLogger::default(), &opts)
            .run(&TableSelector::All)
            .await
            .unwrap();

        let mut names: Vec<_> = report
            .written
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Orders.php", "Users.php"]);
    }

    #[tokio::test]
    async fn failing_table_aborts_batch() {
        let tmp = tempdir().unwrap();
        let opts = options(tmp.path(), args("out"));
        let logger = RecordingLogger::default();

        let err = Generator::new(&provider(), &logger, &opts)
            .run(&explicit(&["orders", "broken", "users"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Schema(SchemaError::DescribeTable { ref table, .. }) if table == "broken"
        ));
        assert!(tmp.path().join("out/Orders.php").exists());
        assert!(!tmp.path().join("out/Users.php").exists());
    }

    #[tokio::test]
    async fn unknown_table_is_schema_error() {
        let tmp = tempdir().unwrap();
        let opts = options(tmp.path(), args("out"));

        let err = Generator::new(&provider(), &RecordingLogger::default(), &opts)
            .run(&explicit(&["nope"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Schema(SchemaError::TableNotFound(ref t)) if t == "nope"
        ));
        assert!(!tmp.path().join("out/Nope.php").exists());
    }

    #[tokio::test]
    async fn debug_mode_logs_progress() {
        let tmp = tempdir().unwrap();
        let opts = options(
            tmp.path(),
            GenerateArgs {
                debug: Some(true),
                ..args("out")
            },
        );
        let logger = RecordingLogger::default();

        Generator::new(&provider(), &logger, &opts)
            .run(&explicit(&["orders"]))
            .await
            .unwrap();

        let lines = logger.lines();
        assert_eq!(lines[0], "comment: Generating file: Orders.php");
        assert_eq!(
            lines[1],
            "comment: Retrieving column information for : orders"
        );
        assert!(lines[2].starts_with("comment: Writing model: "));
    }

    #[tokio::test]
    async fn singular_names_and_connection_block() {
        let tmp = tempdir().unwrap();
        let opts = options(
            tmp.path(),
            GenerateArgs {
                singular: true,
                timestamps: Some(true),
                connection: Some("reporting".into()),
                namespace: Some("App/Models".into()),
                ..args("app/Models")
            },
        );

        Generator::new(&provider(), &RecordingLogger::default(), &opts)
            .run(&explicit(&["users"]))
            .await
            .unwrap();

        let out = fs::read_to_string(tmp.path().join("app/Models/User.php")).unwrap();
        assert!(out.contains("namespace App\\Models;"));
        assert!(out.contains("class User extends Model"));
        assert!(out.contains("protected $connection = 'reporting';"));
        assert!(out.contains("public $timestamps = true;"));
        assert!(out.contains("protected $casts = ['name' => 'string', 'active' => 'boolean'];"));
        assert!(out.contains("protected $hidden = ['id'];"));
    }

    #[tokio::test]
    async fn derived_primary_key_and_filename_pattern() {
        let tmp = tempdir().unwrap();
        let mut opts = options(tmp.path(), args("out"));
        opts.primary_key = PrimaryKeyPolicy::derived(|table| format!("{table}_pk"));
        opts.filename_pattern = "{class}Model.php".into();
        let provider = StaticSchemaProvider::new().with_table(
            "tags",
            vec![
                ColumnDescriptor::new("tags_pk", "int(11)"),
                ColumnDescriptor::new("label", "varchar(64)"),
            ],
        );

        Generator::new(&provider, &RecordingLogger::default(), &opts)
            .run(&explicit(&["tags"]))
            .await
            .unwrap();

        let out = fs::read_to_string(tmp.path().join("out/TagsModel.php")).unwrap();
        assert!(out.contains("protected $primaryKey = 'tags_pk';"));
        assert!(out.contains("protected $fillable = ['label'];"));
        assert!(out.contains("protected $hidden = ['tags_pk'];"));
    }

    #[tokio::test]
    async fn unwritable_folder_is_filesystem_error() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("blocker"), "").unwrap();
        let opts = options(tmp.path(), args("blocker/out"));

        let err = Generator::new(&provider(), &RecordingLogger::default(), &opts)
            .run(&explicit(&["orders"]))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateError::Filesystem { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
