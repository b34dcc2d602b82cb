use modelgen_core::{Classification, DocProperty};

use crate::error::ExportError;
use crate::template::ModelTemplate;

/// Built-in Eloquent model stub.
pub const MODEL_STUB: &str = include_str!("../stubs/model.stub");

const DOC_LINE_WIDTH: usize = 25;

/// Per-table inputs that do not come from the column classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec<'a> {
    pub class_name: &'a str,
    pub table: &'a str,
    pub primary_key: &'a str,
    pub namespace: &'a str,
    /// Explicit connection name; `None` keeps the model on the default one.
    pub connection: Option<&'a str>,
    pub timestamps: bool,
}

/// Renders Eloquent models, joining list entries with a configurable
/// delimiter.
#[derive(Debug, Clone)]
pub struct EloquentExporter {
    delimiter: String,
}

impl Default for EloquentExporter {
    fn default() -> Self {
        Self::new(", ")
    }
}

impl EloquentExporter {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Fill the template fields for one table.
    pub fn template(&self, spec: &ModelSpec<'_>, classification: &Classification) -> ModelTemplate {
        ModelTemplate {
            class: spec.class_name.to_string(),
            table: spec.table.to_string(),
            primary_key: spec.primary_key.to_string(),
            fillable: self.quoted_list(&classification.fillable),
            hidden: self.quoted_list(&classification.hidden),
            casts: classification
                .casts
                .iter()
                .map(|(field, cast)| format!("'{}' => '{}'", field, cast.as_str()))
                .collect::<Vec<_>>()
                .join(&self.delimiter),
            dates: self.quoted_list(&classification.dates),
            docblock: render_docblock(&classification.docblock),
            timestamps: spec.timestamps,
            model_namespace: spec.namespace.to_string(),
            connection: spec.connection.map(connection_block).unwrap_or_default(),
        }
    }

    /// Render one table with the built-in stub.
    pub fn render(
        &self,
        spec: &ModelSpec<'_>,
        classification: &Classification,
    ) -> Result<String, ExportError> {
        self.template(spec, classification).render(MODEL_STUB)
    }

    fn quoted_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("'{item}'"))
            .collect::<Vec<_>>()
            .join(&self.delimiter)
    }
}

/// One `@property` docblock line, the type column padded to a fixed width.
pub fn doc_line(doc_type: &str, field: &str) -> String {
    let head = format!("\n * @property {doc_type}");
    format!("{head:<width$}${field}", width = DOC_LINE_WIDTH)
}

fn render_docblock(properties: &[DocProperty]) -> String {
    properties
        .iter()
        .map(|p| doc_line(p.doc_type, &p.field))
        .collect()
}

/// `$connection` property declaration. Empty names produce no block.
pub fn connection_block(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    format!(
        "/**\n     * The connection name for the model.\n     *\n     * @var string\n     */\n    protected $connection = '{name}';\n\n"
    )
}
