use crate::cast::CastKind;
use crate::column::ColumnDescriptor;

/// Audit columns that never end up in `$hidden`, even as primary key.
const TIMESTAMP_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

/// One `@property` line of the class docblock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocProperty {
    pub doc_type: &'static str,
    pub field: String,
}

/// Per-table column buckets. Every list keeps the column order of the
/// schema query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub fillable: Vec<String>,
    pub hidden: Vec<String>,
    pub casts: Vec<(String, CastKind)>,
    pub dates: Vec<String>,
    pub docblock: Vec<DocProperty>,
}

/// Sort the columns of one table into fillable/hidden/cast/date buckets.
///
/// The primary key is never fillable. It is hidden unless it is one of the
/// timestamp audit columns. Every other column is fillable; its cast, docblock
/// line and date entry depend on the normalized SQL type.
pub fn classify(columns: &[ColumnDescriptor], primary_key: &str) -> Classification {
    let mut out = Classification::default();

    for column in columns {
        if column.name == primary_key {
            if !TIMESTAMP_COLUMNS.contains(&column.name.as_str()) {
                out.hidden.push(column.name.clone());
            }
            continue;
        }

        out.fillable.push(column.name.clone());

        let Some(cast) = CastKind::for_sql_type(&column.normalized_type()) else {
            continue;
        };
        out.docblock.push(DocProperty {
            doc_type: cast.doc_type(),
            field: column.name.clone(),
        });
        out.casts.push((column.name.clone(), cast));
        if cast.is_date() {
            out.dates.push(column.name.clone());
        }
    }

    out
}
