use crate::column::SqlType;

/// Attribute cast declared on a generated model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastKind {
    Boolean,
    Int,
    String,
    Float,
    Double,
    Timestamp,
    DateTime,
    Date,
}

impl CastKind {
    /// Pick the cast for a normalized SQL type. Types without a mapping
    /// (`decimal`, `bigint`, `json`, ...) get no cast.
    pub fn for_sql_type(ty: &SqlType) -> Option<Self> {
        let kind = match ty.base.as_str() {
            "int" | "tinyint" | "boolean" | "bool" => {
                if ty.has_unit_length() {
                    CastKind::Boolean
                } else {
                    CastKind::Int
                }
            }
            "varchar" | "text" | "tinytext" | "mediumtext" | "longtext" => CastKind::String,
            "float" => CastKind::Float,
            "double" => CastKind::Double,
            "timestamp" => CastKind::Timestamp,
            "datetime" => CastKind::DateTime,
            "date" => CastKind::Date,
            _ => return None,
        };
        Some(kind)
    }

    /// Literal written into the `$casts` array.
    pub fn as_str(self) -> &'static str {
        match self {
            CastKind::Boolean => "boolean",
            CastKind::Int => "int",
            CastKind::String => "string",
            CastKind::Float => "float",
            CastKind::Double => "double",
            CastKind::Timestamp => "timestamp",
            CastKind::DateTime => "datetime",
            CastKind::Date => "date",
        }
    }

    /// Type written into the `@property` docblock line.
    pub fn doc_type(self) -> &'static str {
        match self {
            CastKind::Boolean => "boolean",
            CastKind::Int | CastKind::Timestamp => "int",
            CastKind::String => "string",
            CastKind::Float | CastKind::Double => "float",
            CastKind::DateTime => "DateTime",
            CastKind::Date => "Date",
        }
    }

    /// Whether the column also belongs in the `$dates` array.
    pub fn is_date(self) -> bool {
        matches!(
            self,
            CastKind::Timestamp | CastKind::DateTime | CastKind::Date
        )
    }
}
