use crate::error::ExportError;

/// Values for every placeholder of the model stub.
///
/// Rendering is a single pass over the stub: each `{{name}}` is looked up
/// here and the value is copied out without being scanned again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelTemplate {
    pub class: String,
    pub table: String,
    pub primary_key: String,
    pub fillable: String,
    pub hidden: String,
    pub casts: String,
    pub dates: String,
    pub docblock: String,
    pub timestamps: bool,
    pub model_namespace: String,
    pub connection: String,
}

impl ModelTemplate {
    fn value(&self, placeholder: &str) -> Option<&str> {
        let value = match placeholder {
            "class" => &self.class,
            "table" => &self.table,
            "primaryKey" => &self.primary_key,
            "fillable" => &self.fillable,
            "hidden" => &self.hidden,
            "casts" => &self.casts,
            "dates" => &self.dates,
            "docblock" => &self.docblock,
            "timestamps" => {
                return Some(if self.timestamps { "true" } else { "false" });
            }
            "modelnamespace" => &self.model_namespace,
            "connection" => &self.connection,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Substitute the placeholders of `stub`.
    pub fn render(&self, stub: &str) -> Result<String, ExportError> {
        let mut out = String::with_capacity(stub.len() + 512);
        let mut rest = stub;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                let offset = stub.len() - rest.len() + start;
                return Err(ExportError::UnterminatedPlaceholder(offset));
            };
            let name = &after[..end];
            let value = self
                .value(name)
                .ok_or_else(|| ExportError::UnknownPlaceholder(name.to_string()))?;
            out.push_str(value);
            rest = &after[end + 2..];
        }
        out.push_str(rest);

        Ok(out)
    }
}
