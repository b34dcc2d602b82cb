//! Helpers to turn a table's column classification into an Eloquent model
//! source file.

pub mod eloquent;
pub mod error;
pub mod template;

pub use eloquent::{EloquentExporter, MODEL_STUB, ModelSpec, connection_block, doc_line};
pub use error::ExportError;
pub use template::ModelTemplate;
