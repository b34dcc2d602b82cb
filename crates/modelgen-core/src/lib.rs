pub mod cast;
pub mod classify;
pub mod column;
pub mod primary_key;

pub use cast::CastKind;
pub use classify::{Classification, DocProperty, classify};
pub use column::{ColumnDescriptor, SqlType};
pub use primary_key::PrimaryKeyPolicy;
