pub mod config;
pub mod error;
pub mod filter;
pub mod primary_key;

pub use config::{
    DEFAULT_FILENAME_PATTERN, DEFAULT_MODEL_FOLDER, DEFAULT_NAMESPACE, ModelgenConfig,
    default_blacklist, default_delimiter,
};
pub use error::ConfigError;
pub use filter::TableFilter;
pub use primary_key::PrimaryKeySetting;
