use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
