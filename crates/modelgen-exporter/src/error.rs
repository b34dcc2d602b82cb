use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("unknown template placeholder: {{{{{0}}}}}")]
    UnknownPlaceholder(String),
    #[error("unterminated template placeholder at byte {0}")]
    UnterminatedPlaceholder(usize),
}
