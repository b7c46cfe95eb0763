use thiserror::Error;

/// Errors surfaced by [`IniConfig`](crate::IniConfig) operations.
///
/// Every failure is returned to the caller; nothing is retried, logged or
/// swallowed inside the accessor.
#[derive(Error, Debug)]
pub enum IniConfigError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Option not found: {1} (section {0})")]
    OptionNotFound(String, String),

    #[error("Section already exists: {0}")]
    SectionExists(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
