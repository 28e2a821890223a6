use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutorError {
    /// Classified failure raised by the engine (bad table, bad syntax, ...).
    Expected(String),
    Unexpected(String),
}

impl Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutorError::Expected(message) => write!(f, "{}", message),
            ExecutorError::Unexpected(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ExecutorError {}
