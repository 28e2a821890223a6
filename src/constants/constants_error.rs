use std::fmt::Display;

use crate::parser::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantsError {
    Parse(ParseError),
    /// The tree holds no identifier to take a data source from.
    NoIdentifierInTree,
    /// A replacement maps this key to an empty placeholder name.
    EmptyPlaceholderName(String),
}

impl Display for ConstantsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstantsError::Parse(err) => write!(f, "{}", err),
            ConstantsError::NoIdentifierInTree => write!(f, "No identifier found in query"),
            ConstantsError::EmptyPlaceholderName(key) => write!(f, "Empty placeholder name for '{}'", key),
        }
    }
}

impl std::error::Error for ConstantsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConstantsError::Parse(err) => Some(err),
            ConstantsError::NoIdentifierInTree | ConstantsError::EmptyPlaceholderName(_) => None,
        }
    }
}

impl From<ParseError> for ConstantsError {
    fn from(err: ParseError) -> Self {
        ConstantsError::Parse(err)
    }
}
