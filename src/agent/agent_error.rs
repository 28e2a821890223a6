use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum AgentError {
    AgentNotFound(String),
    EmptyMessage,
    /// Failure reported by the transport (status code, connection, ...).
    Transport(String),
    NoStreamData,
    MalformedStream(String),
    MissingContent,
    MissingColumn(String),
    InvalidArgs(String),
}

impl Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentError::AgentNotFound(name) => {
                write!(f, "Failed to create a handle to an agent named {} as it doesn't exist!", name)
            },
            AgentError::EmptyMessage => write!(f, "cannot send an empty `message` to an agent"),
            AgentError::Transport(message) => write!(f, "{}", message),
            AgentError::NoStreamData => write!(f, "Agent server stream carried no data"),
            AgentError::MalformedStream(message) => write!(f, "Malformed agent server stream: {}", message),
            AgentError::MissingContent => write!(f, "Agent server reply has no content"),
            AgentError::MissingColumn(column) => write!(f, "{} is not present in the input data", column),
            AgentError::InvalidArgs(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AgentError {}
