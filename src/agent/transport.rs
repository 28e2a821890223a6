use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::agent::AgentError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    pub name: String,
}

/// Network side of an agent server.
///
/// `base` is the server's API root; implementations append the
/// `/api/v1/...` routes themselves.
pub trait AgentTransport {
    /// `GET /api/v1/agents/`
    fn list_agents(&self, base: &str) -> Result<Vec<AgentInfo>, AgentError>;

    /// `POST /api/v1/threads`, returning the new thread id.
    fn create_thread(&self, base: &str, thread_name: &str, agent_id: &str) -> Result<String, AgentError>;

    /// `POST /api/v1/runs/stream`, returning the raw response lines.
    fn stream_run(&self, base: &str, payload: &Value) -> Result<Vec<String>, AgentError>;
}
