use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::agent::{AgentError, AgentTransport};

const DATA_PREFIX: &str = "data: ";

/// A live conversation thread with one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentHandle {
    pub id: String,
    pub name: String,
    pub residing_at: String,
    pub thread_id: String,
    pub thread_name: String,
}

impl AgentHandle {
    /// Looks the agent up by name and opens a fresh thread for it.
    pub fn connect(name: &str, residing_at: &str, transport: &dyn AgentTransport) -> Result<Self, AgentError> {
        let agent = transport
            .list_agents(residing_at)?
            .into_iter()
            .find(|agent| agent.name == name)
            .ok_or_else(|| AgentError::AgentNotFound(name.to_string()))?;

        let thread_name = format!("data_server_{}_agent_{}", agent.name, Uuid::new_v4());
        let thread_id = transport.create_thread(residing_at, &thread_name, &agent.id)?;
        info!(agent = %agent.name, thread = %thread_name, "agent thread created");

        Ok(Self {
            id: agent.id,
            name: agent.name,
            residing_at: residing_at.to_string(),
            thread_id,
            thread_name,
        })
    }

    pub fn message_payload(&self, message: &str) -> Value {
        json!({
            "thread_id": self.thread_id,
            "input": [
                {
                    "content": message,
                    "type": "human",
                    "example": false,
                },
            ],
        })
    }

    pub fn send_message(&self, message: &str, transport: &dyn AgentTransport) -> Result<String, AgentError> {
        if message.is_empty() {
            return Err(AgentError::EmptyMessage);
        }

        let lines = transport.stream_run(&self.residing_at, &self.message_payload(message))?;
        debug!(thread = %self.thread_id, lines = lines.len(), "agent stream received");

        decode_stream(&lines)
    }
}

/// Answer carried by a run stream: the `content` of the last message in
/// the last `data: ` line.
pub fn decode_stream<S: AsRef<str>>(lines: &[S]) -> Result<String, AgentError> {
    let last = lines
        .iter()
        .filter_map(|line| line.as_ref().strip_prefix(DATA_PREFIX))
        .last()
        .ok_or(AgentError::NoStreamData)?;

    let messages: Vec<Value> = serde_json::from_str(last)
        .map_err(|err| AgentError::MalformedStream(err.to_string()))?;

    messages
        .last()
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|content| content.to_string())
        .ok_or(AgentError::MissingContent)
}
