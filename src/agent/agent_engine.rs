use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::{
    agent::{AgentError, AgentHandle, AgentTransport, InputRow, PromptTemplate},
    config::ServiceConfig,
};

pub const AGENT_SERVER_API_BASE: &str = "agent_server_api_base";

/// Connection settings kept for an agent engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEngineArgs {
    pub agent_server_api_base: String,
}

/// Everything needed to answer predictions for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentModel {
    #[serde(flatten)]
    pub handle: AgentHandle,
    pub target: String,
}

/// Generative engine answering each input row with an agent's reply.
pub struct AgentEngine;

impl AgentEngine {
    /// Keys are matched case-insensitively; a missing base falls back to
    /// the configured `default_agent_server_api_base`.
    pub fn create_engine(connection_args: &Map<String, Value>, config: &ServiceConfig) -> AgentEngineArgs {
        let agent_server_api_base = connection_args
            .iter()
            .find(|(key, _)| key.to_lowercase() == AGENT_SERVER_API_BASE)
            .and_then(|(_, value)| value.as_str())
            .unwrap_or(&config.default_agent_server_api_base)
            .to_string();

        AgentEngineArgs { agent_server_api_base }
    }

    /// Model arguments must carry `using.agent_name`.
    pub fn create_validation(args: &Value) -> Result<(), AgentError> {
        let Some(using) = args.get("using") else {
            return Err(AgentError::InvalidArgs(
                "Agent engine requires a USING clause! Refer to its documentation for more details.".into(),
            ));
        };

        if using.get("agent_name").is_none() {
            return Err(AgentError::InvalidArgs("`agent_name` must be provided in the USING clause.".into()));
        }

        Ok(())
    }

    pub fn create(
        target: &str,
        args: &Value,
        engine: &AgentEngineArgs,
        transport: &dyn AgentTransport,
    ) -> Result<AgentModel, AgentError> {
        Self::create_validation(args)?;

        let agent_name = args["using"]["agent_name"]
            .as_str()
            .ok_or_else(|| AgentError::InvalidArgs("`agent_name` must be a string.".into()))?;

        let handle = AgentHandle::connect(agent_name, &engine.agent_server_api_base, transport)?;
        info!(target = %target, agent = %agent_name, "agent model created");

        Ok(AgentModel { handle, target: target.to_string() })
    }

    /// One output row per input row, holding the answer under the model's
    /// target column. Rows with nothing to ask are answered with `""`.
    pub fn predict(
        model: &AgentModel,
        rows: &[InputRow],
        prompt_template: Option<&str>,
        transport: &dyn AgentTransport,
    ) -> Result<Vec<InputRow>, AgentError> {
        let template = prompt_template.map(PromptTemplate::new).unwrap_or_default();
        let completed = template.complete(rows)?;

        let mut answers = Vec::with_capacity(rows.len());
        for (index, prompt) in completed.prompts.iter().enumerate() {
            let answer = match completed.empty_rows.contains(&index) {
                true => String::new(),
                false => model.handle.send_message(prompt, transport)?,
            };

            let mut row = Map::new();
            row.insert(model.target.clone(), Value::String(answer));
            answers.push(row);
        }
        debug!(rows = answers.len(), skipped = completed.empty_rows.len(), "agent predictions done");

        Ok(answers)
    }
}
