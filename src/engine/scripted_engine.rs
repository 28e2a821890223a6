use std::collections::HashMap;

use serde_json::Value;

use crate::engine::{ExecutionResult, ExecutorError, QueryContext, QueryEngine};

/// Engine answering from a fixed query -> result table.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    pub answers: HashMap<String, Result<ExecutionResult, ExecutorError>>,
    pub context: QueryContext,
    pub received: Vec<String>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, query: &str, result: Result<ExecutionResult, ExecutorError>) -> Self {
        self.answers.insert(query.to_string(), result);
        self
    }
}

impl QueryEngine for ScriptedEngine {
    fn set_context(&mut self, context: QueryContext) {
        self.context = context;
    }

    fn get_context(&self) -> QueryContext {
        self.context.clone()
    }

    fn process_query(&mut self, query: &str) -> Result<ExecutionResult, ExecutorError> {
        self.received.push(query.to_string());
        self.context.insert("last_query".to_string(), Value::String(query.to_string()));

        self.answers
            .get(query)
            .cloned()
            .unwrap_or_else(|| Err(ExecutorError::Unexpected(format!("no answer for {}", query))))
    }
}
