use serde_json::{Map, Value};

use crate::engine::{ExecutionResult, ExecutorError};

pub type QueryContext = Map<String, Value>;

/// SQL execution backend the HTTP-style handlers forward queries to.
pub trait QueryEngine {
    fn set_context(&mut self, context: QueryContext);

    fn get_context(&self) -> QueryContext;

    fn process_query(&mut self, query: &str) -> Result<ExecutionResult, ExecutorError>;
}
