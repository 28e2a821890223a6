use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info_span, warn};

use crate::{
    config::ServiceConfig,
    engine::{ExecutionResult, ExecutorError, QueryContext, QueryEngine, Row},
    handlers::{ApiQueryEvent, ErrorType, LoggingHook, QueryHook, Reply},
};

pub const API_NAME: &str = "http";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(default)]
    pub context: QueryContext,
}

impl QueryRequest {
    pub fn new(query: &str) -> Self {
        Self { query: query.to_string(), context: QueryContext::new() }
    }

    pub fn profiling(&self) -> bool {
        self.context.get("profiling") == Some(&Value::Bool(true))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryOutcome {
    Ok,
    Table { data: Vec<Row>, column_names: Vec<String> },
    Error { error_code: i64, error_message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    #[serde(flatten)]
    pub outcome: QueryOutcome,
    pub context: QueryContext,
}

/// `POST /sql/query`
pub struct QueryHandler<H: QueryHook> {
    pub config: ServiceConfig,
    pub hook: H,
}

impl QueryHandler<LoggingHook> {
    /// Handler whose after-query events go to the log.
    pub fn with_logging(config: ServiceConfig) -> Self {
        Self::new(config, LoggingHook)
    }
}

impl<H: QueryHook> QueryHandler<H> {
    pub fn new(config: ServiceConfig, hook: H) -> Self {
        Self { config, hook }
    }

    pub fn handle(&self, engine: &mut dyn QueryEngine, request: &QueryRequest) -> Reply<QueryResponse> {
        let span = info_span!("http_query_processing", environment = %self.config.environment);
        let _guard = span.enter();

        let started = Instant::now();
        engine.set_context(request.context.clone());

        let (outcome, error_type) = match engine.process_query(&request.query) {
            Ok(ExecutionResult::Ok) => (QueryOutcome::Ok, None),
            Ok(ExecutionResult::Table { data, columns }) => {
                let column_names = columns.iter().map(|column| column.display_name().to_string()).collect();
                (QueryOutcome::Table { data, column_names }, None)
            },
            Ok(ExecutionResult::Error { error_code, error_message }) => {
                (QueryOutcome::Error { error_code, error_message }, Some(ErrorType::Expected))
            },
            Err(ExecutorError::Expected(message)) => {
                warn!(error = %message, "query failed");
                (QueryOutcome::Error { error_code: 0, error_message: message }, Some(ErrorType::Expected))
            },
            Err(ExecutorError::Unexpected(message)) => {
                error!(error = %message, query = %request.query, "unexpected error processing query");
                (QueryOutcome::Error { error_code: 0, error_message: message }, Some(ErrorType::Unexpected))
            },
        };

        let mut context = engine.get_context();
        if request.profiling() {
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            context.insert("profiling".to_string(), json!({ "query_processing_ms": elapsed_ms }));
        }

        let mut event = ApiQueryEvent::new(API_NAME, &request.query, self.config.company_id.clone());
        if let (Some(error_type), QueryOutcome::Error { error_code, error_message }) = (error_type, &outcome) {
            event = event.failed(error_type, *error_code, error_message);
        }
        self.hook.after_api_query(&event);

        Reply::ok(QueryResponse { outcome, context })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use crate::{
        config::ServiceConfig,
        engine::{scripted_engine::ScriptedEngine, ColumnInfo, ExecutionResult, ExecutorError},
        handlers::{ApiQueryEvent, ErrorType, QueryHandler, QueryHook, QueryRequest, HTTP_OK},
    };

    #[derive(Default)]
    struct RecordingHook {
        events: Mutex<Vec<ApiQueryEvent>>,
    }

    impl QueryHook for RecordingHook {
        fn after_api_query(&self, event: &ApiQueryEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn handler() -> QueryHandler<RecordingHook> {
        let config = ServiceConfig { company_id: Some("acme".into()), ..ServiceConfig::default() };
        QueryHandler::new(config, RecordingHook::default())
    }

    #[test]
    pub fn test_table_result() {
        let mut engine = ScriptedEngine::new().answer(
            "SELECT a, b FROM t",
            Ok(ExecutionResult::Table {
                data: vec![vec![json!(1), json!("x")]],
                columns: vec![ColumnInfo::new("a"), ColumnInfo::aliased("b", "bee")],
            }),
        );
        let handler = handler();

        let reply = handler.handle(&mut engine, &QueryRequest::new("SELECT a, b FROM t"));

        assert_eq!(reply.status, HTTP_OK);
        assert_eq!(
            serde_json::to_value(&reply.body).unwrap(),
            json!({
                "type": "table",
                "data": [[1, "x"]],
                "column_names": ["a", "bee"],
                "context": {"last_query": "SELECT a, b FROM t"},
            })
        );

        let events = handler.hook.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].api, "http");
        assert_eq!(events[0].company_id.as_deref(), Some("acme"));
        assert_eq!(events[0].error_type, None);
    }

    #[test]
    pub fn test_ok_result_keeps_context() {
        let mut engine = ScriptedEngine::new().answer("USE db", Ok(ExecutionResult::Ok));
        let request: QueryRequest = serde_json::from_value(json!({
            "query": "USE db",
            "context": {"db": "mindsdb"},
        })).unwrap();

        let reply = handler().handle(&mut engine, &request);

        assert_eq!(
            serde_json::to_value(&reply.body).unwrap(),
            json!({"type": "ok", "context": {"db": "mindsdb", "last_query": "USE db"}})
        );
    }

    #[test]
    pub fn test_engine_error_result() {
        let mut engine = ScriptedEngine::new().answer(
            "SELECT x",
            Ok(ExecutionResult::Error { error_code: 1049, error_message: "Unknown database".into() }),
        );
        let handler = handler();

        let reply = handler.handle(&mut engine, &QueryRequest::new("SELECT x"));
        let body = serde_json::to_value(&reply.body).unwrap();

        assert_eq!(body["type"], "error");
        assert_eq!(body["error_code"], 1049);
        let events = handler.hook.events.lock().unwrap();
        assert_eq!(events[0].error_type, Some(ErrorType::Expected));
        assert_eq!(events[0].error_code, Some(1049));
    }

    #[test]
    pub fn test_executor_errors() {
        let mut engine = ScriptedEngine::new()
            .answer("bad", Err(ExecutorError::Expected("Syntax error".into())));
        let handler = handler();

        let expected = handler.handle(&mut engine, &QueryRequest::new("bad"));
        let unexpected = handler.handle(&mut engine, &QueryRequest::new("unknown"));

        let expected_body = serde_json::to_value(&expected.body).unwrap();
        let unexpected_body = serde_json::to_value(&unexpected.body).unwrap();
        assert_eq!(expected_body["error_message"], "Syntax error");
        assert_eq!(expected_body["error_code"], 0);
        assert_eq!(unexpected_body["error_message"], "no answer for unknown");
        assert_eq!(unexpected.status, HTTP_OK);

        let events = handler.hook.events.lock().unwrap();
        assert_eq!(events[0].error_type, Some(ErrorType::Expected));
        assert_eq!(events[1].error_type, Some(ErrorType::Unexpected));
        assert_eq!(events[1].error_text.as_deref(), Some("no answer for unknown"));
    }

    #[test]
    pub fn test_profiling() {
        let mut engine = ScriptedEngine::new().answer("SELECT 1", Ok(ExecutionResult::Ok));
        let request: QueryRequest = serde_json::from_value(json!({
            "query": "SELECT 1",
            "context": {"profiling": true},
        })).unwrap();

        let reply = handler().handle(&mut engine, &request);

        assert!(request.profiling());
        assert!(reply.body.context["profiling"]["query_processing_ms"].is_f64());
    }

    #[test]
    pub fn test_logging_handler() {
        let mut engine = ScriptedEngine::new().answer("USE db", Ok(ExecutionResult::Ok));
        let handler = QueryHandler::with_logging(ServiceConfig::new());

        let reply = handler.handle(&mut engine, &QueryRequest::new("USE db"));

        assert_eq!(reply.status, HTTP_OK);
        assert_eq!(serde_json::to_value(&reply.body).unwrap()["type"], "ok");
        assert_eq!(engine.received, vec!["USE db".to_string()]);
    }
}
