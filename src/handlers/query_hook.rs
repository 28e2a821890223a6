use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Expected,
    Unexpected,
}

/// What happened to one query sent through the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiQueryEvent {
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub company_id: Option<String>,
    pub api: String,
    pub command: Option<String>,
    pub payload: String,
    pub error_type: Option<ErrorType>,
    pub error_code: Option<i64>,
    pub error_text: Option<String>,
}

impl ApiQueryEvent {
    pub fn new(api: &str, payload: &str, company_id: Option<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            company_id,
            api: api.to_string(),
            command: None,
            payload: payload.to_string(),
            error_type: None,
            error_code: None,
            error_text: None,
        }
    }

    pub fn failed(mut self, error_type: ErrorType, error_code: i64, error_text: &str) -> Self {
        self.error_type = Some(error_type);
        self.error_code = Some(error_code);
        self.error_text = Some(error_text.to_string());
        self
    }
}

/// Called once after each query handled by the API.
pub trait QueryHook: Send + Sync {
    fn after_api_query(&self, event: &ApiQueryEvent);
}

/// Reports every event as a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHook;

impl QueryHook for LoggingHook {
    fn after_api_query(&self, event: &ApiQueryEvent) {
        info!(
            request_id = %event.request_id,
            api = %event.api,
            company_id = ?event.company_id,
            error_type = ?event.error_type,
            error_code = ?event.error_code,
            "api query finished"
        );
    }
}
