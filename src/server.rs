use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::handlers::{ConstantsHandler, Envelope, QueryConstantsRequest};

/// One request line read by the stdio server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "endpoint")]
pub enum ServiceRequest {
    #[serde(rename = "query/constants")]
    QueryConstants(QueryConstantsRequest),
}

/// Answers one JSON request line with one JSON response line.
pub fn dispatch(line: &str) -> String {
    let response = match serde_json::from_str::<ServiceRequest>(line) {
        Ok(ServiceRequest::QueryConstants(request)) => {
            debug!(query = %request.query, "query/constants");
            serde_json::to_value(ConstantsHandler::handle(&request).body)
        },
        Err(err) => {
            warn!(error = %err, "invalid request");
            serde_json::to_value(Envelope::<Value>::error(0, format!("Invalid request: {}", err)))
        },
    };

    match response {
        Ok(value) => value.to_string(),
        Err(err) => json!({"type": "error", "error_code": 0, "error_message": err.to_string()}).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::server::dispatch;

    fn call(request: Value) -> Value {
        serde_json::from_str(&dispatch(&request.to_string())).unwrap()
    }

    #[test]
    pub fn test_dispatch_constants() {
        let response = call(json!({
            "endpoint": "query/constants",
            "query": "SELECT * FROM files.sales WHERE region = 'EU'",
        }));

        assert_eq!(response["type"], "ok");
        assert_eq!(response["data"]["datasource"], "files");
        assert_eq!(response["data"]["constant_with_identifiers"]["region"], json!(["region", "EU", "str"]));
    }

    #[test]
    pub fn test_dispatch_unknown_endpoint() {
        let response = call(json!({"endpoint": "query/other", "query": "SELECT 1"}));

        assert_eq!(response["type"], "error");
        assert_eq!(response["error_code"], 0);
    }

    #[test]
    pub fn test_dispatch_malformed_line() {
        let response: Value = serde_json::from_str(&dispatch("{not json")).unwrap();

        assert_eq!(response["type"], "error");
        assert!(response["error_message"].as_str().unwrap().starts_with("Invalid request"));
    }
}
