use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span, warn};

use crate::{
    engine::{ExecutionResult, ExecutorError, QueryEngine, Row},
    handlers::{Envelope, Reply},
};

pub const LISTING_QUERY: &str = "SHOW DATABASES";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseTables {
    pub name: Value,
    pub tables: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatabasesResponse {
    Listing { data: Vec<DatabaseTables> },
    Status(Envelope<()>),
}

/// `GET /sql/list_databases`
pub struct DatabasesHandler;

impl DatabasesHandler {
    pub fn handle(engine: &mut dyn QueryEngine) -> Reply<DatabasesResponse> {
        let span = info_span!("list_databases");
        let _guard = span.enter();

        match Self::list(engine) {
            Ok(response) => Reply::ok(response),
            Err(err) => {
                warn!(error = %err, "listing databases failed");
                Reply::ok(DatabasesResponse::Status(Envelope::error(0, err.to_string())))
            },
        }
    }

    fn list(engine: &mut dyn QueryEngine) -> Result<DatabasesResponse, ExecutorError> {
        let rows = match engine.process_query(LISTING_QUERY)? {
            ExecutionResult::Error { error_code, error_message } => {
                return Ok(DatabasesResponse::Status(Envelope::error(error_code, error_message)));
            },
            ExecutionResult::Ok => return Ok(DatabasesResponse::Status(Envelope::empty())),
            ExecutionResult::Table { data, .. } => data,
        };

        let mut databases = Vec::with_capacity(rows.len());
        for row in rows {
            let name = row.into_iter().next().unwrap_or(Value::Null);
            let tables = match engine.process_query(&Self::tables_query(&name))? {
                ExecutionResult::Table { data, .. } => data,
                _ => vec![],
            };
            debug!(database = %name, tables = tables.len(), "tables listed");
            databases.push(DatabaseTables { name, tables });
        }

        Ok(DatabasesResponse::Listing { data: databases })
    }

    /// ``SHOW TABLES FROM `<name>` ``
    pub fn tables_query(name: &Value) -> String {
        match name {
            Value::String(name) => format!("SHOW TABLES FROM `{}`", name),
            other => format!("SHOW TABLES FROM `{}`", other),
        }
    }
}
