use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info_span, warn};

use crate::{
    constants::QueryConstants,
    handlers::{Envelope, Reply},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryConstantsRequest {
    pub query: String,
    #[serde(default)]
    pub replace_constants: bool,
    #[serde(default)]
    pub identifiers_to_replace: HashMap<String, String>,
    /// Accepted and ignored.
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl QueryConstantsRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            replace_constants: false,
            identifiers_to_replace: HashMap::new(),
            context: Map::new(),
        }
    }
}

/// `POST /sql/query/constants`
pub struct ConstantsHandler;

impl ConstantsHandler {
    pub fn handle(request: &QueryConstantsRequest) -> Reply<Envelope<QueryConstants>> {
        let span = info_span!("query_constants", replace = request.replace_constants);
        let _guard = span.enter();

        let result = QueryConstants::analyze(
            &request.query,
            request.replace_constants,
            &request.identifiers_to_replace,
        );

        match result {
            Ok(constants) => {
                debug!(datasource = %constants.datasource, "constants extracted");
                Reply::ok(Envelope::data(constants))
            },
            Err(err) => {
                warn!(error = %err, "constants extraction failed");
                Reply::ok(Envelope::error(0, err.to_string()))
            },
        }
    }
}
