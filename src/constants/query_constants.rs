use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{
    constants::{find_constants, find_datasource, replace_constants, AssociationMap, ConstantsError},
    parser::parse_sql,
};

/// Result of analysing one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryConstants {
    pub constant_with_identifiers: AssociationMap,
    pub parameterized_query: String,
    pub datasource: String,
}

impl QueryConstants {
    /// Parses `query` and pairs its constants with their identifiers.
    ///
    /// With `replace` set, the constants named in `replacements` become
    /// placeholders in `parameterized_query` and no data source is looked
    /// up. Otherwise the query text is returned unchanged together with the
    /// inferred data source.
    pub fn analyze(
        query: &str,
        replace: bool,
        replacements: &HashMap<String, String>,
    ) -> Result<Self, ConstantsError> {
        let mut node = parse_sql(query)?;

        if replace {
            if let Some((key, _)) = replacements.iter().find(|(_, name)| name.is_empty()) {
                return Err(ConstantsError::EmptyPlaceholderName(key.clone()));
            }

            let constant_with_identifiers = replace_constants(&mut node, replacements);
            let parameterized_query = node.to_string();
            debug!(constants = constant_with_identifiers.len(), "query parameterized");

            return Ok(Self {
                constant_with_identifiers,
                parameterized_query,
                datasource: String::new(),
            });
        }

        let constant_with_identifiers = find_constants(&node);
        let datasource = find_datasource(&node)?;
        debug!(constants = constant_with_identifiers.len(), datasource = %datasource, "query constants found");

        Ok(Self {
            constant_with_identifiers,
            parameterized_query: query.to_string(),
            datasource,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use crate::{
        constants::{ConstantsError, QueryConstants},
        parser::parse_sql,
    };

    #[test]
    pub fn test_analyze() {
        let query = "select * from mysql_db.orders where status = 'paid' and total > 10.5";

        let result = QueryConstants::analyze(query, false, &HashMap::new()).expect("Failed to analyze query");

        assert_eq!(result.parameterized_query, query);
        assert_eq!(result.datasource, "mysql_db");
        assert_eq!(
            serde_json::to_value(&result.constant_with_identifiers).expect("Failed to serialize"),
            json!({
                "status": ["status", "paid", "str"],
                "total": ["total", 10.5, "float"],
            })
        );
    }

    #[test]
    pub fn test_analyze_replace() {
        let query = "select * from mysql_db.orders where status = 'paid' and total > 10.5";
        let replacements = HashMap::from([("status".to_string(), "order_status".to_string())]);

        let result = QueryConstants::analyze(query, true, &replacements).expect("Failed to analyze query");

        assert_eq!(result.datasource, "");
        assert_eq!(
            result.parameterized_query,
            "SELECT * FROM mysql_db.orders WHERE status = @order_status AND total > 10.5"
        );
        assert_eq!(result.constant_with_identifiers.len(), 2);
    }

    #[test]
    pub fn test_analyze_replace_without_identifiers() {
        let result = QueryConstants::analyze("SELECT 1", true, &HashMap::new()).expect("Failed to analyze query");

        assert_eq!(result.parameterized_query, "SELECT 1");
        assert!(result.constant_with_identifiers.is_empty());
    }

    #[test]
    pub fn test_analyze_parse_error() {
        let result = QueryConstants::analyze("select from", false, &HashMap::new());

        match result {
            Ok(_) => panic!(),
            Err(ConstantsError::Parse(err)) => assert_eq!(err.message, "Unexpected keyword"),
            Err(_) => panic!(),
        }
    }

    #[test]
    pub fn test_analyze_without_identifier() {
        let result = QueryConstants::analyze("SELECT 1", false, &HashMap::new());

        assert_eq!(result, Err(ConstantsError::NoIdentifierInTree));
    }

    #[test]
    pub fn test_analyze_replace_with_quoted_names() {
        let query = "SELECT * FROM db.t WHERE x = 1 AND y = 2 AND z = 3";
        let replacements = HashMap::from([
            ("x".to_string(), "first name".to_string()),
            ("y".to_string(), "user-id".to_string()),
            ("z".to_string(), "p.1".to_string()),
        ]);

        let result = QueryConstants::analyze(query, true, &replacements).expect("Failed to analyze query");

        assert_eq!(
            result.parameterized_query,
            "SELECT * FROM db.t WHERE x = @`first name` AND y = @`user-id` AND z = @`p.1`"
        );
        let reparsed = parse_sql(&result.parameterized_query).expect("Failed to parse rendered query");
        assert_eq!(reparsed.to_string(), result.parameterized_query);
    }

    #[test]
    pub fn test_analyze_replace_with_empty_name() {
        let replacements = HashMap::from([("x".to_string(), String::new())]);

        let result = QueryConstants::analyze("SELECT * FROM t WHERE x = 1", true, &replacements);

        assert_eq!(result, Err(ConstantsError::EmptyPlaceholderName("x".to_string())));
    }

    #[test]
    pub fn test_analyze_already_parameterized() {
        let query = "SELECT * FROM db.t WHERE x = @p AND y = 2";

        let result = QueryConstants::analyze(query, false, &HashMap::new()).expect("Failed to analyze query");

        assert_eq!(
            serde_json::to_value(&result.constant_with_identifiers).expect("Failed to serialize"),
            json!({"y": ["y", 2, "int"]})
        );
    }
}
