use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type Row = Vec<Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ColumnInfo {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), alias: None }
    }

    pub fn aliased(name: &str, alias: &str) -> Self {
        Self { name: name.to_string(), alias: Some(alias.to_string()) }
    }

    /// The alias when it is set and not empty, the name otherwise.
    pub fn display_name(&self) -> &str {
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Ok,
    Table { data: Vec<Row>, columns: Vec<ColumnInfo> },
    Error { error_code: i64, error_message: String },
}
