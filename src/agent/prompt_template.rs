use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::agent::AgentError;

pub const DEFAULT_PROMPT_TEMPLATE: &str = "{{question}}";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

pub type InputRow = Map<String, Value>;

/// Text with `{{column}}` placeholders filled from input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    pub template: String,
    pub columns: Vec<String>,
}

/// Prompts built for a batch of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedPrompts {
    pub prompts: Vec<String>,
    /// Rows with nothing to ask: every referenced column is null or absent.
    pub empty_rows: HashSet<usize>,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Self {
        let mut columns: Vec<String> = vec![];
        for capture in PLACEHOLDER.captures_iter(template) {
            let column = capture[1].to_string();
            if !columns.contains(&column) {
                columns.push(column);
            }
        }

        Self { template: template.to_string(), columns }
    }

    pub fn render(&self, row: &InputRow) -> String {
        PLACEHOLDER
            .replace_all(&self.template, |capture: &regex::Captures| match row.get(&capture[1]) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
            })
            .into_owned()
    }

    fn is_empty_row(&self, row: &InputRow) -> bool {
        self.columns.iter().all(|column| row.get(column).is_none_or(Value::is_null))
    }

    /// Fails when a referenced column appears in none of the rows.
    pub fn complete(&self, rows: &[InputRow]) -> Result<CompletedPrompts, AgentError> {
        if !rows.is_empty() {
            if let Some(missing) = self.columns.iter().find(|column| rows.iter().all(|row| !row.contains_key(*column))) {
                return Err(AgentError::MissingColumn(missing.clone()));
            }
        }

        let mut prompts = Vec::with_capacity(rows.len());
        let mut empty_rows = HashSet::new();
        for (index, row) in rows.iter().enumerate() {
            let prompt = self.render(row);
            if self.is_empty_row(row) || prompt.trim().is_empty() {
                empty_rows.insert(index);
            }
            prompts.push(prompt);
        }

        Ok(CompletedPrompts { prompts, empty_rows })
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_TEMPLATE)
    }
}
