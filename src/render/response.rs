//! Serde models of the query backend's request/response contract.
use crate::*;
use serde::{Deserialize, Serialize};

/// One result row, column name to JSON value, in backend order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Body POSTed for each question the user sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub question: String,
    pub context: Option<serde_json::Value>,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
        }
    }
}

/// Backend answer. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryResponse {
    pub success: bool,
    pub sql_query: Option<String>,
    pub results: Option<Vec<Row>>,
    pub execution_time: Option<f64>,
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// What the chat view shows for one backend response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Answer {
        sql: Option<SqlBlock>,
        /// `Some(vec![])` means the query ran and matched nothing.
        rows: Option<Vec<Row>>,
        execution_time: Option<f64>,
    },
    /// The backend may still echo the query it tried.
    Failure {
        message: String,
        sql: Option<SqlBlock>,
    },
}

impl Reply {
    pub const ANSWER_MESSAGE: &'static str = "Here's the SQL query and results:";

    /// Plain-text message line accompanying the reply.
    pub fn message(&self) -> &str {
        match self {
            Reply::Answer { .. } => Self::ANSWER_MESSAGE,
            Reply::Failure { message, .. } => message,
        }
    }

    pub fn sql(&self) -> Option<&SqlBlock> {
        match self {
            Reply::Answer { sql, .. } | Reply::Failure { sql, .. } => sql.as_ref(),
        }
    }
}
