use crate::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckModeResponse {
    pub message: String,
    pub job_request_schema_list: Vec<String>,
    pub submit_button_text: Vec<String>,
}

/// Parallel lists of stored schema names and contents.
///
/// Both lists start with a placeholder entry (`""` / `null`) that the schema
/// selector on the frontend renders as "no schema selected".
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaListResponse {
    pub schema_name: Vec<String>,
    pub schema: Vec<Option<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub table: String,
    pub row: Row,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeftJoinResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentCreatedResponse {
    pub response_text: String,
    pub message: String,
    pub experiment_id: i64,
}

/// Outcome of a job request submission. Always sent with HTTP 200; the
/// frontend reads `response` to decide between success and error toasts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequestOutcome {
    pub response: u16,
    pub response_text: String,
}

impl JobRequestOutcome {
    pub fn submitted() -> Self {
        Self {
            response: 200,
            response_text: "Your request has been submitted.".to_string(),
        }
    }

    pub fn send_failed() -> Self {
        Self {
            response: 500,
            response_text: "Something went wrong".to_string(),
        }
    }

    pub fn operators_unavailable() -> Self {
        Self {
            response: 500,
            response_text: "List of operators are not available in the server.".to_string(),
        }
    }
}
