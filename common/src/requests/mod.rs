use serde::Deserialize;

/// Body of `POST /api/save_schema`.
///
/// The frontend sends `schema` as a JSON *string*; a JSON object is accepted too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSchemaRequest {
    pub schema_name: Option<String>,
    pub schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Query string of `GET /api/left-join`.
#[derive(Debug, Deserialize)]
pub struct LeftJoinQuery {
    pub table1: Option<String>,
    pub table2: Option<String>,
    pub column1: Option<String>,
    pub column2: Option<String>,
}

/// Form body of `POST /api/get_tags`.
#[derive(Debug, Deserialize)]
pub struct ElnCredentialsForm {
    #[serde(rename = "eLabURL")]
    pub elab_url: String,
    #[serde(rename = "eLabToken")]
    pub elab_token: String,
}

/// Form body of `POST /api/create_experiment`.
///
/// `javascript_data`, `schema` and `tags` are JSON documents encoded as strings.
#[derive(Debug, Deserialize)]
pub struct CreateExperimentForm {
    pub javascript_data: String,
    pub schema: String,
    #[serde(rename = "eLabURL")]
    pub elab_url: String,
    #[serde(rename = "eLabToken")]
    pub elab_token: String,
    pub title: String,
    pub body: String,
    #[serde(default = "empty_json_array")]
    pub tags: String,
}

/// One entry of the `tags` array sent with `create_experiment`.
#[derive(Debug, Deserialize)]
pub struct TagEntry {
    pub tag: String,
}

/// Form body of `POST /api/submit_job_request`.
#[derive(Debug, Deserialize)]
pub struct JobRequestForm {
    pub javascript_data: String,
    pub schema: String,
    pub body: String,
}

fn empty_json_array() -> String {
    "[]".to_string()
}
