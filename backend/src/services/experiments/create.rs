//! # Experiment Creation Service
//!
//! Backs `POST /api/create_experiment`, forwarding one form submission to the
//! electronic lab notebook.
//!
//! ## Workflow
//!
//! 1.  **Decoding**: `javascript_data` (the form data), `schema` and `tags` are
//!     JSON documents sent as form fields. Invalid JSON is a `400`.
//!
//! 2.  **Experiment**: a new experiment is created, then titled and given the
//!     rendered description (`body`).
//!
//! 3.  **Uploads**: the schema (`json_schema.json`) and the form data
//!     (`json_data.json`) are attached, each selected tag is added, and every
//!     base64 data URL embedded in the form data is decoded and attached as
//!     `<field><extension>`. Undecodable payloads are skipped with a warning.
//!
//! 4.  **Notification**: if the schema belongs to a job-request workflow, the
//!     requester is told the request was accepted. Mail problems are logged and
//!     do not fail the request.
//!
//! Any notebook failure aborts the sequence with `502 Bad Gateway`; steps that
//! already succeeded are not rolled back.

use crate::eln::{collect_data_urls, decode_data_url, ElnTarget, UploadFile};
use crate::error::ApiError;
use crate::notify::{read_job_request_conf, request_accepted_message};
use crate::services::{parse_json_field, schema_title};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::{CreateExperimentForm, TagEntry};
use common::responses::ExperimentCreatedResponse;
use serde_json::Value;

pub async fn process(
    state: web::Data<AppState>,
    form: web::Form<CreateExperimentForm>,
) -> impl Responder {
    match create_experiment(&state, form.into_inner()).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => e.error_response(),
    }
}

async fn create_experiment(
    state: &AppState,
    form: CreateExperimentForm,
) -> Result<ExperimentCreatedResponse, ApiError> {
    let data = parse_json_field("javascript_data", &form.javascript_data)?;
    let schema = parse_json_field("schema", &form.schema)?;
    let tags: Vec<TagEntry> = serde_json::from_str(&form.tags)
        .map_err(|e| ApiError::BadRequest(format!("field `tags` is invalid: {}", e)))?;

    let target = ElnTarget::new(&form.elab_url, &form.elab_token);
    let eln = state.eln.as_ref();

    let id = eln.create_experiment(&target).await?;
    log::info!("created experiment {} at {}", id, target.endpoint);

    eln.update_experiment(&target, id, &form.title, &form.body)
        .await?;
    eln.upload_file(&target, id, json_file("json_schema.json", &schema)?)
        .await?;
    eln.upload_file(&target, id, json_file("json_data.json", &data)?)
        .await?;

    for tag in &tags {
        eln.add_tag(&target, id, &tag.tag).await?;
    }

    for item in collect_data_urls(&data) {
        match decode_data_url(&item) {
            Ok(file) => {
                log::debug!("uploading {} to experiment {}", file.file_name, id);
                eln.upload_file(&target, id, file).await?;
            }
            Err(e) => log::warn!("skipping embedded file: {}", e),
        }
    }

    notify_accepted(state, schema_title(&schema), &data, &form.body).await;

    Ok(ExperimentCreatedResponse {
        response_text: format!("Created experiment with id {}.", id),
        message: "success".to_string(),
        experiment_id: id,
    })
}

fn json_file(name: &str, value: &Value) -> Result<UploadFile, ApiError> {
    Ok(UploadFile {
        file_name: name.to_string(),
        mime: "application/json".to_string(),
        bytes: serde_json::to_vec(value)?,
    })
}

async fn notify_accepted(state: &AppState, title: &str, data: &Value, body: &str) {
    let Some(conf) = read_job_request_conf(state.config.jobrequest_conf.clone()).await else {
        return;
    };
    let Some(entry) = conf.entry_for_title(title) else {
        return;
    };

    let message = match request_accepted_message(entry, data, body) {
        Ok(message) => message,
        Err(e) => {
            log::warn!("acceptance mail for '{}' not sent: {}", title, e);
            return;
        }
    };
    if let Err(e) = state.mailer.send(&entry.smtp, vec![message]).await {
        log::warn!("acceptance mail for '{}' not sent: {}", title, e);
    }
}
