//! # Job Request Submission
//!
//! Backs `POST /api/submit_job_request`. The matching configuration entry is
//! chosen by the schema's `title`; the requester's address and the operator's
//! name are looked up in the submitted form data. Two e-mails are sent through
//! the entry's SMTP relay: a confirmation to the requester and a notice to the
//! operator and the responsible person, both carrying the form data and schema
//! as JSON attachments.
//!
//! The HTTP status is always `200`; the outcome travels in the body as
//! `{ "response": 200 | 500, "responseText": ... }`.

use crate::error::ApiError;
use crate::notify::{job_request_messages, read_job_request_conf};
use crate::services::{parse_json_field, schema_title};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::Local;
use common::requests::JobRequestForm;
use common::responses::JobRequestOutcome;

pub async fn process(state: web::Data<AppState>, form: web::Form<JobRequestForm>) -> impl Responder {
    match submit(&state, form.into_inner()).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => e.error_response(),
    }
}

async fn submit(state: &AppState, form: JobRequestForm) -> Result<JobRequestOutcome, ApiError> {
    let data = parse_json_field("javascript_data", &form.javascript_data)?;
    let schema = parse_json_field("schema", &form.schema)?;
    let title = schema_title(&schema);

    let Some(conf) = read_job_request_conf(state.config.jobrequest_conf.clone()).await else {
        return Ok(JobRequestOutcome::operators_unavailable());
    };
    let Some(entry) = conf.entry_for_title(title) else {
        log::warn!("no job request configuration for schema '{}'", title);
        return Ok(JobRequestOutcome::operators_unavailable());
    };

    let today = Local::now().date_naive();
    let messages = match job_request_messages(entry, &data, &schema, &form.body, today) {
        Ok(messages) => messages,
        Err(e) => {
            log::error!("job request mail for '{}' could not be built: {}", title, e);
            return Ok(JobRequestOutcome::send_failed());
        }
    };

    match state.mailer.send(&entry.smtp, messages).await {
        Ok(()) => {
            log::info!("job request for '{}' submitted", title);
            Ok(JobRequestOutcome::submitted())
        }
        Err(e) => {
            log::error!("job request mail for '{}' failed: {}", title, e);
            Ok(JobRequestOutcome::send_failed())
        }
    }
}
