use crate::notify::read_job_request_conf;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::jobrequest::JobRequestConf;
use common::responses::CheckModeResponse;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let conf = read_job_request_conf(state.config.jobrequest_conf.clone())
        .await
        .unwrap_or_default();
    HttpResponse::Ok().json(check_mode(&conf))
}

/// Lists the complete and request schema titles of every entry, with the
/// entry's button caption repeated for each of the two.
fn check_mode(conf: &JobRequestConf) -> CheckModeResponse {
    let mut schemas = Vec::with_capacity(conf.conf_list.len() * 2);
    let mut captions = Vec::with_capacity(conf.conf_list.len() * 2);
    for entry in &conf.conf_list {
        schemas.push(entry.complete_schema_title.clone());
        schemas.push(entry.request_schema_title.clone());
        captions.push(entry.submit_button_text.clone());
        captions.push(entry.submit_button_text.clone());
    }
    CheckModeResponse {
        message: "connection is a success".to_string(),
        job_request_schema_list: schemas,
        submit_button_text: captions,
    }
}
