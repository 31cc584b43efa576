use crate::error::ApiError;
use crate::eln::ElnTarget;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::ElnCredentialsForm;

pub async fn process(
    state: web::Data<AppState>,
    form: web::Form<ElnCredentialsForm>,
) -> impl Responder {
    let target = ElnTarget::new(&form.elab_url, &form.elab_token);
    match state.eln.list_tags(&target).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => {
            log::warn!("fetching tags from {} failed", target.endpoint);
            ApiError::from(e).error_response()
        }
    }
}
