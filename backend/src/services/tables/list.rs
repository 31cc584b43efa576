use crate::error::ApiError;
use crate::records::list_tables;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let database = state.database.clone();
    let result = web::block(move || -> Result<Vec<String>, ApiError> {
        let conn = database.open()?;
        Ok(list_tables(&conn)?)
    })
    .await;

    match result {
        Ok(Ok(tables)) => HttpResponse::Ok().json(tables),
        Ok(Err(e)) => e.error_response(),
        Err(e) => ApiError::from(e).error_response(),
    }
}
