use crate::error::ApiError;
use crate::records::search;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::responses::SearchHit;

pub async fn process(query: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match search_all(&state, query.into_inner()).await {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(e) => e.error_response(),
    }
}

async fn search_all(state: &AppState, query: String) -> Result<Vec<SearchHit>, ApiError> {
    let database = state.database.clone();
    web::block(move || -> Result<Vec<SearchHit>, ApiError> {
        let conn = database.open()?;
        let hits = search(&conn, &query)?;
        log::debug!("search '{}' matched {} rows", query, hits.len());
        Ok(hits)
    })
    .await?
}
