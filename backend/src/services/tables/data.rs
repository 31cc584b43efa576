use super::open_for_table;
use crate::error::ApiError;
use crate::records::fetch_rows;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::Row;

pub async fn process(table: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match table_data(&state, table.into_inner()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => e.error_response(),
    }
}

async fn table_data(state: &AppState, table: String) -> Result<Vec<Row>, ApiError> {
    let database = state.database.clone();
    web::block(move || -> Result<Vec<Row>, ApiError> {
        let conn = open_for_table(&database, &table)?;
        Ok(fetch_rows(&conn, &table)?)
    })
    .await?
}
