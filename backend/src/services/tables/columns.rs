use super::open_for_table;
use crate::error::ApiError;
use crate::records::describe_columns;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::column::ColumnInfo;

pub async fn process(table: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match table_columns(&state, table.into_inner()).await {
        Ok(columns) => HttpResponse::Ok().json(columns),
        Err(e) => e.error_response(),
    }
}

async fn table_columns(state: &AppState, table: String) -> Result<Vec<ColumnInfo>, ApiError> {
    let database = state.database.clone();
    web::block(move || -> Result<Vec<ColumnInfo>, ApiError> {
        let conn = open_for_table(&database, &table)?;
        Ok(describe_columns(&conn, &table)?)
    })
    .await?
}
