use super::open_for_table;
use crate::error::ApiError;
use crate::records::{describe_columns, fetch_rows, left_join, table_exists};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::LeftJoinQuery;
use common::responses::LeftJoinResponse;
use rusqlite::Connection;

pub async fn process(
    query: web::Query<LeftJoinQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    match join_tables(&state, query.into_inner()).await {
        Ok(joined) => HttpResponse::Ok().json(joined),
        Err(e) => e.error_response(),
    }
}

async fn join_tables(state: &AppState, query: LeftJoinQuery) -> Result<LeftJoinResponse, ApiError> {
    let (table1, table2, column1, column2) =
        match (query.table1, query.table2, query.column1, query.column2) {
            (Some(t1), Some(t2), Some(c1), Some(c2)) => (t1, t2, c1, c2),
            _ => {
                return Err(ApiError::BadRequest(
                    "table1, table2, column1 and column2 are required".to_string(),
                ))
            }
        };

    let database = state.database.clone();
    web::block(move || -> Result<LeftJoinResponse, ApiError> {
        let conn = open_for_table(&database, &table1)?;
        if !table_exists(&conn, &table2)? {
            return Err(ApiError::TableNotFound(table2));
        }
        require_column(&conn, &table1, &column1)?;
        require_column(&conn, &table2, &column2)?;

        let left = fetch_rows(&conn, &table1)?;
        let right = fetch_rows(&conn, &table2)?;
        Ok(left_join(left, right, &column1, &column2))
    })
    .await?
}

fn require_column(conn: &Connection, table: &str, column: &str) -> Result<(), ApiError> {
    let known = describe_columns(conn, table)?
        .into_iter()
        .any(|c| c.name == column);
    if !known {
        return Err(ApiError::BadRequest(format!(
            "column `{}` not found in table `{}`",
            column, table
        )));
    }
    Ok(())
}
