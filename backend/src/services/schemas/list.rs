use crate::error::ApiError;
use crate::schema::StoredSchema;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::responses::SchemaListResponse;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let store = state.schemas.clone();
    match web::block(move || store.list()).await {
        Ok(Ok(schemas)) => HttpResponse::Ok().json(to_response(schemas)),
        Ok(Err(e)) => ApiError::from(e).error_response(),
        Err(e) => ApiError::from(e).error_response(),
    }
}

fn to_response(schemas: Vec<StoredSchema>) -> SchemaListResponse {
    // leading placeholder = "no schema selected" in the editor's dropdown
    let mut names = vec![String::new()];
    let mut contents = vec![None];
    for schema in schemas {
        names.push(schema.name);
        contents.push(Some(schema.content));
    }
    SchemaListResponse {
        schema_name: names,
        schema: contents,
    }
}
