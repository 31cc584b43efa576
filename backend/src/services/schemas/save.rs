//! # Schema Save Service
//!
//! Backs `POST /api/save_schema`.
//!
//! ## Workflow
//!
//! 1.  **Validation**: the storage name must be usable as a file and table name,
//!     and the schema must be a JSON object with a non-empty `$id`. Nothing is
//!     written when validation fails (`400 Bad Request`).
//!
//! 2.  **Preparation**: a `SchemaID` property holding the `$id` is injected and
//!     the document is pretty-printed.
//!
//! 3.  **Persistence**: under the per-name lock, the new content is staged next
//!     to `<name>.json`, the table `<name>` is recreated from the flattened
//!     properties, and only then is the staged file moved into place. A failed
//!     table sync leaves both the previous file and the previous table. Any rows
//!     stored in the previous table are lost on success.

use crate::error::ApiError;
use crate::schema::store::{prepare, validate_name};
use crate::schema::{synchronize, SchemaError};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::SaveSchemaRequest;
use common::responses::MessageResponse;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<SaveSchemaRequest>,
) -> impl Responder {
    match save_schema(state.get_ref().clone(), payload.into_inner()).await {
        Ok(name) => HttpResponse::Ok().json(MessageResponse {
            message: format!("Schema '{}' saved successfully", name),
        }),
        Err(e) => e.error_response(),
    }
}

async fn save_schema(state: AppState, request: SaveSchemaRequest) -> Result<String, ApiError> {
    let name = request
        .schema_name
        .filter(|n| !n.is_empty())
        .ok_or(SchemaError::MissingContent)?;
    let raw = request
        .schema
        .filter(|s| !s.is_null())
        .ok_or(SchemaError::MissingContent)?;

    validate_name(&name)?;
    let prepared = prepare(&raw)?;

    let saved = name.clone();
    web::block(move || -> Result<(), ApiError> {
        state.locks.with_lock(&name, || -> Result<(), ApiError> {
            let staged = state.schemas.stage(&name, &prepared.content)?;
            synchronize(&state.database, &name, &prepared.document)?;
            let path = staged.commit()?;
            log::info!("schema '{}' ({}) written to {}", name, prepared.id, path.display());
            Ok(())
        })
    })
    .await??;

    Ok(saved)
}
