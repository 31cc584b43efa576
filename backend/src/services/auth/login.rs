use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::LoginRequest;
use common::responses::LoginResponse;
use uuid::Uuid;

/// Handler for `POST /api/login`.
///
/// Checks the credentials against the configured admin account and hands out
/// a fresh opaque token. Tokens are not verified by any other endpoint.
pub async fn process(state: web::Data<AppState>, payload: web::Json<LoginRequest>) -> impl Responder {
    match login(&state.config, &payload) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(e) => {
            log::warn!("rejected login for {:?}", payload.username);
            e.error_response()
        }
    }
}

fn login(config: &AppConfig, request: &LoginRequest) -> Result<String, ApiError> {
    let user_ok = request.username.as_deref() == Some(config.admin_username.as_str());
    let password_ok = request.password.as_deref() == Some(config.admin_password.as_str());
    if user_ok && password_ok {
        Ok(Uuid::new_v4().to_string())
    } else {
        Err(ApiError::Unauthorized)
    }
}
