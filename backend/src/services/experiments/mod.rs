//! # Notebook Endpoints
//!
//! - **`POST /get_tags`** (`tags::process`): tags of the notebook instance the
//!   user points at, passed through unchanged.
//! - **`POST /create_experiment`** (`create::process`): records a form
//!   submission as a new experiment, see `create` for the steps.
//!
//! Both take `application/x-www-form-urlencoded` bodies carrying the instance URL
//! (`eLabURL`) and the user's API token (`eLabToken`).

mod create;
mod tags;

use actix_web::web::{post, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/get_tags", post().to(tags::process))
        .route("/create_experiment", post().to(create::process));
}
