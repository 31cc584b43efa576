//! # Schema Endpoints
//!
//! - **`GET /check_mode`** (`check_mode::process`): liveness probe used by the
//!   form editor on start-up. Also reports which schemas take part in a job
//!   request workflow and the submit button caption for each.
//! - **`GET /get_schemas`** (`list::process`): every stored schema file with its
//!   content.
//! - **`POST /save_schema`** (`save::process`): validates a schema, writes it to
//!   the schema directory and recreates its table.

mod check_mode;
mod list;
mod save;

use actix_web::web::{get, post, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/check_mode", get().to(check_mode::process))
        .route("/get_schemas", get().to(list::process))
        .route("/save_schema", post().to(save::process));
}
