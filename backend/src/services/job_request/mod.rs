mod submit;

use actix_web::web::{post, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/submit_job_request", post().to(submit::process));
}
