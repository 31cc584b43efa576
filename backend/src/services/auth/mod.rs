mod login;

use actix_web::web::{post, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/login", post().to(login::process));
}
