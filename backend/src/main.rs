use actix_files::Files;
use actix_web::{App, HttpServer};
use backend::config::AppConfig;
use backend::configure_app;
use backend::state::AppState;
use env_logger::Env;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let address = config.bind_address();
    let static_dir = config.static_dir.clone();
    let state = AppState::new(config);

    if static_dir.is_dir() {
        info!("Serving UI from {}", static_dir.display());
    } else {
        warn!("UI directory {} not found, serving the API only", static_dir.display());
    }

    info!("Server running at http://{}", address);

    HttpServer::new(move || {
        let state = state.clone();
        let app = App::new().configure(move |cfg| configure_app(cfg, state));
        if static_dir.is_dir() {
            app.service(Files::new("/", &static_dir).index_file("index.html"))
        } else {
            app
        }
    })
    .bind(address)?
    .run()
    .await
}
