use actix_web::{web, App, HttpServer};
use ourchants_api::config::db::DbConfig;
use ourchants_api::infra::db::connect_db;
use ourchants_api::middleware::request_log::RequestLog;
use ourchants_api::routes;
use ourchants_api::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: set via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g. set -a; . ./.env; set +a)
    let host = std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("API_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("API_PORT must be a valid port number");
            std::process::exit(1);
        });

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load database configuration: {e}");
            std::process::exit(1);
        }
    };

    let db = match connect_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %host, port, db = %config.name, "starting ourchants-api");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(AppState::new(db));

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLog)
            .app_data(data.clone())
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
