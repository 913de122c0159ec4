use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use pushkind_portfolio::db::{establish_connection_pool, run_migrations};
use pushkind_portfolio::models::config::ServerConfig;
use pushkind_portfolio::repository::DieselRepository;
use pushkind_portfolio::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to establish database connection: {e}");
        io::Error::other(e)
    })?;

    let applied = run_migrations(&pool).map_err(|e| {
        log::error!("{e}");
        io::Error::other(e)
    })?;
    if applied > 0 {
        log::info!("Applied {applied} migrations");
    }

    let repo = DieselRepository::new(pool);
    let (address, port) = server_config.bind_address();
    log::info!("Starting server at http://{address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}
