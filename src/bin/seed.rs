use std::process::ExitCode;

use pushkind_portfolio::db::{establish_connection_pool, run_migrations};
use pushkind_portfolio::models::config::ServerConfig;
use pushkind_portfolio::repository::DieselRepository;
use pushkind_portfolio::seed::seed_database;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    match seed_database(&DieselRepository::new(pool)) {
        Ok(report) => {
            log::info!(
                "Seeding complete: {} categories, {} skills, {} certificates added",
                report.categories,
                report.skills,
                report.certificates
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Error seeding: {e}");
            ExitCode::FAILURE
        }
    }
}
