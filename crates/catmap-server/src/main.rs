#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::or_fun_call)]
#![allow(clippy::ref_option)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::unnecessary_wraps)]

use catmap_db::migrate;

mod app;
mod bootstrap;
mod cli;
mod config;
mod domains;
mod graphql;
mod http;
mod infra;
mod runtime;
mod settings;

#[tokio::main]
async fn main() {
    let options = cli::parse_args();
    bootstrap::init_tracing();
    let settings = if matches!(options.run_mode, cli::RunMode::Migrate) {
        settings::Settings::from_env_with_options(false, options.config_path.as_deref())
    } else {
        settings::Settings::from_env_with_options(true, options.config_path.as_deref())
    };
    if matches!(options.run_mode, cli::RunMode::Server) {
        if let Err(missing) = settings::preflight(&settings) {
            tracing::error!(
                event = "preflight_failed",
                missing = ?missing,
                "Required configuration missing"
            );
            std::process::exit(1);
        }
    }
    bootstrap::log_startup(&settings);
    bootstrap::init_metrics_registry(&settings.config.metrics);

    let backend = match bootstrap::build_stores(&settings).await {
        Ok(backend) => backend,
        Err(err) => {
            tracing::error!(event = "db_connect_failed", error = %err);
            return;
        }
    };
    if matches!(options.run_mode, cli::RunMode::Migrate) {
        let db = match backend.db.clone() {
            Some(db) => db,
            None => {
                tracing::error!(
                    event = "migrate_failed",
                    "migrate requires a Postgres CATMAP_DB_URL"
                );
                std::process::exit(1);
            }
        };
        if let Err(err) = migrate(&db).await {
            tracing::error!(error = %err, "migration failed");
            std::process::exit(1);
        }
        tracing::info!("migrations applied");
        return;
    }

    let state = bootstrap::build_state(&settings, backend);
    let app = bootstrap::build_app(&settings.config.metrics, state);
    bootstrap::serve(&settings, app).await;
}
