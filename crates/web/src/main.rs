use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Context;
use tokio::net::TcpListener;

use snipbox_infra::db;
use snipbox_web::app::{AppStores, build_app};
use snipbox_web::config::Config;
use snipbox_web::templates;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("snipbox: failed to load .env file: {err}");
            return ExitCode::FAILURE;
        }
    };

    snipbox_observability::init(config.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let stores = if config.in_memory {
        tracing::warn!("using in-memory stores; all data is lost on exit");
        AppStores::in_memory()
    } else {
        let pool = db::connect(&config.dsn, config.max_connections)
            .await
            .context("failed to connect to database")?;
        if config.migrate {
            db::migrate(&pool).await.context("failed to run migrations")?;
            tracing::info!("migrations applied");
        }
        AppStores::postgres(pool)
    };

    let app = build_app(stores, &templates::registry()).context("failed to build application")?;

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(addr = %listener.local_addr()?, "starting server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("http server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down http server");
}
