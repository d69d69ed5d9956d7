//! # quilld: quill daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and apply the schema
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use quill_adapter_http_axum::state::AppState;
use quill_adapter_storage_sqlite_sqlx::{
    SqliteCategoryRepository, SqliteCommentRepository, SqlitePostRepository,
    SqliteUserRepository,
};
use quill_app::services::category_service::CategoryService;
use quill_app::services::comment_service::CommentService;
use quill_app::services::post_service::PostService;
use quill_app::services::user_service::UserService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = config.storage().build().await?;
    let pool = db.pool().clone();
    tracing::info!(url = %config.database.url, "database ready");

    // Repositories
    let user_repo = SqliteUserRepository::new(pool.clone());
    let post_repo = SqlitePostRepository::new(pool.clone());
    let category_repo = SqliteCategoryRepository::new(pool.clone());
    let comment_repo = SqliteCommentRepository::new(pool);

    // HTTP
    let state = AppState::new(
        UserService::new(user_repo),
        PostService::new(post_repo),
        CategoryService::new(category_repo),
        CommentService::new(comment_repo),
    );
    let app = quill_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("quilld listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    db.close().await;

    Ok(())
}

/// Resolve when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
