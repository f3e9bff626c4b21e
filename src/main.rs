// src/main.rs
use anyhow::Result;
use medinlife_api::application::services::ApplicationServices;
use medinlife_api::config::AppConfig;
use medinlife_api::domain::{
    article::ArticleReadRepository,
    topic::{FallbackTopicSource, HealthTopicReadRepository},
};
use medinlife_api::infrastructure::{
    database,
    fallback::StaticTopicCatalog,
    repositories::{MySqlArticleReadRepository, MySqlHealthTopicReadRepository},
};
use medinlife_api::presentation::http::{routes::build_router_with_rate_limit, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(
        config.database(),
        config.db_max_connections(),
        config.db_acquire_timeout(),
    )?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("schema migrations applied");
    }

    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(MySqlArticleReadRepository::new(pool.clone()));
    let topic_read_repo: Arc<dyn HealthTopicReadRepository> =
        Arc::new(MySqlHealthTopicReadRepository::new(pool.clone()));
    let fallback_topics: Arc<dyn FallbackTopicSource> = Arc::new(StaticTopicCatalog::bundled());

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_read_repo),
        Arc::clone(&topic_read_repo),
        Arc::clone(&fallback_topics),
    ));

    let summary = config.database().summary();
    tracing::info!(
        host = %summary.host,
        port = summary.port,
        database = %summary.database,
        "database configured"
    );

    let state = HttpState {
        services,
        database: Arc::new(summary),
        production: config.is_production(),
    };

    let app = build_router_with_rate_limit(state, config.rate_limit());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
