use admarket_core::application::{
    ports::{
        media::ImageValidator,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use admarket_core::config::AppConfig;
use admarket_core::domain::{
    advert::{AdvertReadRepository, AdvertWriteRepository},
    user::UserRepository,
};
use admarket_core::infrastructure::{
    database,
    media::HttpImageValidator,
    repositories::{
        SqliteAdvertReadRepository, SqliteAdvertWriteRepository, SqliteUserRepository,
    },
    security::{Argon2PasswordHasher, BiscuitTokenManager},
    time::SystemClock,
};
use admarket_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        database = config.database_url(),
        page_size = config.feed().page_size(),
        "configuration loaded"
    );

    let pool = database::init_pool(config.database_url())
        .await
        .context("failed to open database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let advert_write_repo: Arc<dyn AdvertWriteRepository> =
        Arc::new(SqliteAdvertWriteRepository::new(Arc::clone(&pool)));
    let advert_read_repo: Arc<dyn AdvertReadRepository> =
        Arc::new(SqliteAdvertReadRepository::new(Arc::clone(&pool)));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let image_validator: Arc<dyn ImageValidator> =
        Arc::new(HttpImageValidator::new(
            config.image_fetch_timeout(),
            config.image_max_bytes(),
        )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        advert_write_repo,
        advert_read_repo,
        password_hasher,
        token_manager,
        image_validator,
        clock,
        config.feed(),
    ));

    let app = build_router(HttpState::new(services), config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
