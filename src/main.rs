use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hangultype_api::{
    config::{get_config, init_config, Config, StoreBackend},
    database::pool::create_pool,
    middleware::cors::cors_from_config,
    repository::{MemoryRepository, PgRepository, Repository, SupabaseRepository},
    routes, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,hangultype_api=debug,tower_http=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn Repository>> {
    let repository: Arc<dyn Repository> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = create_pool(config).await?;
            let repo = PgRepository::new(pool);
            if config.run_migrations {
                repo.run_migrations().await?;
                info!("Database migrations applied");
            }
            Arc::new(repo)
        }
        StoreBackend::Supabase => {
            let url = config.supabase_url.as_deref().unwrap_or_default();
            let key = config.supabase_key.as_deref().unwrap_or_default();
            let repo = SupabaseRepository::new(
                url,
                key,
                Duration::from_secs(config.supabase_timeout_secs),
            )?;
            info!("Using Supabase store at {}", url);
            Arc::new(repo)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Arc::new(MemoryRepository::new())
        }
    };
    Ok(repository)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    init_config()?;
    let config = get_config();

    let repository = build_repository(config).await?;
    let app_state = AppState::new(repository);

    let app = routes::router(app_state).layer(cors_from_config(config));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
