use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::log::LevelFilter;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::services::catalog::{CatalogService, RepoSet};
use crate::domain::services::seed;
use crate::infra::repositories::{
    postgres_club_repo::PostgresClubRepo, postgres_dj_repo::PostgresDjRepo,
    postgres_event_repo::PostgresEventRepo, postgres_promoter_repo::PostgresPromoterRepo,
    postgres_user_repo::PostgresUserRepo, sqlite_club_repo::SqliteClubRepo,
    sqlite_dj_repo::SqliteDjRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_promoter_repo::SqlitePromoterRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing local SQLite store with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let local_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&local_pool).await;

    let local = sqlite_repos(&local_pool);

    seed::seed_if_empty(&local)
        .await
        .expect("Failed to seed starter catalog");

    let remote = match &config.remote_database_url {
        Some(url) => {
            info!("Configuring remote PostgreSQL store...");

            let mut opts: PgConnectOptions = url.parse().expect("Invalid Postgres URL");
            opts = opts
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            // Lazy pool: a remote that is down at boot degrades to
            // local-only instead of aborting startup.
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect_lazy_with(opts);

            if let Err(e) = run_postgres_migrations(&pool).await {
                warn!("Remote store unreachable at startup, continuing local-only: {}", e);
            }

            Some(postgres_repos(&pool))
        }
        None => None,
    };

    let catalog = Arc::new(CatalogService::new(local, remote));

    if let Err(e) = catalog.refresh(true).await {
        warn!("Initial catalog load failed: {}", e);
    }

    AppState {
        config: config.clone(),
        catalog,
    }
}

pub fn sqlite_repos(pool: &SqlitePool) -> RepoSet {
    RepoSet {
        events: Arc::new(SqliteEventRepo::new(pool.clone())),
        djs: Arc::new(SqliteDjRepo::new(pool.clone())),
        clubs: Arc::new(SqliteClubRepo::new(pool.clone())),
        promoters: Arc::new(SqlitePromoterRepo::new(pool.clone())),
        users: Arc::new(SqliteUserRepo::new(pool.clone())),
    }
}

pub fn postgres_repos(pool: &PgPool) -> RepoSet {
    RepoSet {
        events: Arc::new(PostgresEventRepo::new(pool.clone())),
        djs: Arc::new(PostgresDjRepo::new(pool.clone())),
        clubs: Arc::new(PostgresClubRepo::new(pool.clone())),
        promoters: Arc::new(PostgresPromoterRepo::new(pool.clone())),
        users: Arc::new(PostgresUserRepo::new(pool.clone())),
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

async fn run_postgres_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/postgres").run(pool).await
}
