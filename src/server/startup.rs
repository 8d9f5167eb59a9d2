use axum::{extract::Request, ServiceExt};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Initialize the tracing subscriber, honoring `RUST_LOG` & defaulting to `info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations complete");

    Ok(db)
}

/// Bind `0.0.0.0:PORT` and serve the application until the process exits
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let state = AppState {
        db,
        admin_title: config.admin_title.clone(),
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    let app = router::app(state);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
