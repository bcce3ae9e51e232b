pub mod models;
pub mod queries;

use refinery::embed_migrations;
use thiserror::Error;
use tokio_postgres::{Client, NoTls};
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] tokio_postgres::Error),
    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),
}

/// Owns the single Postgres connection for the process. Opened once at
/// startup and dropped when `main` returns, on error paths included.
pub struct HistoryStore {
    client: Client,
}

impl HistoryStore {
    pub async fn connect(postgres_url: &str) -> Result<Self, StoreError> {
        let (client, connection) = tokio_postgres::connect(postgres_url, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("connection error: {}", e);
            }
        });
        Ok(Self { client })
    }

    pub async fn run_migrations(&mut self) -> Result<(), StoreError> {
        embed_migrations!("migrations");
        let migration_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migration_report.applied_migrations() {
            info!(
                "Migration applied - Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }
        Ok(())
    }
}
