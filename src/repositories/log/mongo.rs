use std::time::Duration;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, Collection, bson::doc};
use tokio::time::timeout;
use tracing::instrument;

use crate::models::LogEntry;

use super::LogRepository;

/// Repository over a single MongoDB collection. The driver manages its own
/// connection pooling; each operation is bounded by `op_timeout`.
pub struct MongoLogRepo {
    collection: Collection<LogEntry>,
    op_timeout: Duration,
}

impl MongoLogRepo {
    pub fn new(client: &Client, database: &str, collection: &str, op_timeout: Duration) -> Self {
        Self {
            collection: client.database(database).collection(collection),
            op_timeout,
        }
    }
}

#[async_trait]
impl LogRepository for MongoLogRepo {
    #[instrument(name = "mongo_log_repo.append", skip(self, entry))]
    async fn append(&self, entry: LogEntry) -> anyhow::Result<()> {
        timeout(self.op_timeout, self.collection.insert_one(entry))
            .await
            .map_err(|_| anyhow!("insert timed out after {:?}", self.op_timeout))?
            .context("failed to insert log entry")?;

        Ok(())
    }

    #[instrument(name = "mongo_log_repo.list", skip(self))]
    async fn list(&self) -> anyhow::Result<Vec<LogEntry>> {
        let scan = async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect::<Vec<LogEntry>>().await
        };

        timeout(self.op_timeout, scan)
            .await
            .map_err(|_| anyhow!("scan timed out after {:?}", self.op_timeout))?
            .context("failed to fetch log entries")
    }
}
