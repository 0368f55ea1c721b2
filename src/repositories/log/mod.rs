use async_trait::async_trait;
use mockall::automock;

use crate::models::LogEntry;

pub mod mongo;
pub use mongo::MongoLogRepo;

#[async_trait]
#[automock]
pub trait LogRepository: Send + Sync {
    /// Persist a single record
    async fn append(&self, entry: LogEntry) -> anyhow::Result<()>;

    /// Unfiltered scan of every stored record, in store order
    async fn list(&self) -> anyhow::Result<Vec<LogEntry>>;
}

pub type LogRepo = std::sync::Arc<dyn LogRepository + Send + Sync>;
