//! Order archival - fire-and-forget persistence
//!
//! Finished orders are handed to an [`ArchiveSink`] through a channel.
//! A slow or failing sink never blocks the wizard: persistence failures
//! are retried a few times with a delay, then dropped with an error log.
//! The report stage is reachable regardless of sink health.

use async_trait::async_trait;
use shared::order::OrderArchive;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Archive worker configuration
const MAX_RETRY_COUNT: u32 = 3;
const RETRY_BASE_DELAY_MS: u64 = 200;

/// Write-once persistence collaborator for finished orders
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    async fn persist(&self, archive: &OrderArchive) -> anyhow::Result<()>;
}

/// Sink writing one pretty-printed JSON file per archive
pub struct FileArchiveSink {
    dir: PathBuf,
}

impl FileArchiveSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ArchiveSink for FileArchiveSink {
    async fn persist(&self, archive: &OrderArchive) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{}.json", archive.file_stem()));
        let payload = serde_json::to_vec_pretty(archive)?;
        tokio::fs::write(&path, payload).await?;
        tracing::debug!(path = %path.display(), "archive written");
        Ok(())
    }
}

/// Worker draining the archive queue
pub struct ArchiveWorker {
    sink: Arc<dyn ArchiveSink>,
    rx: mpsc::Receiver<OrderArchive>,
    shutdown: CancellationToken,
}

impl ArchiveWorker {
    pub fn new(
        sink: Arc<dyn ArchiveSink>,
        rx: mpsc::Receiver<OrderArchive>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            sink,
            rx,
            shutdown,
        }
    }

    /// Run until the channel closes or shutdown is requested
    pub async fn run(mut self) {
        tracing::debug!("ArchiveWorker started");
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    break;
                }
                archive = self.rx.recv() => {
                    match archive {
                        Some(archive) => self.process(archive).await,
                        None => break,
                    }
                }
            }
        }
        tracing::info!("ArchiveWorker stopped");
    }

    /// Persist one archive with bounded retry; failures are logged and
    /// swallowed
    async fn process(&self, archive: OrderArchive) {
        for attempt in 1..=MAX_RETRY_COUNT {
            match self.sink.persist(&archive).await {
                Ok(()) => {
                    tracing::info!(
                        actor_id = %archive.actor_id,
                        created_at = %archive.created_at,
                        "order archived"
                    );
                    return;
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        "archive persist failed"
                    );
                    if attempt < MAX_RETRY_COUNT {
                        tokio::time::sleep(Duration::from_millis(
                            RETRY_BASE_DELAY_MS * attempt as u64,
                        ))
                        .await;
                    }
                }
            }
        }
        tracing::error!(
            actor_id = %archive.actor_id,
            "dropping archive after {} failed attempts",
            MAX_RETRY_COUNT
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use shared::order::OrderBook;

    /// Records persisted archives; fails the first `fail_times` calls
    struct RecordingSink {
        fail_times: Mutex<u32>,
        persisted: Mutex<Vec<OrderArchive>>,
    }

    impl RecordingSink {
        fn new(fail_times: u32) -> Self {
            Self {
                fail_times: Mutex::new(fail_times),
                persisted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ArchiveSink for RecordingSink {
        async fn persist(&self, archive: &OrderArchive) -> anyhow::Result<()> {
            {
                let mut remaining = self.fail_times.lock();
                if *remaining > 0 {
                    *remaining -= 1;
                    anyhow::bail!("sink offline");
                }
            }
            self.persisted.lock().push(archive.clone());
            Ok(())
        }
    }

    fn sample_archive() -> OrderArchive {
        let mut book = OrderBook::new();
        book.set_customer_field("name", serde_json::json!("Wu"));
        OrderArchive::from_book(&book, "actor-test")
    }

    #[tokio::test]
    async fn test_file_sink_writes_one_file_per_archive() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileArchiveSink::new(dir.path());
        sink.persist(&sample_archive()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let path = entries[0].as_ref().unwrap().path();
        let content = std::fs::read_to_string(&path).unwrap();
        let back: OrderArchive = serde_json::from_str(&content).unwrap();
        assert_eq!(back.actor_id, "actor-test");
        assert_eq!(back.customer.name(), "Wu");
    }

    #[tokio::test]
    async fn test_worker_delivers_to_sink() {
        let sink = Arc::new(RecordingSink::new(0));
        let (tx, rx) = mpsc::channel(4);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(ArchiveWorker::new(sink.clone(), rx, shutdown).run());

        tx.send(sample_archive()).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(sink.persisted.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failure() {
        let sink = Arc::new(RecordingSink::new(2));
        let (tx, rx) = mpsc::channel(4);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(ArchiveWorker::new(sink.clone(), rx, shutdown).run());

        tx.send(sample_archive()).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        // Third attempt succeeded
        assert_eq!(sink.persisted.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_worker_survives_permanent_failure() {
        // First archive exhausts all retries, second still goes through
        let sink = Arc::new(RecordingSink::new(MAX_RETRY_COUNT));
        let (tx, rx) = mpsc::channel(4);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(ArchiveWorker::new(sink.clone(), rx, shutdown).run());

        tx.send(sample_archive()).await.unwrap();
        tx.send(sample_archive()).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(sink.persisted.lock().len(), 1);
    }
}
