//! 使用统计后台任务
//!
//! 接收历史数据推送，防抖后在阻塞线程池上对完整历史重新折叠，
//! 通过 `watch` 通道整体发布新快照。读取方只会看到完整的快照。

use std::sync::Arc;
use std::time::{Duration, Instant};

use config::UsageConfig;
use errors::{AppError, AppResult};
use serde_json::Value;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::observability::metrics;
use crate::application::usage::UsageSnapshot;
use crate::domain::value_objects::{HistoryDocument, decode_documents};

/// 历史数据推送；每次推送替换对应来源的完整集合
#[derive(Debug, Clone)]
pub enum HistoryUpdate {
    Jobs(Vec<HistoryDocument>),
    Invoices(Vec<HistoryDocument>),
}

/// 推送端
#[derive(Debug, Clone)]
pub struct UsageFeed {
    tx: mpsc::Sender<HistoryUpdate>,
}

impl UsageFeed {
    pub async fn push(&self, update: HistoryUpdate) -> AppResult<()> {
        self.tx
            .send(update)
            .await
            .map_err(|_| AppError::internal("usage worker has stopped"))
    }

    pub async fn push_jobs(&self, jobs: Vec<HistoryDocument>) -> AppResult<()> {
        self.push(HistoryUpdate::Jobs(jobs)).await
    }

    pub async fn push_invoices(&self, invoices: Vec<HistoryDocument>) -> AppResult<()> {
        self.push(HistoryUpdate::Invoices(invoices)).await
    }

    /// 推送外部存储的原始文档；无法解码的文档被跳过
    pub async fn push_raw_jobs(&self, values: Vec<Value>) -> AppResult<()> {
        self.push_jobs(decode_logged(values)).await
    }

    pub async fn push_raw_invoices(&self, values: Vec<Value>) -> AppResult<()> {
        self.push_invoices(decode_logged(values)).await
    }
}

fn decode_logged(values: Vec<Value>) -> Vec<HistoryDocument> {
    let (documents, skipped) = decode_documents(values);
    if skipped > 0 {
        debug!(skipped, "Skipped undecodable history documents");
    }
    metrics::record_history_documents_skipped(skipped);
    documents
}

/// 读取端
#[derive(Debug, Clone)]
pub struct UsageReader {
    rx: watch::Receiver<Arc<UsageSnapshot>>,
}

impl UsageReader {
    /// 固定快照的读取端（不连接后台任务）
    pub fn from_snapshot(snapshot: UsageSnapshot) -> Self {
        let (_tx, rx) = watch::channel(Arc::new(snapshot));
        Self { rx }
    }

    /// 当前发布的快照
    pub fn current(&self) -> Arc<UsageSnapshot> {
        self.rx.borrow().clone()
    }

    /// 等待下一次发布
    pub async fn changed(&mut self) -> AppResult<Arc<UsageSnapshot>> {
        self.rx
            .changed()
            .await
            .map_err(|_| AppError::internal("usage worker has stopped"))?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

/// 使用统计后台任务
pub struct UsageIntelligenceWorker {
    rx: mpsc::Receiver<HistoryUpdate>,
    publisher: watch::Sender<Arc<UsageSnapshot>>,
    debounce: Duration,
    jobs: Arc<Vec<HistoryDocument>>,
    invoices: Arc<Vec<HistoryDocument>>,
}

impl UsageIntelligenceWorker {
    /// 启动后台任务，返回推送端、读取端和任务句柄
    ///
    /// 所有推送端被丢弃后任务退出。
    pub fn spawn(config: &UsageConfig) -> (UsageFeed, UsageReader, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(64);
        let (publisher, reader) = watch::channel(Arc::new(UsageSnapshot::default()));

        let worker = Self {
            rx,
            publisher,
            debounce: Duration::from_millis(config.debounce_ms),
            jobs: Arc::default(),
            invoices: Arc::default(),
        };
        let handle = tokio::spawn(worker.run());

        (UsageFeed { tx }, UsageReader { rx: reader }, handle)
    }

    async fn run(mut self) {
        info!(debounce_ms = self.debounce.as_millis() as u64, "Usage intelligence worker started");

        while let Some(update) = self.rx.recv().await {
            self.apply(update);
            let closed = self.drain_until_quiet().await;

            if let Err(e) = self.rebuild().await {
                error!(error = %e, "Failed to rebuild usage statistics");
            }
            if closed {
                break;
            }
        }

        info!("Usage intelligence worker stopped");
    }

    fn apply(&mut self, update: HistoryUpdate) {
        match update {
            HistoryUpdate::Jobs(jobs) => self.jobs = Arc::new(jobs),
            HistoryUpdate::Invoices(invoices) => self.invoices = Arc::new(invoices),
        }
    }

    /// 合并防抖窗口内的后续推送；返回通道是否已关闭
    async fn drain_until_quiet(&mut self) -> bool {
        loop {
            match tokio::time::timeout(self.debounce, self.rx.recv()).await {
                Ok(Some(update)) => self.apply(update),
                Ok(None) => return true,
                Err(_) => return false,
            }
        }
    }

    async fn rebuild(&self) -> AppResult<()> {
        let jobs = Arc::clone(&self.jobs);
        let invoices = Arc::clone(&self.invoices);
        let start = Instant::now();

        let snapshot = tokio::task::spawn_blocking(move || UsageSnapshot::build(jobs.iter().chain(invoices.iter())))
            .await
            .map_err(|e| AppError::internal(format!("usage rebuild task failed: {e}")))?;

        metrics::record_usage_rebuild(start, snapshot.document_count(), snapshot.len());
        debug!(
            documents = snapshot.document_count(),
            materials = snapshot.len(),
            "Publishing usage snapshot"
        );
        self.publisher.send_replace(Arc::new(snapshot));
        Ok(())
    }
}
