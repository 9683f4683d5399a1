//! 内存目录仓储

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use errors::{AppError, AppResult};
use tracing::info;

use crate::domain::entities::{CatalogItem, CatalogSnapshot};
use crate::domain::repositories::CatalogRepository;

/// 内存目录仓储
///
/// 外部目录同步完成后整体替换快照；正在进行的估算继续持有旧快照。
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl InMemoryCatalogRepository {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self::new(CatalogSnapshot::new(items))
    }

    /// 整体替换目录快照
    pub fn replace(&self, snapshot: CatalogSnapshot) -> AppResult<()> {
        let count = snapshot.len();
        let mut current = self
            .current
            .write()
            .map_err(|_| AppError::internal("catalog lock poisoned"))?;
        *current = Arc::new(snapshot);
        info!(items = count, "Catalog snapshot replaced");
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn snapshot(&self) -> AppResult<Arc<CatalogSnapshot>> {
        let current = self
            .current
            .read()
            .map_err(|_| AppError::internal("catalog lock poisoned"))?;
        Ok(Arc::clone(&current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::MaterialCategory;

    #[tokio::test]
    async fn test_replace_keeps_old_snapshot_alive() {
        let repo = InMemoryCatalogRepository::from_items(vec![CatalogItem::new(
            "a",
            "Caulk",
            MaterialCategory::Adhesives,
            "tube",
            6.5,
        )]);
        let before = repo.snapshot().await.unwrap();

        repo.replace(CatalogSnapshot::empty()).unwrap();
        let after = repo.snapshot().await.unwrap();

        assert_eq!(before.len(), 1);
        assert!(after.is_empty());
    }
}
