//! 目录仓储接口

use std::sync::Arc;

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::CatalogSnapshot;

/// 目录仓储接口
///
/// 目录由外部维护方同步，估算引擎只读取当前发布的快照。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 获取当前目录快照
    async fn snapshot(&self) -> AppResult<Arc<CatalogSnapshot>>;
}
