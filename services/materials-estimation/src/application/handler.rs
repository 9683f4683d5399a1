//! 估算应用服务

use std::collections::HashMap;
use std::sync::Arc;

use common::{OwnerId, normalize_key};
use config::EstimatorConfig;
use errors::AppResult;
use tracing::{debug, info};

use super::comparison::MaterialComparisonBuilder;
use super::generator;
use super::keywords;
use super::recommender::Recommender;
use super::requests::{EstimateRequest, EstimateResponse, UsageQuery};
use super::resolution;
use crate::domain::entities::Material;
use crate::domain::enums::{JobType, RecommendationArchetype};
use crate::domain::repositories::CatalogRepository;
use crate::domain::value_objects::{JobContext, MaterialMatchResult, MaterialUsageStats, QuantityContext};
use crate::infrastructure::observability::metrics;
use crate::infrastructure::usage_worker::UsageReader;

/// 估算入口
///
/// 目录快照和使用统计快照都通过注入获得，没有全局状态。
pub struct EstimationHandler {
    catalog_repo: Arc<dyn CatalogRepository>,
    usage: UsageReader,
    recommender: Recommender,
    comparison: MaterialComparisonBuilder,
    match_limit: usize,
    usage_limit: usize,
}

impl EstimationHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>, usage: UsageReader, config: &EstimatorConfig) -> Self {
        Self {
            catalog_repo,
            usage,
            recommender: Recommender::new(config.recommender.clone()),
            comparison: MaterialComparisonBuilder::new(&config.scoring),
            match_limit: config.scoring.default_limit,
            usage_limit: config.usage.default_limit,
        }
    }

    /// 执行一次估算请求
    ///
    /// `Usage` 请求只查询当前发布的快照；历史数据见 [`EstimateInput`](super::requests::EstimateInput)。
    pub async fn execute(&self, owner: &OwnerId, request: EstimateRequest) -> AppResult<EstimateResponse> {
        let response = match request {
            EstimateRequest::JobType { job_type, context } => {
                EstimateResponse::Materials(self.generate_for_job_type(owner, job_type, &context).await?)
            }
            EstimateRequest::Recommend {
                archetype,
                context,
                fallback_costs,
            } => {
                let fallback_costs: HashMap<String, f64> = fallback_costs
                    .into_iter()
                    .map(|(name, cost)| (normalize_key(&name), cost))
                    .collect();
                EstimateResponse::Materials(self.recommend(owner, archetype, &context, &fallback_costs).await?)
            }
            EstimateRequest::Keywords { description } => {
                EstimateResponse::Materials(self.suggest_from_description(owner, &description))
            }
            EstimateRequest::Match {
                name,
                unit,
                unit_cost,
                limit,
            } => {
                let material = Material::new(owner.clone(), name, 1.0, unit_cost).with_unit(unit.unwrap_or_default());
                EstimateResponse::Matches(self.closest_catalog_matches(&material, limit).await?)
            }
            EstimateRequest::Usage { query } => EstimateResponse::Usage(self.usage_query(&query)),
        };
        Ok(response)
    }

    // ========== 估算 ==========

    /// 按作业类型生成物料行项目
    pub async fn generate_for_job_type(
        &self,
        owner: &OwnerId,
        job_type: JobType,
        ctx: &QuantityContext,
    ) -> AppResult<Vec<Material>> {
        let catalog = self.catalog_repo.snapshot().await?;
        let materials: Vec<Material> = generator::generate(job_type, &catalog, owner, ctx)
            .iter()
            .map(|generated| Material::from_generated(owner.clone(), generated))
            .collect();

        info!(job_type = %job_type, count = materials.len(), "Generated materials for job type");
        metrics::record_estimate("job_type", materials.len());
        Ok(materials)
    }

    /// 按原型推荐并对账为物料行项目
    ///
    /// `fallback_costs` 以归一化名称为键，在目录没有价格时使用。
    pub async fn recommend(
        &self,
        owner: &OwnerId,
        archetype: RecommendationArchetype,
        ctx: &JobContext,
        fallback_costs: &HashMap<String, f64>,
    ) -> AppResult<Vec<Material>> {
        let recommendations = self.recommender.recommend(archetype, ctx);
        if recommendations.is_empty() {
            debug!(archetype = %archetype, "No recommendations for the given dimensions");
            return Ok(Vec::new());
        }

        let catalog = self.catalog_repo.snapshot().await?;
        let materials = resolution::resolve_all(&recommendations, &catalog, owner, fallback_costs);

        info!(archetype = %archetype, count = materials.len(), "Resolved recommendations");
        metrics::record_estimate("recommend", materials.len());
        Ok(materials)
    }

    /// 根据自由文本描述建议物料
    pub fn suggest_from_description(&self, owner: &OwnerId, description: &str) -> Vec<Material> {
        let materials: Vec<Material> = keywords::suggest(description)
            .iter()
            .map(|generated| Material::from_generated(owner.clone(), generated))
            .collect();
        metrics::record_estimate("keywords", materials.len());
        materials
    }

    /// 最接近的目录条目；`limit` 缺省时取配置值
    pub async fn closest_catalog_matches(
        &self,
        material: &Material,
        limit: Option<usize>,
    ) -> AppResult<Vec<MaterialMatchResult>> {
        let catalog = self.catalog_repo.snapshot().await?;
        let visible = catalog
            .items()
            .iter()
            .filter(|item| item.scope().visible_to(material.owner()));
        let results = self
            .comparison
            .best_matches(material, visible, limit.unwrap_or(self.match_limit));

        debug!(material = material.name(), count = results.len(), "Scored catalog candidates");
        Ok(results)
    }

    // ========== 使用统计 ==========

    pub fn usage_query(&self, query: &UsageQuery) -> Vec<MaterialUsageStats> {
        match query {
            UsageQuery::FrequentlyUsed { limit } => self.frequently_used(*limit),
            UsageQuery::ForJobType { job_type, limit } => self.materials_for_job_type(job_type, *limit),
            UsageQuery::CommonlyUsedWith { name, limit } => self.commonly_used_with(name, *limit),
        }
    }

    pub fn frequently_used(&self, limit: Option<usize>) -> Vec<MaterialUsageStats> {
        let snapshot = self.usage.current();
        snapshot
            .frequently_used(limit.unwrap_or(self.usage_limit))
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn materials_for_job_type(&self, job_type: &str, limit: Option<usize>) -> Vec<MaterialUsageStats> {
        let snapshot = self.usage.current();
        snapshot
            .materials_for_job_type(job_type, limit.unwrap_or(self.usage_limit))
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn commonly_used_with(&self, name: &str, limit: Option<usize>) -> Vec<MaterialUsageStats> {
        let snapshot = self.usage.current();
        snapshot
            .commonly_used_with(name, limit.unwrap_or(self.usage_limit))
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usage::UsageSnapshot;
    use crate::domain::entities::{CatalogItem, CatalogSnapshot};
    use crate::domain::enums::MaterialCategory;
    use crate::domain::repositories::MockCatalogRepository;
    use crate::domain::value_objects::{HistoryDocument, HistoryLineItem};
    use crate::infrastructure::seed::global_snapshot;
    use chrono::Utc;
    use errors::AppError;

    fn handler_with(repo: MockCatalogRepository, usage: UsageSnapshot) -> EstimationHandler {
        EstimationHandler::new(
            Arc::new(repo),
            UsageReader::from_snapshot(usage),
            &EstimatorConfig::default(),
        )
    }

    fn seeded_repo() -> MockCatalogRepository {
        let snapshot = Arc::new(global_snapshot().unwrap());
        let mut repo = MockCatalogRepository::new();
        repo.expect_snapshot().returning(move || Ok(snapshot.clone()));
        repo
    }

    #[tokio::test]
    async fn test_generate_for_job_type() {
        let handler = handler_with(seeded_repo(), UsageSnapshot::default());
        let owner = OwnerId::new();
        let ctx = QuantityContext {
            wall_length_ft: Some(20.0),
            wall_height_ft: Some(8.0),
            ..Default::default()
        };

        let materials = handler
            .generate_for_job_type(&owner, JobType::InteriorWall, &ctx)
            .await
            .unwrap();
        assert_eq!(materials[0].name(), "2x4 Stud 8ft");
        assert_eq!(materials[0].quantity(), 16.0);
        assert_eq!(materials[0].total(), 68.0);
        assert!(materials.iter().all(|m| m.owner() == &owner));
    }

    #[tokio::test]
    async fn test_recommend_resolves_against_catalog() {
        let handler = handler_with(seeded_repo(), UsageSnapshot::default());
        let ctx = JobContext::rectangle(12.0, 10.0);

        let materials = handler
            .recommend(&OwnerId::new(), RecommendationArchetype::LvpFlooring, &ctx, &HashMap::new())
            .await
            .unwrap();
        let lvp = materials.iter().find(|m| m.name() == "LVP Flooring").unwrap();
        // 132 sq ft / 20 → 7 盒
        assert_eq!(lvp.quantity(), 7.0);
        assert_eq!(lvp.unit(), Some("box"));
        assert_eq!(lvp.unit_cost(), 55.0);
    }

    #[tokio::test]
    async fn test_recommend_without_dimensions_skips_catalog() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_snapshot().never();
        let handler = handler_with(repo, UsageSnapshot::default());

        let materials = handler
            .recommend(
                &OwnerId::new(),
                RecommendationArchetype::PaintRoom,
                &JobContext::default(),
                &HashMap::new(),
            )
            .await
            .unwrap();
        assert!(materials.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_propagates() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_snapshot()
            .returning(|| Err(AppError::internal("catalog unavailable")));
        let handler = handler_with(repo, UsageSnapshot::default());

        let result = handler
            .generate_for_job_type(&OwnerId::new(), JobType::PaintRoom, &QuantityContext::new())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_closest_matches_hide_other_owners_items() {
        let owner = OwnerId::new();
        let other = OwnerId::new();
        let snapshot = Arc::new(CatalogSnapshot::new(vec![
            CatalogItem::new("mine", "Cedar Board", MaterialCategory::Lumber, "each", 12.0).owned_by(owner.clone()),
            CatalogItem::new("theirs", "Cedar Board 2", MaterialCategory::Lumber, "each", 12.0).owned_by(other),
            CatalogItem::new("global", "Cedar Fence Board", MaterialCategory::Lumber, "each", 5.0),
        ]));
        let mut repo = MockCatalogRepository::new();
        repo.expect_snapshot().returning(move || Ok(snapshot.clone()));
        let handler = handler_with(repo, UsageSnapshot::default());

        let source = Material::new(owner, "Cedar Board", 1.0, 12.0).with_unit("each");
        let results = handler.closest_catalog_matches(&source, Some(10)).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item.name(), "Cedar Board");
        assert!(results.iter().all(|r| r.item.name() != "Cedar Board 2"));
    }

    #[tokio::test]
    async fn test_usage_queries_read_published_snapshot() {
        let documents = vec![
            HistoryDocument::job("j-1", "Paint Room", Utc::now())
                .with_material(HistoryLineItem::new("Caulk", 2.0, 6.5))
                .with_material(HistoryLineItem::new("Primer", 1.0, 25.0)),
        ];
        let handler = handler_with(MockCatalogRepository::new(), UsageSnapshot::build(&documents));

        assert_eq!(handler.frequently_used(None).len(), 2);
        assert_eq!(handler.materials_for_job_type("paint", Some(1)).len(), 1);
        assert_eq!(handler.commonly_used_with("caulk", None)[0].name, "Primer");
    }

    #[tokio::test]
    async fn test_execute_recommend_normalizes_fallback_keys() {
        let handler = handler_with(seeded_repo(), UsageSnapshot::default());
        let request: EstimateRequest = serde_json::from_value(serde_json::json!({
            "mode": "recommend",
            "archetype": "tile_backsplash",
            "context": {"area_sqft": 30},
            "fallback_costs": {"Tile Sealer": 19.5}
        }))
        .unwrap();

        let response = handler.execute(&OwnerId::new(), request).await.unwrap();
        let EstimateResponse::Materials(materials) = response else {
            panic!("expected materials");
        };
        let sealer = materials.iter().find(|m| m.name() == "Tile Sealer").unwrap();
        assert_eq!(sealer.unit_cost(), 19.5);
        let grout = materials.iter().find(|m| m.name() == "Grout").unwrap();
        assert_eq!(grout.unit_cost(), 16.0);
    }

    #[test]
    fn test_suggest_from_description() {
        let handler = handler_with(MockCatalogRepository::new(), UsageSnapshot::default());
        let materials = handler.suggest_from_description(&OwnerId::new(), "Replace the roof shingles");
        assert!(materials.iter().any(|m| m.name() == "Asphalt Shingles"));
        assert!(materials.iter().any(|m| m.name() == "Drop Cloth"));
    }
}
