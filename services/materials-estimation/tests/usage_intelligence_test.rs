//! 使用统计集成测试
//!
//! 覆盖折叠聚合、共现索引、排序规则以及后台任务的推送与发布

use chrono::{DateTime, Duration, TimeZone, Utc};
use common::OwnerId;
use config::{EstimatorConfig, UsageConfig};
use materials_estimation::application::usage::UsageSnapshot;
use materials_estimation::application::{EstimateInput, EstimateRequest, EstimateResponse, EstimationHandler};
use materials_estimation::domain::value_objects::{HistoryDocument, HistoryLineItem};
use materials_estimation::infrastructure::persistence::InMemoryCatalogRepository;
use materials_estimation::infrastructure::usage_worker::UsageIntelligenceWorker;
use serde_json::json;
use std::sync::Arc;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0).unwrap()
}

fn history() -> Vec<HistoryDocument> {
    let t = base_time();
    vec![
        HistoryDocument::job("j-1", "Interior Wall", t)
            .with_material(HistoryLineItem::new("Drywall screws", 10.0, 8.0).with_unit("box"))
            .with_material(HistoryLineItem::new("Joint Compound", 1.0, 18.0))
            .with_material(HistoryLineItem::new("Drywall Tape", 1.0, 6.0)),
        HistoryDocument::job("j-2", "Interior Wall", t + Duration::days(1))
            .with_material(HistoryLineItem::new("Drywall Screws", 20.0, 9.0).with_unit("box"))
            .with_material(HistoryLineItem::new("Joint Compound", 2.0, 18.0)),
        HistoryDocument::job("j-3", "Basement Finish", t + Duration::days(2))
            .with_material(HistoryLineItem::new("drywall screws ", 30.0, 10.0).with_unit("boxes"))
            .with_material(HistoryLineItem::new("Caulk", 1.0, 6.5)),
        HistoryDocument::invoice("i-1", "Paint touch-up", t + Duration::days(3))
            .with_material(HistoryLineItem::new("Caulk", 2.0, 6.5))
            .with_material(HistoryLineItem::new("Primer", 1.0, 25.0)),
    ]
}

#[test]
fn test_drywall_screw_averages() {
    let snapshot = UsageSnapshot::build(&history());

    let screws = snapshot.stats_for("DRYWALL SCREWS").unwrap();
    assert_eq!(screws.total_usage_count, 3);
    assert_eq!(screws.average_quantity, Some(20.0));
    assert_eq!(screws.average_unit_cost, Some(9.0));
    assert_eq!(screws.name, "Drywall screws");
    assert_eq!(screws.most_common_unit.as_deref(), Some("box"));
    assert_eq!(screws.last_used_at, Some(base_time() + Duration::days(2)));
    assert_eq!(snapshot.document_count(), 4);
}

#[test]
fn test_co_occurrence_is_symmetric() {
    let snapshot = UsageSnapshot::build(&history());
    let names: Vec<String> = snapshot.stats().iter().map(|s| s.name.clone()).collect();

    for a in &names {
        for b in &names {
            assert_eq!(snapshot.pair_count(a, b), snapshot.pair_count(b, a), "{a} / {b}");
        }
        assert_eq!(snapshot.pair_count(a, a), 0, "{a}");
    }
    assert_eq!(snapshot.pair_count("Drywall Screws", "Joint Compound"), 2);
    assert_eq!(snapshot.pair_count("Caulk", "Primer"), 1);
    assert_eq!(snapshot.pair_count("Primer", "Drywall Tape"), 0);
}

#[test]
fn test_ordering_breaks_ties_by_last_use() {
    let snapshot = UsageSnapshot::build(&history());
    let ordered: Vec<&str> = snapshot.frequently_used(10).iter().map(|s| s.name.as_str()).collect();

    // 3 次 > 2 次；Caulk 与 Joint Compound 同为 2 次，Caulk 最近使用更晚
    assert_eq!(ordered[0], "Drywall screws");
    assert_eq!(ordered[1], "Caulk");
    assert_eq!(ordered[2], "Joint Compound");
    // Primer 与 Drywall Tape 同为 1 次，Primer 更晚
    assert_eq!(ordered[3], "Primer");
    assert_eq!(ordered[4], "Drywall Tape");
}

#[test]
fn test_queries_respect_limits() {
    let snapshot = UsageSnapshot::build(&history());

    assert_eq!(snapshot.frequently_used(2).len(), 2);
    assert!(snapshot.frequently_used(0).is_empty());

    let wall: Vec<&str> = snapshot
        .materials_for_job_type("interior", 10)
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(wall, vec!["Drywall screws", "Joint Compound", "Drywall Tape"]);

    let partners: Vec<&str> = snapshot
        .commonly_used_with("joint compound", 10)
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(partners, vec!["Drywall screws", "Drywall Tape"]);
    assert!(snapshot.commonly_used_with("Unknown", 10).is_empty());
}

#[test]
fn test_rebuild_is_deterministic() {
    let documents = history();
    let first = UsageSnapshot::build(&documents);
    let second = UsageSnapshot::build(documents.iter().rev());

    let summary = |snapshot: &UsageSnapshot| {
        snapshot
            .stats()
            .iter()
            .map(|s| (s.key.clone(), s.total_usage_count, s.average_quantity, s.last_used_at))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&first), summary(&second));
    // 显示名称取首次出现
    assert_eq!(first.stats_for("drywall screws").unwrap().name, "Drywall screws");
    assert_eq!(second.stats_for("drywall screws").unwrap().name, "drywall screws");
}

#[tokio::test]
async fn test_worker_publishes_raw_history() {
    let config = UsageConfig {
        debounce_ms: 10,
        default_limit: 5,
    };
    let (feed, reader, handle) = UsageIntelligenceWorker::spawn(&config);

    feed.push_raw_jobs(vec![
        json!({
            "kind": "job",
            "id": "j-1",
            "job_type": "Paint Room",
            "timestamp": "2026-03-01T12:00:00Z",
            "materials": [
                {"name": "Caulk", "quantity": 2, "unit_cost": 6.5, "unit": "tube"},
                {"name": "Primer", "quantity": 1, "unit_cost": 25}
            ]
        }),
        json!({"id": "broken"}),
    ])
    .await
    .unwrap();
    feed.push_raw_invoices(vec![json!({
        "kind": "invoice",
        "id": "i-1",
        "title": "Trim repair",
        "timestamp": "2026-03-03T12:00:00Z",
        "materials": [{"name": "caulk", "quantity": 4, "unit_cost": 7.5, "unit": "tube"}]
    })])
    .await
    .unwrap();

    drop(feed);
    handle.await.unwrap();

    let snapshot = reader.current();
    assert_eq!(snapshot.document_count(), 2);
    let caulk = snapshot.stats_for("Caulk").unwrap();
    assert_eq!(caulk.total_usage_count, 2);
    assert_eq!(caulk.average_quantity, Some(3.0));
    assert_eq!(caulk.average_unit_cost, Some(7.0));

    let handler = EstimationHandler::new(
        Arc::new(InMemoryCatalogRepository::from_items(Vec::new())),
        reader,
        &EstimatorConfig::default(),
    );
    let request: EstimateRequest = serde_json::from_value(json!({
        "mode": "usage",
        "query": {"kind": "commonly_used_with", "name": "primer"}
    }))
    .unwrap();
    let EstimateResponse::Usage(stats) = handler.execute(&OwnerId::new(), request).await.unwrap() else {
        panic!("expected usage stats");
    };
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].name, "Caulk");
}

#[tokio::test]
async fn test_input_history_reaches_usage_query() {
    let config = UsageConfig {
        debounce_ms: 10,
        default_limit: 5,
    };
    let (feed, reader, handle) = UsageIntelligenceWorker::spawn(&config);

    let input: EstimateInput = serde_json::from_value(json!({
        "mode": "usage",
        "query": {"kind": "frequently_used"},
        "jobs": [{
            "kind": "job",
            "id": "j-1",
            "job_type": "Paint Room",
            "timestamp": "2026-03-01T12:00:00Z",
            "materials": [{"name": "Painter's Tape", "quantity": 3, "unit_cost": 6, "unit": "roll"}]
        }],
        "invoices": [{
            "kind": "invoice",
            "id": "i-1",
            "title": "Touch up",
            "timestamp": "2026-03-02T12:00:00Z",
            "materials": [{"name": "painter's tape", "quantity": 1, "unit_cost": 6, "unit": "roll"}]
        }]
    }))
    .unwrap();
    assert!(input.has_history());

    feed.push_raw_jobs(input.jobs).await.unwrap();
    feed.push_raw_invoices(input.invoices).await.unwrap();
    drop(feed);
    handle.await.unwrap();

    let handler = EstimationHandler::new(
        Arc::new(InMemoryCatalogRepository::from_items(Vec::new())),
        reader,
        &EstimatorConfig::default(),
    );
    let EstimateResponse::Usage(stats) = handler.execute(&OwnerId::new(), input.request).await.unwrap() else {
        panic!("expected usage stats");
    };
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].name, "Painter's Tape");
    assert_eq!(stats[0].total_usage_count, 2);
}
