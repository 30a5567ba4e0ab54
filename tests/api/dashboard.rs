use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::helpers::spawn_app_with;

#[actix_rt::test]
pub async fn test_dashboard_is_loaded_once_at_startup() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalScanned": 1200,
            "totalReported": 35,
            "riskDistribution": [
                { "name": "Low", "value": 900 },
                { "name": "Medium", "value": 250 },
                { "name": "High", "value": 50 }
            ],
            "activityTimeline": [
                { "date": "2024-01-01", "scanned": 40, "reported": 2 },
                { "date": "2024-01-02", "scanned": 55, "reported": 4 }
            ],
            "topSuspiciousAddresses": [
                { "name": "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM", "value": 14 }
            ]
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let app = spawn_app_with(backend).await;

    // served from state, no further fetches
    app.settled_dashboard().await;
    let dashboard = app.get_dashboard().await;

    assert_eq!(dashboard["loading"], false);
    assert_eq!(dashboard["stats"]["totalScanned"], 1200);
    assert_eq!(dashboard["stats"]["totalReported"], 35);
    assert_eq!(dashboard["stats"]["riskDistribution"].as_array().unwrap().len(), 3);
    assert_eq!(dashboard["stats"]["activityTimeline"][1]["reported"], 4);
}

#[actix_rt::test]
pub async fn test_dashboard_failure_leaves_zeroed_stats() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&backend)
        .await;

    let app = spawn_app_with(backend).await;

    let dashboard = app.settled_dashboard().await;

    assert_eq!(dashboard["loading"], false);
    assert_eq!(dashboard["stats"]["totalScanned"], 0);
    assert_eq!(dashboard["stats"]["totalReported"], 0);
    assert_eq!(dashboard["stats"]["riskDistribution"], json!([]));
    assert_eq!(dashboard["stats"]["activityTimeline"], json!([]));
    assert_eq!(dashboard["stats"]["topSuspiciousAddresses"], json!([]));
}

#[actix_rt::test]
pub async fn test_slow_dashboard_does_not_hold_up_other_routes() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "totalScanned": 7, "totalReported": 1 }))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let started = Instant::now();
    let app = spawn_app_with(backend).await;

    let health = app.get("/health_check").await;
    assert!(health.status().is_success());
    let landing = app.get("/").await;
    assert!(landing.status().is_success());
    assert!(started.elapsed() < Duration::from_secs(1));

    let dashboard = app.get_dashboard().await;
    assert_eq!(dashboard["loading"], true);
    assert_eq!(dashboard["stats"]["totalScanned"], 0);

    let dashboard = app.settled_dashboard().await;
    assert_eq!(dashboard["stats"]["totalScanned"], 7);
    assert_eq!(dashboard["stats"]["totalReported"], 1);
}
