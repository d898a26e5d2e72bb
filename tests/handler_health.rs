mod common;

use axum_test::TestServer;
use link_shortener::routes::router;
use sqlx::PgPool;

#[sqlx::test]
async fn test_healthz_success(pool: PgPool) {
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["ok"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["uptime"].as_f64().unwrap() >= 0.0);
    assert!(
        chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok()
    );
}

#[sqlx::test]
async fn test_healthz_structure(pool: PgPool) {
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let json = server.get("/healthz").await.json::<serde_json::Value>();

    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    assert!(json.get("ok").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("uptime").is_some());
    assert!(json.get("timestamp").is_some());
}
