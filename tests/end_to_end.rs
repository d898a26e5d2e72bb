mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use link_shortener::routes::router;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_redirect_stats_delete_flow(pool: PgPool) {
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let created = server
        .post("/api/links")
        .add_header("Host", "sho.rt")
        .json(&json!({ "url": "https://example.com/docs" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let body = created.json::<Value>();
    let code = body["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert!(
        body["shortUrl"]
            .as_str()
            .unwrap()
            .ends_with(&format!("/{}", code))
    );

    let redirect = server.get(&format!("/{}", code)).await;
    assert_eq!(redirect.status_code(), StatusCode::FOUND);
    assert_eq!(redirect.header("location"), "https://example.com/docs");

    let stats = server.get(&format!("/api/links/{}", code)).await;
    stats.assert_status_ok();
    assert_eq!(stats.json::<Value>()["total_clicks"], 1);

    let deleted = server.delete(&format!("/api/links/{}", code)).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>(), json!({ "ok": true }));

    server
        .get(&format!("/{}", code))
        .await
        .assert_status_not_found();
}
