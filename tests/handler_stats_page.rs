mod common;

use axum_test::TestServer;
use link_shortener::routes::router;
use sqlx::PgPool;

#[sqlx::test]
async fn test_stats_page_renders_link(pool: PgPool) {
    common::create_test_link(&pool, "page01", "https://example.com/docs").await;

    let server = TestServer::new(router(common::create_test_state(pool.clone()))).unwrap();

    let response = server.get("/code/page01").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Stats for page01"));
    assert!(html.contains("http://localhost:3000/page01"));
    assert!(html.contains("https://example.com/docs"));
    assert!(html.contains("Never"));

    // Viewing stats is not a visit.
    assert_eq!(common::get_total_clicks(&pool, "page01").await, 0);
}

#[sqlx::test]
async fn test_stats_page_uses_configured_base_url(pool: PgPool) {
    common::create_test_link(&pool, "page02", "https://example.com").await;

    let server =
        TestServer::new(router(common::create_test_state_with_base_url(pool))).unwrap();

    let html = server.get("/code/page02").await.text();
    assert!(html.contains(&format!("{}/page02", common::BASE_URL)));
}

#[sqlx::test]
async fn test_stats_page_shows_clicks(pool: PgPool) {
    common::create_test_link(&pool, "page03", "https://example.com").await;

    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    server.get("/page03").await;
    server.get("/page03").await;

    let html = server.get("/code/page03").await.text();
    assert!(html.contains("Total clicks:</span> 2"));
    assert!(!html.contains("Never"));
}

#[sqlx::test]
async fn test_stats_page_not_found(pool: PgPool) {
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/code/absent1").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Link not found"));
}
