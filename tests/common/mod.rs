#![allow(dead_code)]

use chrono::{DateTime, Utc};
use link_shortener::application::services::LinkService;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_link_at(pool: &PgPool, code: &str, url: &str, created_at: DateTime<Utc>) {
    sqlx::query("INSERT INTO links (code, url, created_at) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(url)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_total_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT total_clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool, base_url: Option<&str>) -> Arc<LinkService<PgLinkRepository>> {
    let link_repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    Arc::new(LinkService::new(link_repo, base_url.map(str::to_string)))
}

/// State with no configured base URL, so short URLs use the request origin.
pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool, None))
}

/// State with [`BASE_URL`] configured.
pub fn create_test_state_with_base_url(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool, Some(BASE_URL)))
}
