#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use snip_url::application::services::UrlService;
use snip_url::domain::repositories::UrlRepository;
use snip_url::infrastructure::persistence::{MemoryUrlRepository, SqliteUrlRepository};
use snip_url::state::{AppState, BasicCredentials};
use snip_url::utils::alias_generator::AliasGenerator;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn create_test_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO urls (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn state_with_repository(repository: Arc<dyn UrlRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(repository, AliasGenerator::default()));

    AppState::new(url_service, BasicCredentials::new(TEST_USER, TEST_PASSWORD))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    state_with_repository(Arc::new(SqliteUrlRepository::new(Arc::new(pool))))
}

pub fn create_memory_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());

    (state_with_repository(repository.clone()), repository)
}

pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

pub fn valid_auth() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}
