mod common;

use axum_test::TestServer;
use snip_url::routes;
use sqlx::SqlitePool;

fn server_for(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(routes::router(state, common::TEST_TIMEOUT)).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_url(&pool, "redirect1", "https://example.com/target").await;
    let server = server_for(pool);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_needs_no_auth(pool: SqlitePool) {
    common::create_test_url(&pool, "public", "https://example.com").await;
    let server = server_for(pool);

    let response = server.get("/public").await;

    assert_eq!(response.status_code(), 302);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = server_for(pool);

    let response = server.get("/doesnotexist").await;

    assert_eq!(response.status_code(), 200);
    assert!(response.headers().get("location").is_none());
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["error"], "alias not found");
}

#[sqlx::test]
async fn test_redirect_is_case_sensitive(pool: SqlitePool) {
    common::create_test_url(&pool, "CaSe", "https://example.com").await;
    let server = server_for(pool);

    let response = server.get("/case").await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "alias not found");
}

#[tokio::test]
async fn test_redirect_from_memory_store() {
    let (state, _repo) = common::create_memory_state();
    state
        .url_service
        .save_url("https://example.com/mem", Some("mem".to_string()))
        .await
        .unwrap();
    let server = TestServer::new(routes::router(state, common::TEST_TIMEOUT)).unwrap();

    let response = server.get("/mem").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/mem");
}

#[sqlx::test]
async fn test_redirect_does_not_trim_alias(pool: SqlitePool) {
    common::create_test_url(&pool, "ex1", "https://example.com").await;
    let server = server_for(pool);

    for path in ["/%20ex1", "/ex1%20", "/%20ex1%20"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), 200, "path {path}");
        assert!(response.headers().get("location").is_none(), "path {path}");
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"], "alias not found", "path {path}");
    }
}
