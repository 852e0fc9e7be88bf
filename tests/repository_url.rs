mod common;

use snip_url::domain::repositories::{StorageError, UrlRepository};
use snip_url::infrastructure::persistence::SqliteUrlRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_then_resolve(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let id = repo.save("https://example.com", "ex1").await.unwrap();
    assert!(id > 0);

    let url = repo.resolve("ex1").await.unwrap();
    assert_eq!(url, "https://example.com");
}

#[sqlx::test]
async fn test_save_duplicate_alias(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    repo.save("https://first.example.com", "dup").await.unwrap();
    let result = repo.save("https://second.example.com", "dup").await;

    assert!(matches!(result, Err(StorageError::AliasExists)));
    assert_eq!(common::count_urls(&pool).await, 1);
    assert_eq!(
        repo.resolve("dup").await.unwrap(),
        "https://first.example.com"
    );
}

#[sqlx::test]
async fn test_resolve_not_found(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let result = repo.resolve("missing").await;

    assert!(matches!(result, Err(StorageError::AliasNotFound)));
}

#[sqlx::test]
async fn test_alias_lookup_is_case_sensitive(pool: SqlitePool) {
    common::create_test_url(&pool, "AbC", "https://example.com/upper").await;
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    assert_eq!(
        repo.resolve("AbC").await.unwrap(),
        "https://example.com/upper"
    );
    assert!(matches!(
        repo.resolve("abc").await,
        Err(StorageError::AliasNotFound)
    ));
}

#[sqlx::test]
async fn test_ids_increase(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    let first = repo.save("https://example.com/1", "one").await.unwrap();
    let second = repo.save("https://example.com/2", "two").await.unwrap();

    assert!(second > first);
}

#[sqlx::test]
async fn test_same_url_under_many_aliases(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    repo.save("https://example.com", "a1").await.unwrap();
    repo.save("https://example.com", "a2").await.unwrap();

    assert_eq!(repo.resolve("a1").await.unwrap(), "https://example.com");
    assert_eq!(repo.resolve("a2").await.unwrap(), "https://example.com");
    assert_eq!(common::count_urls(&pool).await, 2);
}

#[sqlx::test]
async fn test_concurrent_saves_same_alias(pool: SqlitePool) {
    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.save(&format!("https://example.com/{i}"), "race").await
        }));
    }

    let mut saved = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => saved += 1,
            Err(StorageError::AliasExists) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(saved, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_init_is_idempotent(pool: SqlitePool) {
    common::create_test_url(&pool, "keep", "https://example.com/keep").await;
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    repo.init().await.unwrap();
    repo.init().await.unwrap();

    assert_eq!(
        repo.resolve("keep").await.unwrap(),
        "https://example.com/keep"
    );
}

#[sqlx::test]
async fn test_ping_and_count(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(Arc::new(pool));

    repo.ping().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.save("https://example.com", "c1").await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_in_memory_database() {
    let repo = SqliteUrlRepository::in_memory().await.unwrap();

    repo.save("https://example.com", "mem").await.unwrap();

    assert_eq!(repo.resolve("mem").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_connect_creates_file() {
    let dir = std::env::temp_dir().join(format!("snip-url-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("storage.db");
    let _ = std::fs::remove_file(&path);

    let repo = SqliteUrlRepository::connect(&path, 2, std::time::Duration::from_secs(5))
        .await
        .unwrap();
    repo.save("https://example.com", "file").await.unwrap();
    repo.close().await;

    let reopened = SqliteUrlRepository::connect(&path, 2, std::time::Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(
        reopened.resolve("file").await.unwrap(),
        "https://example.com"
    );
    reopened.close().await;

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_closed_store_is_unavailable() {
    let repo = SqliteUrlRepository::in_memory().await.unwrap();
    repo.close().await;

    let result = repo.resolve("anything").await;

    assert!(matches!(result, Err(StorageError::Unavailable(_))));
}
