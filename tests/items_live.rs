//! Round-trip tests against a live Postgres.
//!
//! These run only when the `DB_*` variables point at a reachable
//! database (a `.env` file is honored); otherwise each test skips
//! itself. The `items` table is created on demand and truncated per
//! test, so point the variables at a scratch database.

use std::sync::OnceLock;
use std::time::Duration;

use item_board::config::{DatabaseConfig, ServiceConfig};
use item_board::lifecycle::Shutdown;
use item_board::{HttpServer, ItemStore};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Tests share one table, so they take turns.
fn table_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn database_config() -> Option<DatabaseConfig> {
    dotenv::dotenv().ok();
    let defaults = DatabaseConfig::default();
    Some(DatabaseConfig {
        host: std::env::var("DB_HOST").ok()?,
        port: std::env::var("DB_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.port),
        name: std::env::var("DB_NAME").ok()?,
        user: std::env::var("DB_USER").ok()?,
        password: std::env::var("DB_PASSWORD").ok()?,
        max_connections: defaults.max_connections,
    })
}

async fn start_server(database: DatabaseConfig) -> (Shutdown, String) {
    let mut config = ServiceConfig::default();
    config.database = database;

    let store = ItemStore::connect(&config.database);
    sqlx::query("CREATE TABLE IF NOT EXISTS items (id SERIAL PRIMARY KEY, name TEXT NOT NULL)")
        .execute(store.pool())
        .await
        .expect("Database unreachable");
    sqlx::query("TRUNCATE items")
        .execute(store.pool())
        .await
        .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config, store);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;

    (shutdown, format!("http://{}", addr))
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn empty_store_lists_as_empty_array() {
    let Some(database) = database_config() else {
        eprintln!("skipping: DB_HOST not set");
        return;
    };
    let _guard = table_lock().lock().await;
    let (_shutdown, base) = start_server(database).await;

    let res = client()
        .get(format!("{}/api/items", base))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn created_item_shows_up_exactly_once_in_the_list() {
    let Some(database) = database_config() else {
        eprintln!("skipping: DB_HOST not set");
        return;
    };
    let _guard = table_lock().lock().await;
    let (_shutdown, base) = start_server(database).await;

    let res = client()
        .post(format!("{}/api/items", base))
        .json(&serde_json::json!({"name": "Milk"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["name"], "Milk");
    let id = created["id"].as_i64().expect("id should be an integer");

    let res = client()
        .get(format!("{}/api/items", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let items: Vec<serde_json::Value> = res.json().await.unwrap();

    let matches: Vec<_> = items.iter().filter(|i| i["name"] == "Milk").collect();
    assert_eq!(matches.len(), 1, "exactly one Milk expected");
    assert_eq!(matches[0]["id"].as_i64(), Some(id));

    // Reads with no intervening writes are idempotent.
    let again: Vec<serde_json::Value> = client()
        .get(format!("{}/api/items", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items, again);
}

#[tokio::test]
async fn identical_names_create_distinct_items() {
    let Some(database) = database_config() else {
        eprintln!("skipping: DB_HOST not set");
        return;
    };
    let _guard = table_lock().lock().await;
    let (_shutdown, base) = start_server(database).await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let res = client()
            .post(format!("{}/api/items", base))
            .json(&serde_json::json!({"name": "Coffee"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 201);
        let created: serde_json::Value = res.json().await.unwrap();
        ids.push(created["id"].as_i64().unwrap());
    }

    assert_ne!(ids[0], ids[1], "no uniqueness constraint on name");

    let items: Vec<serde_json::Value> = client()
        .get(format!("{}/api/items", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}
