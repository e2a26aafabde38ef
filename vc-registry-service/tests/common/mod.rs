//! Shared setup for vc-registry-service integration tests.

#![allow(dead_code)]

use mongodb::bson::{doc, Document};
use service_core::config::Config as CoreConfig;
use std::time::Duration;
use uuid::Uuid;
use vc_registry_service::config::VcConfig;
use vc_registry_service::services::VcStore;
use vc_registry_service::{build_router, AppState, Application};

pub const TEST_MONGO_URI: &str = "mongodb://localhost:27017";

pub fn test_config(database: &str) -> VcConfig {
    test_config_with_uri(TEST_MONGO_URI, database)
}

pub fn test_config_with_uri(uri: &str, database: &str) -> VcConfig {
    let uri = uri.to_string();
    let database = database.to_string();
    VcConfig::from_lookup(CoreConfig { port: 0 }, move |key| match key {
        "MONGO_URI" => Some(uri.clone()),
        "DB_NAME" => Some(database.clone()),
        _ => None,
    })
    .expect("Failed to build test configuration")
}

/// Router over a store handle that has not talked to the server yet.
///
/// The driver connects lazily, so routes that never reach the store work
/// without a running MongoDB.
pub async fn offline_router() -> axum::Router {
    router_for(test_config("vc_offline_test")).await
}

pub async fn router_for(config: VcConfig) -> axum::Router {
    let store = VcStore::connect(
        &config.mongodb.uri,
        &config.mongodb.database,
        &config.mongodb.collection,
    )
    .await
    .expect("Failed to create store handle");

    build_router(AppState { config, store })
}

pub fn sample_vcs() -> Vec<Document> {
    vec![
        doc! { "Name": "Acme Ventures", "Country": "USA", "Founded": 1999 },
        doc! { "Name": "ACME Growth Partners", "Country": "India", "Founded": 2012 },
        doc! { "Name": "Blue Harbor Capital", "Country": "USA", "Founded": 2005 },
        doc! { "Name": "Northwind Fund", "Country": "Germany", "Founded": 2018 },
        doc! { "Name": "Zephyr Capital", "Country": "India", "Founded": 2021 },
    ]
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: VcStore,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("vc_registry_test_{}", Uuid::new_v4().simple());
        let config = test_config(&db_name);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            db_name,
        }
    }

    pub async fn seed(&self, docs: Vec<Document>) {
        self.store
            .vcs()
            .insert_many(docs, None)
            .await
            .expect("Failed to seed VC records");
    }

    pub async fn get_json(&self, path_and_query: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = reqwest::Client::new()
            .get(format!("{}{}", self.address, path_and_query))
            .send()
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let body = response.json().await.expect("Failed to parse JSON");
        (status, body)
    }

    pub async fn cleanup(&self) {
        self.store.database().drop(None).await.ok();
    }
}
