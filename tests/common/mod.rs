//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::get,
};
use game_catalog_back::{
    config::CatalogConfig,
    dao::game_store::{
        GameStore,
        sql::{SqlConfig, SqlGameStore},
    },
    routes,
    services::catalog_service::CatalogImporter,
    state::{AppState, SharedState},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// A router over a fresh in-memory database, plus the state behind it.
pub struct TestApp {
    pub router: Router,
    pub state: SharedState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_sources(Vec::new()).await
    }

    pub async fn with_sources(sources: Vec<String>) -> Self {
        let store = SqlGameStore::connect(SqlConfig::new("sqlite::memory:").with_max_connections(1))
            .await
            .expect("in-memory store");
        let store: Arc<dyn GameStore> = Arc::new(store);

        let importer = CatalogImporter::new(&CatalogConfig {
            sources,
            fetch_timeout: Some(Duration::from_secs(5)),
        })
        .expect("catalog client");

        let state = AppState::new(store, importer);
        let router = routes::router(state.clone(), &static_dir());
        Self { router, state }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty).
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn count(&self) -> usize {
        self.state
            .game_store()
            .list_games()
            .await
            .expect("list games")
            .len()
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn game(publisher_id: &str, name: &str, platform: &str) -> Value {
    json!({
        "publisherId": publisher_id,
        "name": name,
        "platform": platform,
        "storeId": format!("store-{name}"),
        "bundleId": format!("com.example.{}", name.to_lowercase().replace(' ', "")),
        "appVersion": "1.0.0",
        "isPublished": true,
    })
}

/// Five games: three on ios, one ios title containing "heli".
pub fn seed_games() -> Vec<Value> {
    vec![
        game("pub-1", "Super heli strike", "ios"),
        game("pub-2", "Candy Match", "ios"),
        game("pub-3", "Word Quest", "ios"),
        game("pub-4", "Mega heli battle", "android"),
        game("pub-5", "Puzzle Drop", "android"),
    ]
}

/// Start a local server standing in for the remote catalogs and return its base URL.
///
/// `/android.top100.json` holds two groups (3 + 1 entries), `/ios.top100.json` one group
/// of 2 entries with numeric `appId`s, `/broken.json` is not JSON.
pub async fn spawn_catalog_server() -> String {
    let app = Router::new()
        .route("/android.top100.json", get(|| async { Json(android_catalog()) }))
        .route("/ios.top100.json", get(|| async { Json(ios_catalog()) }))
        .route("/empty.json", get(|| async { Json(json!([[], []])) }))
        .route("/broken.json", get(|| async { "this is not a catalog" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("catalog server");
    });
    format!("http://{addr}")
}

fn android_catalog() -> Value {
    let entry = |n: u32| {
        json!({
            "publisher_id": format!("android-pub-{n}"),
            "humanized_name": format!("Android Game {n}"),
            "os": "android",
            "bundle_id": format!("com.android.game{n}"),
            "version": format!("{n}.0"),
            "appId": format!("com.android.game{n}"),
            "rank": n,
        })
    };
    json!([[entry(1), entry(2), entry(3)], [entry(4)]])
}

fn ios_catalog() -> Value {
    json!([[
        {
            "publisher_id": 284882215,
            "humanized_name": "Ios Heli Rescue",
            "os": "ios",
            "bundle_id": "com.ios.heli",
            "version": "5.2.1",
            "appId": 1234567
        },
        {
            "publisher_id": 284882216,
            "humanized_name": "Ios Puzzle",
            "os": "ios",
            "bundle_id": "com.ios.puzzle",
            "version": null,
            "appId": 7654321
        }
    ]])
}
