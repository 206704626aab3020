#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use seaworth::config::{
    BackendConfig, Config, CorsConfig, DatabaseConfig, ObservabilityConfig, ServerConfig,
};
use temp_dir::TempDir;
use tokio::net::TcpListener;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub addr: SocketAddr,
    _dir: TempDir,
}

impl TestApp {
    pub async fn request(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)], fragment: bool) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded");

        if fragment {
            builder = builder.header("x-fragment", "contact-form");
        }

        let body = serde_urlencoded::to_string(fields).unwrap();
        self.request(builder.body(Body::from(body)).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Test config; without a `backend` inquiries go to the server's own API.
pub fn config(dir: &TempDir, backend: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.path().join("seaworth.db").display()),
            max_connections: 2,
        },
        backend: BackendConfig {
            base_url: backend.unwrap_or_default().to_owned(),
            follows_server: backend.is_none(),
        },
        cors: CorsConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// Serves the app on an ephemeral port with the contact form posting back to
/// the app's own API.
pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    build_app(listener, None).await
}

/// Like [`spawn_app`], but inquiries go to a port nobody listens on.
pub async fn spawn_app_without_backend() -> TestApp {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let backend = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    build_app(listener, Some(&backend)).await
}

async fn build_app(listener: TcpListener, backend: Option<&str>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let addr = listener.local_addr().unwrap();

    // Same path as `serve --port`: the server moves and a tracking backend follows
    let mut config = config(&dir, backend);
    config.override_server(None, Some(addr.port()));

    let (write_pool, read_pool) = seaworth::server::connect(&config).await.unwrap();
    let state = seaworth::server::app_state(config, write_pool, read_pool).unwrap();
    let router = seaworth::server::app(state);

    let app = router.clone();
    tokio::spawn(async move { axum::serve(listener, app).await });

    TestApp {
        router,
        addr,
        _dir: dir,
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

pub const INQUIRY: &[(&str, &str)] = &[
    ("name", "Ayesha Malik"),
    ("email", "ayesha@example.com"),
    ("subject", "Generator quote"),
    ("message", "We need two 500 kVA generators."),
];
