use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;

/// Local stand-in for the remote generation service
pub struct FakeBackend {
    addr: SocketAddr,
}

impl FakeBackend {
    pub async fn start() -> anyhow::Result<Self> {
        let app = Router::new()
            .route("/echo", post(echo))
            .route("/result", post(result_field))
            .route("/error", post(unavailable))
            .route("/garbage", post(garbage))
            .route("/slow", post(slow));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("fake backend stopped: {}", e);
            }
        });

        Ok(Self { addr })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Answers with `"<authorization header>|<prompt>"` in the `text` field
async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let prompt = body["prompt"].as_str().unwrap_or_default().to_string();
    Json(json!({ "text": format!("{}|{}", auth, prompt) }))
}

async fn result_field() -> Json<Value> {
    Json(json!({ "result": "answer from result" }))
}

async fn unavailable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "overloaded")
}

async fn garbage() -> (StatusCode, &'static str) {
    (StatusCode::OK, "<html>not json</html>")
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "text": "too late" }))
}
