use magic_square::adapters::http;
use magic_square::utils::error::ErrorSeverity;
use magic_square::{AppConfig, Locale, MagicSquareError, VerifyResponse};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            http::serve(listener, &config, async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn post_grid(server: &TestServer, path: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(server.url(path))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_valid_square_over_http() {
    let server = TestServer::start(AppConfig::default()).await;

    let response = post_grid(
        &server,
        "/verificar",
        json!({"grid": [[8, 1, 6], [3, 5, 7], [4, 9, 2]]}),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body: VerifyResponse = response.json().await.unwrap();
    assert!(body.completo);
    assert!(body.es_valido);
    assert_eq!(body.mensaje, "¡Es un cuadrado mágico correcto! Suma: 15");
    assert_eq!(body.detalles.len(), 8);
    assert!(body.detalles.iter().all(|d| d.correcto && d.suma == 15));

    let labels: Vec<&str> = body.detalles.iter().map(|d| d.tipo.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Fila 1",
            "Fila 2",
            "Fila 3",
            "Columna 1",
            "Columna 2",
            "Columna 3",
            "Diagonal principal",
            "Diagonal secundaria",
        ]
    );
}

#[tokio::test]
async fn test_incomplete_grid_over_http() {
    let server = TestServer::start(AppConfig::default()).await;

    let response = post_grid(
        &server,
        "/verificar",
        json!({"grid": [[8, 1, 6], [3, null, 7], [4, 9, 2]]}),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "completo": false,
            "es_valido": false,
            "mensaje": "Por favor, completá todas las celdas.",
            "detalles": []
        })
    );
}

#[tokio::test]
async fn test_invalid_square_reports_expected_sum() {
    let server = TestServer::start(AppConfig::default()).await;

    let response = post_grid(&server, "/api/verify", json!({"grid": [[3, 3], [3, 3]]})).await;
    let body: VerifyResponse = response.json().await.unwrap();

    assert!(body.completo);
    assert!(!body.es_valido);
    assert_eq!(body.mensaje, "No es un cuadrado mágico. Suma esperada: 5");
    assert!(body.detalles.iter().all(|d| d.suma == 6 && !d.correcto));
}

#[tokio::test]
async fn test_english_locale_and_values() {
    let mut config = AppConfig::default();
    config.messages.locale = Locale::En;
    config.validation.include_values = true;
    let server = TestServer::start(config).await;

    let response = post_grid(
        &server,
        "/verificar",
        json!({"grid": [[2, 7, 6], [9, 5, 1], [4, 3, 8]]}),
    )
    .await;
    let body: VerifyResponse = response.json().await.unwrap();

    assert!(body.es_valido);
    assert_eq!(body.detalles[0].tipo, "Row 1");
    assert_eq!(body.detalles[0].valores.as_deref(), Some("2 + 7 + 6"));
    assert_eq!(body.detalles[7].tipo, "Anti-diagonal");
}

#[tokio::test]
async fn test_non_square_grid_is_rejected() {
    let server = TestServer::start(AppConfig::default()).await;

    let response = post_grid(&server, "/verificar", json!({"grid": [[1, 2, 3], [4, 5, 6]]})).await;
    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("not square"));
    assert!(body["suggestion"].is_string());
}

#[tokio::test]
async fn test_oversized_grid_is_rejected() {
    let mut config = AppConfig::default();
    config.validation.max_grid_size = 3;
    let server = TestServer::start(config).await;

    let response = post_grid(&server, "/verificar", json!({"grid": vec![vec![1; 4]; 4]})).await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let server = TestServer::start(AppConfig::default()).await;

    let response = post_grid(&server, "/verificar", json!({"grid": [[1.5]]})).await;
    assert_eq!(response.status(), 400);

    let response = reqwest::Client::new()
        .post(server.url("/verificar"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_health_and_index() {
    let server = TestServer::start(AppConfig::default()).await;

    let health: Value = reqwest::get(server.url("/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "magic-square");
    assert!(health["timestamp"].is_string());
    assert_eq!(health.as_object().unwrap().len(), 4);
    assert!(health.get("uptime_seconds").is_none());

    let index = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(index.status(), 200);
    assert!(index
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(index.text().await.unwrap().contains("/verificar"));

    let missing = reqwest::get(server.url("/api/nope")).await.unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn test_bind_on_busy_port_is_a_critical_server_error() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap().to_string();

    let err = http::bind(&addr).await.unwrap_err();
    assert!(matches!(err, MagicSquareError::ServerError { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert!(err.to_string().contains(&addr));
}

#[tokio::test]
async fn test_default_config_accepts_thirteen_by_thirteen() {
    let server = TestServer::start(AppConfig::default()).await;

    // 13x13 全 85：每條線總和皆為 1105
    let response = post_grid(&server, "/verificar", json!({"grid": vec![vec![85; 13]; 13]})).await;
    assert_eq!(response.status(), 200);

    let body: VerifyResponse = response.json().await.unwrap();
    assert!(body.es_valido);
    assert_eq!(body.mensaje, "¡Es un cuadrado mágico correcto! Suma: 1105");
}
