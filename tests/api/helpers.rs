use std::time::Duration;

use once_cell::sync::Lazy;
use solcat_companion::configuration::{get_config, Settings};
use solcat_companion::startup::Application;
use solcat_companion::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

pub const ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
pub const DASHBOARD_URL: &str = "https://www.solcat.work/dashboard";

pub struct TestApp {
    pub config: Settings,
    pub address: String,
    pub port: u16,
    /// Stands in for the hosted SOLCAT backend.
    pub backend: MockServer,
    pub api_client: reqwest::Client,
}

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ))
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink))
    }
});

pub async fn spawn_app() -> TestApp {
    spawn_app_with(MockServer::start().await).await
}

/// Mocks that must be in place before startup (the dashboard fetch) go on
/// `backend` before calling this.
pub async fn spawn_app_with(backend: MockServer) -> TestApp {
    Lazy::force(&TRACING);

    let config: Settings = {
        let mut c = get_config().expect("failed to get config");
        c.application.port = 0;
        c.api.base_url = backend.uri();
        c.api.dashboard_url = DASHBOARD_URL.to_string();
        c
    };

    let app = Application::build(config.clone())
        .await
        .expect("failed to build application");

    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(app.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        config,
        address,
        port,
        backend,
        api_client,
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn get_dashboard(&self) -> serde_json::Value {
        self.get("/dashboard").await.json().await.unwrap()
    }

    /// Polls `/dashboard` until the startup fetch has settled.
    pub async fn settled_dashboard(&self) -> serde_json::Value {
        for _ in 0..100 {
            let dashboard = self.get_dashboard().await;
            if dashboard["loading"] == false {
                return dashboard;
            }
            actix_rt::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("dashboard never finished loading");
    }

    pub async fn post_input(&self, address: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/popup/input", self.address))
            .json(&serde_json::json!({ "address": address }))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn post_check(&self) -> serde_json::Value {
        self.post_action("/popup/check").await
    }

    pub async fn post_report(&self) -> serde_json::Value {
        self.post_action("/popup/report").await
    }

    async fn post_action(&self, path: &str) -> serde_json::Value {
        let response = self
            .api_client
            .post(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("failed to execute request");
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.unwrap()
    }
}
