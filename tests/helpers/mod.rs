//! Shared fixtures for the router integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use webpro::{
    AppState,
    config::{Config, EmailConfig, EmailProvider, ObservabilityConfig, ServerConfig, SiteConfig},
    content::Content,
};
use webpro_contact::{Command, Delivery, DeliveryError, DeliveryReceipt, OutboundEmail};

/// What the fake provider answers.
#[derive(Clone)]
pub enum Reply {
    Accept,
    Reject(Value),
    Fail(String),
}

/// Delivery double recording every email it is handed.
pub struct Recorder {
    pub sent: Mutex<Vec<OutboundEmail>>,
    reply: Reply,
}

impl Recorder {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            reply,
        })
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delivery for Recorder {
    async fn send(&self, email: OutboundEmail) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent.lock().unwrap().push(email);

        match &self.reply {
            Reply::Accept => Ok(DeliveryReceipt {
                id: "re_123".to_owned(),
                payload: json!({ "id": "re_123" }),
            }),
            Reply::Reject(payload) => Err(DeliveryError::Provider(payload.clone())),
            Reply::Fail(message) => Err(DeliveryError::Transport(anyhow::anyhow!(message.clone()))),
        }
    }
}

pub fn config(environment: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            base_url: "https://webpro.test".to_string(),
            environment: environment.to_string(),
        },
        email: EmailConfig {
            provider: EmailProvider::Log,
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn app_with(delivery: Arc<dyn Delivery>, environment: &str) -> Router {
    let config = config(environment);
    let mailing = webpro::email::mailing(&config.email);

    webpro::cli::app(AppState {
        config,
        contact_command: Command::new(delivery, mailing),
        content: Arc::new(Content::load().unwrap()),
    })
}

pub fn app(delivery: Arc<dyn Delivery>) -> Router {
    app_with(delivery, "development")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
