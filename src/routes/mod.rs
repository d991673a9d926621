//! API routes

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::{self, Exchange, ReplyResult};

const ABOUT_INFO: &str = "Это мой первый проект на GitHub!";

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct AboutResponse {
    info: &'static str,
}

#[derive(Debug, Serialize)]
struct ContactResponse {
    email: String,
    phone: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Exchange>,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello, world!",
    })
}

async fn about() -> Json<AboutResponse> {
    Json(AboutResponse { info: ABOUT_INFO })
}

async fn contact(State(config): State<Config>) -> Json<ContactResponse> {
    Json(ContactResponse {
        email: config.contact_email,
        phone: config.contact_phone,
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat(Json(request): Json<ChatRequest>) -> Json<ReplyResult> {
    Json(core::resolve(&request.message, &request.history))
}

pub fn router() -> Router<Config> {
    Router::new()
        .route("/", get(root))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/health", get(health))
        .route("/chat", post(chat))
}
