use actix_web::{get, HttpResponse};

use crate::models::dto::response::MessageResponse;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hi there!"))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
