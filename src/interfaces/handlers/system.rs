use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, errors::AppError, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    start_at: String,
    content_store: &'static str,
    version: &'static str,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let content_store = if !state.config.store_configured() {
        "Not configured"
    } else {
        match state.store.ping().await {
            Ok(()) => "OK",
            Err(e) => {
                tracing::warn!(error = %e, "Content store health check failed");
                "Unavailable"
            }
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        content_store,
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn robots_txt(state: web::Data<AppState>) -> impl Responder {
    let site = state.config.site_url.trim_end_matches('/');
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("User-agent: *\nAllow: /\nDisallow: /admin\n\nSitemap: {}/sitemap.xml\n", site))
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Page not found".to_string()))
}
