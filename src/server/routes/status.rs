//! Status, metrics, alert and incident endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use tracing::{debug, info};

/// Configure status routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/status", web::get().to(system_status))
        .route("/metrics", web::get().to(metrics))
        .service(
            web::scope("/alerts")
                .route("", web::get().to(list_alerts))
                .route("/{id}/acknowledge", web::post().to(acknowledge_alert))
                .route("/{id}/resolve", web::post().to(resolve_alert)),
        )
        .route("/incidents", web::get().to(list_incidents));
}

/// Liveness of the daemon itself
#[derive(Debug, Serialize)]
struct DaemonHealth {
    status: Cow<'static, str>,
    version: Cow<'static, str>,
    uptime_seconds: u64,
    monitoring_active: bool,
    timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    /// Only unresolved alerts
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncidentQuery {
    /// Only open incidents
    #[serde(default)]
    pub open: bool,
}

/// Basic health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health = DaemonHealth {
        status: Cow::Borrowed("healthy"),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        uptime_seconds: state.session.uptime().as_secs(),
        monitoring_active: state.session.is_active(),
        timestamp: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health)))
}

/// Current status of every configured target
pub async fn system_status(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.session.status())))
}

/// Latest published metric samples
pub async fn metrics(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let samples = state.session.metrics().samples();
    Ok(HttpResponse::Ok().json(ApiResponse::success(samples)))
}

pub async fn list_alerts(
    state: web::Data<AppState>,
    query: web::Query<AlertQuery>,
) -> ActixResult<HttpResponse> {
    let alerts = if query.active {
        state.session.alerts().active_alerts()
    } else {
        state.session.alerts().alerts()
    };

    let meta = serde_json::json!({ "total": alerts.len() });
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(alerts, meta)))
}

pub async fn acknowledge_alert(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let alert = state.session.acknowledge_alert(&id).await?;
    info!(alert_id = %id, "Alert acknowledged");
    Ok(HttpResponse::Ok().json(ApiResponse::success(alert)))
}

pub async fn resolve_alert(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let alert = state.session.resolve_alert(&id).await?;
    info!(alert_id = %id, "Alert resolved");
    Ok(HttpResponse::Ok().json(ApiResponse::success(alert)))
}

pub async fn list_incidents(
    state: web::Data<AppState>,
    query: web::Query<IncidentQuery>,
) -> ActixResult<HttpResponse> {
    let incidents = if query.open {
        state.session.incidents().open_incidents()
    } else {
        state.session.incidents().incidents()
    };

    let meta = serde_json::json!({ "total": incidents.len() });
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(incidents, meta)))
}
