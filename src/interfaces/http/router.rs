//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::NotificationService;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};

use super::modules::{health, metrics, notifications};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Notifications
        notifications::send_notification,
        notifications::get_notification,
        notifications::cancel_notification,
        notifications::read_notification,
        notifications::unread_notification,
        notifications::list_recipient_notifications,
        notifications::count_recipient_notifications,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<notifications::NotificationDto>,
            // Notifications
            notifications::NotificationDto,
            notifications::SendNotificationRequest,
            notifications::NotificationCountDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Notifications", description = "Notification lifecycle: send, cancel, read state, per-recipient queries"),
    ),
    info(
        title = "Notification Service API",
        version = "1.0.0",
        description = "REST API for sending and managing recipient notifications",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<NotificationService>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let notification_state = notifications::NotificationHandlerState { service };
    let notification_routes = Router::new()
        .route("/", post(notifications::send_notification))
        .route("/{id}", get(notifications::get_notification))
        .route("/{id}/cancel", post(notifications::cancel_notification))
        .route("/{id}/read", post(notifications::read_notification))
        .route("/{id}/unread", post(notifications::unread_notification))
        .route(
            "/from/{recipient_id}",
            get(notifications::list_recipient_notifications),
        )
        .route(
            "/from/{recipient_id}/count",
            get(notifications::count_recipient_notifications),
        )
        .with_state(notification_state);

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + metrics
        .merge(health_routes)
        .merge(metrics_routes)
        // Notifications
        .nest("/api/v1/notifications", notification_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
