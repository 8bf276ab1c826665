//! Notification request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{
    ListNotificationsParams, NotificationCountDto, NotificationDto, SendNotificationRequest,
};
use crate::application::{NotificationService, SendNotificationInput};
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};

/// Notification handler state
#[derive(Clone)]
pub struct NotificationHandlerState {
    pub service: Arc<NotificationService>,
}

fn error_response<T>(e: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &e {
        DomainError::InvalidParams(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

fn parse_uuid<T>(
    value: &str,
    field: &'static str,
) -> Result<Uuid, (StatusCode, Json<ApiResponse<T>>)> {
    Uuid::parse_str(value).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("{} must be a valid UUID", field))),
        )
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    tag = "Notifications",
    request_body = SendNotificationRequest,
    responses(
        (status = 201, description = "Notification sent", body = ApiResponse<NotificationDto>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn send_notification(
    State(state): State<NotificationHandlerState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<NotificationDto>>),
    (StatusCode, Json<ApiResponse<NotificationDto>>),
> {
    let notification = state
        .service
        .send(SendNotificationInput {
            recipient_id: request.recipient_id,
            content: request.content,
            category: request.category,
        })
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(NotificationDto::from(&notification))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/{id}",
    tag = "Notifications",
    params(("id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 200, description = "Notification details", body = ApiResponse<NotificationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_notification(
    State(state): State<NotificationHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NotificationDto>>, (StatusCode, Json<ApiResponse<NotificationDto>>)> {
    let id = parse_uuid(&id, "Notification ID")?;
    let notification = state.service.get(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(NotificationDto::from(
        &notification,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/cancel",
    tag = "Notifications",
    params(("id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 200, description = "Cancelled", body = ApiResponse<NotificationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn cancel_notification(
    State(state): State<NotificationHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NotificationDto>>, (StatusCode, Json<ApiResponse<NotificationDto>>)> {
    let id = parse_uuid(&id, "Notification ID")?;
    let notification = state.service.cancel(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(NotificationDto::from(
        &notification,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    tag = "Notifications",
    params(("id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 200, description = "Marked read", body = ApiResponse<NotificationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn read_notification(
    State(state): State<NotificationHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NotificationDto>>, (StatusCode, Json<ApiResponse<NotificationDto>>)> {
    let id = parse_uuid(&id, "Notification ID")?;
    let notification = state.service.read(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(NotificationDto::from(
        &notification,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/unread",
    tag = "Notifications",
    params(("id" = String, Path, description = "Notification UUID")),
    responses(
        (status = 200, description = "Marked unread", body = ApiResponse<NotificationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn unread_notification(
    State(state): State<NotificationHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NotificationDto>>, (StatusCode, Json<ApiResponse<NotificationDto>>)> {
    let id = parse_uuid(&id, "Notification ID")?;
    let notification = state.service.unread(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(NotificationDto::from(
        &notification,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/from/{recipient_id}",
    tag = "Notifications",
    params(
        ("recipient_id" = String, Path, description = "Recipient UUID"),
        ListNotificationsParams
    ),
    responses(
        (status = 200, description = "Recipient's notifications, newest first", body = PaginatedResponse<NotificationDto>)
    )
)]
pub async fn list_recipient_notifications(
    State(state): State<NotificationHandlerState>,
    Path(recipient_id): Path<String>,
    Query(params): Query<ListNotificationsParams>,
) -> Result<Json<PaginatedResponse<NotificationDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let recipient_id = parse_uuid(&recipient_id, "Recipient ID")?;

    let page = params.page.max(1);
    let limit = params.page_size.clamp(1, 100);

    let (items, total) = state
        .service
        .list_for_recipient(recipient_id, page, limit)
        .await
        .map_err(error_response)?;

    let items: Vec<NotificationDto> = items.iter().map(NotificationDto::from).collect();
    Ok(Json(PaginatedResponse::new(items, total, page, limit)))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/from/{recipient_id}/count",
    tag = "Notifications",
    params(("recipient_id" = String, Path, description = "Recipient UUID")),
    responses(
        (status = 200, description = "Recipient's notification count", body = ApiResponse<NotificationCountDto>)
    )
)]
pub async fn count_recipient_notifications(
    State(state): State<NotificationHandlerState>,
    Path(recipient_id): Path<String>,
) -> Result<
    Json<ApiResponse<NotificationCountDto>>,
    (StatusCode, Json<ApiResponse<NotificationCountDto>>),
> {
    let recipient_id = parse_uuid(&recipient_id, "Recipient ID")?;

    let count = state
        .service
        .count_for_recipient(recipient_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(NotificationCountDto {
        recipient_id: recipient_id.to_string(),
        count,
    })))
}

// ── Tests ──────────────────────────────────────────────────────
