use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;

pub mod luck;
pub mod saju;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/saju", post(saju::full_chart))
        .route("/api/name-saju", post(saju::name_only))
        .route("/api/daily-fortune", post(luck::daily_fortune))
        .route("/api/weekly-fortune", post(luck::weekly_fortune))
        .route("/api/zodiac-daily", get(luck::zodiac_daily))
        .route(
            "/api/health",
            get(|| async {
                Json(serde_json::json!({ "status": "OK", "message": "서버가 정상 작동 중입니다." }))
            }),
        )
        .with_state(state)
}

/// 성공 응답은 전부 `{"success": true, "data": ...}` 모양이다.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

pub fn success<T: Serialize>(data: T) -> Json<ApiSuccess<T>> {
    Json(ApiSuccess {
        success: true,
        data,
    })
}

/// 실패 응답은 `{"error": ...}` 하나뿐이고, 내부 정보는 담지 않는다.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// 필수 텍스트 필드: 없거나 빈 문자열이면 누락으로 본다.
pub(crate) fn required_text(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
