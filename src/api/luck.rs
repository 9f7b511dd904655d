use axum::Json;
use serde::Deserialize;

use crate::api::{required_text, success, ApiError, ApiSuccess};
use crate::domain::luck::{self, today_kst, DailyLuck, WeeklyLuck, ZodiacDailyLuck};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

pub async fn daily_fortune(
    Json(req): Json<LuckRequest>,
) -> Result<Json<ApiSuccess<DailyLuck>>, ApiError> {
    let (Some(name), Some(gender)) = (required_text(&req.name), required_text(&req.gender))
    else {
        return Err(ApiError::Validation("이름과 성별을 입력해주세요."));
    };

    Ok(success(luck::daily_luck(name, gender, req.birth_year, today_kst())))
}

pub async fn weekly_fortune(
    Json(req): Json<LuckRequest>,
) -> Result<Json<ApiSuccess<WeeklyLuck>>, ApiError> {
    let (Some(name), Some(_gender)) = (required_text(&req.name), required_text(&req.gender))
    else {
        return Err(ApiError::Validation("이름과 성별을 입력해주세요."));
    };

    Ok(success(luck::weekly_luck(name, req.birth_year, today_kst())))
}

pub async fn zodiac_daily() -> Json<ApiSuccess<Vec<ZodiacDailyLuck>>> {
    success(luck::zodiac_daily(today_kst()))
}
