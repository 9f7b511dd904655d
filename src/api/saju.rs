use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::{required_text, success, ApiError, ApiSuccess};
use crate::domain::fortune::{analyze_name, compose_basic_fortune, NameAnalysis};
use crate::domain::saju::{build_chart, SajuChart};
use crate::provider::build_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullChartRequest {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub name: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullChartData {
    pub saju_data: SajuChart,
    pub fortune: String,
    pub name: String,
    pub gender: String,
    pub birth_date: BirthDate,
}

pub async fn full_chart(
    State(state): State<AppState>,
    Json(req): Json<FullChartRequest>,
) -> Result<Json<ApiSuccess<FullChartData>>, ApiError> {
    let (Some(year), Some(month), Some(day)) = (req.year, req.month, req.day) else {
        return Err(ApiError::Validation("필수 정보가 누락되었습니다."));
    };
    let (Some(name), Some(gender)) = (required_text(&req.name), required_text(&req.gender))
    else {
        return Err(ApiError::Validation("필수 정보가 누락되었습니다."));
    };

    let hour = req.hour.unwrap_or(12);
    let minute = req.minute.unwrap_or(0);

    let chart = build_chart(year, month, day, hour);
    tracing::info!(name, year, month, day, "사주 계산");

    // 외부 해석이 어떤 이유로든 실패하면 로컬 해석으로 대체한다.
    // 호출자 입장에서는 두 경우가 구분되지 않는다.
    let fortune = match state.provider.generate(&build_prompt(&chart, name, gender)).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "AI 호출 실패, 기본 해석으로 대체");
            compose_basic_fortune(&chart, name, gender)
        }
    };

    Ok(success(FullChartData {
        saju_data: chart,
        fortune,
        name: name.to_owned(),
        gender: gender.to_owned(),
        birth_date: BirthDate {
            year,
            month,
            day,
            hour,
            minute,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
}

pub async fn name_only(
    Json(req): Json<NameRequest>,
) -> Result<Json<ApiSuccess<NameAnalysis>>, ApiError> {
    let (Some(name), Some(gender)) = (required_text(&req.name), required_text(&req.gender))
    else {
        return Err(ApiError::Validation("이름과 성별을 입력해주세요."));
    };

    Ok(success(analyze_name(name, gender)))
}
