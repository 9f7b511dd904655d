use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::config::Config;
use crate::domain::saju::SajuChart;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider is not configured")]
    Disabled,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(StatusCode),
    #[error("malformed provider response")]
    MalformedResponse,
}

/// 외부 텍스트 생성 서비스 클라이언트. 타임아웃은 클라이언트에 박혀 있어
/// 느린 제공자가 응답을 무한정 붙잡을 수 없다.
pub struct FortuneProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl FortuneProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    pub fn from_config(conf: &Config) -> anyhow::Result<Self> {
        Self::new(
            conf.provider_url.clone(),
            conf.provider_api_key.clone(),
            Duration::from_secs(conf.provider_timeout_secs),
        )
    }

    /// 요청당 정확히 1회 호출, 재시도 없음. 실패는 전부 `ProviderError`로
    /// 돌아오고, 호출자는 이를 로컬 해석으로 대체해야 한다.
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::Disabled)?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&json!({
                "inputs": prompt,
                "parameters": { "max_length": 500, "temperature": 0.7 }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body: serde_json::Value = response.json().await?;
        body.get(0)
            .and_then(|entry| entry.get("generated_text"))
            .and_then(|text| text.as_str())
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
            .ok_or(ProviderError::MalformedResponse)
    }
}

pub fn build_prompt(chart: &SajuChart, name: &str, gender: &str) -> String {
    format!(
        "\n사주 정보:\n\
         - 년주: {ygan}{yji} ({zodiac})\n\
         - 월주: {mgan}{mji}\n\
         - 일주: {dgan}{dji}\n\
         - 시주: {tgan}{tji}\n\
         - 이름: {name}\n\
         - 성별: {gender}\n\n\
         위 사주 정보를 바탕으로 한국 전통 사주 해석을 해주세요.\n\
         성격, 운세, 직업운, 연애운, 건강운, 재물운을 포함해서 상세히 분석해주세요.\n\
         긍정적이고 희망적인 메시지로 작성해주세요.\n",
        ygan = chart.year.gan,
        yji = chart.year.ji,
        zodiac = chart.year.zodiac,
        mgan = chart.month.gan,
        mji = chart.month.ji,
        dgan = chart.day.gan,
        dji = chart.day.ji,
        tgan = chart.time.gan,
        tji = chart.time.ji,
        name = name,
        gender = gender,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::saju::build_chart;

    #[test]
    fn test_build_prompt_embeds_chart_fields() {
        let chart = build_chart(2024, 6, 15, 12);
        let prompt = build_prompt(&chart, "철수", "male");

        assert!(prompt.contains("년주: 갑신 (원숭이)"));
        assert!(prompt.contains("일주: 신축"));
        assert!(prompt.contains("이름: 철수"));
        assert!(prompt.contains("한국 전통 사주 해석"));
    }

    #[tokio::test]
    async fn test_generate_without_api_key_is_disabled() {
        let provider =
            FortuneProvider::new("http://127.0.0.1:9", None, Duration::from_secs(1)).unwrap();
        let err = provider.generate("프롬프트").await.unwrap_err();
        assert!(matches!(err, ProviderError::Disabled));
    }

    #[tokio::test]
    async fn test_generate_against_unreachable_endpoint_fails() {
        let provider = FortuneProvider::new(
            "http://127.0.0.1:9",
            Some("test-key".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        let err = provider.generate("프롬프트").await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }
}
