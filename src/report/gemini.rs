//! Gemini `generateContent` client

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{AnalysisRequest, PerformanceReport};
use crate::config::AiConfig;
use crate::error::ReportError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Report fields as the model may return them
#[derive(Deserialize)]
struct RawReport {
    strengths: Option<Vec<String>>,
    weaknesses: Option<Vec<String>>,
    recommendation: Option<String>,
    encouragement: Option<String>,
}

fn report_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
            "recommendation": { "type": "STRING" },
            "encouragement": { "type": "STRING" }
        },
        "required": ["strengths", "weaknesses", "recommendation", "encouragement"]
    })
}

/// Parse and validate the model's JSON text
pub fn parse_report(text: &str) -> Result<PerformanceReport, ReportError> {
    let text = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    let raw: RawReport = serde_json::from_str(text)?;

    Ok(PerformanceReport {
        strengths: required_list(raw.strengths, "strengths")?,
        weaknesses: required_list(raw.weaknesses, "weaknesses")?,
        recommendation: required_text(raw.recommendation, "recommendation")?,
        encouragement: required_text(raw.encouragement, "encouragement")?,
    })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ReportError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ReportError::Schema(field))
}

fn required_list(value: Option<Vec<String>>, field: &'static str) -> Result<Vec<String>, ReportError> {
    let items: Vec<String> = value
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        Err(ReportError::Schema(field))
    } else {
        Ok(items)
    }
}

/// Sends one report request per finished run
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl AnalysisClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Request a report, surfacing every failure
    pub async fn try_analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<PerformanceReport, ReportError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ReportError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: report_schema(),
                temperature: 0.7,
            },
        };

        log::debug!("Requesting report from {}", self.config.model);
        let response: GenerateResponse = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .ok_or(ReportError::EmptyResponse)?;

        parse_report(&text)
    }

    /// Request a report; any failure yields the fallback
    pub async fn analyze(&self, request: &AnalysisRequest) -> PerformanceReport {
        match self.try_analyze(request).await {
            Ok(report) => {
                log::info!("Report received for {}", request.student_name);
                report
            }
            Err(e) => {
                log::warn!("Report unavailable, using fallback: {}", e);
                PerformanceReport::fallback()
            }
        }
    }
}
