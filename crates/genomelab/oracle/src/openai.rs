//! OpenAI-compatible chat-completions adapter.
//!
//! Population generation asks the model for a JSON array of design specs;
//! scoring asks for a JSON array of score objects keyed by candidate id.
//! Overall fitness is always computed locally from the configured weights so
//! the aggregation stays under our control.

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::prompts::DesignPromptBuilder;
use crate::traits::DesignOracle;
use async_trait::async_trait;
use genomelab_types::{
    CandidateId, DesignCandidate, DesignSpec, FitnessWeights, ResearchConfig, ScoreCard,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Value,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Shape the model must return for each generated candidate.
#[derive(Debug, Deserialize)]
struct GeneratedCandidate {
    name: String,
    #[serde(default)]
    summary: String,
    spec: DesignSpec,
}

/// Shape the model must return for each scored candidate.
#[derive(Debug, Deserialize)]
struct ScoredEntry {
    id: String,
    usability: f64,
    accessibility: f64,
    visual_clarity: f64,
    implementation_complexity: f64,
    #[serde(default)]
    rationale: Option<String>,
}

/// Send one chat-completions request and return the assistant text.
pub(crate) async fn chat_complete(
    client: &Client,
    config: &OracleConfig,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, OracleError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or_else(|| OracleError::NotConfigured("openai backend requires api_key".to_string()))?;
    let url = resolve_chat_endpoint(config.endpoint.as_deref());

    let mut messages = Vec::new();
    if !system_prompt.trim().is_empty() {
        messages.push(json!({ "role": "system", "content": system_prompt }));
    }
    messages.push(json!({ "role": "user", "content": user_prompt }));

    let mut payload = json!({
        "model": config.model,
        "messages": messages,
    });
    if let Some(temperature) = config.temperature {
        payload["temperature"] = json!(temperature);
    }
    if let Some(max_tokens) = config.max_tokens {
        payload["max_tokens"] = json!(max_tokens);
    }

    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| OracleError::Transport(format!("openai request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(OracleError::Backend(format!(
            "openai error {}: {}",
            status,
            truncate(&body, 320)
        )));
    }

    let body: ChatResponse = response
        .json()
        .await
        .map_err(|e| OracleError::InvalidResponse(format!("invalid openai response: {}", e)))?;

    let choice = body
        .choices
        .first()
        .ok_or_else(|| OracleError::InvalidResponse("response did not include choices".to_string()))?;

    Ok(extract_text(&choice.message.content))
}

pub(crate) fn build_http_client() -> Result<Client, OracleError> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| OracleError::Transport(format!("failed to build HTTP client: {}", e)))
}

/// Design oracle backed by an OpenAI-compatible chat-completions API.
#[derive(Debug)]
pub struct OpenAiDesignOracle {
    client: Client,
    config: OracleConfig,
}

impl OpenAiDesignOracle {
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        if config.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(OracleError::NotConfigured(
                "openai backend requires api_key".to_string(),
            ));
        }
        Ok(Self {
            client: build_http_client()?,
            config,
        })
    }
}

#[async_trait]
impl DesignOracle for OpenAiDesignOracle {
    async fn generate_initial_population(
        &self,
        config: &ResearchConfig,
        generation_index: usize,
        population_size: usize,
    ) -> Result<Vec<DesignCandidate>, OracleError> {
        let system = DesignPromptBuilder::population_system_prompt();
        let user = DesignPromptBuilder::build_population_prompt(config, population_size);
        let text = chat_complete(&self.client, &self.config, &system, &user).await?;
        parse_population(&text, generation_index, population_size)
    }

    async fn score_candidates(
        &self,
        candidates: &mut [DesignCandidate],
        config: &ResearchConfig,
    ) -> Result<(), OracleError> {
        if candidates.is_empty() {
            return Ok(());
        }
        let system = DesignPromptBuilder::scoring_system_prompt();
        let user = DesignPromptBuilder::build_scoring_prompt(candidates, config);
        let text = chat_complete(&self.client, &self.config, &system, &user).await?;
        apply_scores(&text, candidates, &config.weights)
    }
}

/// Parse the model's population JSON into unscored candidates.
pub(crate) fn parse_population(
    text: &str,
    generation_index: usize,
    population_size: usize,
) -> Result<Vec<DesignCandidate>, OracleError> {
    let payload = strip_code_fence(text);
    let generated: Vec<GeneratedCandidate> = serde_json::from_str(payload)
        .map_err(|e| OracleError::InvalidResponse(format!("invalid population JSON: {}", e)))?;

    if generated.len() < population_size {
        return Err(OracleError::InvalidResponse(format!(
            "expected {} candidates, got {}",
            population_size,
            generated.len()
        )));
    }

    Ok(generated
        .into_iter()
        .take(population_size)
        .enumerate()
        .map(|(index, candidate)| {
            DesignCandidate::new(
                CandidateId::new(generation_index, index),
                candidate.name,
                candidate.summary,
                candidate.spec,
            )
        })
        .collect())
}

/// Parse the model's scoring JSON and annotate every candidate in place.
pub(crate) fn apply_scores(
    text: &str,
    candidates: &mut [DesignCandidate],
    weights: &FitnessWeights,
) -> Result<(), OracleError> {
    let payload = strip_code_fence(text);
    let entries: Vec<ScoredEntry> = serde_json::from_str(payload)
        .map_err(|e| OracleError::InvalidResponse(format!("invalid scoring JSON: {}", e)))?;

    let by_id: HashMap<&str, &ScoredEntry> =
        entries.iter().map(|entry| (entry.id.as_str(), entry)).collect();

    for candidate in candidates.iter_mut() {
        let entry = by_id.get(candidate.id.as_str()).ok_or_else(|| {
            OracleError::InvalidResponse(format!(
                "scoring response missing candidate {}",
                candidate.id
            ))
        })?;
        let overall = weights.overall(
            entry.usability,
            entry.accessibility,
            entry.visual_clarity,
            entry.implementation_complexity,
        );
        candidate.scores = Some(ScoreCard {
            usability: entry.usability,
            accessibility: entry.accessibility,
            visual_clarity: entry.visual_clarity,
            implementation_complexity: entry.implementation_complexity,
            overall_fitness: overall,
            rationale: entry.rationale.clone(),
        });
    }

    Ok(())
}

fn resolve_chat_endpoint(endpoint: Option<&str>) -> String {
    let endpoint = endpoint.unwrap_or(DEFAULT_OPENAI_ENDPOINT);
    if endpoint.contains("/chat/completions") {
        endpoint.to_string()
    } else {
        format!("{}/chat/completions", endpoint.trim_end_matches('/'))
    }
}

fn extract_text(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

/// Tolerate a fenced code block wrapped around the JSON payload.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let inner = trimmed.trim_start_matches('`');
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.trim_end_matches('`');
    inner.trim()
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", truncated)
    } else {
        truncated
    }
}
