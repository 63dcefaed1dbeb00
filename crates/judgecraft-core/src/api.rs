use std::sync::Arc;

use judgecraft_types::{EvaluationRequest, EvaluationResult};

use crate::client::{ChatCapability, ChatCompletions, HttpChatClient, Message};
use crate::config::ApiConfig;
use crate::error::JudgeError;
use crate::heuristic::evaluate_heuristically;

const JUDGE_TEMPERATURE: f32 = 0.3;
const JUDGE_MAX_TOKENS: u32 = 1024;

/// Direct-API tier: one chat completion against an OpenAI-compatible
/// endpoint, parsed into the shared verdict shape.
///
/// Missing credential or missing transport degrades to the heuristic tier.
/// A credentialed call that breaks, or a reply that fails to parse, is a
/// hard failure; masking it behind heuristics would hide integration bugs.
pub async fn evaluate_via_api(
    chat: &ChatCapability,
    config: &ApiConfig,
    request: &EvaluationRequest,
) -> EvaluationResult {
    match try_api(chat, config, request).await {
        Ok(result) => result,
        Err(JudgeError::CredentialAbsent) | Err(JudgeError::CapabilityAbsent(_)) => {
            evaluate_heuristically(&request.content, &request.criteria)
        }
        Err(err) => EvaluationResult::failure(err.to_string()),
    }
}

async fn try_api(
    chat: &ChatCapability,
    config: &ApiConfig,
    request: &EvaluationRequest,
) -> Result<EvaluationResult, JudgeError> {
    let api_key = config.api_key.as_deref().ok_or(JudgeError::CredentialAbsent)?;

    let client: Arc<dyn ChatCompletions> = match chat {
        ChatCapability::Absent => return Err(JudgeError::CapabilityAbsent("chat client")),
        ChatCapability::Custom(client) => client.clone(),
        ChatCapability::Default => Arc::new(HttpChatClient::new(config.base_url.as_str(), api_key)),
    };

    let prompt = build_prompt(&request.content, request.context_or_default());
    let messages = vec![Message::user(prompt)];
    let reply = client
        .complete(&config.model, &messages, JUDGE_TEMPERATURE, JUDGE_MAX_TOKENS)
        .await
        .map_err(|err| JudgeError::TierFailure(err.to_string()))?;

    let mut result: EvaluationResult = serde_json::from_str(extract_json(&reply))?;
    result.success = true;
    Ok(result)
}

fn build_prompt(content: &str, context: &str) -> String {
    format!(
        r#"You are an expert code quality judge for an AI-powered coding assistant.

Evaluate the code/output below based on these criteria:
1. **Code Quality** (1-10): Structure, readability, naming conventions, best practices
2. **Security** (1-10): Input validation, error handling, no vulnerabilities
3. **Performance** (1-10): Efficiency, complexity, optimization
4. **Correctness** (1-10): Logic accuracy, edge cases, error handling
5. **Maintainability** (1-10): Documentation, modularity, testability

Context: {context}

Code/Output to Evaluate:
```
{content}
```

Respond ONLY with valid JSON (no markdown):
{{"overall_score": <1-10>, "criteria_scores": {{"code_quality": <1-10>, "security": <1-10>, "performance": <1-10>, "correctness": <1-10>, "maintainability": <1-10>}}, "feedback": ["<feedback1>", "<feedback2>"], "recommendations": ["<rec1>", "<rec2>"]}}"#
    )
}

/// Models are told to reply with bare JSON, but some wrap it in a fenced
/// block anyway. Take the segment after the first fence, minus an optional
/// `json` language tag.
fn extract_json(reply: &str) -> &str {
    let trimmed = reply.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let segment = rest.split("```").next().unwrap_or(rest);
            segment.strip_prefix("json").unwrap_or(segment).trim()
        }
        None => trimmed,
    }
}
