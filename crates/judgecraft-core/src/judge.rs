use std::sync::Arc;

use judgecraft_types::{EvaluationRequest, EvaluationResult};

use crate::api::evaluate_via_api;
use crate::client::{ChatCapability, ChatCompletions};
use crate::config::ApiConfig;
use crate::error::JudgeError;
use crate::framework::{result_from_output, Availability, JudgeFramework, JudgeSample, NoFramework};

pub struct JudgeBuilder {
	framework: Option<Arc<dyn JudgeFramework>>,
	chat: ChatCapability,
	config: Option<ApiConfig>,
}

impl JudgeBuilder {
	pub fn new() -> Self {
		Self {
			framework: None,
			chat: ChatCapability::Default,
			config: None,
		}
	}

	pub fn framework(mut self, framework: Arc<dyn JudgeFramework>) -> Self {
		self.framework = Some(framework);
		self
	}

	pub fn chat_client(mut self, client: Arc<dyn ChatCompletions>) -> Self {
		self.chat = ChatCapability::Custom(client);
		self
	}

	/// Declare that no chat transport exists; the API tier will degrade to
	/// heuristics instead of building an HTTP client.
	pub fn without_chat_client(mut self) -> Self {
		self.chat = ChatCapability::Absent;
		self
	}

	pub fn config(mut self, config: ApiConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn build(self) -> Judge {
		Judge {
			framework: self.framework.unwrap_or_else(|| Arc::new(NoFramework)),
			chat: self.chat,
			config: self.config.unwrap_or_else(ApiConfig::from_env),
		}
	}
}

impl Default for JudgeBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Entry point for the tiered pipeline: framework judge, then direct chat
/// API, then offline heuristics. Configuration is resolved once at build
/// time and threaded down; no tier reads the environment itself.
pub struct Judge {
	framework: Arc<dyn JudgeFramework>,
	chat: ChatCapability,
	config: ApiConfig,
}

impl Judge {
	pub fn builder() -> JudgeBuilder {
		JudgeBuilder::new()
	}

	/// Evaluate through the strongest reachable tier. Never returns an error
	/// to the caller; failures come back as `success: false` verdicts.
	pub async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult {
		match self.try_framework(request).await {
			Ok(result) => result,
			Err(JudgeError::CapabilityAbsent(_)) => {
				evaluate_via_api(&self.chat, &self.config, request).await
			}
			// An available framework that broke is a hard failure. Degrading
			// here would mask real bugs in a configured integration.
			Err(err) => EvaluationResult::failure(err.to_string()),
		}
	}

	async fn try_framework(
		&self,
		request: &EvaluationRequest,
	) -> Result<EvaluationResult, JudgeError> {
		match self.framework.availability() {
			Availability::Unconfigured => {
				return Err(JudgeError::CapabilityAbsent("judge framework"))
			}
			Availability::Broken(message) => return Err(JudgeError::TierFailure(message)),
			Availability::Available => {}
		}

		let dataset = vec![JudgeSample {
			context: request.context_or_default().to_string(),
			content: request.content.clone(),
		}];
		let outputs = self
			.framework
			.judge(&dataset)
			.await
			.map_err(|err| JudgeError::TierFailure(err.to_string()))?;

		match outputs.first() {
			Some(output) => Ok(result_from_output(output)),
			None => Err(JudgeError::TierFailure("No output from judge".to_string())),
		}
	}
}
