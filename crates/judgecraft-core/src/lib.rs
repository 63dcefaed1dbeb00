//! judgecraft-core: tiered code-quality judging for AI coding output.
//! Strongest reachable tier wins: framework judge → direct chat API → offline
//! heuristics. Every tier returns the same verdict shape.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod framework;
pub mod heuristic;
pub mod judge;

pub use api::evaluate_via_api;
pub use client::{ChatCapability, ChatCompletions, HttpChatClient, Message};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::JudgeError;
pub use framework::{
    result_from_output, Availability, JudgeFramework, JudgeOutput, JudgeSample, NoFramework,
};
pub use heuristic::{evaluate_heuristically, HEURISTIC_NOTE};
pub use judge::{Judge, JudgeBuilder};
pub use judgecraft_types::{
    Criterion, CriteriaScores, EvaluationRequest, EvaluationResult, DEFAULT_CONTEXT,
};
