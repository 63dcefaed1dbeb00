use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use judgecraft_types::{CriteriaScores, EvaluationResult};

/// What a capability probe can report. `Unconfigured` is the only state that
/// lets the judge degrade to a weaker tier; `Broken` surfaces to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unconfigured,
    Broken(String),
}

/// One sample handed to a judge framework.
#[derive(Debug, Clone, Serialize)]
pub struct JudgeSample {
    pub context: String,
    pub content: String,
}

/// A framework's verdict for one sample: a loose bag of named fields. The
/// adapter in [`result_from_output`] turns it into the shared verdict shape.
#[derive(Debug, Clone, Default)]
pub struct JudgeOutput {
    pub field_values: Map<String, Value>,
}

impl JudgeOutput {
    pub fn new(field_values: Map<String, Value>) -> Self {
        Self { field_values }
    }
}

/// An external judging framework, consumed as an opaque capability.
#[async_trait]
pub trait JudgeFramework: Send + Sync {
    fn availability(&self) -> Availability;

    async fn judge(&self, dataset: &[JudgeSample]) -> Result<Vec<JudgeOutput>>;
}

/// Stand-in provider used when no judge framework is wired in.
pub struct NoFramework;

#[async_trait]
impl JudgeFramework for NoFramework {
    fn availability(&self) -> Availability {
        Availability::Unconfigured
    }

    async fn judge(&self, _dataset: &[JudgeSample]) -> Result<Vec<JudgeOutput>> {
        anyhow::bail!("no judge framework configured")
    }
}

/// Map a framework output onto the shared verdict shape, applying a default
/// per missing field rather than failing on partial outputs.
pub fn result_from_output(output: &JudgeOutput) -> EvaluationResult {
    let fields = &output.field_values;

    let overall_score = fields
        .get("overall_score")
        .and_then(Value::as_u64)
        .map(|score| score as u8)
        .unwrap_or(7);
    let criteria_scores = fields
        .get("criteria_scores")
        .and_then(|value| serde_json::from_value::<CriteriaScores>(value.clone()).ok())
        .unwrap_or_default();
    let explanation = fields
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    EvaluationResult {
        success: true,
        overall_score: Some(overall_score),
        criteria_scores,
        feedback: string_list(fields.get("feedback")),
        recommendations: string_list(fields.get("recommendations")),
        explanation,
        error: None,
        note: None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output_from(value: Value) -> JudgeOutput {
        JudgeOutput::new(value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn empty_output_gets_every_default() {
        let result = result_from_output(&JudgeOutput::default());
        assert!(result.success);
        assert_eq!(result.overall_score, Some(7));
        assert!(result.criteria_scores.is_empty());
        assert!(result.feedback.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn populated_fields_carry_through() {
        let output = output_from(json!({
            "overall_score": 9,
            "criteria_scores": {
                "code_quality": 9, "security": 8, "performance": 9,
                "correctness": 10, "maintainability": 9
            },
            "feedback": ["clean separation of concerns"],
            "recommendations": ["add a regression test"],
            "explanation": "well structured"
        }));
        let result = result_from_output(&output);
        assert_eq!(result.overall_score, Some(9));
        assert!(result.criteria_scores.is_complete());
        assert_eq!(result.feedback, vec!["clean separation of concerns"]);
        assert_eq!(result.recommendations, vec!["add a regression test"]);
        assert_eq!(result.explanation, "well structured");
    }

    #[test]
    fn malformed_field_falls_back_to_its_default() {
        let output = output_from(json!({
            "overall_score": "nine",
            "criteria_scores": ["not", "a", "map"],
            "feedback": "not a list"
        }));
        let result = result_from_output(&output);
        assert_eq!(result.overall_score, Some(7));
        assert!(result.criteria_scores.is_empty());
        assert!(result.feedback.is_empty());
    }
}
