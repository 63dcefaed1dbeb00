use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Substituted wherever a request carries no context of its own.
pub const DEFAULT_CONTEXT: &str = "Evaluate this code output from an AI coding assistant";

/// The five quality dimensions every verdict scores, each on a 1-10 scale.
/// Declaration order is the rubric order and the serialized key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
	CodeQuality,
	Security,
	Performance,
	Correctness,
	Maintainability,
}

impl Criterion {
	pub const ALL: [Criterion; 5] = [
		Criterion::CodeQuality,
		Criterion::Security,
		Criterion::Performance,
		Criterion::Correctness,
		Criterion::Maintainability,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Criterion::CodeQuality => "code_quality",
			Criterion::Security => "security",
			Criterion::Performance => "performance",
			Criterion::Correctness => "correctness",
			Criterion::Maintainability => "maintainability",
		}
	}
}

impl fmt::Display for Criterion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Scores keyed by criterion. A tier that computes scores itself fills in
/// all five keys; an adapter boundary may leave the map empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaScores(BTreeMap<Criterion, u8>);

impl CriteriaScores {
	pub fn insert(&mut self, criterion: Criterion, score: u8) {
		self.0.insert(criterion, score);
	}

	pub fn get(&self, criterion: Criterion) -> Option<u8> {
		self.0.get(&criterion).copied()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// True when every criterion in [`Criterion::ALL`] has a score.
	pub fn is_complete(&self) -> bool {
		Criterion::ALL.iter().all(|c| self.0.contains_key(c))
	}

	pub fn iter(&self) -> impl Iterator<Item = (Criterion, u8)> + '_ {
		self.0.iter().map(|(c, s)| (*c, *s))
	}

	pub fn mean(&self) -> Option<f64> {
		if self.0.is_empty() {
			return None;
		}
		let sum: u32 = self.0.values().map(|&s| u32::from(s)).sum();
		Some(f64::from(sum) / self.0.len() as f64)
	}
}

impl FromIterator<(Criterion, u8)> for CriteriaScores {
	fn from_iter<I: IntoIterator<Item = (Criterion, u8)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// What to judge: the content itself plus optional framing for the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
	pub content: String,
	#[serde(default = "default_criteria")]
	pub criteria: String,
	#[serde(default)]
	pub context: String,
}

fn default_criteria() -> String {
	"all".to_string()
}

impl EvaluationRequest {
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			content: content.into(),
			criteria: default_criteria(),
			context: String::new(),
		}
	}

	pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
		self.criteria = criteria.into();
		self
	}

	pub fn with_context(mut self, context: impl Into<String>) -> Self {
		self.context = context.into();
		self
	}

	/// The context string, or the standard phrase when none was given.
	pub fn context_or_default(&self) -> &str {
		if self.context.is_empty() {
			DEFAULT_CONTEXT
		} else {
			&self.context
		}
	}
}

/// The one verdict shape every tier produces. Fields all deserialize with
/// defaults so a remote model's bare scoring object parses into it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
	#[serde(default)]
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub overall_score: Option<u8>,
	#[serde(default, skip_serializing_if = "CriteriaScores::is_empty")]
	pub criteria_scores: CriteriaScores,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub feedback: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub recommendations: Vec<String>,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub explanation: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
}

#[derive(Tabled)]
struct CriterionRow {
	criterion: &'static str,
	score: u8,
}

impl EvaluationResult {
	/// Terminal failure shape: `success: false` plus a message, nothing else.
	pub fn failure(error: impl Into<String>) -> Self {
		Self {
			success: false,
			overall_score: None,
			criteria_scores: CriteriaScores::default(),
			feedback: Vec::new(),
			recommendations: Vec::new(),
			explanation: String::new(),
			error: Some(error.into()),
			note: None,
		}
	}

	pub fn summary_table(&self) -> String {
		use tabled::Table;
		let rows: Vec<CriterionRow> = self
			.criteria_scores
			.iter()
			.map(|(criterion, score)| CriterionRow {
				criterion: criterion.as_str(),
				score,
			})
			.collect();

		let mut out = String::new();
		if !rows.is_empty() {
			out.push_str(&Table::new(rows).to_string());
			out.push_str("\n\n");
		}

		let overall = self
			.overall_score
			.map(|s| s.to_string())
			.unwrap_or_else(|| "-".to_string());
		out.push_str(&format!("Overall: {}/10\n", overall));

		for line in &self.feedback {
			out.push_str(&format!("{}\n", line));
		}
		if !self.recommendations.is_empty() {
			out.push_str("Recommendations:\n");
			for line in &self.recommendations {
				out.push_str(&format!("  - {}\n", line));
			}
		}
		if !self.explanation.is_empty() {
			out.push_str(&format!("{}\n", self.explanation));
		}
		if let Some(note) = &self.note {
			out.push_str(&format!("{}\n", note));
		}
		if let Some(error) = &self.error {
			out.push_str(&format!("Error: {}\n", error));
		}
		out
	}
}
