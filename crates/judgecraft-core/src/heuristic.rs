use judgecraft_types::{CriteriaScores, Criterion, EvaluationResult};

/// Disclosed on every heuristic verdict so consumers know no model ran.
pub const HEURISTIC_NOTE: &str = "Heuristic evaluation (no API key configured)";

/// Offline verdict from fixed pattern checks over the raw text. Pure function
/// of `content`; the terminal tier, it always succeeds and never panics.
///
/// `criteria` is carried for compatibility; all five criteria are always
/// scored regardless of its value.
pub fn evaluate_heuristically(content: &str, _criteria: &str) -> EvaluationResult {
    let lower = content.to_lowercase();
    let length = content.chars().count();

    let has_comments = content.contains("//") || content.contains("/*") || content.contains('#');
    let has_error_handling =
        content.contains("try") || content.contains("catch") || lower.contains("error");
    let has_types =
        content.contains(": ") || content.contains("type ") || content.contains("interface ");
    let has_tests =
        lower.contains("test") || content.contains("expect") || content.contains("assert");
    let has_docs =
        content.contains("\"\"\"") || content.contains("'''") || content.contains("/**");

    let code_quality = factor_score(&[has_comments, has_types, length > 50]);
    let security = factor_score(&[
        has_error_handling,
        !content.contains("eval("),
        !content.contains("innerHTML"),
    ]);
    let performance = factor_score(&[!lower.contains("nested"), length < 5000]);
    let correctness = factor_score(&[has_error_handling, has_types]);
    let maintainability = factor_score(&[has_comments, has_tests, has_docs]);

    let sum: u32 = [
        code_quality,
        security,
        performance,
        correctness,
        maintainability,
    ]
    .iter()
    .map(|&score| u32::from(score))
    .sum();
    // Mean of five integers: the fraction is a multiple of 0.2, so a .5 tie
    // cannot occur and half-away-from-zero rounding is unambiguous.
    let overall = (f64::from(sum) / 5.0).round() as u8;

    let mut criteria_scores = CriteriaScores::default();
    criteria_scores.insert(Criterion::CodeQuality, code_quality);
    criteria_scores.insert(Criterion::Security, security);
    criteria_scores.insert(Criterion::Performance, performance);
    criteria_scores.insert(Criterion::Correctness, correctness);
    criteria_scores.insert(Criterion::Maintainability, maintainability);

    let mut feedback = Vec::with_capacity(2);
    feedback.push(
        if code_quality >= 7 {
            "✅ Code structure looks good"
        } else {
            "⚠️ Consider improving code structure and adding comments"
        }
        .to_string(),
    );
    feedback.push(
        if security >= 7 {
            "✅ No obvious security issues detected"
        } else {
            "⚠️ Review security practices"
        }
        .to_string(),
    );

    let mut recommendations = Vec::new();
    if !has_comments {
        recommendations.push("Add comments to explain complex logic".to_string());
    }
    if !has_error_handling {
        recommendations.push("Add error handling for edge cases".to_string());
    }
    if !has_types {
        recommendations.push("Consider adding type annotations".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Code looks good!".to_string());
    }

    EvaluationResult {
        success: true,
        overall_score: Some(overall),
        criteria_scores,
        feedback,
        recommendations,
        explanation: String::new(),
        error: None,
        note: Some(HEURISTIC_NOTE.to_string()),
    }
}

fn factor_score(factors: &[bool]) -> u8 {
    let hits = factors.iter().filter(|&&hit| hit).count() as i32;
    (5 + 2 * hits).clamp(1, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULLY_ANNOTATED: &str = "# add two numbers\n\
        def add(a: int, b: int) -> int:\n    \"\"\"Add a and b.\"\"\"\n    try:\n        \
        assert a is not None\n        return a + b\n    except TypeError:\n        raise\n";

    #[test]
    fn bare_function_scores() {
        let result = evaluate_heuristically("function add(a,b){return a+b}", "all");
        assert!(result.success);
        assert_eq!(result.criteria_scores.get(Criterion::CodeQuality), Some(5));
        assert_eq!(result.criteria_scores.get(Criterion::Security), Some(9));
        assert_eq!(result.criteria_scores.get(Criterion::Performance), Some(9));
        assert_eq!(result.criteria_scores.get(Criterion::Correctness), Some(5));
        assert_eq!(
            result.criteria_scores.get(Criterion::Maintainability),
            Some(5)
        );
        // (5 + 9 + 9 + 5 + 5) / 5 = 6.6 → 7
        assert_eq!(result.overall_score, Some(7));
        assert_eq!(
            result.recommendations,
            vec![
                "Add comments to explain complex logic",
                "Add error handling for edge cases",
                "Consider adding type annotations",
            ]
        );
        assert_eq!(result.note.as_deref(), Some(HEURISTIC_NOTE));
    }

    #[test]
    fn fully_annotated_code_scores_high() {
        let result = evaluate_heuristically(FULLY_ANNOTATED, "all");
        assert_eq!(result.criteria_scores.get(Criterion::CodeQuality), Some(10));
        assert_eq!(result.criteria_scores.get(Criterion::Security), Some(10));
        assert_eq!(result.criteria_scores.get(Criterion::Performance), Some(9));
        assert_eq!(result.criteria_scores.get(Criterion::Correctness), Some(9));
        assert_eq!(
            result.criteria_scores.get(Criterion::Maintainability),
            Some(10)
        );
        // (10 + 10 + 9 + 9 + 10) / 5 = 9.6 → 10
        assert_eq!(result.overall_score, Some(10));
        assert_eq!(result.recommendations, vec!["Code looks good!"]);
    }

    #[test]
    fn eval_call_costs_two_security_points() {
        let clean = evaluate_heuristically("const total = sum(items)", "all");
        let risky = evaluate_heuristically("const total = eval(items)", "all");
        let clean_security = clean.criteria_scores.get(Criterion::Security).unwrap();
        let risky_security = risky.criteria_scores.get(Criterion::Security).unwrap();
        assert_eq!(clean_security - risky_security, 2);
    }

    #[test]
    fn empty_content_still_succeeds() {
        let result = evaluate_heuristically("", "all");
        assert!(result.success);
        assert!(result.criteria_scores.is_complete());
        for (_, score) in result.criteria_scores.iter() {
            assert!((1..=10).contains(&score));
        }
        assert_eq!(result.overall_score, Some(7));
    }

    #[test]
    fn feedback_is_always_exactly_two_lines() {
        for content in ["", "function add(a,b){return a+b}", FULLY_ANNOTATED] {
            let result = evaluate_heuristically(content, "all");
            assert_eq!(result.feedback.len(), 2);
        }
    }

    #[test]
    fn recommendations_are_never_empty() {
        for content in ["", "x", FULLY_ANNOTATED, "eval(innerHTML)"] {
            let result = evaluate_heuristically(content, "all");
            assert!(!result.recommendations.is_empty());
        }
    }

    #[test]
    fn overall_is_the_rounded_mean_of_the_criteria() {
        for content in [
            "",
            "function add(a,b){return a+b}",
            FULLY_ANNOTATED,
            "// try catch everywhere",
            "let x = 1",
        ] {
            let result = evaluate_heuristically(content, "all");
            let expected = result.criteria_scores.mean().unwrap().round() as u8;
            assert_eq!(result.overall_score, Some(expected), "content: {content:?}");
        }
    }

    #[test]
    fn low_structure_content_gets_both_warnings() {
        let result = evaluate_heuristically("el.innerHTML = eval(s)", "all");
        // code_quality 5 and security 5: no comments, no error handling, short,
        // and both risky patterns present.
        assert!(result.feedback[0].starts_with('⚠'));
        assert!(result.feedback[1].starts_with('⚠'));
    }
}
