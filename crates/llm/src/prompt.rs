//! Prompt assembly for the dashboard's "ask the AI" endpoint.

use salesdash_core::NO_SUMMARY_PLACEHOLDER;

const ACTION_GUIDANCE: &str = "Consider the following when making recommendations:
- Current sales trends (up, down, flat).
- Top performing products/services.
- Underperforming products/services.
- Potential market opportunities or threats (if any data is available).
Focus on 2-3 actionable steps.";

const FORECAST_GUIDANCE: &str = "When making predictions, consider:
- Historical data patterns (if known or implied by the summary).
- Common business impacts of the proposed action.
- State any assumptions you are making.";

/// Extra instructions appended when the question asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    /// Actionable next steps.
    Action,
    /// Forecasts and what-if scenarios.
    Forecast,
}

impl Guidance {
    /// Append order when several blocks apply.
    pub const ALL: [Self; 2] = [Self::Action, Self::Forecast];

    /// Lowercase substrings that switch this block on.
    pub const fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::Action => &["what to do next", "recommend"],
            Self::Forecast => &["what will happen if", "predict"],
        }
    }

    pub const fn text(&self) -> &'static str {
        match self {
            Self::Action => ACTION_GUIDANCE,
            Self::Forecast => FORECAST_GUIDANCE,
        }
    }

    /// Blocks whose triggers appear in `question`, ignoring case.
    #[must_use]
    pub fn detect(question: &str) -> Vec<Self> {
        let lowered = question.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|g| g.triggers().iter().any(|t| lowered.contains(t)))
            .collect()
    }
}

/// Builds the prompt sent to the model for `question`.
///
/// A missing or empty summary is replaced by a fixed placeholder sentence.
#[must_use]
pub fn build_prompt(question: &str, summary: Option<&str>) -> String {
    let summary = summary.filter(|s| !s.is_empty()).unwrap_or(NO_SUMMARY_PLACEHOLDER);

    let mut prompt = format!(
        r#"You are a helpful AI assistant analyzing a sales dashboard.
Here is a summary of the current dashboard data:
---
{summary}
---

The user's question or request is: "{question}"

Based on all the above, please provide an insightful answer, suggestion, or prediction.
If the question is about "what to do next", provide actionable recommendations.
If the question is about "what will happen if", provide a likely scenario based on the data.
Be concise and clear."#
    );

    for guidance in Guidance::detect(question) {
        prompt.push_str("\n\n");
        prompt.push_str(guidance.text());
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_summary_and_question() {
        let prompt = build_prompt("How are sales?", Some("Total Sales: $10"));
        assert!(prompt.contains("---\nTotal Sales: $10\n---"));
        assert!(prompt.contains("The user's question or request is: \"How are sales?\""));
    }

    #[test]
    fn test_missing_summary_uses_placeholder() {
        assert!(build_prompt("hi", None).contains(NO_SUMMARY_PLACEHOLDER));
        assert!(build_prompt("hi", Some("")).contains(NO_SUMMARY_PLACEHOLDER));
    }

    #[test]
    fn test_plain_question_has_no_guidance() {
        let prompt = build_prompt("How are sales?", None);
        assert!(!prompt.contains(ACTION_GUIDANCE));
        assert!(!prompt.contains(FORECAST_GUIDANCE));
    }

    #[test]
    fn test_what_to_do_next_adds_action_block() {
        let prompt = build_prompt("What To Do Next with May?", None);
        assert!(prompt.ends_with(ACTION_GUIDANCE));
        assert!(!prompt.contains(FORECAST_GUIDANCE));
    }

    #[test]
    fn test_predict_adds_forecast_block() {
        let prompt = build_prompt("Predict August sales", None);
        assert!(prompt.ends_with(FORECAST_GUIDANCE));
        assert!(!prompt.contains(ACTION_GUIDANCE));
    }

    #[test]
    fn test_both_triggers_add_both_blocks_in_order() {
        let prompt = build_prompt("Recommend a plan and predict the outcome", None);
        let action = prompt.find(ACTION_GUIDANCE).unwrap();
        let forecast = prompt.find(FORECAST_GUIDANCE).unwrap();
        assert!(action < forecast);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("predict", Some("s")), build_prompt("predict", Some("s")));
    }

    #[test]
    fn test_detect() {
        assert_eq!(Guidance::detect("what will happen if we cut prices"), vec![Guidance::Forecast]);
        assert_eq!(Guidance::detect("any RECOMMENDATIONS?"), vec![Guidance::Action]);
        assert!(Guidance::detect("hello").is_empty());
    }
}
