//! Job offer screening: rule evaluation, verdicts, and the HTTP adapter.
//!
//! The engine is a pure function of the offer text. Every rule in the active
//! [`RuleBook`] is checked against the lower-cased text, fired rules add their
//! points, and the total is capped at 100 before guidance is derived.

pub mod router;
pub mod rules;
mod verdict;

pub use router::screening_router;
pub use rules::{Rule, RuleBook, CHECK_DEPOSIT, SENSITIVE_INFORMATION, URGENCY_LANGUAGE};
pub use verdict::{
    Guidance, RiskBreakdown, RiskVerdict, RuleMatch, MAX_SCORE, STRONG_WARNING_THRESHOLD,
};

/// Scores offer text with the standard rule book.
pub fn evaluate(text: &str) -> RiskVerdict {
    RiskEngine::standard().evaluate(text)
}

/// Stateless evaluator applying a rule book to offer text.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    rules: RuleBook,
}

impl RiskEngine {
    pub fn new(rules: RuleBook) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(RuleBook::standard())
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn evaluate(&self, text: &str) -> RiskVerdict {
        self.explain(text).verdict()
    }

    pub fn explain(&self, text: &str) -> RiskBreakdown {
        let normalized = text.to_lowercase();

        let matches: Vec<RuleMatch> = self
            .rules
            .rules()
            .iter()
            .filter_map(|rule| {
                rule.matches(&normalized).map(|matched_terms| RuleMatch {
                    key: rule.key,
                    flag: rule.flag,
                    points: rule.points,
                    matched_terms,
                })
            })
            .collect();

        let raw_points = matches
            .iter()
            .map(|matched| u32::from(matched.points))
            .sum();

        RiskBreakdown {
            raw_points,
            matches,
        }
    }
}
