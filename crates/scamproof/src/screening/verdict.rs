use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 100;

/// Scores at or above this value escalate to the strong warning.
pub const STRONG_WARNING_THRESHOLD: u8 = 60;

/// Recommended next action derived solely from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guidance {
    Caution,
    DoNotEngage,
}

impl Guidance {
    pub fn for_score(score: u8) -> Self {
        if score >= STRONG_WARNING_THRESHOLD {
            Guidance::DoNotEngage
        } else {
            Guidance::Caution
        }
    }

    pub fn next_steps(&self) -> &'static str {
        match self {
            Guidance::Caution => "Proceed with caution.",
            Guidance::DoNotEngage => "Do not send money or personal info. Verify independently.",
        }
    }
}

/// Structured outcome of screening one offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub score: u8,
    pub flags: Vec<String>,
    pub next_steps: String,
}

impl RiskVerdict {
    pub fn guidance(&self) -> Guidance {
        Guidance::for_score(self.score)
    }
}

/// A fired rule and the terms that satisfied each of its clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    pub key: &'static str,
    pub flag: &'static str,
    pub points: u8,
    pub matched_terms: Vec<&'static str>,
}

/// Audit trail behind a verdict, kept in rule-definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    pub raw_points: u32,
    pub matches: Vec<RuleMatch>,
}

impl RiskBreakdown {
    pub fn score(&self) -> u8 {
        self.raw_points.min(u32::from(MAX_SCORE)) as u8
    }

    pub fn verdict(&self) -> RiskVerdict {
        let score = self.score();
        RiskVerdict {
            score,
            flags: self
                .matches
                .iter()
                .map(|matched| matched.flag.to_string())
                .collect(),
            next_steps: Guidance::for_score(score).next_steps().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guidance_switches_at_threshold() {
        assert_eq!(Guidance::for_score(0), Guidance::Caution);
        assert_eq!(Guidance::for_score(59), Guidance::Caution);
        assert_eq!(Guidance::for_score(60), Guidance::DoNotEngage);
        assert_eq!(Guidance::for_score(100), Guidance::DoNotEngage);
    }

    #[test]
    fn breakdown_clamps_raw_points() {
        let breakdown = RiskBreakdown {
            raw_points: 145,
            matches: Vec::new(),
        };

        let verdict = breakdown.verdict();
        assert_eq!(verdict.score, 100);
        assert_eq!(verdict.guidance(), Guidance::DoNotEngage);
        assert_eq!(
            verdict.next_steps,
            "Do not send money or personal info. Verify independently."
        );
    }
}
