use serde::Serialize;

/// Declarative detector contributing points when its clauses are satisfied.
///
/// Each clause is a group of alternative terms. The rule fires when every
/// clause has at least one term present in the normalized offer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub key: &'static str,
    pub flag: &'static str,
    pub points: u8,
    pub clauses: &'static [&'static [&'static str]],
}

impl Rule {
    /// Returns the first matching term of every clause, or `None` when any
    /// clause has no match. Expects text that is already lower-cased.
    pub fn matches(&self, normalized: &str) -> Option<Vec<&'static str>> {
        self.clauses
            .iter()
            .map(|terms| {
                terms
                    .iter()
                    .copied()
                    .find(|term| normalized.contains(term))
            })
            .collect()
    }
}

pub const URGENCY_LANGUAGE: Rule = Rule {
    key: "urgency_language",
    flag: "Urgency language detected",
    points: 25,
    clauses: &[&["urgent", "immediately", "asap", "right away", "act now"]],
};

pub const CHECK_DEPOSIT: Rule = Rule {
    key: "check_deposit",
    flag: "Check deposit scam pattern",
    points: 40,
    clauses: &[&["check", "cheque"], &["deposit", "cash"]],
};

pub const SENSITIVE_INFORMATION: Rule = Rule {
    key: "sensitive_information",
    flag: "Requests sensitive information",
    points: 30,
    clauses: &[&["ssn", "social security", "bank account", "routing"]],
};

/// Ordered rule set evaluated by the engine. Flags follow this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    pub fn standard() -> Self {
        Self {
            rules: vec![URGENCY_LANGUAGE, CHECK_DEPOSIT, SENSITIVE_INFORMATION],
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_clause_rule_matches_any_term() {
        assert_eq!(
            URGENCY_LANGUAGE.matches("please reply right away"),
            Some(vec!["right away"])
        );
        assert_eq!(URGENCY_LANGUAGE.matches("no rush at all"), None);
    }

    #[test]
    fn conjunctive_rule_requires_every_clause() {
        assert_eq!(CHECK_DEPOSIT.matches("we will mail a cheque"), None);
        assert_eq!(CHECK_DEPOSIT.matches("deposit it today"), None);
        assert_eq!(
            CHECK_DEPOSIT.matches("deposit it today. a cheque is in the mail"),
            Some(vec!["cheque", "deposit"])
        );
    }

    #[test]
    fn matching_is_substring_based() {
        assert!(SENSITIVE_INFORMATION.matches("your routing details").is_some());
        assert!(CHECK_DEPOSIT.matches("onboarding checklist for cashiers").is_some());
    }

    #[test]
    fn standard_book_keeps_definition_order() {
        let book = RuleBook::standard();
        let keys: Vec<_> = book.rules().iter().map(|rule| rule.key).collect();
        assert_eq!(
            keys,
            ["urgency_language", "check_deposit", "sensitive_information"]
        );
        assert_eq!(book.get("check_deposit"), Some(&CHECK_DEPOSIT));
        assert!(book.get("unknown").is_none());
    }
}
