use std::sync::LazyLock;

use cleanse_core::{Error, Match, Result};
use regex::Regex;

/// Placeholder for matches whose category has no rule in the set
pub const FALLBACK_PLACEHOLDER: &str = "******************";

// (category, detector, placeholder)
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    ("OpenAI Key", r"sk-[a-zA-Z0-9]{48}", "[OPENAI-KEY]"),
    (
        "AWS Key",
        r"\b(?:AKIA|ASIA|AROA|AIDA|AGPA)[A-Z0-9]{16}\b",
        "[AWS-KEY]",
    ),
    (
        "AWS Credential",
        r#"(?i)\b(?:aws_access_key_id|aws_secret_access_key|aws_session_token)\s*[=:]\s*['"]?[^'"\s\[\]]+['"]?"#,
        "[AWS-CREDENTIAL]",
    ),
    (
        "Database Connection String",
        r#"(?i)\b(?:postgres(?:ql)?|mysql|mongodb(?:\+srv)?)://[^\s:/@]+:[^\s@]+@[^\s'"]+"#,
        "[CONNECTION-STRING]",
    ),
    (
        "Connection String",
        r#"(?i)\b(?:connection_string|connectionstring)\s*[=:]\s*['"][^'"]{10,}['"]"#,
        "[CONNECTION-STRING]",
    ),
    (
        "GitHub Token",
        r"\bgh[pousr]_[A-Za-z0-9]{36,}\b",
        "[GITHUB-TOKEN]",
    ),
    (
        "API Key",
        r#"(?i)\b(?:api_key|apikey|api-key)\s*[=:]\s*['"][^'"]{10,}['"]"#,
        "[API-KEY]",
    ),
    (
        "JWT",
        r"\beyJ[A-Za-z0-9_-]+\.eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+",
        "[JWT]",
    ),
    (
        "Bearer Token",
        r"(?i)\bbearer\s+[A-Za-z0-9_.~+/-]{20,}=*",
        "[BEARER-TOKEN]",
    ),
    (
        "Private Key",
        r"(?s)-----BEGIN (?:[A-Z0-9]+ )*PRIVATE KEY-----.*?-----END (?:[A-Z0-9]+ )*PRIVATE KEY-----",
        "[PRIVATE-KEY]",
    ),
];

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
    let rules = BUILTIN_RULES
        .iter()
        .map(|(category, pattern, placeholder)| PatternRule::new(*category, pattern, *placeholder))
        .collect::<Result<Vec<_>>>()
        .expect("built-in detectors compile");
    RuleSet::new(rules, FALLBACK_PLACEHOLDER).expect("built-in placeholders are never detected")
});

/// One category of sensitive data: a detector and its replacement token
#[derive(Debug, Clone)]
pub struct PatternRule {
    category: String,
    detector: Regex,
    placeholder: String,
}

impl PatternRule {
    pub fn new(
        category: impl Into<String>,
        pattern: &str,
        placeholder: impl Into<String>,
    ) -> Result<Self> {
        let category = category.into();
        let detector = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
            category: category.clone(),
            message: e.to_string(),
        })?;

        if detector.is_match("") {
            return Err(Error::InvalidPattern {
                category,
                message: "detector matches empty text".to_string(),
            });
        }

        Ok(Self {
            category,
            detector,
            placeholder: placeholder.into(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn detector(&self) -> &Regex {
        &self.detector
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn matches_whole(&self, text: &str) -> bool {
        self.detector
            .find(text)
            .is_some_and(|m| m.start() == 0 && m.end() == text.len())
    }
}

/// Immutable, validated list of detection rules.
///
/// Construction guarantees that no detector matches any placeholder of the
/// set, so redacted text never gets flagged again.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
    fallback_placeholder: String,
}

impl RuleSet {
    /// The built-in rule table
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn new(rules: Vec<PatternRule>, fallback_placeholder: impl Into<String>) -> Result<Self> {
        let fallback_placeholder = fallback_placeholder.into();

        for (i, rule) in rules.iter().enumerate() {
            if let Some(other) = rules[..i]
                .iter()
                .find(|r| r.category == rule.category && r.placeholder != rule.placeholder)
            {
                return Err(Error::InvalidPattern {
                    category: rule.category.clone(),
                    message: format!(
                        "placeholder {:?} conflicts with {:?} already used for this category",
                        rule.placeholder, other.placeholder
                    ),
                });
            }
        }

        let placeholders = rules
            .iter()
            .map(|r| r.placeholder.as_str())
            .chain(std::iter::once(fallback_placeholder.as_str()));
        for placeholder in placeholders {
            if let Some(rule) = rules.iter().find(|r| r.detector.is_match(placeholder)) {
                return Err(Error::PlaceholderConflict {
                    placeholder: placeholder.to_string(),
                    category: rule.category.clone(),
                });
            }
        }

        Ok(Self {
            rules,
            fallback_placeholder,
        })
    }

    /// Built-in rules followed by `custom`
    pub fn with_custom(
        custom: Vec<PatternRule>,
        fallback_placeholder: impl Into<String>,
    ) -> Result<Self> {
        let mut rules = BUILTIN.rules.clone();
        rules.extend(custom);
        Self::new(rules, fallback_placeholder)
    }

    /// Find every non-overlapping match of every rule.
    ///
    /// Matches are grouped by rule in table order and are left-to-right within
    /// a rule.
    pub fn scan(&self, text: &str) -> Vec<Match> {
        if text.is_empty() {
            return Vec::new();
        }

        self.rules
            .iter()
            .flat_map(|rule| {
                rule.detector
                    .find_iter(text)
                    .filter(|m| !m.as_str().is_empty())
                    .map(|m| Match::new(m.as_str(), rule.category.as_str()).with_span(m.start(), m.end()))
            })
            .collect()
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Distinct categories in table order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !categories.contains(&rule.category.as_str()) {
                categories.push(&rule.category);
            }
        }
        categories
    }

    pub fn rule(&self, category: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// First rule whose detector matches all of `text`
    pub fn classify(&self, text: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.matches_whole(text))
    }

    pub fn fallback_placeholder(&self) -> &str {
        &self.fallback_placeholder
    }

    /// Placeholder for a match: by category, then by classifying its text
    pub fn placeholder_for(&self, m: &Match) -> &str {
        self.rule(&m.category)
            .or_else(|| self.classify(&m.text))
            .map(PatternRule::placeholder)
            .unwrap_or(self.fallback_placeholder.as_str())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
