//! Secret detection and redaction engine

pub mod redactor;
pub mod rules;

pub use redactor::{Redaction, RedactionInfo, Redactor};
pub use rules::{FALLBACK_PLACEHOLDER, PatternRule, RuleSet};
