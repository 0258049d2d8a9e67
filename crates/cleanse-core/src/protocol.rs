//! Wire types for the `POST /scan` endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Match;

/// Category assigned to remote matches that arrive without one
pub const UNCLASSIFIED: &str = "Unclassified";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub status: String,
    pub matches: Vec<Match>,
    pub found_length: usize,
}

/// A match item as remote scanners report it: either the bare matched
/// string or an object carrying `text` (or `pattern`)
#[derive(Deserialize)]
#[serde(untagged)]
enum WireMatch {
    Bare(String),
    Detailed {
        #[serde(alias = "pattern")]
        text: String,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        confidence: Option<f64>,
    },
}

impl ScanResponse {
    pub fn success(matches: Vec<Match>) -> Self {
        Self {
            status: "success".to_string(),
            found_length: matches.len(),
            matches,
        }
    }

    /// Interpret an arbitrary reply from a scan endpoint.
    ///
    /// Anything that is not shaped like a positive result (missing or zero
    /// `found_length`, missing `matches`) yields no matches. Items that fit
    /// neither accepted shape are skipped.
    pub fn matches_from_value(value: &Value) -> Vec<Match> {
        let found = value
            .get("found_length")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        if found <= 0.0 {
            return Vec::new();
        }

        let Some(items) = value.get("matches").and_then(Value::as_array) else {
            return Vec::new();
        };

        items
            .iter()
            .filter(|item| item.is_string() || item.is_object())
            .filter_map(|item| WireMatch::deserialize(item).ok())
            .filter_map(|item| {
                let m = match item {
                    WireMatch::Bare(text) => Match::new(text, UNCLASSIFIED),
                    WireMatch::Detailed {
                        text,
                        category,
                        confidence,
                    } => Match {
                        text,
                        category: category.unwrap_or_else(|| UNCLASSIFIED.to_string()),
                        confidence,
                        span: None,
                    },
                };
                (!m.text.is_empty()).then_some(m)
            })
            .collect()
    }
}
