use serde::{Deserialize, Serialize};

/// Byte range of a match inside the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// 1-indexed line and column (in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Resolve the start of this span to a line/column in `text`
    pub fn position(&self, text: &str) -> Option<Position> {
        let prefix = text.get(..self.start)?;
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() + 1;
        Some(Position { line, column })
    }
}

/// A piece of sensitive data found in a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched source text, replaced literally on redaction
    pub text: String,

    pub category: String,

    /// Score in 0..=1, only set by remote scanners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Local position of the match; never part of the wire format
    #[serde(skip)]
    pub span: Option<Span>,
}

impl Match {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            confidence: None,
            span: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.span = Some(Span::new(start, end));
        self
    }

    /// Whether this match is redacted under the given confidence threshold.
    ///
    /// Matches without a score, or any match when no threshold is set, always
    /// clear. Scored matches must be strictly above the threshold.
    pub fn clears(&self, threshold: Option<f64>) -> bool {
        match (self.confidence, threshold) {
            (Some(confidence), Some(threshold)) => confidence > threshold,
            _ => true,
        }
    }

    /// Locate this match in `text`, falling back to the first literal
    /// occurrence when no span was recorded
    pub fn position_in(&self, text: &str) -> Option<Position> {
        match self.span {
            Some(span) => span.position(text),
            None => {
                let start = text.find(&self.text)?;
                Span::new(start, start + self.text.len()).position(text)
            }
        }
    }

    /// Masked rendering that is safe to print or log
    pub fn preview(&self) -> String {
        let len = self.text.chars().count();
        if len <= 8 {
            return "*".repeat(len);
        }
        let head: String = self.text.chars().take(4).collect();
        format!("{}… ({} chars)", head, len)
    }
}
