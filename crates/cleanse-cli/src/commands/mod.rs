pub mod config;
pub mod redact;
pub mod scan;
pub mod serve;
pub mod watch;

use anyhow::{Context, Result};
use cleanse_config::Config;
use cleanse_core::Match;
use cleanse_security::{PatternRule, RuleSet};
use cleanse_watch::{Detector, LocalDetector, RemoteScanner};
use std::io::Read;
use std::sync::Arc;

use crate::cli::{DetectorArgs, InputArgs};

/// Read input from --text, a file, or stdin
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    match &input.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Built-in rules plus the custom rules from config
pub fn load_rules(config: &Config) -> Result<Arc<RuleSet>> {
    let custom = config
        .rules
        .iter()
        .map(|r| PatternRule::new(&r.category, &r.pattern, &r.placeholder))
        .collect::<cleanse_core::Result<Vec<_>>>()?;

    let rules = RuleSet::with_custom(custom, config.redaction.fallback_placeholder.as_str())?;
    Ok(Arc::new(rules))
}

pub fn build_detector(
    args: &DetectorArgs,
    config: &Config,
    rules: Arc<RuleSet>,
) -> Result<Arc<dyn Detector>> {
    if args.remote {
        let endpoint = args
            .endpoint
            .clone()
            .unwrap_or_else(|| config.scanner.endpoint.clone());
        Ok(Arc::new(RemoteScanner::new(endpoint)?))
    } else {
        Ok(Arc::new(LocalDetector::new(rules)))
    }
}

/// Threshold flag, falling back to config
pub fn threshold(arg: Option<f64>, config: &Config) -> Option<f64> {
    arg.or(config.scanner.confidence_threshold)
}

/// One masked line per match, with its line:column
pub fn flag_lines(text: &str, matches: &[Match]) -> Vec<String> {
    matches
        .iter()
        .map(|m| {
            let location = m
                .position_in(text)
                .map(|p| format!("{}:{}", p.line, p.column))
                .unwrap_or_else(|| "?".to_string());
            let confidence = m
                .confidence
                .map(|c| format!(" (confidence {:.2})", c))
                .unwrap_or_default();
            format!("  {:<8} {:<28} {}{}", location, m.category, m.preview(), confidence)
        })
        .collect()
}
