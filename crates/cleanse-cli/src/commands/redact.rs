use anyhow::{Result, bail};
use cleanse_config::Config;
use cleanse_security::Redactor;
use cleanse_watch::{FileSurface, Surface};

use super::{build_detector, load_rules, read_input, threshold};
use crate::cli::RedactArgs;
use crate::clipboard::ClipboardSurface;

pub async fn handle(args: RedactArgs, config: &Config) -> Result<()> {
    let rules = load_rules(config)?;
    let redactor = Redactor::new(rules.clone());
    let detector = build_detector(&args.detector, config, rules)?;
    let threshold = threshold(args.threshold, config);

    // Clipboard and --in-place rewrite their source, everything else prints
    let mut surface: Option<Box<dyn Surface>> = if args.clipboard {
        Some(Box::new(ClipboardSurface::new()?) as Box<dyn Surface>)
    } else if args.in_place {
        match &args.input.file {
            Some(path) => Some(Box::new(FileSurface::new(path)) as Box<dyn Surface>),
            None => bail!("--in-place needs a FILE"),
        }
    } else {
        None
    };

    let text = match surface.as_mut() {
        Some(surface) => surface.read_text()?,
        None => read_input(&args.input)?,
    };

    let matches = detector.detect(&text).await;
    let redaction = redactor.redact(&text, &matches, threshold);

    for info in &redaction.redactions {
        eprintln!("  {} × {} → {}", info.count, info.category, info.placeholder);
    }

    match surface {
        Some(mut surface) => {
            if redaction.is_unchanged() {
                eprintln!("✓ No sensitive data in {}", surface.describe());
            } else {
                surface.replace_text(&redaction.text)?;
                eprintln!(
                    "✓ Replaced {} occurrence(s) in {}",
                    redaction.total(),
                    surface.describe()
                );
            }
        }
        None => print!("{}", redaction.text),
    }

    Ok(())
}
