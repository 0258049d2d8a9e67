use anyhow::Result;
use cleanse_config::Config;

use super::{build_detector, flag_lines, load_rules, read_input};
use crate::cli::ScanArgs;

pub async fn handle(args: ScanArgs, config: &Config) -> Result<()> {
    let rules = load_rules(config)?;
    let detector = build_detector(&args.detector, config, rules)?;
    let text = read_input(&args.input)?;

    let matches = detector.detect(&text).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        println!("✓ No sensitive data found");
    } else {
        println!("⚠ Found {} sensitive item(s):", matches.len());
        for line in flag_lines(&text, &matches) {
            println!("{}", line);
        }
    }

    if args.check && !matches.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
