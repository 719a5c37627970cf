//! Check command: evaluate import events against the boundary rules.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use strict_deps_core::{ImportEvent, LintResult, RuleConfig, RuleEngine};

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    events_path: &Path,
    root: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(root, config_path)?;
    config.validate().context("Config validation failed")?;

    let engine = RuleEngine::new(config, root);

    let input = read_events_input(events_path)?;
    let events = parse_events(&input)?;

    tracing::info!("Checking {} import event(s)", events.len());

    let mut result = LintResult::new();
    for event in &events {
        result.violations.extend(engine.check(event));
        result.events_checked += 1;
    }

    // Deterministic output regardless of event order in the input
    result.violations.sort_by(|a, b| {
        a.importer_path
            .cmp(&b.importer_path)
            .then(a.import_path.cmp(&b.import_path))
    });

    super::output::print(&result, format)?;

    if result.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(root: &Path, config_path: Option<&Path>) -> Result<RuleConfig> {
    match config_resolver::resolve(root, config_path) {
        ConfigSource::Missing => {
            anyhow::bail!("No strict-deps.toml found. Run `strict-deps init` to create one.")
        }
        source => {
            let p = source.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            RuleConfig::from_file(p).with_context(|| format!("Failed to load {}", p.display()))
        }
    }
}

fn read_events_input(events_path: &Path) -> Result<String> {
    if events_path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read events from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(events_path)
            .with_context(|| format!("Failed to read {}", events_path.display()))
    }
}

/// Parses JSON Lines input: one import event object per non-empty line.
fn parse_events(input: &str) -> Result<Vec<ImportEvent>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid event on line {}", i + 1))
        })
        .collect()
}
