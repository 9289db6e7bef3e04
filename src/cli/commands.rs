//! Command implementations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::cli::args::{BatchArgs, DefaultsArgs, DetailsArgs, InspectArgs, OptionArgs, PlanArgs};
use crate::config::{load_config_file, render_defaults, resolve_options};
use crate::domain::model::OptionSet;
use crate::planner::{plan, Decision};
use crate::plugin;
use crate::probe::inspector::ProbeInspector;

/// Resolve the option set for a planning command
fn resolve(args: &OptionArgs) -> Result<OptionSet> {
    let from_file = match &args.config {
        Some(path) => Some(load_config_file(path).context("Failed to load config file")?),
        None => None,
    };
    Ok(resolve_options(args.overrides(), from_file))
}

/// Execute the plan command
pub fn plan_file(args: PlanArgs) -> Result<()> {
    info!("Starting plan operation");
    info!("Probe: {}", args.probe);

    let options = resolve(&args.options)?;
    let probe = ProbeInspector::load(&args.probe).context("Failed to read probe data")?;
    let decision = plan(probe.as_ref().and_then(|p| p.streams()), &options);

    info!(process = decision.should_process(), "Plan completed");

    if args.json {
        let json = serde_json::to_string_pretty(&decision)
            .context("Failed to serialize decision to JSON")?;
        println!("{}", json);
    } else {
        display_decision(&decision);
    }
    Ok(())
}

/// Human-readable decision output
fn display_decision(decision: &Decision) {
    print!("{}", decision.log());
    if decision.should_process() {
        println!();
        println!("Output container: {}", decision.output_container());
        println!("Arguments:");
        for arg in decision.arguments() {
            println!("  {}", arg);
        }
    }
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs) -> Result<()> {
    info!("Starting inspect operation");
    info!("Probe: {}", args.probe);

    let probe = ProbeInspector::load(&args.probe).context("Failed to read probe data")?;
    let summary = ProbeInspector::summarize(probe.as_ref());

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize stream summary to JSON")?;
        println!("{}", json);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

/// Execute the details command
pub fn details(args: DetailsArgs) -> Result<()> {
    let details = plugin::details();

    if args.json {
        let json = serde_json::to_string_pretty(&details)
            .context("Failed to serialize plugin details to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{} v{} ({})", details.name, details.version, details.id);
    println!("Stage: {}  Type: {}  Operation: {}", details.stage, details.media_type, details.operation);
    println!("Tags: {}", details.tags);
    println!();
    println!("{}", details.description);
    println!();
    println!("Inputs:");
    for input in &details.inputs {
        println!("  {} (default: {})", input.name, input.default_value);
    }
    Ok(())
}

/// Execute the defaults command
pub fn defaults(args: DefaultsArgs) -> Result<()> {
    let rendered = render_defaults(args.format).context("Failed to render default options")?;
    print!("{}", rendered);
    Ok(())
}

/// One line of batch output
#[derive(Debug, Serialize)]
struct BatchEntry<'a> {
    file: String,
    decision: &'a Decision,
}

/// Execute the batch command
pub fn batch(args: BatchArgs) -> Result<()> {
    info!("Starting batch operation in: {}", args.dir.display());

    if !args.dir.is_dir() {
        return Err(anyhow::anyhow!("Not a directory: {}", args.dir.display()));
    }

    let options = resolve(&args.options)?;
    let files = collect_probe_files(&args.dir);
    info!("Found {} probe files", files.len());

    let mut planned = 0;
    for path in &files {
        let source = path.display().to_string();
        let probe = match ProbeInspector::load(&source) {
            Ok(probe) => probe,
            Err(e) => {
                warn!("Skipping {}: {}", source, e);
                continue;
            }
        };

        let decision = plan(probe.as_ref().and_then(|p| p.streams()), &options);
        let entry = BatchEntry {
            file: source,
            decision: &decision,
        };
        println!(
            "{}",
            serde_json::to_string(&entry).context("Failed to serialize batch entry")?
        );
        planned += 1;
    }

    info!("Batch completed: {} of {} files planned", planned, files.len());
    Ok(())
}

/// All `*.json` files under `dir`, sorted by path
fn collect_probe_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Cannot read directory entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_probe_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.JSON"), "{}").unwrap();
        std::fs::write(dir.path().join("nested").join("c.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = collect_probe_files(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.JSON", "b.json", "nested/c.json"]);
    }
}
