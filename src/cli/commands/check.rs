use anyhow::{ anyhow, bail, Context, Result };
use log::info;
use std::fs;
use std::path::Path;

use crate::cli::ui;
use eqlaw::{ ContractVerifier, RelationConfig, VerificationReport, VerifierOptions };

/// How the report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Relation verification command
pub fn execute(
    relation_path: &Path,
    options: VerifierOptions,
    format_str: &str,
    output_path: Option<&Path>,
    force: bool,
    strict: bool
) -> Result<()> {
    let format = parse_output_format(format_str)?;
    options.validate()?;

    if format == OutputFormat::Text && output_path.is_none() {
        ui::print_header("Verifying Equality Contract");
    }

    let table = RelationConfig::from_file(relation_path)
        .and_then(|config| config.into_table())
        .with_context(|| format!("Failed to load relation from {}", relation_path.display()))?;
    info!(
        "Loaded relation '{}' with {} samples and {} equal pairs",
        table.name,
        table.samples.len(),
        table.pair_count()
    );

    if format == OutputFormat::Text && output_path.is_none() {
        ui::print_info(
            &format!("Loaded {} samples from {}", table.samples.len(), relation_path.display())
        );
    }

    let verifier = ContractVerifier::new(options);
    info!("Checking laws with {} repeat(s) per pair", verifier.options().repeats);
    let spinner = ui::spinner_with_message("Checking laws...");
    let result = verifier.verify(&table.samples, &table, &table.absent);
    spinner.finish_and_clear();
    let report = result?;

    let rendered = match format {
        OutputFormat::Json => Some(report.to_json()?),
        OutputFormat::Yaml => Some(report.to_yaml()?),
        OutputFormat::Text => output_path.map(|_| report.to_string()),
    };

    match (output_path, rendered) {
        (Some(path), Some(body)) => write_report(path, &body, force)?,
        (None, Some(body)) => println!("{}", body),
        (_, None) => print_text_report(&table.name, &report, &table.samples, &table.absent),
    }

    if strict && !report.passed() {
        bail!("{} law(s) violated: {:?}", report.failed_laws().len(), report.failed_laws());
    }
    Ok(())
}

pub fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "yaml" | "yml" => Ok(OutputFormat::Yaml),
        other => Err(anyhow!("Unknown output format: {}", other)),
    }
}

fn write_report(path: &Path, body: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        let prompt = format!("{} already exists. Overwrite?", path.display());
        if !ui::confirm_action(&prompt)? {
            ui::print_warning("Report not written.");
            return Ok(());
        }
    }
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    ui::print_success(&format!("Report written to {}", path.display()));
    Ok(())
}

fn print_text_report(name: &str, report: &VerificationReport, labels: &[String], absent: &str) {
    ui::print_result("Relation", name);
    ui::print_result("Samples", &report.sample_count.to_string());
    ui::print_result("Repeats", &report.repeats.to_string());
    println!();

    for verdict in &report.verdicts {
        ui::print_verdict(verdict);
    }

    if !report.violations.is_empty() {
        println!();
        ui::print_header("Counter-examples");
        for violation in &report.violations {
            ui::print_violation(violation, labels, absent);
        }
    }

    println!();
    if report.passed() {
        ui::print_success("All laws held over the samples.");
    } else {
        ui::print_error(&format!("{} violation(s) found.", report.violations.len()));
    }
    ui::print_text(&report.limitation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ONE_WAY: &str = r#"
name: one way
samples: [string, STRING, other]
equal:
  - [string, string]
  - [STRING, STRING]
  - [other, other]
  - [string, STRING]
"#;

    fn temp_file(tag: &str, ext: &str, contents: Option<&str>) -> PathBuf {
        let path = std::env::temp_dir().join(
            format!("eqlaw-check-{}-{}.{}", tag, std::process::id(), ext)
        );
        match contents {
            Some(body) => fs::write(&path, body).unwrap(),
            None => {
                fs::remove_file(&path).ok();
            }
        }
        path
    }

    #[test]
    fn test_strict_fails_on_violations_after_writing_report() {
        let relation = temp_file("strict-relation", "yaml", Some(ONE_WAY));
        let output = temp_file("strict-report", "json", None);

        let result = execute(&relation, VerifierOptions::default(), "json", Some(&output), true, true);

        let written = fs::read_to_string(&output).unwrap();
        fs::remove_file(&relation).ok();
        fs::remove_file(&output).ok();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("1 law(s) violated"), "{}", err);
        assert!(err.contains("Symmetry"), "{}", err);

        let report: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(report["sample_count"], 3);
        assert_eq!(report["violations"][0]["law"], "symmetry");
    }

    #[test]
    fn test_failing_report_without_strict_succeeds() {
        let relation = temp_file("lenient-relation", "yaml", Some(ONE_WAY));
        let output = temp_file("lenient-report", "yaml", None);

        let result = execute(&relation, VerifierOptions::default(), "yaml", Some(&output), true, false);

        let written = fs::read_to_string(&output).unwrap_or_default();
        fs::remove_file(&relation).ok();
        fs::remove_file(&output).ok();

        assert!(result.is_ok());
        assert!(written.contains("symmetry"));
    }

    #[test]
    fn test_forced_write_replaces_existing_report() {
        let relation = temp_file(
            "forced-relation",
            "json",
            Some(r#"{"samples": ["x", "y"], "equal": [["x", "x"], ["y", "y"]]}"#)
        );
        let output = temp_file("forced-report", "json", Some("stale"));

        let result = execute(
            &relation,
            VerifierOptions::with_repeats(2),
            "json",
            Some(&output),
            true,
            true
        );

        let written = fs::read_to_string(&output).unwrap();
        fs::remove_file(&relation).ok();
        fs::remove_file(&output).ok();

        assert!(result.is_ok());
        let report: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(report["repeats"], 2);
        assert_eq!(report["violations"].as_array().map(|v| v.len()), Some(0));
    }

    #[test]
    fn test_missing_relation_file_is_reported() {
        let relation = temp_file("missing-relation", "yaml", None);

        let err = execute(&relation, VerifierOptions::default(), "json", None, true, false)
            .unwrap_err();

        assert!(err.to_string().contains("Failed to load relation"), "{}", err);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("yml").unwrap(), OutputFormat::Yaml);
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert!(parse_output_format("xml").is_err());
    }
}
