use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use eqlaw::{ LawVerdict, Violation };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text wrapped to the terminal width
pub fn print_text(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(10).max(20)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print one law verdict with color
pub fn print_verdict(verdict: &LawVerdict) {
    let status = if verdict.passed {
        "✓ held".green().bold()
    } else {
        "✗ violated".red().bold()
    };
    println!(
        "{:<16} {} ({} cases, {} violations)",
        verdict.law.name().bold(),
        status,
        verdict.cases_checked,
        verdict.violations
    );
}

/// Print a violation, naming samples by label
pub fn print_violation(violation: &Violation, labels: &[String], absent: &str) {
    let mut named: Vec<String> = violation.indices
        .iter()
        .map(|&i| labels.get(i).cloned().unwrap_or_else(|| format!("#{}", i)))
        .collect();
    if violation.law == eqlaw::LawKind::NullSafety {
        named.push(absent.to_string());
    }
    let outcomes = violation.outcomes
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let mut line = format!("  {} ({}) -> [{}]", violation.law, named.join(", "), outcomes);
    if let Some(note) = &violation.note {
        line.push_str(&format!(" {}", note));
    }
    println!("{}", line.red());
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
