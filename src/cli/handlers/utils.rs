use crate::model::{Adr, Status, StatusValue};
use crate::relation::StatusTransition;
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::path::Path;

/// Format status with color coding
pub fn format_status(status: &StatusValue) -> ColoredString {
    paint_status(status, status.to_string())
}

fn paint_status(status: &StatusValue, text: String) -> ColoredString {
    match status.style_key() {
        Some(Status::Draft) => text.dimmed(),
        Some(Status::Proposed) => text.yellow(),
        Some(Status::Accepted) => text.green(),
        Some(Status::Deprecated) => text.truecolor(255, 135, 0),
        Some(Status::Superseded) => text.magenta(),
        Some(Status::Rejected) => text.red(),
        None => text.normal(),
    }
}

/// Status as a padded badge with a colored background
pub fn status_badge(status: &StatusValue) -> ColoredString {
    let text = format!(" {} ", status);
    match status.style_key() {
        Some(Status::Draft) => text.white().on_bright_black(),
        Some(Status::Proposed) => text.black().on_yellow(),
        Some(Status::Accepted) => text.white().on_green(),
        Some(Status::Deprecated) => text.white().on_truecolor(255, 135, 0),
        Some(Status::Superseded) => text.white().on_magenta(),
        Some(Status::Rejected) => text.white().on_red(),
        None => text.normal(),
    }
}

pub fn format_transition(from: &StatusValue, to: Status) -> String {
    format!(
        "{}{}{}",
        format_status(from),
        " → ".magenta(),
        format_status(&to.into())
    )
}

pub fn print_transition(transition: &StatusTransition) {
    println!(
        "{} {} {}",
        "Updated".green(),
        format!("ADR {:04}:", transition.number).cyan(),
        format_transition(&transition.from, transition.to)
    );
}

/// Print ADRs as an aligned NUM / TITLE / STATUS / DATE table
pub fn print_adr_list(adrs: &[Adr]) {
    if adrs.is_empty() {
        println!(
            "{}",
            "No ADRs found. Create one with 'stamp new <title>'".yellow()
        );
        return;
    }

    let title_width = adrs
        .iter()
        .map(|a| a.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());
    let status_width = adrs
        .iter()
        .map(|a| a.status.to_string().chars().count())
        .max()
        .unwrap_or(0)
        .max("STATUS".len());

    println!(
        "{}  {}  {}  {}",
        "NUM ".cyan().bold(),
        format!("{:<width$}", "TITLE", width = title_width).cyan().bold(),
        format!("{:<width$}", "STATUS", width = status_width).cyan().bold(),
        "DATE".cyan().bold()
    );

    for adr in adrs {
        // Pad before coloring so escape codes don't skew the columns
        let status = paint_status(
            &adr.status,
            format!("{:<width$}", adr.status.to_string(), width = status_width),
        );
        let date = adr
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{}  {:<width$}  {}  {}",
            format!("{:04}", adr.number).cyan(),
            adr.title,
            status,
            date.dimmed(),
            width = title_width
        );
    }
}

/// Open `path` in `$VISUAL`, falling back to `$EDITOR`, and wait for it to exit.
pub fn open_in_editor(path: &Path) -> Result<()> {
    let editor = std::env::var("VISUAL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            std::env::var("EDITOR")
                .ok()
                .filter(|v| !v.trim().is_empty())
        })
        .context("no editor configured (set $EDITOR or $VISUAL)")?;

    // Allow values like "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .context("no editor configured (set $EDITOR or $VISUAL)")?;

    tracing::debug!(editor = %editor, path = %path.display(), "Opening editor");
    let status = std::process::Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to open editor '{}'", editor))?;

    if !status.success() {
        anyhow::bail!("editor '{}' exited with {}", editor, status);
    }
    Ok(())
}
