use crate::model::{Adr, StatusValue};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const DATE_FORMAT: &str = "%Y-%m-%d";

static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s*(\d+)\.\s*(.+)$").expect("valid regex"));
static DATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Date:\s*(.+)$").expect("valid regex"));
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s*(.+)$").expect("valid regex"));

/// Render an ADR in the fixed section order.
pub fn render_markdown(adr: &Adr) -> String {
    let date = adr
        .date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    let mut output = String::new();
    output.push_str(&format!("# {}. {}\n\n", adr.number, adr.title));
    output.push_str(&format!("Date: {}\n\n", date));

    output.push_str("## Status\n\n");
    output.push_str(&adr.status.to_string());
    output.push('\n');
    for extra in &adr.status_extra {
        output.push('\n');
        output.push_str(extra);
    }
    if !adr.status_extra.is_empty() {
        output.push('\n');
    }
    output.push('\n');

    output.push_str("## Context\n\n");
    output.push_str(&adr.context);
    output.push_str("\n\n");
    output.push_str("## Decision\n\n");
    output.push_str(&adr.decision);
    output.push_str("\n\n");
    output.push_str("## Consequences\n\n");
    output.push_str(&adr.consequences);
    output.push('\n');

    output
}

/// Best-effort parse of an ADR file.
///
/// Never fails: missing sections leave their fields empty, an unreadable
/// date leaves `date` unset and an unknown status is kept verbatim. Lines
/// before the first `##` heading and the bodies of unknown headings are
/// dropped.
pub fn parse_markdown(content: &str) -> Adr {
    let mut adr = Adr::default();
    let mut section: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(caps) = TITLE_LINE.captures(line) {
            adr.number = caps[1].parse().unwrap_or_default();
            adr.title = caps[2].trim().to_string();
            continue;
        }

        if let Some(caps) = DATE_LINE.captures(line) {
            if let Ok(date) = NaiveDate::parse_from_str(caps[1].trim(), DATE_FORMAT) {
                adr.date = Some(date);
            }
            continue;
        }

        if let Some(caps) = HEADING_LINE.captures(line) {
            if let Some(name) = section.take() {
                flush_section(&mut adr, &name, &buffer);
            }
            buffer.clear();
            section = Some(caps[1].trim().to_string());
            continue;
        }

        if section.is_some() {
            buffer.push(line);
        }
    }

    if let Some(name) = section {
        flush_section(&mut adr, &name, &buffer);
    }

    adr
}

fn flush_section(adr: &mut Adr, name: &str, lines: &[&str]) {
    let joined = lines.join("\n");
    let text = joined.trim();

    match name {
        "Status" => {
            let mut status_lines = text.split('\n');
            if let Some(first) = status_lines.next() {
                adr.status = StatusValue::lenient(first);
            }
            adr.status_extra.extend(
                status_lines
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        }
        "Context" => adr.context = text.to_string(),
        "Decision" => adr.decision = text.to_string(),
        "Consequences" => adr.consequences = text.to_string(),
        _ => {}
    }
}
