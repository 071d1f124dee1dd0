//! Graph export of ADR relations
//!
//! Renders the relation lines of a collection as a Mermaid flowchart or a
//! Graphviz DOT digraph. Only forward relations (supersedes, amends,
//! clarifies) become edges, and each ordered pair of records is drawn once,
//! so a link recorded on both of its ends shows up as a single arrow.

use crate::error::{Result, StampError};
use crate::model::{Adr, Status};
use crate::relation::{Link, Relation, parse_links};
use std::collections::HashSet;
use std::{fmt, str::FromStr};

const TITLE_MAX: usize = 30;
const NEUTRAL_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    #[default]
    Mermaid,
    Dot,
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Mermaid => write!(f, "mermaid"),
            GraphFormat::Dot => write!(f, "dot"),
        }
    }
}

impl FromStr for GraphFormat {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mermaid" => Ok(GraphFormat::Mermaid),
            "dot" => Ok(GraphFormat::Dot),
            _ => Err(StampError::Validation(format!(
                "invalid format: {} (valid: mermaid, dot)",
                s
            ))),
        }
    }
}

/// Render `adrs` in the requested format. An empty collection is an error.
pub fn export(adrs: &[Adr], format: GraphFormat) -> Result<String> {
    if adrs.is_empty() {
        return Err(StampError::NoAdrs);
    }
    Ok(match format {
        GraphFormat::Mermaid => render_mermaid(adrs),
        GraphFormat::Dot => render_dot(adrs),
    })
}

/// Forward edges across the collection, first occurrence of each pair kept.
pub fn edges(adrs: &[Adr]) -> Vec<Link> {
    let mut seen = HashSet::new();
    adrs.iter()
        .flat_map(parse_links)
        .filter(|link| link.relation.is_forward())
        .filter(|link| seen.insert(format!("{}-{}", link.source, link.target)))
        .collect()
}

fn fill_color(status: Status) -> &'static str {
    match status {
        Status::Draft => "#6b7280",
        Status::Proposed => "#3b82f6",
        Status::Accepted => "#22c55e",
        Status::Deprecated => "#f59e0b",
        Status::Superseded => "#a855f7",
        Status::Rejected => "#ef4444",
    }
}

fn stroke_color(status: Status) -> &'static str {
    match status {
        Status::Draft => "#374151",
        Status::Proposed => "#1d4ed8",
        Status::Accepted => "#15803d",
        Status::Deprecated => "#d97706",
        Status::Superseded => "#7e22ce",
        Status::Rejected => "#b91c1c",
    }
}

fn mermaid_arrow(relation: Relation) -> String {
    let label = relation.label().to_lowercase();
    match relation {
        Relation::Supersedes | Relation::SupersededBy => format!("-->|{}|", label),
        _ => format!("-.->|{}|", label),
    }
}

fn is_dashed(relation: Relation) -> bool {
    matches!(relation, Relation::Amends | Relation::Clarifies)
}

fn node_label(adr: &Adr) -> String {
    let title = if adr.title.chars().count() > TITLE_MAX {
        let head: String = adr.title.chars().take(TITLE_MAX - 3).collect();
        format!("{}...", head)
    } else {
        adr.title.clone()
    };
    format!("{:04}: {}", adr.number, title)
}

fn escape_mermaid(s: &str) -> String {
    s.replace('"', "#quot;")
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn render_mermaid(adrs: &[Adr]) -> String {
    let mut out = String::new();
    out.push_str("graph TD\n");

    for status in Status::ALL {
        out.push_str(&format!(
            "    classDef {} fill:{},stroke:{}\n",
            status.css_class(),
            fill_color(status),
            stroke_color(status)
        ));
    }
    out.push('\n');

    for adr in adrs {
        let class = adr
            .status
            .style_key()
            .map(|s| format!(":::{}", s.css_class()))
            .unwrap_or_default();
        out.push_str(&format!(
            "    ADR{}[\"{}\"]{}\n",
            adr.number,
            escape_mermaid(&node_label(adr)),
            class
        ));
    }
    out.push('\n');

    for link in edges(adrs) {
        out.push_str(&format!(
            "    ADR{} {} ADR{}\n",
            link.source,
            mermaid_arrow(link.relation),
            link.target
        ));
    }

    out
}

pub fn render_dot(adrs: &[Adr]) -> String {
    let mut out = String::new();
    out.push_str("digraph ADRs {\n");
    out.push_str("    rankdir=TB;\n");
    out.push_str("    node [shape=box, style=rounded];\n");
    out.push('\n');

    for adr in adrs {
        let color = adr.status.style_key().map(fill_color).unwrap_or(NEUTRAL_COLOR);
        out.push_str(&format!(
            "    ADR{} [label=\"{}\", fillcolor=\"{}\", style=\"filled,rounded\", fontcolor=\"white\"];\n",
            adr.number,
            escape_dot(&node_label(adr)),
            color
        ));
    }
    out.push('\n');

    for link in edges(adrs) {
        let style = if is_dashed(link.relation) { "dashed" } else { "solid" };
        out.push_str(&format!(
            "    ADR{} -> ADR{} [label=\"{}\", style={}];\n",
            link.source,
            link.target,
            link.relation.label().to_lowercase(),
            style
        ));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusValue;

    fn sample_adrs() -> Vec<Adr> {
        vec![
            Adr::new(1, "Use MySQL")
                .with_status(Status::Superseded)
                .with_status_extra("Superseded by [ADR-0002](0002-use-postgresql.md)")
                .with_status_extra("Clarified by [ADR-0003](0003-connection-pooling.md)"),
            Adr::new(2, "Use PostgreSQL")
                .with_status(Status::Accepted)
                .with_status_extra("Supersedes [ADR-0001](0001-use-mysql.md)"),
            Adr::new(3, "Connection pooling")
                .with_status(Status::Proposed)
                .with_status_extra("Clarifies [ADR-0001](0001-use-mysql.md)")
                .with_status_extra("Free text that is not a link"),
        ]
    }

    #[test]
    fn test_edges_forward_only_and_deduplicated() {
        let mut adrs = sample_adrs();
        // The same pair recorded twice
        adrs[1]
            .status_extra
            .push("Supersedes [ADR-0001](0001-use-mysql.md)".to_string());

        let edges = edges(&adrs);
        assert_eq!(
            edges,
            vec![
                Link { source: 2, target: 1, relation: Relation::Supersedes },
                Link { source: 3, target: 1, relation: Relation::Clarifies },
            ]
        );
    }

    #[test]
    fn test_render_mermaid() {
        let output = render_mermaid(&sample_adrs());

        assert!(output.starts_with("graph TD\n"));
        assert!(output.contains("    classDef superseded fill:#a855f7,stroke:#7e22ce\n"));
        assert!(output.contains("    ADR1[\"0001: Use MySQL\"]:::superseded\n"));
        assert!(output.contains("    ADR2[\"0002: Use PostgreSQL\"]:::accepted\n"));
        assert!(output.contains("    ADR2 -->|supersedes| ADR1\n"));
        assert!(output.contains("    ADR3 -.->|clarifies| ADR1\n"));
        assert_eq!(output.matches("ADR2 -->").count(), 1);
        assert!(!output.contains("superseded by|"));
    }

    #[test]
    fn test_render_dot() {
        let output = render_dot(&sample_adrs());

        assert!(output.starts_with("digraph ADRs {\n"));
        assert!(output.ends_with("}\n"));
        assert!(output.contains(
            "    ADR2 [label=\"0002: Use PostgreSQL\", fillcolor=\"#22c55e\", style=\"filled,rounded\", fontcolor=\"white\"];\n"
        ));
        assert!(output.contains("    ADR2 -> ADR1 [label=\"supersedes\", style=solid];\n"));
        assert!(output.contains("    ADR3 -> ADR1 [label=\"clarifies\", style=dashed];\n"));
        assert_eq!(output.matches(" -> ").count(), 2);
    }

    #[test]
    fn test_unrecognized_status_uses_neutral_style() {
        let mut adr = Adr::new(5, "Odd");
        adr.status = StatusValue::Unrecognized("WIP".to_string());

        let mermaid = render_mermaid(std::slice::from_ref(&adr));
        assert!(mermaid.contains("    ADR5[\"0005: Odd\"]\n"));

        let dot = render_dot(&[adr]);
        assert!(dot.contains("fillcolor=\"#6b7280\""));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let adr = Adr::new(4, "An exceptionally long decision title here");
        assert_eq!(node_label(&adr), "0004: An exceptionally long decis...");

        let exact = Adr::new(5, "x".repeat(30));
        assert_eq!(node_label(&exact), format!("0005: {}", "x".repeat(30)));
    }

    #[test]
    fn test_labels_are_escaped() {
        let adr = Adr::new(6, "Say \"no\"");
        assert!(render_mermaid(std::slice::from_ref(&adr)).contains("0006: Say #quot;no#quot;"));
        assert!(render_dot(&[adr]).contains("0006: Say \\\"no\\\""));
    }

    #[test]
    fn test_export_errors() {
        assert!(matches!(export(&[], GraphFormat::Mermaid), Err(StampError::NoAdrs)));

        let err = "svg".parse::<GraphFormat>().unwrap_err();
        assert_eq!(err.to_string(), "invalid format: svg (valid: mermaid, dot)");
        assert_eq!("DOT".parse::<GraphFormat>().unwrap(), GraphFormat::Dot);
    }
}
