use super::filename::format_filename;
use super::types::{Status, StatusValue};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_CONTEXT: &str = "[Why is this decision needed?]";
pub const PLACEHOLDER_DECISION: &str = "[What was decided?]";
pub const PLACEHOLDER_CONSEQUENCES: &str = "[What are the implications?]";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Adr {
    pub number: u32,
    pub title: String,

    /// `None` when the file has no `Date:` line or it is not `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub status: StatusValue,

    /// Lines under the status value, in file order. Relation links live here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_extra: Vec<String>,

    #[serde(default)]
    pub context: String,

    #[serde(default)]
    pub decision: String,

    #[serde(default)]
    pub consequences: String,

    /// Set once the record has been saved or loaded; never recomputed after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Adr {
    /// A fresh Draft dated today, with placeholder prose.
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            date: Some(Local::now().date_naive()),
            status: Status::Draft.into(),
            status_extra: Vec::new(),
            context: PLACEHOLDER_CONTEXT.to_string(),
            decision: PLACEHOLDER_DECISION.to_string(),
            consequences: PLACEHOLDER_CONSEQUENCES.to_string(),
            filename: None,
        }
    }

    /// ADR 0001 written by `stamp init`.
    pub fn initial_record() -> Self {
        Self::new(1, "Record architecture decisions")
            .with_status(Status::Accepted)
            .with_context(
                "We need to record the architectural decisions made on this project so that future\n\
                 team members (and our future selves) can understand the reasoning behind our choices.\n\
                 \n\
                 Without documented decisions, teams often revisit the same discussions, forget why\n\
                 certain approaches were chosen, or make changes that conflict with earlier decisions.",
            )
            .with_decision(
                "We will use Architecture Decision Records (ADRs) as described by Michael Nygard\n\
                 in his article [Documenting Architecture Decisions](https://cognitect.com/blog/2011/11/15/documenting-architecture-decisions).\n\
                 \n\
                 See [adr.github.io](https://adr.github.io/) for more information on ADRs.",
            )
            .with_consequences(
                "- All significant architecture decisions will be documented in this directory\n\
                 - ADRs are numbered sequentially and never deleted (superseded instead)\n\
                 - Each ADR describes the context, decision, and consequences\n\
                 - Team members should review existing ADRs before proposing conflicting changes",
            )
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_decision(mut self, decision: impl Into<String>) -> Self {
        self.decision = decision.into();
        self
    }

    pub fn with_consequences(mut self, consequences: impl Into<String>) -> Self {
        self.consequences = consequences.into();
        self
    }

    pub fn with_status_extra(mut self, line: impl Into<String>) -> Self {
        self.status_extra.push(line.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The stored filename, or the one `save` would assign.
    pub fn filename_or_default(&self) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| format_filename(self.number, &self.title))
    }

    /// Serialized markdown, as written to disk.
    pub fn to_markdown(&self) -> String {
        crate::storage::render_markdown(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_draft_with_placeholders() {
        let adr = Adr::new(4, "Use Redis");
        assert_eq!(adr.number, 4);
        assert_eq!(adr.title, "Use Redis");
        assert_eq!(adr.status, StatusValue::Known(Status::Draft));
        assert_eq!(adr.date, Some(Local::now().date_naive()));
        assert_eq!(adr.context, PLACEHOLDER_CONTEXT);
        assert_eq!(adr.decision, PLACEHOLDER_DECISION);
        assert_eq!(adr.consequences, PLACEHOLDER_CONSEQUENCES);
        assert!(adr.status_extra.is_empty());
        assert!(adr.filename.is_none());
    }

    #[test]
    fn test_filename_or_default() {
        let adr = Adr::new(7, "Use Event Sourcing");
        assert_eq!(adr.filename_or_default(), "0007-use-event-sourcing.md");

        let custom = adr.with_filename("custom.md");
        assert_eq!(custom.filename_or_default(), "custom.md");
    }

    #[test]
    fn test_initial_record() {
        let adr = Adr::initial_record();
        assert_eq!(adr.number, 1);
        assert!(adr.status.is(Status::Accepted));
        assert_eq!(adr.filename_or_default(), "0001-record-architecture-decisions.md");
        assert!(adr.decision.contains("Michael Nygard"));
    }
}
