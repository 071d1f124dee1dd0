//! Relations between ADRs.
//!
//! A relation is recorded as a plain status line on both records, e.g.
//! `Supersedes [ADR-0001](0001-use-mysql.md)` on the newer one and
//! `Superseded by [ADR-0002](0002-use-postgresql.md)` on the older one.
//! Those lines are the only record of the link; [`parse_links`] reads them
//! back whenever the graph is needed.

use crate::error::{Result, StampError};
use crate::model::{Adr, Status, StatusValue};
use crate::storage::AdrStore;
use regex::Regex;
use serde::Serialize;
use std::{fmt, str::FromStr, sync::LazyLock};

static LINK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Supersedes|Superseded by|Amends|Amended by|Clarifies|Clarified by)\s+\[ADR-(\d+)\]",
    )
    .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    Supersedes,
    SupersededBy,
    Amends,
    AmendedBy,
    Clarifies,
    ClarifiedBy,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::Supersedes,
        Relation::SupersededBy,
        Relation::Amends,
        Relation::AmendedBy,
        Relation::Clarifies,
        Relation::ClarifiedBy,
    ];

    /// Command-line token, e.g. `superseded-by`.
    pub fn token(self) -> &'static str {
        match self {
            Relation::Supersedes => "supersedes",
            Relation::SupersededBy => "superseded-by",
            Relation::Amends => "amends",
            Relation::AmendedBy => "amended-by",
            Relation::Clarifies => "clarifies",
            Relation::ClarifiedBy => "clarified-by",
        }
    }

    /// Label written into the status section, e.g. `Superseded by`.
    pub fn label(self) -> &'static str {
        match self {
            Relation::Supersedes => "Supersedes",
            Relation::SupersededBy => "Superseded by",
            Relation::Amends => "Amends",
            Relation::AmendedBy => "Amended by",
            Relation::Clarifies => "Clarifies",
            Relation::ClarifiedBy => "Clarified by",
        }
    }

    pub fn from_label(label: &str) -> Option<Relation> {
        Relation::ALL.into_iter().find(|r| r.label() == label)
    }

    pub fn reciprocal(self) -> Relation {
        match self {
            Relation::Supersedes => Relation::SupersededBy,
            Relation::SupersededBy => Relation::Supersedes,
            Relation::Amends => Relation::AmendedBy,
            Relation::AmendedBy => Relation::Amends,
            Relation::Clarifies => Relation::ClarifiedBy,
            Relation::ClarifiedBy => Relation::Clarifies,
        }
    }

    /// Forward relations are the ones whose label does not end in "by".
    pub fn is_forward(self) -> bool {
        matches!(
            self,
            Relation::Supersedes | Relation::Amends | Relation::Clarifies
        )
    }

    fn valid_list() -> String {
        Relation::ALL
            .iter()
            .map(|r| r.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Relation {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Relation::ALL
            .into_iter()
            .find(|r| r.token() == normalized)
            .ok_or_else(|| {
                StampError::Validation(format!(
                    "invalid relation: {} (valid: {})",
                    s,
                    Relation::valid_list()
                ))
            })
    }
}

/// A directed edge reconstructed from a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: u32,
    pub target: u32,
    pub relation: Relation,
}

/// Extract every relation line from an ADR's status section.
pub fn parse_links(adr: &Adr) -> Vec<Link> {
    adr.status_extra
        .iter()
        .filter_map(|line| {
            let caps = LINK_LINE.captures(line)?;
            let relation = Relation::from_label(&caps[1])?;
            let target = caps[2].parse().ok()?;
            Some(Link {
                source: adr.number,
                target,
                relation,
            })
        })
        .collect()
}

/// The status line pointing at `target`.
pub fn link_line(relation: Relation, target: &Adr) -> String {
    format!(
        "{} [ADR-{:04}]({})",
        relation.label(),
        target.number,
        target.filename_or_default()
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTransition {
    pub number: u32,
    pub from: StatusValue,
    pub to: Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkOutcome {
    pub source: Adr,
    pub target: Adr,
    pub relation: Relation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<StatusTransition>,
}

/// Link two stored ADRs in both directions and persist them.
///
/// `supersedes` marks the target Superseded and `superseded-by` marks the
/// source. The source is written first; if writing the target then fails,
/// the source file is put back as it was and the target's error is returned.
pub fn link(
    store: &AdrStore,
    source_number: u32,
    target_number: u32,
    relation: Relation,
) -> Result<LinkOutcome> {
    let mut source = store
        .find_by_number(source_number)
        .map_err(|e| endpoint_error(e, "source", source_number))?;

    if source_number == target_number {
        return link_to_self(store, source, relation);
    }

    let mut target = store
        .find_by_number(target_number)
        .map_err(|e| endpoint_error(e, "target", target_number))?;

    source.status_extra.push(link_line(relation, &target));
    target
        .status_extra
        .push(link_line(relation.reciprocal(), &source));

    let transition = match relation {
        Relation::Supersedes => Some(supersede(&mut target)),
        Relation::SupersededBy => Some(supersede(&mut source)),
        _ => None,
    };

    persist_pair(store, &mut source, &mut target)?;

    tracing::info!(
        source = source_number,
        target = target_number,
        relation = %relation,
        "Linked ADRs"
    );

    Ok(LinkOutcome {
        source,
        target,
        relation,
        transition,
    })
}

/// Save `source` then `target`, putting the source file back if the second
/// write fails.
fn persist_pair(store: &AdrStore, source: &mut Adr, target: &mut Adr) -> Result<()> {
    let source_filename = source.filename_or_default();
    let source_backup = store.read_raw(&source_filename)?;

    store.save(source)?;
    if let Err(e) = store.save(target) {
        tracing::warn!(
            source = source.number,
            target = target.number,
            error = %e,
            "Saving link target failed, restoring source"
        );
        if let Err(restore_err) = store.restore_raw(&source_filename, &source_backup) {
            tracing::error!(
                file = %source_filename,
                error = %restore_err,
                "Failed to restore source ADR"
            );
        }
        return Err(e);
    }
    Ok(())
}

// Both lines land on the same record, so it is written once.
fn link_to_self(store: &AdrStore, mut adr: Adr, relation: Relation) -> Result<LinkOutcome> {
    let forward = link_line(relation, &adr);
    let backward = link_line(relation.reciprocal(), &adr);
    adr.status_extra.push(forward);
    adr.status_extra.push(backward);

    let transition = match relation {
        Relation::Supersedes | Relation::SupersededBy => Some(supersede(&mut adr)),
        _ => None,
    };

    store.save(&mut adr)?;
    tracing::info!(number = adr.number, relation = %relation, "Linked ADR to itself");

    Ok(LinkOutcome {
        source: adr.clone(),
        target: adr,
        relation,
        transition,
    })
}

fn supersede(adr: &mut Adr) -> StatusTransition {
    let from = std::mem::replace(&mut adr.status, Status::Superseded.into());
    StatusTransition {
        number: adr.number,
        from,
        to: Status::Superseded,
    }
}

fn endpoint_error(err: StampError, side: &'static str, number: u32) -> StampError {
    match err {
        StampError::NotFound(_) => StampError::LinkEndpointNotFound { side, number },
        other => other,
    }
}
