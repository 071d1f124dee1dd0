use crate::relation::{Relation, link};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::print_transition;

pub fn handle_link(
    ctx: &CommandContext,
    source: u32,
    target: u32,
    relation: Relation,
    json: bool,
) -> Result<()> {
    let outcome = link(&ctx.store, source, target, relation)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {} {} {} ({})",
        "Linked".green(),
        format!("ADR-{:04}", source).cyan(),
        "→".magenta(),
        format!("ADR-{:04}", target).cyan(),
        relation.label()
    );
    if let Some(ref transition) = outcome.transition {
        print_transition(transition);
    }
    Ok(())
}
