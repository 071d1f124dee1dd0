use crate::model::{Status, StatusValue};
use crate::relation::StatusTransition;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_transition;

pub fn handle_status(ctx: &CommandContext, number: u32, status: Status, json: bool) -> Result<()> {
    let mut adr = ctx.store.find_by_number(number)?;

    let transition = StatusTransition {
        number,
        from: std::mem::replace(&mut adr.status, StatusValue::Known(status)),
        to: status,
    };
    ctx.store.save(&mut adr)?;

    tracing::info!(number, status = %status, "Updated ADR status");

    if json {
        println!("{}", serde_json::to_string_pretty(&adr)?);
    } else {
        print_transition(&transition);
    }
    Ok(())
}
