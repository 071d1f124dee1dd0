use crate::model::Status;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_adr_list;

/// Parameters for list operation
pub struct ListParams {
    pub status: Option<Status>,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    let mut adrs = ctx.store.list()?;

    if let Some(status) = params.status {
        adrs.retain(|a| a.status.is(status));
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&adrs)?);
    } else {
        print_adr_list(&adrs);
    }
    Ok(())
}
