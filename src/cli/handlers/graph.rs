use crate::graph::{GraphFormat, export};
use anyhow::Result;

use super::CommandContext;

pub fn handle_graph(ctx: &CommandContext, format: GraphFormat) -> Result<()> {
    let adrs = ctx.store.list()?;
    print!("{}", export(&adrs, format)?);
    Ok(())
}
