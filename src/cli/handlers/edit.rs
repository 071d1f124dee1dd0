use anyhow::Result;

use super::CommandContext;
use super::utils::open_in_editor;

pub fn handle_edit(ctx: &CommandContext, number: u32) -> Result<()> {
    let adr = ctx.store.find_by_number(number)?;
    open_in_editor(&ctx.store.path_of(&adr))
}
