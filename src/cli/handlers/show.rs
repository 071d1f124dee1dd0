use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::status_badge;

pub fn handle_show(ctx: &CommandContext, number: u32, json: bool) -> Result<()> {
    let adr = ctx.store.find_by_number(number)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&adr)?);
    } else {
        println!(
            "{} {}",
            format!("ADR {:04}", adr.number).cyan().bold(),
            status_badge(&adr.status)
        );
        println!();
        print!("{}", adr.to_markdown());
    }
    Ok(())
}
