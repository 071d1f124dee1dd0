use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::open_in_editor;

pub fn handle_new(ctx: &CommandContext, title: Vec<String>, editor: bool, json: bool) -> Result<()> {
    let title = title.join(" ");
    let adr = ctx.store.create(&title)?;
    let path = ctx.store.path_of(&adr);

    if json {
        println!("{}", serde_json::to_string_pretty(&adr)?);
    } else {
        println!(
            "{} {} {}",
            "Created".green(),
            format!("ADR {:04}", adr.number).cyan(),
            path.display()
        );
    }

    if editor {
        open_in_editor(&path)?;
    }
    Ok(())
}
