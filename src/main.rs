use anyhow::Result;
use clap::Parser;

use stamp::cli::handlers::{self, CommandContext, ListParams};
use stamp::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    stamp::logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;

    // Init creates the configuration, so it runs without a context
    if let Commands::Init { directory } = cli.command {
        return handlers::handle_init(&cwd, directory);
    }

    let ctx = CommandContext::resolve(&cwd, cli.dir.clone())?;

    match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::New {
            title,
            editor,
            json,
        } => handlers::handle_new(&ctx, title, editor, json),
        Commands::List { status, json } => {
            handlers::handle_list(&ctx, ListParams { status, json })
        }
        Commands::Show { number, json } => handlers::handle_show(&ctx, number, json),
        Commands::Edit { number } => handlers::handle_edit(&ctx, number),
        Commands::Status {
            number,
            status,
            json,
        } => handlers::handle_status(&ctx, number, status, json),
        Commands::Link {
            source,
            target,
            relation,
            json,
        } => handlers::handle_link(&ctx, source, target, relation, json),
        Commands::Graph { format } => handlers::handle_graph(&ctx, format),
    }
}
