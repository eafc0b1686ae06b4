use clap::Parser;
use daylist::cli::commands::{Cli, Commands};
use daylist::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let store_dir = cli.store_dir.clone();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => daylist::tui::run(store_dir.as_deref()),
        Some(Commands::Init) => handlers::cmd_init(&store_dir),
        Some(Commands::Add(args)) => handlers::cmd_add(&store_dir, args, cli.json),
        Some(Commands::List) => handlers::cmd_list(&store_dir, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
