use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "day", about = concat!("[*] daylist v", env!("CARGO_PKG_VERSION"), " - one list for today"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store directory
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a task store in the current directory
    Init,
    /// Add an item to the list
    Add(AddArgs),
    /// List items
    List,
}

#[derive(Args)]
pub struct AddArgs {
    /// Item title
    pub title: Vec<String>,
    /// Attach a note
    #[arg(long)]
    pub note: Option<String>,
}
