use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[+] tick v", env!("CARGO_PKG_VERSION"), " - a to-do list that stays out of the way"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different task file
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// List all tasks
    List,
    /// Toggle a task's completion state
    Toggle(IdArgs),
    /// Change a task's description
    Edit(EditArgs),
    /// Delete a task
    Delete(IdArgs),
    /// Print the task file path
    Path,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task description
    pub description: String,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task id (as shown by `tick list`)
    pub id: u64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id (as shown by `tick list`)
    pub id: u64,
    /// New description
    pub description: String,
}
