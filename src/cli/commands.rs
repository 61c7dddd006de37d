use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jot", about = concat!("jot v", env!("CARGO_PKG_VERSION"), " - a single-screen to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use a specific store file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a todo (prints its id)
    Add(AddArgs),
    /// List todos, optionally filtered by a search string
    List(ListArgs),
    /// Replace a todo's text
    Edit(EditArgs),
    /// Permanently delete a todo
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo text
    pub text: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show todos containing this text (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Todo id
    pub id: String,
    /// New text (may be empty)
    pub text: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Todo id
    pub id: String,
}
