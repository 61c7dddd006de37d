use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{read_config, resolve_store_path};
use crate::io::logging::{LogTarget, init_logging};
use crate::io::store::FileStore;
use crate::ops::search::filter_todos;
use crate::screen::TodoScreen;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(cmd) = cli.command else {
        // No subcommand: the TUI sets up its own file logging
        return crate::tui::run(cli.store.as_deref().map(Path::new));
    };

    init_logging(LogTarget::Stderr);
    let mut screen = open_screen(cli.store.as_deref())?;

    match cmd {
        Commands::Add(args) => cmd_add(&mut screen, args),
        Commands::List(args) => cmd_list(&screen, args),
        Commands::Edit(args) => cmd_edit(&mut screen, args),
        Commands::Delete(args) => cmd_delete(&mut screen, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_screen(
    store_override: Option<&str>,
) -> Result<TodoScreen<FileStore>, Box<dyn std::error::Error>> {
    let config = read_config()?;
    let path = resolve_store_path(&config, store_override.map(Path::new));
    Ok(TodoScreen::load(FileStore::open(path)))
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_add(
    screen: &mut TodoScreen<FileStore>,
    args: AddArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match screen.add_text(&args.text)? {
        Some(id) => println!("{}", id),
        None => eprintln!("nothing to add: text is empty"),
    }
    Ok(())
}

fn cmd_list(
    screen: &TodoScreen<FileStore>,
    args: ListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.search.unwrap_or_default();
    let matches = filter_todos(screen.todos(), &query);
    if args.json {
        println!("{}", format_todos_json(&matches)?);
    } else {
        println!("{}", format_todo_lines(&matches));
    }
    Ok(())
}

fn cmd_edit(
    screen: &mut TodoScreen<FileStore>,
    args: EditArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    screen.start_edit(&args.id, &args.text);
    if !screen.commit_edit()? {
        eprintln!("no todo with id {}", args.id);
    }
    Ok(())
}

fn cmd_delete(
    screen: &mut TodoScreen<FileStore>,
    args: DeleteArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !screen.delete(&args.id)? {
        eprintln!("no todo with id {}", args.id);
    }
    Ok(())
}
