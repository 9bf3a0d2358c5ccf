use crate::cli::commands::{AddArgs, Cli, Commands, EditArgs, IdArgs};
use crate::cli::output;
use crate::io::store_io;
use crate::model::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let path = store_io::resolve_store_path(cli.file.as_deref())?;
    let mut store = TaskStore::load(path);

    match cli.command {
        // No subcommand → TUI, handled in main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(&mut store, args, json),
            Commands::List => {
                output::print_tasks(store.tasks(), json);
                Ok(())
            }
            Commands::Toggle(args) => cmd_toggle(&mut store, &args, json),
            Commands::Edit(args) => cmd_edit(&mut store, args, json),
            Commands::Delete(args) => cmd_delete(&mut store, &args, json),
            Commands::Path => {
                println!("{}", store.path().display());
                Ok(())
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(
    store: &mut TaskStore,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = args.description.trim().to_string();
    if description.is_empty() {
        return Err("cannot add an empty task".into());
    }
    let id = store.add(description);
    match store.get(id) {
        Some(task) => output::print_task(task, json),
        None => println!("added {id}"),
    }
    Ok(())
}

fn cmd_toggle(
    store: &mut TaskStore,
    args: &IdArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !store.toggle(args.id) {
        println!("no task with id {}", args.id);
        return Ok(());
    }
    if let Some(task) = store.get(args.id) {
        output::print_task(task, json);
    }
    Ok(())
}

fn cmd_edit(
    store: &mut TaskStore,
    args: EditArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let description = args.description.trim().to_string();
    if description.is_empty() {
        return Err("cannot set an empty description".into());
    }
    if !store.edit(args.id, description) {
        println!("no task with id {}", args.id);
        return Ok(());
    }
    if let Some(task) = store.get(args.id) {
        output::print_task(task, json);
    }
    Ok(())
}

fn cmd_delete(
    store: &mut TaskStore,
    args: &IdArgs,
    _json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if store.delete(args.id) {
        println!("deleted {}", args.id);
    } else {
        println!("no task with id {}", args.id);
    }
    Ok(())
}
