use std::collections::HashSet;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::debug;

use electron_aliases_cli::cli_args::{Args, Command};
use electron_aliases_cli::interaction::{self, MenuChoice};
use electron_aliases_cli::launch::build_launch_command;
use electron_aliases_core::config::{self, DEFAULT_LAUNCHER};
use electron_aliases_core::error::{Error, Result};
use electron_aliases_core::store::AliasStore;

fn list_aliases(store: &AliasStore) -> Result<()> {
    let records = store.list()?;
    interaction::print_alias_listing(&records);
    Ok(())
}

fn create_alias(store: &AliasStore, alias_path: &str, name: &str, target: &str) -> Result<()> {
    let command = build_launch_command(DEFAULT_LAUNCHER, target);
    store.upsert(name, &command)?;

    println!("Alias `{name}` created for `{target}`");
    interaction::print_source_hint(alias_path);
    Ok(())
}

fn create_alias_interactive(store: &AliasStore, alias_path: &str) -> Result<()> {
    let name = interaction::prompt_alias_name()?;
    let target = interaction::prompt_target()?;

    if !interaction::confirm(&format!("Create alias `{name}` for `{target}`?"), true)? {
        return Err(Error::Cancelled);
    }

    create_alias(store, alias_path, &name, &target)
}

fn remove_aliases_interactive(store: &AliasStore, alias_path: &str) -> Result<()> {
    let records = store.list()?;
    if records.is_empty() {
        println!("No aliases to remove");
        return Ok(());
    }

    let selected = interaction::prompt_removal_selection(&records)?;
    if !interaction::confirm(&format!("Remove {} alias(es)?", selected.len()), false)? {
        return Err(Error::Cancelled);
    }

    let removed = store.delete(&selected)?;
    println!(
        "Removed {removed} alias(es): {}",
        selected.iter().sorted().join(", ")
    );
    interaction::print_source_hint(alias_path);
    Ok(())
}

fn run_menu(store: &AliasStore, alias_path: &str) -> Result<()> {
    println!("electron-aliases: manage your Electron app launchers");

    loop {
        let action = match interaction::prompt_menu_choice()? {
            MenuChoice::List => list_aliases(store),
            MenuChoice::Create => create_alias_interactive(store, alias_path),
            MenuChoice::Remove => remove_aliases_interactive(store, alias_path),
            MenuChoice::Quit => break,
        };

        match action {
            Ok(()) => {}
            Err(Error::Cancelled) => println!("Operation cancelled"),
            // File trouble is reported but does not kill the menu.
            Err(e @ Error::Io { .. }) => eprintln!("{e}"),
            Err(e) => return Err(e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let alias_path = config::get_alias_file_path(&args.alias_file_path);
    let profile_path = config::get_profile_path(&args.profile_path);
    debug!("Alias file: `{alias_path}`, profile: `{profile_path}`");

    let store = AliasStore::new(alias_path.clone(), profile_path);

    match args.command {
        Some(Command::List) => list_aliases(&store),
        Some(Command::Add { name, target }) => create_alias(&store, &alias_path, &name, &target),
        Some(Command::Remove { names }) => {
            let selection: HashSet<String> = names.into_iter().collect();
            let removed = store.delete(&selection)?;
            println!("Removed {removed} alias(es)");
            Ok(())
        }
        None => run_menu(&store, &alias_path),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
