//! Interactive prompts and terminal output for the alias menu.
//!
//! All prompting is plain line-oriented stdin reading with crossterm
//! styling; validation failures re-prompt instead of erroring out.

use std::collections::HashSet;
use std::io::{stdin, stdout, Write};

use crossterm::style::Stylize;
use itertools::Itertools;

use electron_aliases_core::alias_line::{validate_name, AliasRecord};
use electron_aliases_core::error::Result;

/// Longest command text shown in the listing before truncation.
const COMMAND_DISPLAY_WIDTH: usize = 60;

pub enum MenuChoice {
    List,
    Create,
    Remove,
    Quit,
}

fn read_trimmed_line() -> Result<String> {
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Shows the main menu and reads a choice, re-prompting on anything else.
pub fn prompt_menu_choice() -> Result<MenuChoice> {
    loop {
        println!();
        println!("  [{}] List all aliases", "l".green());
        println!("  [{}] Create new alias", "c".blue());
        println!("  [{}] Remove aliases", "r".red());
        println!("  [{}] Quit", "q".grey());
        print!("What would you like to do? ");
        stdout().flush()?;

        match read_trimmed_line()?.to_lowercase().as_str() {
            "l" => return Ok(MenuChoice::List),
            "c" => return Ok(MenuChoice::Create),
            "r" => return Ok(MenuChoice::Remove),
            "q" => return Ok(MenuChoice::Quit),
            _ => {}
        }
    }
}

/// Prompts for an alias name until it passes validation.
pub fn prompt_alias_name() -> Result<String> {
    loop {
        print!("Enter alias name: ");
        stdout().flush()?;

        let name = read_trimmed_line()?;
        match validate_name(&name) {
            Ok(()) => return Ok(name),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Prompts for the application URL or path until non-empty.
pub fn prompt_target() -> Result<String> {
    loop {
        print!("Enter application URL or path: ");
        stdout().flush()?;

        let target = read_trimmed_line()?;
        if !target.is_empty() {
            return Ok(target);
        }

        println!("{}", "URL/path cannot be empty".red());
    }
}

/// Asks a yes/no question; empty input takes the default.
pub fn confirm(question: &str, default_yes: bool) -> Result<bool> {
    let options = if default_yes { "[Y]es/[n]o" } else { "[y]es/[N]o" };

    loop {
        print!("{question} ({options}): ");
        stdout().flush()?;

        match read_trimmed_line()?.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            "" => return Ok(default_yes),
            _ => {}
        }
    }
}

fn truncated_command(record: &AliasRecord) -> String {
    if record.command.chars().count() > COMMAND_DISPLAY_WIDTH {
        let head: String = record
            .command
            .chars()
            .take(COMMAND_DISPLAY_WIDTH - 3)
            .collect();
        format!("{head}...")
    } else {
        record.command.clone()
    }
}

/// Prints the numbered alias listing, or a hint when there is none yet.
pub fn print_alias_listing(records: &[AliasRecord]) {
    if records.is_empty() {
        println!(
            "{}",
            "No aliases found yet. Create your first alias to get started.".yellow()
        );
        return;
    }

    let name_width = records
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or_default();

    println!();
    for (index, record) in records.iter().enumerate() {
        // Pad before styling so the ANSI escapes do not count towards width.
        println!(
            "  {:>3}  {}  {}",
            index + 1,
            format!("{:<name_width$}", record.name).green().bold(),
            truncated_command(record).grey()
        );
    }
    println!();
}

/// Prompts for the aliases to remove, by number or name, until at least one
/// valid selection is made.
pub fn prompt_removal_selection(records: &[AliasRecord]) -> Result<HashSet<String>> {
    print_alias_listing(records);

    loop {
        print!("Select aliases to remove (numbers or names, space separated): ");
        stdout().flush()?;

        let input = read_trimmed_line()?;
        let mut selected = HashSet::new();
        let mut unknown = Vec::new();

        for token in input.split_whitespace() {
            if let Ok(index) = token.parse::<usize>() {
                match index.checked_sub(1).and_then(|i| records.get(i)) {
                    Some(record) => {
                        selected.insert(record.name.clone());
                        continue;
                    }
                    None => {
                        unknown.push(token);
                        continue;
                    }
                }
            }

            if records.iter().any(|r| r.name == token) {
                selected.insert(token.to_string());
            } else {
                unknown.push(token);
            }
        }

        if !unknown.is_empty() {
            println!(
                "{} {}",
                "Not found:".red(),
                unknown.iter().join(", ").red()
            );
            continue;
        }

        if selected.is_empty() {
            println!("{}", "Please select at least one alias".red());
            continue;
        }

        return Ok(selected);
    }
}

/// Reminds the user that an already-open shell does not pick up the change.
pub fn print_source_hint(alias_path: &str) {
    println!(
        "{} Run `{}` or open a new terminal to apply the change",
        "Note:".yellow(),
        format!("source {alias_path}").bold()
    );
}
