//! Wmtune CLI - seed and tune a bspwm desktop environment.

use clap::Parser;
use std::process;
use wmtune::cli::{BarCommands, Cli, Commands, HotkeyCommands};
use wmtune::commands::{self, Output};
use wmtune::config::ConfigRoot;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let root = match ConfigRoot::resolve(cli.config_dir) {
        Ok(root) => root,
        Err(e) => fail(&e, json),
    };

    if let Err(e) = run_command(cli.command, &root, json) {
        fail(&e, json);
    }
}

fn fail(e: &wmtune::Error, json: bool) -> ! {
    if json {
        eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
    } else {
        eprintln!("Error: {}", e);
    }
    process::exit(1);
}

fn run_command(command: Commands, root: &ConfigRoot, json: bool) -> Result<(), wmtune::Error> {
    match command {
        Commands::Gap { pixels } => output(&commands::gap(root, &pixels)?, json),
        Commands::Border { pixels } => output(&commands::border(root, &pixels)?, json),

        Commands::Hotkey { command } => match command {
            HotkeyCommands::Rename { action, trigger } => {
                output(&commands::hotkey_rename(root, &action, &trigger)?, json)
            }
            HotkeyCommands::Add { trigger, action } => {
                output(&commands::hotkey_add(root, &trigger, &action)?, json)
            }
            HotkeyCommands::Remove { action } => {
                output(&commands::hotkey_remove(root, &action)?, json)
            }
        },

        Commands::Bar { command } => match command {
            BarCommands::Font { name } => output(&commands::bar_font(root, &name)?, json),
            BarCommands::Colors {
                background,
                foreground,
                accent,
            } => output(
                &commands::bar_colors(
                    root,
                    background.as_deref(),
                    foreground.as_deref(),
                    accent.as_deref(),
                )?,
                json,
            ),
            BarCommands::Modules { modules } => {
                output(&commands::bar_modules(root, &modules)?, json)
            }
        },

        Commands::Seed { force } => output(&commands::seed(root, force)?, json),
        Commands::Show => output(&commands::show(root)?, json),
    }
    Ok(())
}

fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}
