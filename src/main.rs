//! rollcall CLI entry point.
//!
//! A thin shell over the view model: every command opens the store, takes a
//! fresh snapshot, applies one action and prints the resulting list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use rollcall::infra::app_config::load_config;
use rollcall::state::ViewState;
use rollcall::{
    Action, EntryFilter, EntryId, ListProfile, ListStore, StorageLocation, ViewModel,
};

#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version)]
#[command(about = "Keep a local list of tasks or party members", long_about = None)]
struct Args {
    /// Database file (defaults to the app data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// List profile: tasks or party
    #[arg(long, global = true)]
    profile: Option<ListProfile>,

    /// Do not insert the profile's default entries into an empty list
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the list, newest first
    List {
        /// all, flagged or unflagged
        #[arg(long, default_value = "all")]
        filter: EntryFilter,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an entry
    Add {
        /// Label words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        label: Vec<String>,
    },

    /// Flip the flag of an entry
    Toggle { id: EntryId },

    /// Remove an entry
    Remove {
        id: EntryId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the database location
    Path,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config();
    let profile = args.profile.unwrap_or(config.profile);
    let db_path = args.db.clone().unwrap_or_else(|| config.resolve_db_path());

    let command = args.command.unwrap_or(Commands::List {
        filter: EntryFilter::All,
        json: false,
    });

    if let Commands::Path = command {
        println!("{}", db_path.display());
        return Ok(());
    }

    let store = ListStore::open(StorageLocation::File(db_path.clone()))
        .with_context(|| format!("Failed to initialize database at {}", db_path.display()))?;

    if !(args.no_seed || config.skip_seed) {
        store.seed_if_empty(&profile.default_entries())?;
    }

    let mut vm = ViewModel::load(&store)?;

    match command {
        Commands::List { filter, json } => {
            vm.dispatch(&store, Action::SetFilter(filter))?;
            if json {
                let visible = vm.state.visible();
                println!("{}", serde_json::to_string_pretty(&visible)?);
                return Ok(());
            }
        }
        Commands::Add { label } => {
            vm.dispatch(&store, Action::EditInput(label.join(" ")))?;
            vm.dispatch(&store, Action::Submit)?;
            if !vm.state.input.is_empty() {
                eprintln!("Nothing to add: label is blank");
            }
        }
        Commands::Toggle { id } => {
            vm.dispatch(&store, Action::Toggle(id))?;
            let noun = profile.flag_noun();
            match vm.state.snapshot.iter().find(|e| e.id == id) {
                Some(entry) if entry.flag => println!("#{id} {} is now {noun}", entry.label),
                Some(entry) => println!("#{id} {} is no longer {noun}", entry.label),
                None => eprintln!("No entry #{id}"),
            }
        }
        Commands::Remove { id, yes } => {
            vm.dispatch(&store, Action::RequestRemove(id))?;
            let Some(label) = vm.state.pending_removal_entry().map(|e| e.label.clone()) else {
                vm.dispatch(&store, Action::CancelRemove)?;
                eprintln!("No entry #{id}");
                return Ok(());
            };
            if yes || confirm(&format!("Remove \"{label}\"?"))? {
                vm.dispatch(&store, Action::ConfirmRemove)?;
                println!("Removed #{id} {label}");
            } else {
                vm.dispatch(&store, Action::CancelRemove)?;
                println!("Kept #{id} {label}");
            }
        }
        Commands::Path => return Ok(()),
    }

    render(&vm.state, profile);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn render(state: &ViewState, profile: ListProfile) {
    println!(
        "{} ({}/{} {})",
        profile.title(),
        state.flagged(),
        state.total(),
        profile.flag_noun()
    );

    let visible = state.visible();
    if visible.is_empty() {
        println!("  {}", profile.empty_message());
        return;
    }
    for entry in visible {
        let mark = if entry.flag { "x" } else { " " };
        println!("  [{mark}] #{:<4} {}", entry.id, entry.label);
    }
}
