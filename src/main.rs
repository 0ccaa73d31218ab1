//! Pseudoword - CLI
//!
//! Generates pseudo-words and records scoring sessions, with an interactive
//! review mode.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use pseudoword::{
    commands::{
        EntryUpdate, GenerateConfig, add_word, apply_update, deselect_sounds, list_sounds,
        replace_sounds, run_generate, select_sounds, session_stats,
    },
    config::AppConfig,
    core::{CueScore, Pattern, WordScore},
    interactive::{App, run_tui},
    inventory::SoundInventory,
    output::{
        print_entry, print_form, print_generation_result, print_selection_change, print_sounds,
        print_stats, print_word_list,
    },
    persistence::FileStore,
    workspace::Workspace,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pseudoword",
    about = "Pseudo-word generator with phonotactic restrictions and scoring sessions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding saved settings and word list
    #[arg(long, global = true, env = "PSEUDOWORD_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Sound inventory JSON file (default: built-in en-US)
    #[arg(long, global = true, env = "PSEUDOWORD_INVENTORY")]
    inventory: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List inventory sounds, marking the selected ones
    Sounds,

    /// Select sounds by symbol
    Select {
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Replace the current selection instead of adding to it
        #[arg(long)]
        replace: bool,
    },

    /// Deselect sounds by symbol
    Deselect {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Set the word pattern (e.g. CVC, CV-CVC)
    Pattern { pattern: Pattern },

    /// Set how many words to generate
    Quantity { quantity: usize },

    /// Generate a new word list from the current settings
    Generate {
        /// Override the pattern for this and later runs
        #[arg(short, long)]
        pattern: Option<Pattern>,

        /// Override the quantity for this and later runs
        #[arg(short = 'n', long)]
        quantity: Option<usize>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the word list (default)
    List,

    /// Append a word built from sound symbols
    Add {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Score a word: correct, incorrect, skipped or not-scored
    Score { index: usize, score: WordScore },

    /// Set a word's cue level: independent, minimal, moderate, maximum or not-scored
    Cue { index: usize, cue: CueScore },

    /// Set a word's notes
    Note { index: usize, text: String },

    /// Choose a spelling variant for one sound of a word
    Spell {
        index: usize,
        sound: usize,
        /// Variant index; wraps around the number of spellings
        variant: usize,
    },

    /// Remove a word from the list
    Remove { index: usize },

    /// Set the session notes
    Notes { text: String },

    /// Clear the word list and session notes
    Reset,

    /// Show score counts, accuracy and completion
    Stats,

    /// Review and score words interactively
    Review,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pseudoword={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::new(cli.state_dir, cli.inventory);
    let command = cli.command.unwrap_or(Commands::List);

    if let Commands::Review = command {
        let app = App::new(Workspace::open(config.store()));
        return run_tui(app);
    }

    let inventory = config.load_inventory()?;
    let mut workspace = Workspace::open(config.store());
    run_command(command, &inventory, &mut workspace)?;

    if !workspace.save() {
        eprintln!(
            "warning: could not save state to {}",
            workspace.store().dir().display()
        );
    }
    Ok(())
}

fn run_command(
    command: Commands,
    inventory: &SoundInventory,
    workspace: &mut Workspace<FileStore>,
) -> Result<()> {
    match command {
        Commands::Sounds => print_sounds(&list_sounds(inventory, &workspace.form)),
        Commands::Select { symbols, replace } => {
            let change = if replace {
                replace_sounds(&mut workspace.form, inventory, symbols.as_slice())?
            } else {
                select_sounds(&mut workspace.form, inventory, symbols.as_slice())?
            };
            print_selection_change("Selected:", &change);
        }
        Commands::Deselect { symbols } => {
            let change = deselect_sounds(&mut workspace.form, symbols.as_slice());
            print_selection_change("Deselected:", &change);
        }
        Commands::Pattern { pattern } => {
            workspace.form.set_pattern(pattern);
            print_form(&workspace.form);
        }
        Commands::Quantity { quantity } => {
            workspace.form.set_quantity(quantity);
            print_form(&workspace.form);
        }
        Commands::Generate {
            pattern,
            quantity,
            seed,
        } => {
            let config = GenerateConfig {
                pattern,
                quantity,
                seed,
            };
            let result = run_generate(
                config,
                &mut workspace.form,
                &mut workspace.words,
                inventory.restrictions(),
            );
            print_generation_result(&result);
        }
        Commands::List => print_word_list(&workspace.words),
        Commands::Add { symbols } => {
            let index = add_word(&mut workspace.words, inventory, symbols.as_slice())?;
            if let Some(entry) = workspace.words.entry(index) {
                print_entry(index, entry);
            }
        }
        Commands::Score { index, score } => update(workspace, index, EntryUpdate::Score(score))?,
        Commands::Cue { index, cue } => update(workspace, index, EntryUpdate::Cue(cue))?,
        Commands::Note { index, text } => update(workspace, index, EntryUpdate::Notes(text))?,
        Commands::Spell {
            index,
            sound,
            variant,
        } => update(
            workspace,
            index,
            EntryUpdate::Spelling {
                sound,
                raw: variant,
            },
        )?,
        Commands::Remove { index } => {
            let entry = workspace
                .words
                .remove_entry(index)
                .context("cannot remove word")?;
            println!("Removed {} /{}/", entry.rendered_spelling(), entry.phonetic());
        }
        Commands::Notes { text } => workspace.words.set_session_notes(text),
        Commands::Reset => {
            workspace.words.reset();
            println!("Word list cleared");
        }
        Commands::Stats => print_stats(&session_stats(&workspace.words)),
        Commands::Review => bail!("review must run in the terminal UI"),
    }
    Ok(())
}

fn update(workspace: &mut Workspace<FileStore>, index: usize, change: EntryUpdate) -> Result<()> {
    let entry = apply_update(&mut workspace.words, index, change).context("cannot update word")?;
    print_entry(index, entry);
    Ok(())
}
