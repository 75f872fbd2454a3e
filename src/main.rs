//! AVL Dictionary - CLI
//!
//! Word dictionary backed by a self-balancing AVL tree, with menu, TUI and
//! one-shot command modes.

use anyhow::{Context, Result};
use avl_dictionary::{
    commands::{
        BenchmarkConfig, collect_stats, load_dictionary, menu::prompt, run_benchmark, run_menu,
        validate_filename,
    },
    dictionary::{Dictionary, LoadReport},
    output::{print_benchmark_result, print_load_report, print_similar, print_stats},
};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "avl_dictionary",
    about = "Word dictionary backed by a self-balancing AVL tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to load (must end in .txt); prompted for when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Numbered menu over the dictionary operations (default)
    Menu,

    /// Interactive TUI with a live view of the tree
    Tui,

    /// Print the words one letter away from a word
    Similar {
        /// The word to look up
        word: String,
    },

    /// Print the size, height and rotation counts of the loaded tree
    Stats,

    /// Random insert/delete workload checked against BTreeSet
    Benchmark {
        /// Number of operations to run
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,

        /// Seed for the random workload
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("avl_dictionary=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Some(Commands::Benchmark { count, seed }) => {
            run_benchmark_command(count, seed);
            Ok(())
        }
        Some(Commands::Tui) => {
            let (dict, _) = startup_load(cli.wordlist.as_deref(), true)?;
            run_tui_command(dict)
        }
        Some(Commands::Similar { word }) => {
            let (dict, _) = startup_load(cli.wordlist.as_deref(), false)?;
            print_similar(&word, &dict.find_similar(&word));
            Ok(())
        }
        Some(Commands::Stats) => {
            let (dict, report) = startup_load(cli.wordlist.as_deref(), true)?;
            print_load_report(&report);
            print_stats(&collect_stats(&dict, &report), &dict);
            Ok(())
        }
        Some(Commands::Menu) | None => {
            let (mut dict, _) = startup_load(cli.wordlist.as_deref(), true)?;
            println!("Dictionary loaded successfully.");
            let stdin = io::stdin();
            run_menu(&mut dict, stdin.lock(), io::stdout())
        }
    }
}

/// Resolve the word-list filename and load it; any failure ends the program
fn startup_load(wordlist: Option<&str>, show_progress: bool) -> Result<(Dictionary, LoadReport)> {
    let name = match wordlist {
        Some(name) => name.to_string(),
        None => ask_filename()?,
    };

    let path = validate_filename(&name)?;
    load_dictionary(&path, show_progress)
        .with_context(|| format!("Could not load dictionary from {}", path.display()))
}

fn ask_filename() -> Result<String> {
    let stdin = io::stdin();
    let name = prompt(
        &mut stdin.lock(),
        &mut io::stdout(),
        "Enter filename to create a dictionary",
    )?;
    name.context("No filename given")
}

fn run_benchmark_command(count: usize, seed: Option<u64>) {
    let mut config = BenchmarkConfig::new(count);
    if let Some(seed) = seed {
        config.seed = seed;
    }
    println!(
        "Running benchmark: {count} operations, {}% inserts, seed {:#x}...",
        config.insert_percent, config.seed
    );

    let result = run_benchmark(&config);
    print_benchmark_result(&result);
}

fn run_tui_command(dict: Dictionary) -> Result<()> {
    use avl_dictionary::interactive::{App, run_tui};

    let app = App::new(dict);
    run_tui(app)
}
