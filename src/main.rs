mod banlist;
mod carddb;
mod config;
mod error;
mod scripts;
mod store;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

use config::Settings;
use store::{Format, ListSet};

#[derive(Parser)]
#[command(name = "lflist_tools", about = "Banlist (lflist.conf) maintenance tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Worlds list from the TCG and OCG lists
    Worlds,
    /// Generate the Traditional list from the TCG list
    Traditional,
    /// Generate both derived lists in one invocation
    Run,
    /// Show which lists loaded, their identifiers and per-count tallies
    Stats,
    /// Fix card-name comments in Lua card scripts against the card database
    FixNames {
        /// Card database path (overrides config)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Scripts directory (overrides config)
        #[arg(long)]
        scripts: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = config::load();

    let result = match cli.command {
        Commands::Worlds => {
            let lists = ListSet::load(&settings);
            run_worlds(&settings, &lists)
        }
        Commands::Traditional => {
            let lists = ListSet::load(&settings);
            run_traditional(&settings, &lists)
        }
        Commands::Run => {
            let lists = ListSet::load(&settings);
            // One pipeline failing must not stop the other; report the
            // first error once both have been attempted.
            let worlds = run_worlds(&settings, &lists);
            if let Err(e) = &worlds {
                warn!("worlds generation failed: {e:#}");
            }
            let traditional = run_traditional(&settings, &lists);
            worlds.and(traditional)
        }
        Commands::Stats => {
            let lists = ListSet::load(&settings);
            print_stats(&lists);
            Ok(())
        }
        Commands::FixNames { db, scripts } => run_fix_names(&settings, db, scripts),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn run_worlds(settings: &Settings, lists: &ListSet) -> Result<()> {
    let tcg = lists.require(Format::Tcg)?;
    let ocg = lists.require(Format::Ocg)?;
    let out = banlist::generate_worlds(tcg, ocg)?;
    store::write_lines(Path::new(&settings.worlds_out), &out)?;
    println!(
        "{} generated, sorted, and duplicates removed ({} lines).",
        settings.worlds_out,
        out.len()
    );
    Ok(())
}

fn run_traditional(settings: &Settings, lists: &ListSet) -> Result<()> {
    let tcg = lists.require(Format::Tcg)?;
    let out = banlist::generate_traditional(tcg)?;
    store::write_lines(Path::new(&settings.traditional_out), &out)?;
    println!(
        "{} generated, count adjusted, sorted, and commented ({} lines).",
        settings.traditional_out,
        out.len()
    );
    Ok(())
}

fn run_fix_names(
    settings: &Settings,
    db: Option<PathBuf>,
    scripts_dir: Option<PathBuf>,
) -> Result<()> {
    let db = db.unwrap_or_else(|| PathBuf::from(&settings.card_db));
    let scripts_dir = scripts_dir.unwrap_or_else(|| PathBuf::from(&settings.scripts_dir));

    let names = carddb::load_card_names(&db)?;
    if names.is_empty() {
        println!("No card names in {}. Nothing to do.", db.display());
        return Ok(());
    }

    println!(
        "Fixing scripts in {} against {} card names...",
        scripts_dir.display(),
        names.len()
    );
    let stats = scripts::fix_card_names(&scripts_dir, &names)?;
    println!(
        "Updated {} of {} scripts ({} skipped).",
        stats.updated, stats.scanned, stats.skipped
    );
    Ok(())
}

fn print_stats(lists: &ListSet) {
    println!(
        "{:<12} | {:<7} | {:<9} | {:>5} | {:>5} | {:>5} | {:>5}",
        "List", "Loaded", "Date", "Forb", "Lim", "Semi", "Total"
    );
    println!("{}", "-".repeat(64));

    for format in Format::ALL {
        match lists.get(format) {
            Some(doc) => {
                let ident = doc
                    .lines
                    .first()
                    .and_then(|l| banlist::ident::parse_identifier(l));
                let date = ident.map(|i| i.date).unwrap_or_else(|| "-".into());

                let mut tally = [0usize; 3];
                let mut total = 0usize;
                for entry in doc.lines.iter().filter_map(|l| banlist::lines::parse_entry(l)) {
                    if let Some(slot) = tally.get_mut(entry.count as usize) {
                        *slot += 1;
                    }
                    total += 1;
                }

                println!(
                    "{:<12} | {:<7} | {:<9} | {:>5} | {:>5} | {:>5} | {:>5}",
                    format.name(),
                    "yes",
                    date,
                    tally[0],
                    tally[1],
                    tally[2],
                    total
                );
            }
            None => {
                println!(
                    "{:<12} | {:<7} | {:<9} | {:>5} | {:>5} | {:>5} | {:>5}",
                    format.name(),
                    "no",
                    "-",
                    "-",
                    "-",
                    "-",
                    "-"
                );
            }
        }
    }
}
