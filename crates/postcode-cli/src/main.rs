//! mypostcode: command-line interface for postcode-core
//!
//! Answers postcode and city questions from a local copy of the Malaysian
//! postcode dataset.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ mypostcode stats
//!
//! - Where is a postcode?
//!   $ mypostcode lookup 40100
//!   $ mypostcode lookup 40100 --address
//!
//! - Postcodes of a city (name is case-insensitive)
//!   $ mypostcode city "shah alam"
//!
//! - Search city names by substring
//!   $ mypostcode search bangi --limit 10
//!
//! - Save results as CSV
//!   $ mypostcode export city "Kajang" --out kajang.csv
//!
//! Data source
//! -----------
//!
//! `--data` (or `MYPOSTCODE_DATA`) points at one JSON file or a folder of
//! them, `data` by default. `mypostcode build` writes a snapshot of the built
//! indexes; pass that `.bin` file as `--data` to skip parsing on later runs.
mod args;

use crate::args::{CliArgs, Commands, ExportOut, ExportTarget, CITY_PREVIEW_LIMIT};
use anyhow::{bail, Context};
use clap::Parser;
use postcode_core::export::{city_export_filename, postcode_export_filename};
use postcode_core::loader::snapshot::is_snapshot_path;
use postcode_core::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let db = load_db(&args.data)?;
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if json {
                return print_json(&stats);
            }
            println!("Database statistics:");
            println!("  States: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("  Postcodes: {}", stats.postcodes);
            if stats.replaced_postcodes > 0 || stats.replaced_cities > 0 {
                println!(
                    "  Overwritten duplicates: {} postcodes, {} cities",
                    stats.replaced_postcodes, stats.replaced_cities
                );
            }
        }

        Commands::States => {
            if json {
                return print_json(db.states());
            }
            for s in db.states() {
                if s.code.is_empty() {
                    println!("{}: {} cities", s.name, s.city_count);
                } else {
                    println!("{} ({}): {} cities", s.name, s.code, s.city_count);
                }
            }
        }

        Commands::Lookup { postcode, address } => {
            let rec = db.lookup_by_postcode(&postcode);
            if json {
                return print_json(&rec);
            }
            match rec {
                Some(r) if address => println!("{}", r.address_line()),
                Some(r) => {
                    println!("Postcode: {}", r.postcode);
                    println!("City: {}", r.city);
                    println!("State: {}", r.state);
                    println!("State Code: {}", r.state_code);
                }
                None => println!("No postcode found for: {}", postcode.trim()),
            }
        }

        Commands::Validate { postcode } => {
            let res = db.validate_postcode(&postcode);
            if json {
                return print_json(&res);
            }
            match res.record() {
                Some(r) => println!("{} is valid: {}", r.postcode, city_state_code(r)),
                None => println!("{} is not a valid postcode", res.postcode()),
            }
        }

        Commands::City {
            name,
            address,
            postcodes,
        } => {
            let rec = db.lookup_by_city(&name);
            if json {
                return print_json(&rec);
            }
            match rec {
                Some(c) if address => println!("{}", c.city_state_line()),
                Some(c) if postcodes => println!("{}", c.postcode_list()),
                Some(c) => {
                    println!("City: {}", c.city);
                    println!("State: {} ({})", c.state, c.state_code);
                    println!(
                        "Postcodes ({}): {}",
                        c.postcodes.len(),
                        c.postcode_preview(CITY_PREVIEW_LIMIT)
                    );
                }
                None => println!("No city found for: {}", name.trim()),
            }
        }

        Commands::Search { query, limit } => {
            let names = db.search_cities(&query, limit);
            if json {
                return print_json(&SearchOutput {
                    query: query.trim(),
                    results: &names,
                });
            }
            if names.is_empty() {
                println!("No cities found matching: {}", query.trim());
            } else {
                for name in names {
                    println!("- {name}");
                }
            }
        }

        Commands::Export { target } => export(&db, target)?,

        Commands::Build { out, no_compress } => {
            if is_snapshot_path(&args.data) {
                bail!("--data already points at a snapshot; build from the JSON sources");
            }
            let out = out.unwrap_or_else(|| PostcodeDb::default_snapshot_path(&args.data));
            let mode = if no_compress {
                CompressionMode::None
            } else {
                CompressionMode::default()
            };
            db.save_snapshot(&out, mode)
                .with_context(|| format!("failed to write snapshot {}", out.display()))?;
            println!("Snapshot written to {}", out.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    results: &'a [&'a str],
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_db(path: &Path) -> anyhow::Result<PostcodeDb> {
    let db = if is_snapshot_path(path) {
        PostcodeDb::load_snapshot(path)
    } else {
        PostcodeDb::load_from_path(path)
    };
    db.with_context(|| format!("failed to load postcode data from {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn city_state_code(r: &PostcodeRecord) -> String {
    if r.state_code.is_empty() {
        format!("{}, {}", r.city, r.state)
    } else {
        format!("{}, {} ({})", r.city, r.state, r.state_code)
    }
}

fn export(db: &impl PostcodeSearch, target: ExportTarget) -> anyhow::Result<()> {
    let now = chrono::Local::now();
    match target {
        ExportTarget::Postcode { postcode, out } => {
            let Some(rec) = db.lookup_by_postcode(&postcode) else {
                bail!("No postcode found for: {}", postcode.trim());
            };
            let dest = destination(out, || postcode_export_filename(&rec.postcode, &now));
            write_to(&dest, |w| write_postcode_csv(w, rec))
        }
        ExportTarget::City { name, out } => {
            let Some(rec) = db.lookup_by_city(&name) else {
                bail!("No city found for: {}", name.trim());
            };
            let dest = destination(out, || city_export_filename(&rec.city, &now));
            write_to(&dest, |w| write_city_csv(w, rec))
        }
    }
}

/// `None` means stdout.
fn destination(out: ExportOut, default_name: impl FnOnce() -> String) -> Option<PathBuf> {
    match out.out {
        Some(p) if p.as_os_str() == "-" => None,
        Some(p) => Some(p),
        None => Some(PathBuf::from(default_name())),
    }
}

fn write_to<F>(dest: &Option<PathBuf>, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn Write) -> postcode_core::Result<()>,
{
    match dest {
        None => {
            let mut stdout = io::stdout().lock();
            write(&mut stdout)?;
        }
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut w = BufWriter::new(file);
            write(&mut w)?;
            w.flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
    }
    Ok(())
}
