use clap::{Args, Parser, Subcommand};
use postcode_core::DEFAULT_SEARCH_LIMIT;
use std::path::PathBuf;

/// Postcodes listed by `city` before the list is cut short.
pub const CITY_PREVIEW_LIMIT: usize = 160;

/// CLI arguments for mypostcode
#[derive(Debug, Parser)]
#[command(
    name = "mypostcode",
    version,
    about = "Offline lookup of Malaysian postcodes, cities and states"
)]
pub struct CliArgs {
    /// JSON file, folder of JSON files, or a `.bin` snapshot from `build`
    #[arg(
        short = 'd',
        long = "data",
        env = "MYPOSTCODE_DATA",
        default_value = "data",
        global = true
    )]
    pub data: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log loader activity to stderr (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List merged states with their code and city count
    States,

    /// Find the city and state of a postcode
    Lookup {
        /// Postcode, e.g. 40100
        postcode: String,

        /// Print a single "postcode, city, state" line
        #[arg(long)]
        address: bool,
    },

    /// Check whether a postcode exists
    Validate {
        /// Postcode to check
        postcode: String,
    },

    /// Show the state and postcodes of a city (case-insensitive)
    City {
        /// City name, e.g. "Shah Alam"
        name: String,

        /// Print a single "city, state" line
        #[arg(long, conflicts_with = "postcodes")]
        address: bool,

        /// Print every postcode of the city on one line
        #[arg(long)]
        postcodes: bool,
    },

    /// Search city names containing a substring
    Search {
        /// Substring to search (case-insensitive)
        query: String,

        /// Maximum number of names to print
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Export a lookup result as CSV
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Write a binary snapshot of the loaded database
    Build {
        /// Output file (default: next to the data path)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Write plain bincode instead of gzip
        #[arg(long)]
        no_compress: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExportTarget {
    /// One row for a postcode
    Postcode {
        postcode: String,
        #[command(flatten)]
        out: ExportOut,
    },

    /// One row per postcode of a city
    City {
        name: String,
        #[command(flatten)]
        out: ExportOut,
    },
}

#[derive(Debug, Args)]
pub struct ExportOut {
    /// Output file; `-` writes to stdout (default: timestamped name in the
    /// current directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
