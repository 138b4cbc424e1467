//! Basic usage example for mypostcode-rs
//!
//! This example demonstrates how to:
//! - Load the postcode database from the bundled `data/` folder
//! - Look up a postcode and a city
//! - Search city names
//! - Export a city as CSV

use mypostcode_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== mypostcode-rs Basic Usage Example ===\n");

    println!("Loading postcode database...");
    let db = PostcodeDb::load_from_path(PostcodeDb::default_data_dir())?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} states, {} cities, {} postcodes\n",
        stats.states, stats.cities, stats.postcodes
    );

    // Example 1: States
    println!("--- Example 1: List states ---");
    for (i, state) in db.states().iter().enumerate() {
        println!("{}. {} ({}), {} cities", i + 1, state.name, state.code, state.city_count);
    }
    println!();

    // Example 2: Postcode lookup
    println!("--- Example 2: Lookup by postcode ---");
    match db.lookup_by_postcode("40100") {
        Some(rec) => println!("{}", rec.address_line()),
        None => println!("40100 is not in this dataset"),
    }
    println!();

    // Example 3: City lookup, case and spacing do not matter
    println!("--- Example 3: Lookup by city ---");
    if let Some(city) = db.lookup_by_city("  kuala lumpur ") {
        println!("{}", city.city_state_line());
        println!("Postcodes: {}", city.postcode_preview(5));
    }
    println!();

    // Example 4: Search
    println!("--- Example 4: Search cities containing 'bandar' ---");
    for name in db.search_cities("bandar", 10) {
        println!("- {name}");
    }
    println!();

    // Example 5: CSV to stdout
    println!("--- Example 5: Export a city as CSV ---");
    if let Some(city) = db.lookup_by_city("Kangar") {
        write_city_csv(std::io::stdout().lock(), city)?;
    }

    Ok(())
}
