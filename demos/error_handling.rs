//! Error handling example for mypostcode-rs
//!
//! Load failures are errors; unknown postcodes and cities are not.

use mypostcode_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== mypostcode-rs Error Handling Example ===\n");

    // Example 1: Load errors carry the offending path
    println!("--- Example 1: Loading from a missing folder ---");
    match PostcodeDb::load_from_path("no/such/folder") {
        Ok(_) => println!("unexpectedly loaded"),
        Err(e @ PostcodeError::PathNotFound(_)) => println!("✗ {e}"),
        Err(e) => println!("✗ other load error: {e}"),
    }
    println!();

    let db = PostcodeDb::load_from_path(PostcodeDb::default_data_dir())?;

    // Example 2: Validation never fails, it reports
    println!("--- Example 2: Validating postcodes ---");
    for input in ["40000", " 01000 ", "99999", "", "abc"] {
        let res = db.validate_postcode(input);
        match res.record() {
            Some(rec) => println!("  {:>7} valid   -> {}", format!("{input:?}"), rec.address_line()),
            None => println!("  {:>7} invalid", format!("{input:?}")),
        }
    }
    println!();

    // Example 3: Missing cities are None
    println!("--- Example 3: Unknown city ---");
    match db.lookup_by_city("Atlantis") {
        Some(city) => println!("  Found: {}", city.city_state_line()),
        None => println!("  Not found: Atlantis"),
    }
    println!();

    // Example 4: Degenerate searches return nothing
    println!("--- Example 4: Blank query and zero limit ---");
    println!("  blank query -> {} results", db.search_cities("   ", DEFAULT_SEARCH_LIMIT).len());
    println!("  limit 0     -> {} results", db.search_cities("a", 0).len());

    Ok(())
}
