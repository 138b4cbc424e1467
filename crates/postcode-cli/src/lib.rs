//! postcode-cli
//! ============
//!
//! Command-line interface for the `postcode-core` Malaysian postcode database.
//!
//! This crate primarily provides a binary (`mypostcode`). The library target
//! only exists so the overview below is rendered with the rest of the docs.
//!
//! Quick start
//! -----------
//!
//! ```text
//! mypostcode --help
//! mypostcode --data data stats
//! mypostcode lookup 40100
//! mypostcode city "kota bharu" --postcodes
//! mypostcode --json search bangi --limit 5
//! mypostcode build --out data.comp.bin
//! mypostcode --data data.comp.bin validate 43650
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see which files were read and which
//! duplicate entries were overwritten. Logs go to stderr.
//!
//! For programmatic access use the [`postcode-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
