//! mypostcode-rs
//!
//! Umbrella crate for the workspace. Re-exports [`postcode_core`] so the
//! demos can be written against `mypostcode_rs::prelude`.

pub use postcode_core::*;
