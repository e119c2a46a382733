//! Prelude module for birthday_facts crate.
//!
//! Re-exports the derive macros and chrono items used across modules.

pub use chrono::NaiveDate;
#[allow(unused_imports)]
pub use derive_more::Display;
