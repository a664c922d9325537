//! Tournament Runner for Othello engines
//!
//! This crate provides infrastructure for:
//! - Playing engine-vs-engine games under the standard rules
//! - Aggregating match scores with alternating colors
//! - Saving and loading results as JSON
//!
//! # Usage
//!
//! ```bash
//! othello match classical random --games 20 --out results.json
//! ```

mod error;
mod match_runner;
mod results;

pub use error::ResultsError;
pub use match_runner::*;
pub use results::*;
