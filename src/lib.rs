//! Arbmatch - cross-venue prediction market position matching.
//!
//! Pairs positions a trader holds on Polymarket with the opposite side of the
//! same event on Opinion, then computes the economics of each hedged pair.
//!
//! # Modules
//!
//! - [`domain`] - Venue-agnostic types: positions, match table, matchers,
//!   economics, summaries. Pure and synchronous.
//! - [`port`] - Position source traits
//! - [`adapter`] - Venue HTTP clients and JSON file loaders
//! - [`app`] - Configuration and the concurrent scanner
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use arbmatch::domain::{reconcile, LookupIndex, MatchGroup, MatchTable, MatchingConfig};
//!
//! let table: MatchTable = vec![MatchGroup::new("Will BTC hit 100k?", "BTC 100k")]
//!     .into_iter()
//!     .collect();
//! let index = LookupIndex::build(&table);
//! let result = reconcile(&index, &[], &[], &MatchingConfig::default());
//! assert!(result.is_empty());
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;
