//! # Input/Output for cnvpair.
//!
//! Readers for CNVkit-style segment and bin tables and for BED4 region lists, and writers
//! for aggregation tables and squashed region lists. Every reader decompresses `.gz`
//! input transparently, and every writer compresses when the output path ends in `.gz`.
//!
//! ```no_run
//! use cnvpair_io::{read_profile, read_regions, DEFAULT_VALUE_COL};
//!
//! let profile = read_profile("tumor.cns", DEFAULT_VALUE_COL).unwrap();
//! let regions = read_regions("targets.bed").unwrap();
//! println!("{} segments, {} target rows", profile.len(), regions.len());
//! ```
pub mod consts;
pub mod error;
pub mod regions;
pub mod segments;
pub mod tables;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use regions::*;
pub use segments::*;
pub use tables::*;
