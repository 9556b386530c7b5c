//! Core models for cnvpair.
//!
//! This crate holds the strongly typed records every other cnvpair crate works on:
//!
//! - [`GenomicInterval`](models::GenomicInterval): one segment (or bin) with its value
//! - [`Profile`](models::Profile): all segments of one sample, sorted by (chromosome, start)
//! - [`NamedRegion`](models::NamedRegion): a target region such as a gene
//! - [`AggregationTable`](models::AggregationTable): one row per region, one value per profile
//!
//! Chromosome naming helpers (the `chr` prefix convention and the autosome filter) live in
//! [`chrom`].
//!
//! ```rust
//! use cnvpair_core::models::{GenomicInterval, Profile};
//!
//! let profile = Profile::new(
//!     "sample1",
//!     vec![
//!         GenomicInterval::new("chr1", 0, 400, 1.0).unwrap(),
//!         GenomicInterval::new("chr1", 400, 700, 3.0).unwrap(),
//!     ],
//! );
//! assert!(profile.is_sorted());
//! assert_eq!(profile.len(), 2);
//! ```
pub mod chrom;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::ModelError;
