//! Interval-to-gene aggregation and paired segment matching.
//!
//! Given copy number profiles and a target region list, this crate:
//!
//! - squashes consecutive same-named target rows into one region per gene ([`squash_regions`])
//! - reduces the segments overlapping each region to a size-weighted mean ([`weighted_mean`])
//! - joins the results of several profiles into one table ([`aggregate_profiles`], [`pair_profiles`])
//!
//! It also compares two profiles segment by segment ([`cut_segments`]) and collates gene
//! values across samples ([`collate_by_gene`]).
//!
//! # Example
//!
//! ```
//! use cnvpair_aggregate::{AggregateConfig, pair_profiles};
//! use cnvpair_core::models::{GenomicInterval, NamedRegion, Profile};
//!
//! let regions = vec![
//!     NamedRegion::new("chr1", 100, 300, "A").unwrap(),
//!     NamedRegion::new("chr1", 300, 500, "A").unwrap(),
//!     NamedRegion::new("chr1", 600, 700, "B").unwrap(),
//! ];
//! let first = Profile::new(
//!     "first",
//!     vec![
//!         GenomicInterval::new("chr1", 0, 400, 1.0).unwrap(),
//!         GenomicInterval::new("chr1", 400, 700, 3.0).unwrap(),
//!     ],
//! );
//! let second = Profile::new("second", vec![GenomicInterval::new("chr1", 0, 700, 2.0).unwrap()]);
//!
//! let table = pair_profiles(&first, &second, &regions, &AggregateConfig::default()).unwrap();
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.value(1, "first"), Some(3.0));
//! ```
pub mod collate;
pub mod config;
pub mod cut;
pub mod errors;
pub mod merger;
pub mod pair;
pub mod reduce;

// re-exports
pub use collate::{collate_by_gene, gene_values};
pub use config::AggregateConfig;
pub use cut::cut_segments;
pub use errors::{AggregateError, Result};
pub use merger::squash_regions;
pub use pair::{aggregate_profiles, check_chromosomes, check_sorted, pair_profiles};
pub use reduce::{IndexedProfile, weighted_mean};
