//! Interval overlap search for copy number profiles.
//!
//! Every aggregation asks the same question: which segments of a profile overlap this
//! region? This crate answers it with an Augmented Interval List per chromosome.
//!
//! ## Quick Start
//!
//! ```rust
//! use cnvpair_overlaprs::{AIList, Overlapper, Interval};
//!
//! let segments = vec![
//!     Interval { start: 100u32, end: 200, val: 0usize },
//!     Interval { start: 150, end: 300, val: 1 },
//!     Interval { start: 400, end: 500, val: 2 },
//! ];
//!
//! let ailist = AIList::build(segments);
//! assert_eq!(ailist.find(180, 250).len(), 2);
//!
//! for interval in ailist.find_iter(180, 250) {
//!     println!("Found overlap: {:?}", interval);
//! }
//! ```
//!
//! Higher-level code works on a [`ChromIndex`] built from a whole profile; see
//! [`chrom_index`] for an example.

/// Augmented Interval List implementation.
///
/// See [`AIList`] for details.
pub mod ailist;

/// Profile-wide index, one [`AIList`] per chromosome.
pub mod chrom_index;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

// re-exports
pub use self::ailist::AIList;
pub use self::chrom_index::{ChromIndex, IntoChromIndex};
pub use self::traits::{Interval, Overlapper};
