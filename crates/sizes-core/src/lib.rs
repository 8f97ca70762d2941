//! Classification and ranking engine for free-form apparel size labels.
//!
//! Merchant feeds spell sizes every way imaginable (`XS`, `2XL`,
//! `Medium Large`, `EU 42`, `16W-18W`). This crate maps each raw string
//! through an ordered, first-match-wins rule table to a canonical label
//! plus a numeric rank, extracts a signed magnitude for fine-grained
//! ordering, and exposes sort/index/normalize operations on top.
//!
//! Everything is a pure function of its input and the process-wide
//! rule table, compiled once on first use; calls are safe from any
//! thread and no operation can fail.
//!
//! ```
//! use sizes_core::{sort_sizes, normalized_size, size_index};
//! use sizes_model::SortOptions;
//!
//! let sorted = sort_sizes(&["XL", "S", "M"], &SortOptions::default());
//! assert_eq!(sorted, ["S", "M", "XL"]);
//! assert_eq!(normalized_size("Small"), "S");
//! assert!(size_index("M") < size_index("L"));
//! ```

pub mod classify;
pub mod facade;
pub mod order;
mod quantity;
pub mod table;

pub use classify::{classify, classify_with};
pub use facade::{normalized_size, size_index, sort_sizes};
pub use order::{compare, sort_classifications};
pub use table::{Rule, RuleTable};

// Back-compat aliases: the same operations under their historical names.
pub use facade::normalized_size as normalize;
pub use facade::size_index as index;
pub use facade::size_index as numberify;
pub use facade::sort_sizes as sort;
