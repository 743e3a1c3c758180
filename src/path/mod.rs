//! The cheapest Paths and how to collect all of them from a search

mod directed_path;
pub use directed_path::Path;

mod enumerate;
pub use enumerate::{enumerate_paths, BestPaths};

/// a Type to represent the Cost of a Move or a Path
pub type Cost = usize;
