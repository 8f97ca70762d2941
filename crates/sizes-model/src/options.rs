//! Configuration options for size sorting.

use serde::{Deserialize, Serialize};

/// Options for the sort facade.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SortOptions {
    /// Project sorted results to their canonical labels instead of the
    /// original raw strings. Default: false.
    pub normalized: bool,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalized(mut self, enable: bool) -> Self {
        self.normalized = enable;
        self
    }
}
