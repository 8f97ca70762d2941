pub mod classification;
pub mod error;
pub mod options;
pub mod rule;

pub use classification::Classification;
pub use error::{Result, SizesError};
pub use options::SortOptions;
pub use rule::RuleDef;
