//! Date-stamped trainer notes: parsing, categorization, deduplicated
//! current-thoughts summaries and evolution detection.
//!
//! Everything here is pure and total; file access lives in the
//! `notes-organizer` binary.

pub mod aggregate;
pub mod categorizer;
pub mod evolution;
pub mod model;
pub mod parser;
pub mod relevance;
pub mod render;
pub mod similarity;

pub use aggregate::aggregate;
pub use categorizer::categorize;
pub use evolution::detect_evolution;
pub use parser::{parse, parse_categorized};
pub use similarity::similar;
