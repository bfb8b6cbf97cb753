// Public modules
pub mod char_index;
pub mod classification;
pub mod error;
pub mod hangul;
pub mod io;
pub mod models;
pub mod ranking;
pub mod schema_validation;
pub mod sections;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use char_index::parse_char_index;
pub use classification::{classify, section_key, UNCATEGORIZED};
pub use error::{Error, Result};
pub use io::{load_document, parse_document, save_sections};
pub use models::{Item, Labeled, Section, SectionDocument};
pub use ranking::{build_letter_rank, LetterRank};
pub use schema_validation::{validate_against_schema, validate_document};
pub use sections::{compute_sections, rail};
pub use sorting::{compare_labels, compare_titles, finalize, sort_items};
pub use validation::validate_char_index;
