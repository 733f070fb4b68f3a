//! Rule-based matchers for bulletin parsing.
//!
//! Each matcher is independently unit-testable; the stateful jurisdiction
//! scan lives in the parser, not here.

pub mod acts;
pub mod boundary;
pub mod cleaner;
pub mod officers;
pub mod patterns;
pub mod segmenter;

pub use acts::{extract_acts, ActFields};
pub use boundary::{flatten, split_name_body, NameBody};
pub use cleaner::clean;
pub use officers::{extract_officers, OfficerHit};
pub use segmenter::{segment, EntrySpan};
