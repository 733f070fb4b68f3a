//! Bulletin parsing: cleaning, segmentation, and field extraction.

pub mod parser;
pub mod rules;

pub use parser::{BulletinParser, ParseOutcome};
