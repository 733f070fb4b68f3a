//! Core library for Spanish mercantile-bulletin (BORME) processing.
//!
//! This crate provides:
//! - Document metadata parsing from bulletin filenames and paths
//! - Section A entry segmentation and name/body boundary detection
//! - Administrative-act and field extraction (acts, capital, domicile,
//!   registry coordinates)
//! - Officer/role extraction with action-type resolution
//! - Company-name normalization and cross-document deduplication

pub mod aggregate;
pub mod bulletin;
pub mod error;
pub mod models;
pub mod normalize;
pub mod vocab;

pub use aggregate::Aggregator;
pub use bulletin::{BulletinParser, ParseOutcome};
pub use error::{BormeError, DocumentError, ExtractionError, Result};
pub use models::config::{BormeConfig, ExtractionConfig};
pub use models::document::{DocumentMeta, RawDocument};
pub use models::record::{
    ActionType, CompanyActRecord, OfficerAppointmentRecord, RegistryCoordinates,
};
pub use normalize::{normalize_company, normalize_company_light};
