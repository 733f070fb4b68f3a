//! Data models: input documents, output records, configuration.

pub mod config;
pub mod document;
pub mod record;

pub use config::{BormeConfig, ExtractionConfig};
pub use document::{DocumentMeta, RawDocument};
pub use record::{ActionType, CompanyActRecord, OfficerAppointmentRecord, RegistryCoordinates};
