//! sqlzone domain layer: zone/record entities, name matching, the SOA
//! text codec and the typed answer model. Protocol- and storage-free.

pub mod answer;
pub mod config;
pub mod errors;
pub mod name;
pub mod record;
pub mod record_type;
pub mod soa;
pub mod zone;

pub use answer::{DnsClass, RecordData, ResourceRecord, CLASS_IN};
pub use config::{Config, StaticRecordSet, StaticZoneConfig};
pub use errors::DomainError;
pub use record::StoredRecord;
pub use record_type::{QueryType, RecordType};
pub use soa::SoaData;
pub use zone::Zone;
