//! sqlzone application layer: repository and serving ports plus the two
//! query backends (per-record resolver and the static legacy mode).

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::{QueryBackend, ResolutionOutcome, ZoneRepository};
