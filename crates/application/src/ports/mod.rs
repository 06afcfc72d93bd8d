mod query_backend;
mod zone_repository;

pub use query_backend::{QueryBackend, ResolutionOutcome};
pub use zone_repository::ZoneRepository;
