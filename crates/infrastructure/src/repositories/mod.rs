mod zone_repository;

pub use zone_repository::SqliteZoneRepository;
