use async_trait::async_trait;
use sqlzone_domain::{DomainError, QueryType, StoredRecord, Zone};

/// Read-only access to the zone/record store. "No matching rows" is
/// `None` or an empty vec, never an error; `Err` means the store
/// itself failed and the query must be answered with a server failure.
///
/// All record lookups exclude disabled records.
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Looks up a zone by its exact stored name (no trailing dot).
    async fn find_zone_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError>;

    /// Exact owner-name lookup. The type filter is skipped for ANY.
    async fn find_records(
        &self,
        name: &str,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError>;

    /// Candidate wildcard records of a zone: owner names containing a
    /// literal `*`, filtered by type unless ANY was asked.
    async fn find_wildcard_records(
        &self,
        zone_id: i64,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError>;

    /// The SOA record stored at exactly `name`, if any.
    async fn find_soa(&self, name: &str) -> Result<Option<StoredRecord>, DomainError>;
}
