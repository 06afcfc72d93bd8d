use async_trait::async_trait;
use sqlzone_application::ports::ZoneRepository;
use sqlzone_domain::{DomainError, QueryType, StoredRecord, Zone};
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type ZoneRow = (i64, String);
type RecordRow = (i64, i64, String, String, String, i64, i64);

pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Rows whose type text is outside the supported enumeration are
    /// skipped with a warning instead of failing the whole result set.
    fn row_to_record(row: RecordRow) -> Option<StoredRecord> {
        let (id, zone_id, name, record_type, content, ttl, disabled) = row;
        let record_type = match record_type.parse() {
            Ok(rt) => rt,
            Err(_) => {
                warn!(record_id = id, record_type = %record_type, "Skipping record with unknown type");
                return None;
            }
        };
        Some(StoredRecord {
            id,
            zone_id,
            name,
            record_type,
            content,
            ttl: ttl as u32,
            disabled: disabled != 0,
        })
    }
}

#[async_trait]
impl ZoneRepository for SqliteZoneRepository {
    #[instrument(skip(self))]
    async fn find_zone_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, ZoneRow>("SELECT id, name FROM zones WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query zone by name");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(|(id, name)| Zone { id, name }))
    }

    #[instrument(skip(self))]
    async fn find_records(
        &self,
        name: &str,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let query = match qtype.filter() {
            Some(rt) => sqlx::query_as::<_, RecordRow>(
                "SELECT id, zone_id, name, record_type, content, ttl, disabled
                 FROM records WHERE name = ? AND record_type = ? AND disabled = 0",
            )
            .bind(name)
            .bind(rt.as_str()),
            None => sqlx::query_as::<_, RecordRow>(
                "SELECT id, zone_id, name, record_type, content, ttl, disabled
                 FROM records WHERE name = ? AND disabled = 0",
            )
            .bind(name),
        };

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query records by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_wildcard_records(
        &self,
        zone_id: i64,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let query = match qtype.filter() {
            Some(rt) => sqlx::query_as::<_, RecordRow>(
                "SELECT id, zone_id, name, record_type, content, ttl, disabled
                 FROM records
                 WHERE zone_id = ? AND record_type = ? AND disabled = 0 AND name LIKE '%*%'",
            )
            .bind(zone_id)
            .bind(rt.as_str()),
            None => sqlx::query_as::<_, RecordRow>(
                "SELECT id, zone_id, name, record_type, content, ttl, disabled
                 FROM records WHERE zone_id = ? AND disabled = 0 AND name LIKE '%*%'",
            )
            .bind(zone_id),
        };

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query wildcard records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_soa(&self, name: &str) -> Result<Option<StoredRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone_id, name, record_type, content, ttl, disabled
             FROM records WHERE name = ? AND record_type = 'SOA' AND disabled = 0 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query SOA record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.and_then(Self::row_to_record))
    }
}
