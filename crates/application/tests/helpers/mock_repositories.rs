#![allow(dead_code)]

use async_trait::async_trait;
use sqlzone_application::ports::ZoneRepository;
use sqlzone_domain::{DomainError, QueryType, RecordType, StoredRecord, Zone};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the SQL store. Honors the repository
/// contract: disabled records are invisible, wildcard lookups only see
/// owner names containing `*`, and "no rows" is an empty result.
#[derive(Clone, Default)]
pub struct MockZoneRepository {
    zones: Arc<Mutex<Vec<Zone>>>,
    records: Arc<Mutex<Vec<StoredRecord>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zone(&self, id: i64, name: &str) -> &Self {
        self.zones.lock().unwrap().push(Zone::new(id, name));
        self
    }

    pub fn add_record(
        &self,
        zone_id: i64,
        name: &str,
        record_type: RecordType,
        content: &str,
        ttl: u32,
    ) -> &Self {
        let id = self.records.lock().unwrap().len() as i64 + 1;
        self.records
            .lock()
            .unwrap()
            .push(StoredRecord::new(id, zone_id, name, record_type, content, ttl));
        self
    }

    pub fn add_disabled_record(
        &self,
        zone_id: i64,
        name: &str,
        record_type: RecordType,
        content: &str,
        ttl: u32,
    ) -> &Self {
        let id = self.records.lock().unwrap().len() as i64 + 1;
        let mut record = StoredRecord::new(id, zone_id, name, record_type, content, ttl);
        record.disabled = true;
        self.records.lock().unwrap().push(record);
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.fail.lock().unwrap() {
            return Err(DomainError::DatabaseError("mock store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn find_zone_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        self.check_failure()?;
        Ok(self
            .zones
            .lock()
            .unwrap()
            .iter()
            .find(|z| z.name == name)
            .cloned())
    }

    async fn find_records(
        &self,
        name: &str,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        self.check_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !r.disabled && r.name == name && qtype.matches(r.record_type))
            .cloned()
            .collect())
    }

    async fn find_wildcard_records(
        &self,
        zone_id: i64,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        self.check_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                !r.disabled
                    && r.zone_id == zone_id
                    && r.is_wildcard()
                    && qtype.matches(r.record_type)
            })
            .cloned()
            .collect())
    }

    async fn find_soa(&self, name: &str) -> Result<Option<StoredRecord>, DomainError> {
        self.check_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| !r.disabled && r.name == name && r.record_type == RecordType::SOA)
            .cloned())
    }
}
