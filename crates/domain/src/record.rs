use super::RecordType;

/// One stored DNS answer tuple as the store holds it. The owner name is
/// kept without a trailing dot and may contain a literal `*` label.
/// Disabled records must never reach an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: i64,
    pub zone_id: i64,
    pub name: String,
    pub record_type: RecordType,
    pub content: String,
    pub ttl: u32,
    pub disabled: bool,
}

impl StoredRecord {
    pub fn new(
        id: i64,
        zone_id: i64,
        name: impl Into<String>,
        record_type: RecordType,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            id,
            zone_id,
            name: name.into(),
            record_type,
            content: content.into(),
            ttl,
            disabled: false,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.name.contains('*')
    }
}
