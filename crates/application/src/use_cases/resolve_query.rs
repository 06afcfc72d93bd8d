use crate::ports::{QueryBackend, ResolutionOutcome, ZoneRepository};
use crate::services::build_record;
use async_trait::async_trait;
use sqlzone_domain::{
    name::{strip_fqdn, wildcard_match},
    DnsClass, DomainError, QueryType, ResourceRecord, StoredRecord,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// The per-record resolver: exact lookup, wildcard search scoped to the
/// enclosing zone, SOA fallback for authoritative non-existence.
pub struct ResolveQueryUseCase {
    zones: Arc<dyn ZoneRepository>,
}

impl ResolveQueryUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>) -> Self {
        Self { zones }
    }

    /// Walks the query name toward the root, one leading label at a
    /// time, until a suffix names a stored zone; then filters that
    /// zone's wildcard records against the full query name. Starts
    /// after stripping one label, so an apex query never matches its
    /// own wildcard here.
    async fn search_wildcard(
        &self,
        qname: &str,
        qtype: QueryType,
    ) -> Result<Vec<StoredRecord>, DomainError> {
        let mut name = qname;
        let zone = loop {
            match name.find('.') {
                Some(i) if i > 0 => name = &name[i + 1..],
                _ => return Ok(Vec::new()),
            }
            if let Some(zone) = self.zones.find_zone_by_name(name).await? {
                break zone;
            }
        };

        let candidates = self.zones.find_wildcard_records(zone.id, qtype).await?;
        Ok(candidates
            .into_iter()
            .filter(|r| wildcard_match(qname, &r.name))
            .collect())
    }

    fn build_answers(records: &[StoredRecord], class: DnsClass) -> Vec<ResourceRecord> {
        let mut answers = Vec::with_capacity(records.len());
        for record in records {
            match build_record(record, class) {
                Ok(rr) => answers.push(rr),
                Err(e) => {
                    warn!(
                        record_id = record.id,
                        name = %record.name,
                        record_type = %record.record_type,
                        error = %e,
                        "Dropping record that failed to build"
                    );
                }
            }
        }
        answers
    }
}

#[async_trait]
impl QueryBackend for ResolveQueryUseCase {
    async fn resolve(
        &self,
        qname: &str,
        qtype: QueryType,
        class: DnsClass,
    ) -> Result<ResolutionOutcome, DomainError> {
        let qname = qname.to_ascii_lowercase();
        let name = strip_fqdn(&qname);

        let mut records = self.zones.find_records(name, qtype).await?;
        if records.is_empty() {
            records = self.search_wildcard(name, qtype).await?;
            // Wildcard answers are owned by the name that was asked,
            // not by the stored `*` pattern.
            for record in &mut records {
                record.name = name.to_string();
            }
        }

        if records.is_empty() {
            // Nothing answers this name; an SOA stored at the exact
            // name still makes the non-existence authoritative.
            return match self.zones.find_soa(name).await? {
                Some(soa_record) => match build_record(&soa_record, class) {
                    Ok(rr) => Ok(ResolutionOutcome::Answered {
                        answers: Vec::new(),
                        authority: vec![rr],
                    }),
                    Err(e) => {
                        warn!(name = %soa_record.name, error = %e, "Dropping undecodable SOA record");
                        Ok(ResolutionOutcome::NotMine)
                    }
                },
                None => {
                    debug!(qname = %name, "No zone data, deferring");
                    Ok(ResolutionOutcome::NotMine)
                }
            };
        }

        let answers = Self::build_answers(&records, class);
        if answers.is_empty() {
            return Ok(ResolutionOutcome::NotMine);
        }

        Ok(ResolutionOutcome::Answered {
            answers,
            authority: Vec::new(),
        })
    }
}
