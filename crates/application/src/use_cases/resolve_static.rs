use crate::ports::{QueryBackend, ResolutionOutcome, ZoneRepository};
use async_trait::async_trait;
use sqlzone_domain::{
    name::{strip_fqdn, to_fqdn},
    DnsClass, DomainError, QueryType, RecordData, RecordType, ResourceRecord, StaticRecordSet,
};
use std::sync::Arc;
use tracing::debug;

/// Legacy backend: answers only by zone-table existence of the queried
/// name, with one fixed configured value per record type. Ignores the
/// record table entirely.
pub struct StaticResolveUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: StaticRecordSet,
}

impl StaticResolveUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>, records: StaticRecordSet) -> Self {
        Self { zones, records }
    }

    fn static_data(&self, rtype: RecordType) -> Option<RecordData> {
        match rtype {
            RecordType::A => self.records.a.map(RecordData::A),
            RecordType::AAAA => self.records.aaaa.map(RecordData::Aaaa),
            RecordType::NS => self.records.ns.clone().map(RecordData::Ns),
            RecordType::MX => self.records.mx.clone().map(|exchange| RecordData::Mx {
                preference: 1,
                exchange,
            }),
            RecordType::SOA => Some(RecordData::Soa(self.records.soa.clone())),
            _ => None,
        }
    }
}

#[async_trait]
impl QueryBackend for StaticResolveUseCase {
    async fn resolve(
        &self,
        qname: &str,
        qtype: QueryType,
        class: DnsClass,
    ) -> Result<ResolutionOutcome, DomainError> {
        let qname = qname.to_ascii_lowercase();
        let name = strip_fqdn(&qname);

        let rtype = match qtype {
            QueryType::Of(rt) => rt,
            // ANY has no single configured value to hand out.
            QueryType::Any => return Ok(ResolutionOutcome::NotMine),
        };

        if self.zones.find_zone_by_name(name).await?.is_none() {
            debug!(qname = %name, "Unknown zone, deferring");
            return Ok(ResolutionOutcome::NotMine);
        }

        match self.static_data(rtype) {
            Some(data) => Ok(ResolutionOutcome::Answered {
                answers: vec![ResourceRecord {
                    name: to_fqdn(name),
                    class,
                    ttl: self.records.ttl,
                    data,
                }],
                authority: Vec::new(),
            }),
            None => {
                debug!(qname = %name, qtype = %qtype, "No static value configured, deferring");
                Ok(ResolutionOutcome::NotMine)
            }
        }
    }
}
