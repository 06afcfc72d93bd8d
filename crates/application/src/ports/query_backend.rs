use async_trait::async_trait;
use sqlzone_domain::{DnsClass, DomainError, QueryType, ResourceRecord};

/// What a resolution concluded for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// This backend claims authority: `answers` go in the Answer
    /// section; `authority` holds the SOA attached to an authoritative
    /// non-existence reply (placed in the Additional section on the
    /// wire).
    Answered {
        answers: Vec<ResourceRecord>,
        authority: Vec<ResourceRecord>,
    },
    /// The query is not ours; the serving layer decides what that
    /// means (next handler in a chain, Refused when standalone).
    NotMine,
}

/// Entry point the serving layer resolves queries through. Implemented
/// by both the per-record resolver and the static legacy backend.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn resolve(
        &self,
        qname: &str,
        qtype: QueryType,
        class: DnsClass,
    ) -> Result<ResolutionOutcome, DomainError>;
}
