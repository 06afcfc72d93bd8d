//! Typed-record synthesis: turns a stored `(type, content, ttl)` tuple
//! into a protocol-ready resource record. Content parsing failures fail
//! the single record; callers drop it and continue the batch.

use sqlzone_domain::{
    name::to_fqdn, DnsClass, DomainError, RecordData, RecordType, ResourceRecord, SoaData,
    StoredRecord,
};
use tracing::warn;

const DEFAULT_MX_PREFERENCE: u16 = 1;

pub fn build_record(record: &StoredRecord, class: DnsClass) -> Result<ResourceRecord, DomainError> {
    let data = match record.record_type {
        RecordType::A => RecordData::A(record.content.parse().map_err(|_| {
            DomainError::InvalidIpAddress(format!("not an IPv4 literal: {:?}", record.content))
        })?),
        RecordType::AAAA => RecordData::Aaaa(record.content.parse().map_err(|_| {
            DomainError::InvalidIpAddress(format!("not an IPv6 literal: {:?}", record.content))
        })?),
        RecordType::NS => RecordData::Ns(record.content.clone()),
        RecordType::PTR => RecordData::Ptr(record.content.clone()),
        RecordType::TXT => RecordData::Txt(record.content.clone()),
        RecordType::MX => parse_mx(&record.content)?,
        RecordType::SOA => RecordData::Soa(SoaData::decode(&record.content)?),
        other => return Err(DomainError::UnsupportedRecordType(other.to_string())),
    };

    Ok(ResourceRecord {
        name: to_fqdn(&record.name),
        class,
        ttl: record.ttl,
        data,
    })
}

/// MX content is `"<exchange> [preference]"`. A missing or unparsable
/// preference falls back to 1; a missing exchange fails the build.
fn parse_mx(content: &str) -> Result<RecordData, DomainError> {
    let mut tokens = content.split_whitespace();
    let exchange = tokens
        .next()
        .ok_or_else(|| DomainError::MalformedContent("MX content is empty".to_string()))?;

    let preference = match tokens.next() {
        Some(token) => token.parse::<u16>().unwrap_or_else(|_| {
            warn!(preference = token, "Unparsable MX preference, using default");
            DEFAULT_MX_PREFERENCE
        }),
        None => DEFAULT_MX_PREFERENCE,
    };

    Ok(RecordData::Mx {
        preference,
        exchange: exchange.to_string(),
    })
}
