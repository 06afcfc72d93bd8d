use super::{RecordType, SoaData};
use std::net::{Ipv4Addr, Ipv6Addr};

/// The DNS class of a query, carried through to every synthesized
/// record. Only IN is expected in practice but the value is passed
/// through untouched.
pub type DnsClass = u16;

pub const CLASS_IN: DnsClass = 1;

/// Typed payload of a synthesized answer. One variant per supported
/// record type; adding a type means adding a variant and its content
/// grammar, not touching shared logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Mx { preference: u16, exchange: String },
    Txt(String),
    Ptr(String),
    Soa(SoaData),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Ptr(_) => RecordType::PTR,
            RecordData::Soa(_) => RecordType::SOA,
        }
    }
}

/// A protocol-ready resource record. `name` is always fully qualified,
/// regardless of how the owner name was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub class: DnsClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
