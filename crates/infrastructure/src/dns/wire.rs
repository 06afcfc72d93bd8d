//! Mapping from the domain's typed answer model onto hickory wire
//! records.

use hickory_proto::rr::{rdata, DNSClass, Name, RData, Record};
use sqlzone_domain::{DomainError, RecordData, ResourceRecord};

pub fn to_wire_record(rr: &ResourceRecord, class: DNSClass) -> Result<Record, DomainError> {
    let name = parse_name(&rr.name)?;

    let rdata = match &rr.data {
        RecordData::A(addr) => RData::A(rdata::A(*addr)),
        RecordData::Aaaa(addr) => RData::AAAA(rdata::AAAA(*addr)),
        RecordData::Ns(host) => RData::NS(rdata::NS(parse_name(host)?)),
        RecordData::Ptr(host) => RData::PTR(rdata::PTR(parse_name(host)?)),
        RecordData::Txt(text) => RData::TXT(rdata::TXT::new(vec![text.clone()])),
        RecordData::Mx {
            preference,
            exchange,
        } => RData::MX(rdata::MX::new(*preference, parse_name(exchange)?)),
        RecordData::Soa(soa) => RData::SOA(rdata::SOA::new(
            parse_name(&soa.mname)?,
            parse_name(&soa.rname)?,
            soa.serial,
            soa.refresh as i32,
            soa.retry as i32,
            soa.expire as i32,
            soa.minimum,
        )),
    };

    let mut record = Record::from_rdata(name, rr.ttl, rdata);
    record.set_dns_class(class);
    Ok(record)
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_utf8(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::RecordType as WireType;
    use sqlzone_domain::{SoaData, CLASS_IN};

    fn wire(data: RecordData) -> Record {
        let rr = ResourceRecord {
            name: "host.example.com.".to_string(),
            class: CLASS_IN,
            ttl: 300,
            data,
        };
        to_wire_record(&rr, DNSClass::IN).unwrap()
    }

    #[test]
    fn test_a_record_maps_to_wire() {
        let record = wire(RecordData::A("192.0.2.1".parse().unwrap()));

        assert_eq!(record.record_type(), WireType::A);
        assert_eq!(record.name().to_utf8(), "host.example.com.");
        assert_eq!(record.ttl(), 300);
        assert_eq!(record.dns_class(), DNSClass::IN);
    }

    #[test]
    fn test_mx_record_carries_preference_and_exchange() {
        let record = wire(RecordData::Mx {
            preference: 5,
            exchange: "mail.example.com.".to_string(),
        });

        match record.data() {
            RData::MX(mx) => {
                assert_eq!(mx.preference(), 5);
                assert_eq!(mx.exchange().to_utf8(), "mail.example.com.");
            }
            other => panic!("expected MX rdata, got {:?}", other),
        }
    }

    #[test]
    fn test_soa_record_maps_all_fields() {
        let soa =
            SoaData::decode("ns1.example.com hostmaster.example.com 1 7200 3600 1209600 3600")
                .unwrap();
        let record = wire(RecordData::Soa(soa));

        match record.data() {
            RData::SOA(soa) => {
                assert_eq!(soa.serial(), 1);
                assert_eq!(soa.refresh(), 7200);
                assert_eq!(soa.retry(), 3600);
                assert_eq!(soa.expire(), 1209600);
                assert_eq!(soa.minimum(), 3600);
            }
            other => panic!("expected SOA rdata, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_owner_name_is_an_error() {
        // A label longer than 63 bytes can never encode.
        let rr = ResourceRecord {
            name: format!("{}.example.com.", "a".repeat(64)),
            class: CLASS_IN,
            ttl: 60,
            data: RecordData::Txt("x".to_string()),
        };
        assert!(to_wire_record(&rr, DNSClass::IN).is_err());
    }
}
