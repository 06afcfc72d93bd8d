mod helpers;

use helpers::MockZoneRepository;
use sqlzone_application::ports::{QueryBackend, ResolutionOutcome};
use sqlzone_application::use_cases::StaticResolveUseCase;
use sqlzone_domain::{QueryType, RecordData, RecordType, SoaData, StaticRecordSet, CLASS_IN};
use std::sync::Arc;

fn record_set() -> StaticRecordSet {
    StaticRecordSet {
        a: Some("192.0.2.53".parse().unwrap()),
        aaaa: Some("2001:db8::53".parse().unwrap()),
        mx: Some("mail.example.com.".to_string()),
        ns: Some("ns1.example.com.".to_string()),
        soa: SoaData::decode("ns1.example.com hostmaster.example.com 1 7200 3600 1209600 3600")
            .unwrap(),
        ttl: 900,
    }
}

fn backend(store: &MockZoneRepository) -> StaticResolveUseCase {
    StaticResolveUseCase::new(Arc::new(store.clone()), record_set())
}

#[tokio::test]
async fn test_existing_zone_gets_the_configured_address() {
    let store = MockZoneRepository::new();
    store.add_zone(1, "example.com");

    let outcome = backend(&store)
        .resolve("example.com.", QueryType::Of(RecordType::A), CLASS_IN)
        .await
        .unwrap();

    match outcome {
        ResolutionOutcome::Answered { answers, authority } => {
            assert!(authority.is_empty());
            assert_eq!(answers.len(), 1);
            assert_eq!(answers[0].name, "example.com.");
            assert_eq!(answers[0].ttl, 900);
            assert_eq!(answers[0].data, RecordData::A("192.0.2.53".parse().unwrap()));
        }
        other => panic!("expected a static answer, got {:?}", other),
    }
}

#[tokio::test]
async fn test_per_type_static_values() {
    let store = MockZoneRepository::new();
    store.add_zone(1, "example.com");
    let backend = backend(&store);

    let mx = backend
        .resolve("example.com.", QueryType::Of(RecordType::MX), CLASS_IN)
        .await
        .unwrap();
    match mx {
        ResolutionOutcome::Answered { answers, .. } => assert_eq!(
            answers[0].data,
            RecordData::Mx {
                preference: 1,
                exchange: "mail.example.com.".to_string()
            }
        ),
        other => panic!("expected MX answer, got {:?}", other),
    }

    let soa = backend
        .resolve("example.com.", QueryType::Of(RecordType::SOA), CLASS_IN)
        .await
        .unwrap();
    match soa {
        ResolutionOutcome::Answered { answers, .. } => {
            assert!(matches!(answers[0].data, RecordData::Soa(_)))
        }
        other => panic!("expected SOA answer, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_zone_defers() {
    let store = MockZoneRepository::new();

    let outcome = backend(&store)
        .resolve("other.org.", QueryType::Of(RecordType::A), CLASS_IN)
        .await
        .unwrap();

    assert_eq!(outcome, ResolutionOutcome::NotMine);
}

#[tokio::test]
async fn test_unconfigured_type_defers() {
    let store = MockZoneRepository::new();
    store.add_zone(1, "example.com");

    let mut set = record_set();
    set.aaaa = None;
    let backend = StaticResolveUseCase::new(Arc::new(store.clone()), set);

    let outcome = backend
        .resolve("example.com.", QueryType::Of(RecordType::AAAA), CLASS_IN)
        .await
        .unwrap();

    assert_eq!(outcome, ResolutionOutcome::NotMine);
}

#[tokio::test]
async fn test_any_query_defers() {
    let store = MockZoneRepository::new();
    store.add_zone(1, "example.com");

    let outcome = backend(&store)
        .resolve("example.com.", QueryType::Any, CLASS_IN)
        .await
        .unwrap();

    assert_eq!(outcome, ResolutionOutcome::NotMine);
}

#[tokio::test]
async fn test_record_table_is_ignored_in_static_mode() {
    let store = MockZoneRepository::new();
    store.add_zone(1, "example.com");
    store.add_record(1, "example.com", RecordType::A, "10.9.9.9", 60);

    let outcome = backend(&store)
        .resolve("example.com.", QueryType::Of(RecordType::A), CLASS_IN)
        .await
        .unwrap();

    match outcome {
        ResolutionOutcome::Answered { answers, .. } => {
            assert_eq!(answers[0].data, RecordData::A("192.0.2.53".parse().unwrap()))
        }
        other => panic!("expected the configured static value, got {:?}", other),
    }
}
