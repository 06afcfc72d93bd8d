use sqlzone_domain::{DomainError, StaticRecordSet, StaticZoneConfig};

fn static_config(soa: &str) -> StaticZoneConfig {
    StaticZoneConfig {
        a: Some("192.0.2.1".to_string()),
        aaaa: Some("2001:db8::1".to_string()),
        mx: Some("mail.example.com.".to_string()),
        ns: Some("ns1.example.com.".to_string()),
        soa: soa.to_string(),
        ttl: 3600,
    }
}

#[test]
fn test_static_record_set_from_valid_config() {
    let cfg = static_config("ns1.example.com hostmaster.example.com 1 7200 3600 1209600 3600");
    let set = StaticRecordSet::try_from(&cfg).unwrap();

    assert_eq!(set.a.unwrap().to_string(), "192.0.2.1");
    assert_eq!(set.aaaa.unwrap().to_string(), "2001:db8::1");
    assert_eq!(set.soa.serial, 1);
    assert_eq!(set.ttl, 3600);
}

#[test]
fn test_malformed_static_soa_is_a_config_error() {
    let cfg = static_config("ns1.example.com hostmaster.example.com 1");
    assert!(matches!(
        StaticRecordSet::try_from(&cfg),
        Err(DomainError::ConfigError(_))
    ));
}

#[test]
fn test_invalid_static_address_is_a_config_error() {
    let mut cfg = static_config("ns1.example.com hostmaster.example.com 1 7200 3600 1209600 3600");
    cfg.a = Some("not-an-ip".to_string());
    assert!(matches!(
        StaticRecordSet::try_from(&cfg),
        Err(DomainError::ConfigError(_))
    ));
}

#[test]
fn test_full_config_parses_from_toml() {
    let cfg: sqlzone_domain::Config = toml::from_str(
        r#"
        [server]
        bind_address = "127.0.0.1"
        port = 5353

        [database]
        path = "/var/lib/sqlzone/zones.db"
        "#,
    )
    .unwrap();

    assert_eq!(cfg.server.bind_address, "127.0.0.1");
    assert_eq!(cfg.server.port, 5353);
    assert_eq!(cfg.database.max_connections, 5);
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.static_zone.is_none());
}
