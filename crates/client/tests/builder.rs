use client::{
    ClientBuilder, ClientConfiguration, ClientSettings, ConnectionSettings, LogLevel,
    ResolvedConfiguration,
};
use proptest::prelude::*;

#[test]
fn domain_scenario_with_every_override() {
    let client = ClientBuilder::with_domain("api.foo.com")
        .connect_timeout_seconds(10)
        .dns_refresh_seconds(5)
        .stats_flush_seconds(15)
        .log_level(LogLevel::Debug)
        .build()
        .unwrap();

    let expected = ResolvedConfiguration::new(
        "api.foo.com",
        &ConnectionSettings {
            connect_timeout_seconds: 10,
            dns_refresh_seconds: 5,
            stats_flush_seconds: 15,
        },
    );
    assert_eq!(
        client.configuration(),
        &ClientConfiguration::Resolved(expected)
    );
    assert_eq!(client.log_level(), LogLevel::Debug);
}

#[test]
fn yaml_scenario_holds_document_unchanged() {
    let client = ClientBuilder::with_yaml("some: config").build().unwrap();
    assert_eq!(
        client.configuration(),
        &ClientConfiguration::Yaml("some: config".to_string())
    );
}

#[test]
fn zero_values_are_accepted() {
    let client = ClientBuilder::with_domain("api.foo.com")
        .connect_timeout_seconds(0)
        .dns_refresh_seconds(0)
        .stats_flush_seconds(0)
        .build()
        .unwrap();

    let config = client.configuration().as_resolved().unwrap();
    assert_eq!(config.connect_timeout_seconds(), 0);
    assert_eq!(config.dns_refresh_seconds(), 0);
    assert_eq!(config.stats_flush_seconds(), 0);
}

#[test]
fn settings_file_round_trip_to_client() {
    let settings = ClientSettings::from_toml_str(
        r#"
        yaml = "some: config"
        connect_timeout_seconds = 1
        "#,
    )
    .unwrap();

    let client = ClientBuilder::from_settings(&settings)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(client.configuration().as_yaml(), Some("some: config"));
}

#[test]
fn built_client_can_be_started_once() {
    let client = ClientBuilder::with_domain("api.foo.com").build().unwrap();
    client.start().unwrap();
    assert!(client.start().is_err());
}

proptest! {
    #[test]
    fn any_domain_gets_the_default_settings(domain in "[a-z0-9]{1,20}(\\.[a-z0-9]{1,20}){0,3}") {
        let client = ClientBuilder::with_domain(domain.clone()).build().unwrap();
        let config = client.configuration().as_resolved().unwrap();

        prop_assert_eq!(config.domain(), domain.as_str());
        prop_assert_eq!(config.connect_timeout_seconds(), 30);
        prop_assert_eq!(config.dns_refresh_seconds(), 60);
        prop_assert_eq!(config.stats_flush_seconds(), 60);
        prop_assert_eq!(client.log_level(), LogLevel::Info);
    }
}
