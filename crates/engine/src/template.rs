//! Bootstrap template used for domain-based configurations.
//!
//! Placeholders are substituted by
//! [`bootstrap::ResolvedConfiguration::resolve_template`].

/// Default bootstrap document. Routes every request through a single
/// TLS cluster pointed at the configured domain.
pub const DEFAULT_TEMPLATE: &str = r#"static_resources:
  listeners:
  - name: base_api_listener
    address:
      socket_address:
        protocol: TCP
        address: 0.0.0.0
        port_value: 10000
    api_listener:
      api_listener:
        "@type": type.googleapis.com/envoy.config.filter.network.http_connection_manager.v2.HttpConnectionManager
        stat_prefix: hcm
        route_config:
          name: api_router
          virtual_hosts:
          - name: api
            domains: ["*"]
            routes:
            - match: { prefix: "/" }
              route: { cluster: base }
        http_filters:
        - name: envoy.router
  clusters:
  - name: base
    connect_timeout: {{ connect_timeout_seconds }}s
    dns_refresh_rate: {{ dns_refresh_rate_seconds }}s
    http2_protocol_options: {}
    lb_policy: ROUND_ROBIN
    load_assignment:
      cluster_name: base
      endpoints:
      - lb_endpoints:
        - endpoint:
            address:
              socket_address: { address: {{ domain }}, port_value: 443 }
    transport_socket:
      name: envoy.transport_sockets.tls
      typed_config:
        "@type": type.googleapis.com/envoy.api.v2.auth.UpstreamTlsContext
        sni: {{ domain }}
    type: LOGICAL_DNS
stats_flush_interval: {{ stats_flush_interval_seconds }}s
watchdog:
  megamiss_timeout: 60s
  miss_timeout: 60s
"#;

#[cfg(test)]
mod tests {
    use bootstrap::{ConnectionSettings, ResolvedConfiguration};

    use super::*;

    #[test]
    fn default_template_resolves_completely() {
        let config = ResolvedConfiguration::new("api.foo.com", &ConnectionSettings::default());
        let rendered = config.resolve_template(DEFAULT_TEMPLATE).unwrap();
        assert!(rendered.contains("sni: api.foo.com"));
        assert!(rendered.contains("connect_timeout: 30s"));
        assert!(rendered.contains("dns_refresh_rate: 60s"));
        assert!(rendered.contains("stats_flush_interval: 60s"));
        assert!(!rendered.contains("{{"));
    }
}
