//! Configuration sources and the configuration a client is started with.
//!
//! A builder starts from exactly one [`ConfigurationSource`]. At build time
//! the source is resolved into a [`ClientConfiguration`]:
//!
//! | Source | Resolved into |
//! |--------|---------------|
//! | [`ConfigurationSource::Yaml`] | [`ClientConfiguration::Yaml`], the document unchanged |
//! | [`ConfigurationSource::Domain`] | [`ClientConfiguration::Resolved`], domain plus [`ConnectionSettings`] |
//!
//! Structured settings are never merged into a raw document.

use std::borrow::Cow;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Default timeout for new network connections, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u32 = 30;

/// Default DNS refresh rate, in seconds.
pub const DEFAULT_DNS_REFRESH_SECONDS: u32 = 60;

/// Default stats flush interval, in seconds.
pub const DEFAULT_STATS_FLUSH_SECONDS: u32 = 60;

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Where a client's configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationSource {
    /// A complete configuration document, passed to the engine verbatim.
    Yaml(String),
    /// A domain name (e.g. `api.foo.com`) combined with structured settings.
    Domain(String),
}

impl ConfigurationSource {
    /// Short label for logs: `"yaml"` or `"domain"`.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigurationSource::Yaml(_) => "yaml",
            ConfigurationSource::Domain(_) => "domain",
        }
    }

    /// Resolves this source against `settings`.
    ///
    /// `settings` is ignored entirely for [`ConfigurationSource::Yaml`].
    pub fn resolve(&self, settings: &ConnectionSettings) -> ClientConfiguration {
        match self {
            ConfigurationSource::Yaml(yaml) => ClientConfiguration::Yaml(yaml.clone()),
            ConfigurationSource::Domain(domain) => ClientConfiguration::Resolved(
                ResolvedConfiguration::new(domain.clone(), settings),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Structured settings
// ---------------------------------------------------------------------------

/// Structured connection parameters used with a domain source.
///
/// No field is validated. Zero is a legal value; what it means is up to the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Timeout for new network connections to hosts in the cluster.
    pub connect_timeout_seconds: u32,
    /// Rate at which DNS is refreshed.
    pub dns_refresh_seconds: u32,
    /// Interval at which stats are flushed.
    pub stats_flush_seconds: u32,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
            dns_refresh_seconds: DEFAULT_DNS_REFRESH_SECONDS,
            stats_flush_seconds: DEFAULT_STATS_FLUSH_SECONDS,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully specified structured configuration for a domain source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedConfiguration {
    domain: String,
    connect_timeout_seconds: u32,
    dns_refresh_seconds: u32,
    stats_flush_seconds: u32,
}

impl ResolvedConfiguration {
    /// Placeholder name replaced by the domain.
    pub const DOMAIN_KEY: &'static str = "domain";
    /// Placeholder name replaced by the connect timeout, in seconds.
    pub const CONNECT_TIMEOUT_KEY: &'static str = "connect_timeout_seconds";
    /// Placeholder name replaced by the DNS refresh rate, in seconds.
    pub const DNS_REFRESH_KEY: &'static str = "dns_refresh_rate_seconds";
    /// Placeholder name replaced by the stats flush interval, in seconds.
    pub const STATS_FLUSH_KEY: &'static str = "stats_flush_interval_seconds";

    /// Pairs `domain` with a copy of `settings`.
    pub fn new(domain: impl Into<String>, settings: &ConnectionSettings) -> Self {
        Self {
            domain: domain.into(),
            connect_timeout_seconds: settings.connect_timeout_seconds,
            dns_refresh_seconds: settings.dns_refresh_seconds,
            stats_flush_seconds: settings.stats_flush_seconds,
        }
    }

    /// Returns the domain, exactly as given to the builder.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the connect timeout, in seconds.
    pub fn connect_timeout_seconds(&self) -> u32 {
        self.connect_timeout_seconds
    }

    /// Returns the DNS refresh rate, in seconds.
    pub fn dns_refresh_seconds(&self) -> u32 {
        self.dns_refresh_seconds
    }

    /// Returns the stats flush interval, in seconds.
    pub fn stats_flush_seconds(&self) -> u32 {
        self.stats_flush_seconds
    }

    /// Returns the connect timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    /// Returns the DNS refresh rate as a [`Duration`].
    pub fn dns_refresh_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.dns_refresh_seconds))
    }

    /// Returns the stats flush interval as a [`Duration`].
    pub fn stats_flush_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.stats_flush_seconds))
    }

    /// Substitutes this configuration into a bootstrap `template`.
    ///
    /// Placeholders are written `{{ name }}` with one of the `*_KEY` names;
    /// surrounding whitespace inside the braces is ignored. The template is
    /// scanned once, so substituted values are copied verbatim and never
    /// treated as placeholders themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnresolvedTemplate`] for the first
    /// placeholder in `template` with an unknown name, or for a `{{` that is
    /// never closed.
    pub fn resolve_template(&self, template: &str) -> Result<String, ConfigurationError> {
        let mut rendered = String::with_capacity(template.len() + self.domain.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find("}}") else {
                return Err(unresolved(tail));
            };
            let placeholder = &tail[..end + 2];
            let value = self
                .placeholder_value(tail[2..end].trim())
                .ok_or_else(|| unresolved(placeholder))?;
            rendered.push_str(&value);
            rest = &tail[end + 2..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }

    fn placeholder_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            Self::DOMAIN_KEY => Some(Cow::Borrowed(self.domain.as_str())),
            Self::CONNECT_TIMEOUT_KEY => Some(self.connect_timeout_seconds.to_string().into()),
            Self::DNS_REFRESH_KEY => Some(self.dns_refresh_seconds.to_string().into()),
            Self::STATS_FLUSH_KEY => Some(self.stats_flush_seconds.to_string().into()),
            _ => None,
        }
    }
}

fn unresolved(placeholder: &str) -> ConfigurationError {
    ConfigurationError::UnresolvedTemplate {
        placeholder: placeholder.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Client configuration
// ---------------------------------------------------------------------------

/// The configuration a client holds after its source has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientConfiguration {
    /// A raw document, exactly as given to the builder.
    Yaml(String),
    /// A structured configuration built from a domain source.
    Resolved(ResolvedConfiguration),
}

impl ClientConfiguration {
    /// Returns the raw document, if this is a [`ClientConfiguration::Yaml`].
    pub fn as_yaml(&self) -> Option<&str> {
        match self {
            ClientConfiguration::Yaml(yaml) => Some(yaml),
            ClientConfiguration::Resolved(_) => None,
        }
    }

    /// Returns the structured configuration, if this is a
    /// [`ClientConfiguration::Resolved`].
    pub fn as_resolved(&self) -> Option<&ResolvedConfiguration> {
        match self {
            ClientConfiguration::Yaml(_) => None,
            ClientConfiguration::Resolved(config) => Some(config),
        }
    }

    /// Produces the document an engine is started with.
    ///
    /// A raw document is borrowed as-is and `template` is not consulted. A
    /// resolved configuration is rendered into `template`.
    pub fn bootstrap_document<'a>(
        &'a self,
        template: &str,
    ) -> Result<Cow<'a, str>, ConfigurationError> {
        match self {
            ClientConfiguration::Yaml(yaml) => Ok(Cow::Borrowed(yaml)),
            ClientConfiguration::Resolved(config) => {
                config.resolve_template(template).map(Cow::Owned)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "domain: {{ domain }}\n\
        connect: {{ connect_timeout_seconds }}s\n\
        dns: {{ dns_refresh_rate_seconds }}s\n\
        flush: {{ stats_flush_interval_seconds }}s\n";

    #[test]
    fn connection_settings_defaults() {
        let settings = ConnectionSettings::default();
        assert_eq!(settings.connect_timeout_seconds, 30);
        assert_eq!(settings.dns_refresh_seconds, 60);
        assert_eq!(settings.stats_flush_seconds, 60);
    }

    #[test]
    fn yaml_source_ignores_settings() {
        let source = ConfigurationSource::Yaml("some: config".into());
        let settings = ConnectionSettings {
            connect_timeout_seconds: 1,
            dns_refresh_seconds: 2,
            stats_flush_seconds: 3,
        };
        assert_eq!(
            source.resolve(&settings),
            ClientConfiguration::Yaml("some: config".into())
        );
    }

    #[test]
    fn domain_source_carries_settings() {
        let source = ConfigurationSource::Domain("api.foo.com".into());
        let resolved = source.resolve(&ConnectionSettings::default());
        let config = resolved.as_resolved().unwrap();
        assert_eq!(config.domain(), "api.foo.com");
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.dns_refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.stats_flush_interval(), Duration::from_secs(60));
    }

    #[test]
    fn zero_values_pass_through() {
        let settings = ConnectionSettings {
            connect_timeout_seconds: 0,
            dns_refresh_seconds: 0,
            stats_flush_seconds: 0,
        };
        let config = ResolvedConfiguration::new("example.com", &settings);
        assert_eq!(config.connect_timeout_seconds(), 0);
        assert_eq!(config.dns_refresh_seconds(), 0);
        assert_eq!(config.stats_flush_seconds(), 0);
    }

    #[test]
    fn resolves_every_placeholder() {
        let settings = ConnectionSettings {
            connect_timeout_seconds: 10,
            dns_refresh_seconds: 5,
            stats_flush_seconds: 15,
        };
        let config = ResolvedConfiguration::new("api.foo.com", &settings);
        let rendered = config.resolve_template(TEMPLATE).unwrap();
        assert_eq!(
            rendered,
            "domain: api.foo.com\nconnect: 10s\ndns: 5s\nflush: 15s\n"
        );
    }

    #[test]
    fn reports_first_unresolved_placeholder() {
        let config = ResolvedConfiguration::new("api.foo.com", &ConnectionSettings::default());
        let err = config
            .resolve_template("domain: {{ domain }}\ncluster: {{ cluster_name }}\n")
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnresolvedTemplate {
                placeholder: "{{ cluster_name }}".into()
            }
        );
    }

    #[test]
    fn unterminated_placeholder_is_reported_to_end_of_document() {
        let config = ResolvedConfiguration::new("api.foo.com", &ConnectionSettings::default());
        let err = config.resolve_template("value: {{ oops").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnresolvedTemplate {
                placeholder: "{{ oops".into()
            }
        );
    }

    #[test]
    fn domain_that_looks_like_a_placeholder_is_copied_verbatim() {
        let config = ResolvedConfiguration::new(
            "{{ stats_flush_interval_seconds }}",
            &ConnectionSettings::default(),
        );
        let rendered = config.resolve_template("sni: {{ domain }}\n").unwrap();
        assert_eq!(rendered, "sni: {{ stats_flush_interval_seconds }}\n");
    }

    #[test]
    fn domain_with_open_braces_renders() {
        let config = ResolvedConfiguration::new("weird{{host", &ConnectionSettings::default());
        let rendered = config
            .resolve_template("sni: {{ domain }}\nflush: {{ stats_flush_interval_seconds }}s\n")
            .unwrap();
        assert_eq!(rendered, "sni: weird{{host\nflush: 60s\n");
    }

    #[test]
    fn placeholder_whitespace_is_ignored() {
        let config = ResolvedConfiguration::new("api.foo.com", &ConnectionSettings::default());
        let rendered = config
            .resolve_template("{{domain}}:{{  connect_timeout_seconds }}")
            .unwrap();
        assert_eq!(rendered, "api.foo.com:30");
    }

    #[test]
    fn raw_bootstrap_document_is_borrowed_unchanged() {
        let config = ClientConfiguration::Yaml("{{ domain }} stays".into());
        let document = config.bootstrap_document(TEMPLATE).unwrap();
        assert!(matches!(document, Cow::Borrowed(_)));
        assert_eq!(document, "{{ domain }} stays");
    }

    #[test]
    fn resolved_configuration_serialises_with_field_names() {
        let config = ResolvedConfiguration::new("api.foo.com", &ConnectionSettings::default());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["domain"], "api.foo.com");
        assert_eq!(json["connect_timeout_seconds"], 30);
        assert_eq!(json["dns_refresh_seconds"], 60);
        assert_eq!(json["stats_flush_seconds"], 60);
    }
}
