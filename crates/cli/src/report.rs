//! JSON summary printed on stdout after a client is built.

use client::{Client, ClientConfiguration, ClientId, LogLevel};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    client_id: ClientId,
    engine: &'a str,
    log_level: LogLevel,
    started: bool,
    configuration: &'a ClientConfiguration,
}

impl<'a> Report<'a> {
    fn new(client: &'a Client, started: bool) -> Self {
        Self {
            client_id: client.id(),
            engine: client.engine().name(),
            log_level: client.log_level(),
            started,
            configuration: client.configuration(),
        }
    }
}

/// Renders the report for `client` as pretty-printed JSON.
pub fn render(client: &Client, started: bool) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(client, started))
}
