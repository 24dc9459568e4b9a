//! Configuration loading from environment.

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// OTLP collector endpoint; span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match non_empty(lookup("EVALUATOR_APP_PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid EVALUATOR_APP_PORT {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        let host = match non_empty(lookup("EVALUATOR_APP_HOST")) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| anyhow::anyhow!("invalid EVALUATOR_APP_HOST {raw:?}: {e}"))?,
            None => DEFAULT_HOST,
        };
        let otlp_endpoint = non_empty(lookup("OTEL_EXPORTER_OTLP_ENDPOINT"));

        Ok(Self {
            host,
            port,
            otlp_endpoint,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
