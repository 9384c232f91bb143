pub mod cli;
pub mod gateway;
pub mod metrics;
pub mod opnsense_api;
pub mod prometheus;
pub mod tracing_setup;
pub mod validation;

use std::time::Duration;

use reqwest::Url;

use opnsense_api::{Credentials, OpnsenseClient};

pub(crate) const USER_AGENT: &str = "opnsense-ip-gateway/v0.1.0";

pub struct App {
    firewall: OpnsenseClient,
}

/// Upstream firewall settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: Url,
    pub alias: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl App {
    pub fn new(firewall: OpnsenseClient) -> Self {
        Self { firewall }
    }
}
