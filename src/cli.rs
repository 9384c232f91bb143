use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;

use clap::{ArgAction, Parser};
use reqwest::Url;

use crate::opnsense_api::Credentials;
use crate::Config;

pub const DEFAULT_PORT: u16 = 12356;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Firewall host, optionally with a port
    #[arg(long, env = "OPNSENSE_ADDR")]
    pub opnsense_addr: String,

    /// Alias that holds the authorized addresses
    #[arg(long, env = "ALIAS_NAME")]
    pub alias_name: String,

    #[arg(long, env = "APIKEY")]
    pub apikey: String,

    #[arg(long, env = "APIPASS", hide_env_values = true)]
    pub apipass: String,

    /// Skip TLS certificate verification towards the firewall
    #[arg(
        long,
        env = "IGNORE_CERT",
        action = ArgAction::Set,
        default_value = "false",
        value_parser = parse_ignore_cert
    )]
    pub ignore_cert: bool,

    #[arg(long, env = "LISTEN_ADDR", default_value_t = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))]
    pub listen_addr: SocketAddr,

    #[arg(long, env = "METRICS_ADDR", default_value = "127.0.0.1:3000")]
    pub metrics_addr: SocketAddr,

    #[arg(long, env = "OPNSENSE_TIMEOUT_SECS", default_value_t = 10)]
    pub opnsense_timeout_secs: u64,
}

/// Only a case-insensitive `true` turns verification off.
fn parse_ignore_cert(value: &str) -> Result<bool, Infallible> {
    Ok(value.eq_ignore_ascii_case("true"))
}

impl TryFrom<&Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let host = Url::parse(&format!("https://{}/", cli.opnsense_addr))?;
        Ok(Self {
            host,
            alias: cli.alias_name.clone(),
            credentials: Credentials::new(cli.apikey.clone(), cli.apipass.clone()),
            timeout: Duration::from_secs(cli.opnsense_timeout_secs),
            accept_invalid_certs: cli.ignore_cert,
        })
    }
}
