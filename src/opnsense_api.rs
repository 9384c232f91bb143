mod error;
mod http;
mod interface;
mod types;

use std::net::Ipv4Addr;

use tracing::{debug, info, instrument};

pub use error::FirewallError;
pub use http::OpnsenseClient;
pub use interface::OpnsenseApi;
pub use types::{AliasAddRequest, AliasList, AliasRow, Credentials};

/// Whether `ip` is currently a member of the configured alias. Always asks
/// the firewall, nothing is cached.
#[instrument(skip(api))]
pub async fn is_authorized(api: &impl OpnsenseApi, ip: Ipv4Addr) -> Result<bool, FirewallError> {
    let aliases = api.list_alias().await?;
    let member = aliases.contains(&ip.to_string());
    debug!(rows = aliases.rows.len(), member);

    Ok(member)
}

/// Adds `ip` to the configured alias. The firewall treats re-adding a member
/// as success, so any 200 counts.
#[instrument(skip(api))]
pub async fn authorize(api: &impl OpnsenseApi, ip: Ipv4Addr) -> Result<(), FirewallError> {
    let response = api.add_to_alias(ip).await?;
    info!(msg = "Firewall accepted alias add", response = response.trim());

    Ok(())
}
