use std::net::Ipv4Addr;

use super::error::FirewallError;
use super::types::AliasList;

#[allow(async_fn_in_trait)]
pub trait OpnsenseApi {
    /// Current rows of the configured alias.
    async fn list_alias(&self) -> Result<AliasList, FirewallError>;
    /// Adds `ip` to the configured alias and returns the raw response body.
    async fn add_to_alias(&self, ip: Ipv4Addr) -> Result<String, FirewallError>;
}
