//! Syntax check for the `ip` parameter.
//!
//! Only the canonical dotted-quad form is accepted: four decimal octets in
//! `0..=255`, no leading zeros, no surrounding whitespace, no prefix length.
//! The accepted string is exactly what `Ipv4Addr::to_string` produces, which
//! lets the firewall rows be compared by string.

use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a dotted-quad IPv4 address: {0:?}")]
pub struct InvalidIp(pub String);

pub fn validate_ipv4(candidate: &str) -> Result<Ipv4Addr, InvalidIp> {
    candidate
        .parse::<Ipv4Addr>()
        .ok()
        .filter(|ip| ip.to_string() == candidate)
        .ok_or_else(|| InvalidIp(candidate.to_string()))
}
