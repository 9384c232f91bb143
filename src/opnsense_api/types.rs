use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Body of `alias_util/add/{alias}`.
#[derive(Debug, Serialize)]
pub struct AliasAddRequest {
    pub address: Ipv4Addr,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AliasList {
    pub total: Option<u64>,
    pub row_count: Option<i64>,
    pub current: Option<u64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub rows: Vec<AliasRow>,
}

/// Rows without an address never match.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AliasRow {
    #[serde(default)]
    pub ip: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<AliasRow>, D::Error> {
    Ok(Option::<Vec<AliasRow>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AliasList {
    /// Exact string match against the rows the firewall returned.
    pub fn contains(&self, ip: &str) -> bool {
        self.rows.iter().any(|row| row.ip.as_deref() == Some(ip))
    }
}
