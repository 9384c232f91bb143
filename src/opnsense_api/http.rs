use std::net::Ipv4Addr;
use std::time::Duration;

use anyhow::anyhow;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use tracing::{error, instrument};

use crate::metrics::{OUTGOING_REQUESTS_COUNTER, UPSTREAM_FAILURES_COUNTER};
use crate::{Config, USER_AGENT};

use super::error::FirewallError;
use super::interface::OpnsenseApi;
use super::types::{AliasAddRequest, AliasList, Credentials};

const LIST: &str = "list";
const ADD: &str = "add";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct OpnsenseClient {
    client: Client,
    list_url: Url,
    add_url: Url,
    credentials: Credentials,
}

impl OpnsenseClient {
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(CONNECT_TIMEOUT))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .build()?;

        Self::new_with_client(client, &config.host, &config.alias, config.credentials)
    }

    pub fn new_with_client(
        client: Client,
        host: &Url,
        alias: &str,
        credentials: Credentials,
    ) -> Result<Self, anyhow::Error> {
        if alias.is_empty() {
            return Err(anyhow!("alias name must not be empty"));
        }
        Ok(Self {
            client,
            list_url: alias_endpoint(host, LIST, alias)?,
            add_url: alias_endpoint(host, ADD, alias)?,
            credentials,
        })
    }

    async fn send(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, FirewallError> {
        OUTGOING_REQUESTS_COUNTER
            .with_label_values(&["OPNSENSE", endpoint])
            .inc();

        let resp = request
            .basic_auth(&self.credentials.key, Some(&self.credentials.secret))
            .send()
            .await
            .map_err(FirewallError::Transport)?;

        match resp.status() {
            StatusCode::OK => Ok(resp),
            status => Err(FirewallError::Status(status)),
        }
    }

    async fn list(&self) -> Result<AliasList, FirewallError> {
        let resp = self.send(LIST, self.client.get(self.list_url.clone())).await?;
        let body = resp.bytes().await.map_err(FirewallError::Body)?;

        Ok(serde_json::from_slice(&body)?)
    }

    async fn add(&self, ip: Ipv4Addr) -> Result<String, FirewallError> {
        let request = self
            .client
            .post(self.add_url.clone())
            .json(&AliasAddRequest { address: ip });
        let resp = self.send(ADD, request).await?;

        resp.text().await.map_err(FirewallError::Body)
    }
}

impl OpnsenseApi for OpnsenseClient {
    #[instrument(skip(self), fields(url = %self.list_url))]
    async fn list_alias(&self) -> Result<AliasList, FirewallError> {
        self.list().await.inspect_err(|err| log_failure(LIST, err))
    }

    #[instrument(skip(self), fields(url = %self.add_url))]
    async fn add_to_alias(&self, ip: Ipv4Addr) -> Result<String, FirewallError> {
        self.add(ip).await.inspect_err(|err| log_failure(ADD, err))
    }
}

/// `{host}/api/firewall/alias_util/{action}/{alias}`, with the alias encoded
/// as a single path segment.
fn alias_endpoint(host: &Url, action: &str, alias: &str) -> Result<Url, anyhow::Error> {
    let mut url = host.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("{host} cannot be used as a base url"))?
        .pop_if_empty()
        .extend(["api", "firewall", "alias_util", action, alias]);
    Ok(url)
}

fn log_failure(endpoint: &'static str, err: &FirewallError) {
    UPSTREAM_FAILURES_COUNTER
        .with_label_values(&[endpoint, err.kind()])
        .inc();
    match err {
        FirewallError::Status(status) => error!(
            msg = "Firewall rejected request",
            endpoint,
            status = status.as_u16()
        ),
        _ => error!(msg = "Firewall request failed", endpoint, kind = err.kind(), %err),
    }
}

#[cfg(test)]
mod tests {
    use super::{alias_endpoint, OpnsenseClient};
    use crate::opnsense_api::Credentials;
    use reqwest::{Client, Url};

    fn endpoint(host: &str, action: &str, alias: &str) -> String {
        let host: Url = host.parse().unwrap();
        alias_endpoint(&host, action, alias).unwrap().to_string()
    }

    #[test]
    fn builds_alias_endpoints() {
        assert_eq!(
            endpoint("https://fw.example.com/", "list", "office"),
            "https://fw.example.com/api/firewall/alias_util/list/office"
        );
        assert_eq!(
            endpoint("https://10.0.0.1:8443", "add", "office"),
            "https://10.0.0.1:8443/api/firewall/alias_util/add/office"
        );
        assert_eq!(
            endpoint("https://fw.example.com/opnsense/", "list", "office"),
            "https://fw.example.com/opnsense/api/firewall/alias_util/list/office"
        );
    }

    #[test]
    fn alias_is_a_single_segment() {
        assert_eq!(
            endpoint("https://fw.example.com/", "list", "a/b c"),
            "https://fw.example.com/api/firewall/alias_util/list/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_empty_alias() {
        let host: Url = "https://fw.example.com/".parse().unwrap();
        let client = OpnsenseClient::new_with_client(
            Client::new(),
            &host,
            "",
            Credentials::new("key", "secret"),
        );
        assert!(client.is_err());
    }

    #[test]
    fn rejects_non_base_host() {
        let host: Url = "mailto:admin@example.com".parse().unwrap();
        assert!(alias_endpoint(&host, "list", "office").is_err());
    }
}
