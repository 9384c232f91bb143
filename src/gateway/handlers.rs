use std::net::Ipv4Addr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::{error, info, instrument, warn};

use crate::metrics::GATEWAY_REQUESTS_COUNTER;
use crate::opnsense_api::{authorize, is_authorized};
use crate::validation::validate_ipv4;
use crate::App;

use super::error::GatewayError;

const CHECK: &str = "check";
const AUTHORIZE: &str = "authorize";

/// Raw query pairs in request order. Repeated keys are kept, so a second
/// `ip` never turns into a deserialization rejection.
type QueryPairs = Vec<(String, String)>;

/// First `ip` value, or empty when the parameter is absent.
fn first_ip(query: &QueryPairs) -> &str {
    query
        .iter()
        .find(|(key, _)| key == "ip")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

fn count(operation: &'static str, outcome: &'static str) {
    GATEWAY_REQUESTS_COUNTER
        .with_label_values(&[operation, outcome])
        .inc();
}

fn inspect_err(operation: &'static str, err: GatewayError) -> GatewayError {
    count(operation, err.outcome());
    match &err {
        GatewayError::InvalidIp(invalid) => {
            warn!(msg = "Rejected malformed IP", operation, ip = %invalid.0)
        }
        GatewayError::Firewall(fw_err) => {
            error!(msg = "Firewall request failed", operation, kind = fw_err.kind(), %fw_err)
        }
    }
    err
}

fn parse_ip(operation: &'static str, query: &QueryPairs) -> Result<Ipv4Addr, GatewayError> {
    validate_ipv4(first_ip(query))
        .map_err(|err| inspect_err(operation, err.into()))
}

/// `GET /?ip=`: answers `authorized` or `unauthorized` from the alias rows.
#[instrument(skip(app))]
pub async fn check_ip(
    State(app): State<Arc<App>>,
    Query(query): Query<QueryPairs>,
) -> Result<&'static str, GatewayError> {
    let ip = parse_ip(CHECK, &query)?;
    info!(msg = "Received request to check IP", %ip);

    let authorized = is_authorized(&app.firewall, ip)
        .await
        .map_err(|err| inspect_err(CHECK, err.into()))?;

    let outcome = if authorized {
        "authorized"
    } else {
        "unauthorized"
    };
    count(CHECK, outcome);
    info!(msg = "Checked IP", %ip, outcome);

    Ok(outcome)
}

/// `POST /?ip=`: adds the address to the alias.
#[instrument(skip(app))]
pub async fn authorize_ip(
    State(app): State<Arc<App>>,
    Query(query): Query<QueryPairs>,
) -> Result<StatusCode, GatewayError> {
    let ip = parse_ip(AUTHORIZE, &query)?;
    info!(msg = "Received request to authorize IP", %ip);

    authorize(&app.firewall, ip)
        .await
        .map_err(|err| inspect_err(AUTHORIZE, err.into()))?;

    count(AUTHORIZE, "authorized");
    info!(msg = "Authorized IP", %ip);

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::first_ip;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_ip_wins() {
        let query = pairs(&[("ip", "10.0.0.5"), ("ip", "1.1.1.1")]);
        assert_eq!(first_ip(&query), "10.0.0.5");
    }

    #[test]
    fn ignores_other_keys() {
        let query = pairs(&[("addr", "1.1.1.1"), ("ip", "10.0.0.5")]);
        assert_eq!(first_ip(&query), "10.0.0.5");
        assert_eq!(first_ip(&pairs(&[("addr", "1.1.1.1")])), "");
        assert_eq!(first_ip(&pairs(&[])), "");
    }
}
