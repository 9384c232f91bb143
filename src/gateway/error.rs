use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::opnsense_api::FirewallError;
use crate::validation::InvalidIp;

/// Why a request could not be answered. Responses never carry the detail:
/// both variants answer with an empty body.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    InvalidIp(#[from] InvalidIp),

    #[error(transparent)]
    Firewall(#[from] FirewallError),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidIp(_) => StatusCode::FORBIDDEN,
            Self::Firewall(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Self::InvalidIp(_) => "invalid_ip",
            Self::Firewall(_) => "firewall_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
