//! Target environment and the server-side test-marker policy

/// Header under which callers present the issued token on protected requests.
///
/// This crate only produces the token value; attaching it is up to the host
/// application.
pub const MOBILE_TOKEN_HEADER: &str = "Ik-mobile-token";

/// Environment the client talks to. Selected at construction, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Preprod,
}

impl Environment {
    /// Base URL of the attestation endpoints for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.infomaniak.com/1/attest",
            Environment::Preprod => "https://api.preprod.dev.infomaniak.ch/1/attest",
        }
    }

    /// Whether bypass mode may be honored in this environment.
    ///
    /// Production never allows bypass; a bypass request against production is
    /// not honored and the real attestation path runs.
    pub fn can_bypass_validation(&self) -> bool {
        matches!(self, Environment::Preprod)
    }
}

/// Value of the `force_attest_test` field for the token request, if any.
///
/// The marker tells the server to verify a *real* attestation leniently. It is
/// sent only when the environment permits bypass but the caller went through
/// the real path anyway, i.e. preprod testing of the non-bypass flow. Bypassed
/// calls and production calls never carry it.
pub fn force_attest_test(environment: Environment, bypass_requested: bool) -> Option<String> {
    if environment.can_bypass_validation() && !bypass_requested {
        Some("true".to_string())
    } else {
        None
    }
}
