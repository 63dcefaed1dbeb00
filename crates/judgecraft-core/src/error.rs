use thiserror::Error;

/// Failure taxonomy for the tiered judge.
///
/// The two absence variants mean "this capability was never configured" and
/// trigger degradation to a weaker tier. Everything else means an available,
/// configured tier broke and is surfaced to the caller untouched.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("{0} not available")]
    CapabilityAbsent(&'static str),

    #[error("no API credential configured")]
    CredentialAbsent,

    #[error("Failed to parse JSON response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("{0}")]
    TierFailure(String),
}
