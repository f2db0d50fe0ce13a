//! Authentication errors.

/// Why a login or a privileged request was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No bearer token on a privileged request
    #[error("token is missing")]
    MissingCredentials,

    /// Not of the form `<claims>.<signature>`, or undecodable
    #[error("token is malformed")]
    Malformed,

    /// Signature does not match the claims
    #[error("token is invalid")]
    BadSignature,

    #[error("token has expired")]
    Expired,

    /// Unknown staff id or wrong password
    #[error("invalid staff id or password")]
    InvalidLogin,

    /// Valid token, insufficient role
    #[error("access forbidden: insufficient permissions")]
    Forbidden,
}
