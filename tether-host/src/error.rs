//! Common guest-side error types.
//!
//! Only decode paths produce these. The entry points themselves are
//! infallible pass-throughs: a host capability failure is a trap that
//! unwinds the guest call and never surfaces as a value.

/// An alias for Result<T, HostError> for convenience.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// An error while decoding a response body on the guest side.
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    /// The body is not valid UTF-8.
    #[error("body is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The body did not decode as the requested structure.
    #[error("malformed body: {0}")]
    MalformedBody(String),
}
