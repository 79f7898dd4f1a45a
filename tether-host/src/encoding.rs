//! Decoding of response body payloads.

use crate::{HostError, HostResult};

/// Payload extractor for encodings.
pub trait Extract: Sized {
    /// Convert from a body payload to a value.
    fn extract(body: Vec<u8>) -> HostResult<Self>;
}

impl Extract for Vec<u8> {
    fn extract(body: Vec<u8>) -> HostResult<Self> {
        Ok(body)
    }
}

impl Extract for String {
    fn extract(body: Vec<u8>) -> HostResult<Self> {
        Ok(String::from_utf8(body)?)
    }
}

/// JSON decoding.
///
/// ```rust
/// use tether_host::encoding::{Extract, Json};
///
/// #[derive(serde::Deserialize)]
/// struct Reply {
///     message: String,
/// }
///
/// let Json(reply): Json<Reply> =
///     Extract::extract(br#"{"message":"hello"}"#.to_vec()).unwrap();
/// assert_eq!(reply.message, "hello");
/// ```
pub struct Json<T>(pub T);

impl<T: serde::de::DeserializeOwned> Extract for Json<T> {
    fn extract(body: Vec<u8>) -> HostResult<Self> {
        Ok(Json(serde_json::from_slice(&body).map_err(|e| {
            HostError::MalformedBody(format!("failed to deserialize json: {e}"))
        })?))
    }
}
