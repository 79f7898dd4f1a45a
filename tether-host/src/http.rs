//! The pass-through entry points over the host capabilities.
//!
//! The `*_with` functions carry the actual semantics and are generic over
//! [`Capabilities`] so they test natively; the plain functions are wasm32
//! conveniences over the real host imports.

use crate::HostResult;
use crate::capabilities::Capabilities;
use crate::encoding::{Extract, Json};

/// HTTP GET, returning the body bytes exactly as the host produced them.
pub fn get_with<C: Capabilities>(caps: &C, url: &str) -> Vec<u8> {
    caps.get(url)
}

/// HTTP GET, piping the body through the host's text decoder.
///
/// Strict composition: the bytes `get` produced go to `bytes_to_string`
/// unmodified, and the decoded text comes back unmodified.
pub fn get_string_with<C: Capabilities>(caps: &C, url: &str) -> String {
    let body = caps.get(url);
    caps.bytes_to_string(body)
}

/// HTTP GET, decoding the body as JSON on the guest side.
pub fn get_json_with<C, T>(caps: &C, url: &str) -> HostResult<T>
where
    C: Capabilities,
    T: serde::de::DeserializeOwned,
{
    let Json(value) = Json::<T>::extract(caps.get(url))?;
    Ok(value)
}

/// HTTP GET via the real host imports.
///
/// ```rust,ignore
/// let body = tether_host::http::get("http://example.test/");
/// ```
#[cfg(target_arch = "wasm32")]
pub fn get(url: &str) -> Vec<u8> {
    get_with(&crate::WasmHost, url)
}

/// HTTP GET via the real host imports, decoded to text by the host.
#[cfg(target_arch = "wasm32")]
pub fn get_string(url: &str) -> String {
    get_string_with(&crate::WasmHost, url)
}

/// HTTP GET via the real host imports, decoded as JSON on the guest side.
#[cfg(target_arch = "wasm32")]
pub fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> HostResult<T> {
    get_json_with(&crate::WasmHost, url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Returns a fixed body and records every URL it was asked for.
    struct FixedBody {
        body: Vec<u8>,
        urls: RefCell<Vec<String>>,
    }

    impl FixedBody {
        fn new(body: impl Into<Vec<u8>>) -> Self {
            Self {
                body: body.into(),
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Capabilities for FixedBody {
        fn get(&self, url: &str) -> Vec<u8> {
            self.urls.borrow_mut().push(url.to_string());
            self.body.clone()
        }

        fn bytes_to_string(&self, bytes: Vec<u8>) -> String {
            String::from_utf8(bytes).expect("decoder received invalid utf-8")
        }
    }

    /// Simulates a host trap: the capability never returns.
    struct Trapping;

    impl Capabilities for Trapping {
        fn get(&self, _url: &str) -> Vec<u8> {
            panic!("host get trapped")
        }

        fn bytes_to_string(&self, _bytes: Vec<u8>) -> String {
            panic!("host decoder trapped")
        }
    }

    #[test]
    fn get_returns_host_bytes_unmodified() {
        let caps = FixedBody::new(vec![72, 105]);
        assert_eq!(get_with(&caps, "http://example.test/"), vec![72, 105]);
    }

    #[test]
    fn get_string_is_decode_of_get() {
        let caps = FixedBody::new(vec![72, 105]);
        assert_eq!(get_string_with(&caps, "http://example.test/"), "Hi");
        // Same composition the long way around.
        let decoded = caps.bytes_to_string(get_with(&caps, "http://example.test/"));
        assert_eq!(decoded, "Hi");
    }

    #[test]
    fn url_reaches_the_capability_byte_identical() {
        let caps = FixedBody::new(Vec::new());
        let url = "http://example.test/päth?q=ünïcode";
        get_with(&caps, url);
        get_string_with(&caps, url);
        assert_eq!(*caps.urls.borrow(), vec![url.to_string(), url.to_string()]);
    }

    #[test]
    fn empty_body_stays_empty() {
        let caps = FixedBody::new(Vec::new());
        assert!(get_with(&caps, "http://example.test/").is_empty());
        assert_eq!(get_string_with(&caps, "http://example.test/"), "");
    }

    #[test]
    fn repeated_calls_reinvoke_the_capability() {
        let caps = FixedBody::new(b"body".to_vec());
        for _ in 0..3 {
            get_with(&caps, "http://example.test/");
        }
        assert_eq!(caps.urls.borrow().len(), 3);
    }

    #[test]
    fn json_body_decodes_on_the_guest_side() {
        #[derive(serde::Deserialize)]
        struct Reply {
            message: String,
        }

        let caps = FixedBody::new(br#"{"message":"Hi"}"#.to_vec());
        let reply: Reply = get_json_with(&caps, "http://example.test/").unwrap();
        assert_eq!(reply.message, "Hi");

        let caps = FixedBody::new(b"not json".to_vec());
        assert!(get_json_with::<_, Reply>(&caps, "http://example.test/").is_err());
    }

    #[test]
    #[should_panic(expected = "host get trapped")]
    fn capability_failure_propagates_through_get() {
        get_with(&Trapping, "http://example.test/");
    }

    #[test]
    #[should_panic(expected = "host get trapped")]
    fn capability_failure_propagates_through_get_string() {
        get_string_with(&Trapping, "http://example.test/");
    }
}
