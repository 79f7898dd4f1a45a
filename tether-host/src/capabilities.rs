//! The host capabilities a guest module imports.

/// The two functions the host environment must supply at instantiation.
///
/// Implementations are infallible by design: on the real wire a host
/// failure is a trap that unwinds the guest call and never returns, so
/// there is no error channel to model here. Test doubles simulate a trap
/// by panicking.
pub trait Capabilities {
    /// HTTP GET against `url`, returning the response body bytes.
    ///
    /// The URL is passed to the host byte-identical; no validation or
    /// normalization happens on the guest side.
    fn get(&self, url: &str) -> Vec<u8>;

    /// Decode `bytes` into text.
    ///
    /// The host decoder is assumed to treat the bytes as UTF-8; behavior
    /// on invalid sequences is the host's to define.
    fn bytes_to_string(&self, bytes: Vec<u8>) -> String;
}

/// [`Capabilities`] backed by the real host imports.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmHost;

#[cfg(target_arch = "wasm32")]
impl Capabilities for WasmHost {
    fn get(&self, url: &str) -> Vec<u8> {
        call_import(url.as_bytes(), |ptr, len| unsafe {
            tether_abi::imports::get(ptr, len)
        })
    }

    fn bytes_to_string(&self, bytes: Vec<u8>) -> String {
        let decoded = call_import(&bytes, |ptr, len| unsafe {
            tether_abi::imports::bytes_to_string(ptr, len)
        });
        // The host decoder produced this text; its bytes are UTF-8.
        unsafe { String::from_utf8_unchecked(decoded) }
    }
}

/// Write `argument` into a fresh guest buffer, invoke the import, and
/// reclaim the packed result buffer the host allocated for us.
#[cfg(target_arch = "wasm32")]
fn call_import(argument: &[u8], import: impl FnOnce(i32, i32) -> i64) -> Vec<u8> {
    let (ptr, len) = tether_abi::buffer::write_bytes(argument);
    let packed = import(ptr as i32, len as i32);
    // The host copied the argument out before returning.
    unsafe { tether_abi::buffer::free(ptr, len) };
    let (result_ptr, result_len) = tether_abi::unpack_ptr_len(packed);
    unsafe { tether_abi::buffer::take_bytes(result_ptr as *mut u8, result_len as usize) }
}
