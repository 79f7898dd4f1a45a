//! The host-side capability interface the embedder supplies.

/// The two capabilities a tether guest imports, expressed in Rust types.
///
/// The linker marshals pointer/length arguments in and out of guest
/// memory; implementations only see owned values. An `Err` from either
/// method becomes a wasm trap that unwinds the in-flight guest call, with
/// the error kept as the trap's source.
pub trait HostCapabilities: Send + Sync + 'static {
    /// HTTP GET against `url`, returning the response body bytes.
    ///
    /// No HTTP semantics cross the wire: the guest receives body bytes or
    /// a trap, never a status code.
    fn get(&self, url: &str) -> anyhow::Result<Vec<u8>>;

    /// Decode `bytes` into text.
    ///
    /// The default is strict UTF-8. Override to accept other encodings or
    /// to decode lossily.
    fn bytes_to_string(&self, bytes: &[u8]) -> anyhow::Result<String> {
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }
}
