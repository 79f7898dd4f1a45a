//! Raw host import declarations.
//!
//! Only compiled for `wasm32` targets; native builds (including test
//! binaries) must never link against these symbols. Callers should go
//! through the capability interface in `tether-host` rather than invoking
//! these directly.

#[link(wasm_import_module = "typeConversion")]
unsafe extern "C" {
    /// Decode `len` bytes at `ptr` into text.
    ///
    /// Returns a packed pointer/length of the produced UTF-8 text, newly
    /// allocated in guest memory through the exported allocator.
    #[link_name = "bytesToString"]
    pub fn bytes_to_string(ptr: i32, len: i32) -> i64;
}

#[link(wasm_import_module = "http")]
unsafe extern "C" {
    /// HTTP GET against the URL at `ptr`/`len`.
    ///
    /// Returns a packed pointer/length of the response body bytes, newly
    /// allocated in guest memory through the exported allocator. A host
    /// failure traps and never returns.
    #[link_name = "get"]
    pub fn get(ptr: i32, len: i32) -> i64;
}
