//! Export bindings for tether WebAssembly guest modules.
//!
//! A guest module is a `cdylib` compiled for `wasm32-unknown-unknown` that
//! imports two host capabilities and exports two entry points plus its
//! linear memory. One macro invocation emits the whole export surface:
//!
//! ```rust,ignore
//! tether::export_bindings!();
//! ```
//!
//! You are likely to be interested in the sibling crates:
//! * [`tether-host`](../tether_host): the host-capability interface guest code programs against.
//! * [`tether-runtime`](../tether_runtime): a native wasmtime embedder for tether guests.

mod macros;

pub use tether_host::{Capabilities, HostError, HostResult};

/// Internal support for macro expansions. Not a public API.
#[doc(hidden)]
pub mod __private {
    pub use tether_abi::buffer::{alloc, free, take_bytes, write_bytes};
    #[cfg(target_arch = "wasm32")]
    pub use tether_abi::buffer::{return_bytes, return_string};
    pub use tether_abi::{names, pack_ptr_len, unpack_ptr_len};
    #[cfg(target_arch = "wasm32")]
    pub use tether_host::WasmHost;
    pub use tether_host::http::{get_string_with, get_with};

    #[cfg(target_arch = "wasm32")]
    pub use crate::macros::bindings::{
        export_allocate, export_deallocate, export_http_get, export_http_get_string,
    };
}
