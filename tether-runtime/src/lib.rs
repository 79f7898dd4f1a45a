//! `tether-runtime`: native wasmtime embedder for tether guest modules.
//!
//! Loads a guest module, validates its export/import surface against the
//! wire contract in `tether-abi`, supplies the two host capabilities
//! (`http.get` and `typeConversion.bytesToString`), and calls the guest's
//! entry points:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tether_runtime::{GuestModule, HostCapabilities, RuntimeConfig};
//!
//! struct MyHost;
//! impl HostCapabilities for MyHost {
//!     fn get(&self, url: &str) -> anyhow::Result<Vec<u8>> {
//!         // bring your own HTTP client
//!         Ok(format!("fetched {url}").into_bytes())
//!     }
//! }
//!
//! # fn main() -> tether_runtime::Result<()> {
//! let module = GuestModule::from_file("guest.wasm".as_ref(), RuntimeConfig::default())?;
//! let mut instance = module.instantiate(Arc::new(MyHost))?;
//! let text = instance.http_get_string("http://example.test/")?;
//! # Ok(()) }
//! ```
//!
//! A capability failure becomes a wasm trap that unwinds the guest call;
//! the capability's error stays reachable through the returned error chain.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod linker;
pub mod memory;
pub mod runtime;
pub mod validation;

pub use capabilities::HostCapabilities;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use runtime::{GuestInstance, GuestModule};
