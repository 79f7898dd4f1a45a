#![deny(missing_docs)]

//! Host capability interface for tether guest modules.
//!
//! This crate is what guest code programs against. The host environment
//! supplies two capabilities at instantiation time, a network GET and a
//! byte-to-text decoder, and this crate exposes them behind the
//! [`Capabilities`] trait so the pass-through logic can be exercised
//! natively with test doubles, without a WASM host in the loop.
//!
//! Guests use `wasm32-unknown-unknown` as the target architecture.
//!
//! You are likely to be interested in the sibling crates:
//! * [`tether`](../tether): export bindings for guest modules.
//! * [`tether-runtime`](../tether_runtime): a native wasmtime embedder for tether guests.

pub mod capabilities;
pub mod encoding;
mod error;
pub mod http;

pub use capabilities::Capabilities;
#[cfg(target_arch = "wasm32")]
pub use capabilities::WasmHost;
pub use error::{HostError, HostResult};
