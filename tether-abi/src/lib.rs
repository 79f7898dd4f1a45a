//! Wire-level ABI contract for tether guest modules.
//!
//! This crate is the single source of truth for everything both sides of the
//! host/guest boundary must agree on: the import and export names, the packed
//! `i64` pointer/length return convention, and the guest-side buffer helpers
//! that implement the allocation handshake.
//!
//! Guests use `wasm32-unknown-unknown` as the target architecture. The raw
//! import declarations are only compiled for that target; everything else
//! builds anywhere so embedders and native tests can share the contract.
//!
//! You are likely to be interested in the sibling crates:
//! * [`tether`](../tether): export bindings for guest modules.
//! * [`tether-host`](../tether_host): the host-capability interface guest code programs against.
//! * [`tether-runtime`](../tether_runtime): a native wasmtime embedder for tether guests.

pub mod buffer;
#[cfg(target_arch = "wasm32")]
pub mod imports;
pub mod names;
pub mod wire;

pub use wire::{pack_ptr_len, unpack_ptr_len};
