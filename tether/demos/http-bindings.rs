//! The canonical tether guest: the whole module is one macro invocation.
//!
//! Build with `--target wasm32-unknown-unknown` and hand the resulting
//! `.wasm` to `tether-runtime`.

tether::export_bindings!();
