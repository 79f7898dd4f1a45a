//! Runtime error types.

/// An alias for Result<T, RuntimeError> for convenience.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Top-level error type for the runtime crate.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Wasmtime engine, compilation, or instantiation error.
    #[error("wasmtime error: {0}")]
    Wasmtime(#[from] anyhow::Error),

    /// Module validation failed (missing exports, unknown imports, wrong
    /// signatures).
    #[error("validation error: {0}")]
    Validation(String),

    /// A required export was absent at call time.
    #[error("missing required export: {0}")]
    MissingExport(&'static str),

    /// Guest memory operation failed (out-of-bounds, bad allocation).
    #[error("memory error: {0}")]
    Memory(String),

    /// The guest's `httpGetString` returned bytes that are not valid
    /// UTF-8.
    #[error("text result is not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The guest call trapped. A failing host capability surfaces here,
    /// with the capability's error reachable through the source chain.
    #[error("guest trapped: {0}")]
    Trap(anyhow::Error),

    /// Fuel exhausted during a guest call.
    #[error("fuel exhausted (instruction limit)")]
    FuelExhausted,
}
