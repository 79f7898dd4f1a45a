//! Import and export names, exactly as they appear on the wire.
//!
//! The strings are case-sensitive. The guest bindings emit them as symbol
//! names and the runtime's linker and validator match against them, so they
//! live in one place.

/// Import module carrying the host's text-decoding capability.
pub const IMPORT_MODULE_TYPE_CONVERSION: &str = "typeConversion";

/// Decodes a byte sequence into text. Assumed UTF-8 by convention.
pub const IMPORT_BYTES_TO_STRING: &str = "bytesToString";

/// Import module carrying the host's network capability.
pub const IMPORT_MODULE_HTTP: &str = "http";

/// Performs an HTTP GET and returns the response body bytes.
pub const IMPORT_GET: &str = "get";

/// The guest's linear memory export.
pub const EXPORT_MEMORY: &str = "memory";

/// Guest entry point: fetch a URL, return the body bytes untouched.
pub const EXPORT_HTTP_GET: &str = "httpGet";

/// Guest entry point: fetch a URL, return the body decoded as text.
pub const EXPORT_HTTP_GET_STRING: &str = "httpGetString";

/// Guest allocator export. The embedder calls this to place argument bytes
/// into guest memory before invoking an entry point.
pub const EXPORT_ALLOCATE: &str = "allocate";

/// Guest deallocator export, paired with [`EXPORT_ALLOCATE`].
pub const EXPORT_DEALLOCATE: &str = "deallocate";
