//! Capability registration via the wasmtime linker.
//!
//! Registers the two host imports under their wire names. Each shim:
//!
//! 1. Reads the argument bytes out of guest memory (bounds-checked)
//! 2. Calls the embedder's [`HostCapabilities`] implementation
//! 3. Re-enters the guest's `allocate` export for a result buffer
//! 4. Copies the result in and returns the packed pointer/length
//!
//! A shim returning `Err` traps the in-flight guest call; the capability
//! error stays attached as the trap's source.

use anyhow::Context;
use tether_abi::{names, pack_ptr_len};
use wasmtime::{Caller, Linker, Memory};

use crate::error::RuntimeError;
use crate::memory;
use crate::runtime::StoreData;

/// Register both capability imports with the linker.
pub fn register_capabilities(linker: &mut Linker<StoreData>) -> Result<(), RuntimeError> {
    register_get(linker)?;
    register_bytes_to_string(linker)?;
    Ok(())
}

fn register_get(linker: &mut Linker<StoreData>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        names::IMPORT_MODULE_HTTP,
        names::IMPORT_GET,
        |mut caller: Caller<'_, StoreData>, ptr: i32, len: i32| -> anyhow::Result<i64> {
            let url_bytes = read_argument(&mut caller, ptr, len)?;
            let url =
                std::str::from_utf8(&url_bytes).context("url argument is not valid utf-8")?;
            log::debug!("http.get {url}");
            let capabilities = caller.data().capabilities().clone();
            let body = capabilities.get(url)?;
            log::trace!("http.get {url} returned {} bytes", body.len());
            write_result(&mut caller, &body)
        },
    )?;
    Ok(())
}

fn register_bytes_to_string(linker: &mut Linker<StoreData>) -> Result<(), RuntimeError> {
    linker.func_wrap(
        names::IMPORT_MODULE_TYPE_CONVERSION,
        names::IMPORT_BYTES_TO_STRING,
        |mut caller: Caller<'_, StoreData>, ptr: i32, len: i32| -> anyhow::Result<i64> {
            let bytes = read_argument(&mut caller, ptr, len)?;
            log::trace!("typeConversion.bytesToString of {} bytes", bytes.len());
            let capabilities = caller.data().capabilities().clone();
            let text = capabilities.bytes_to_string(&bytes)?;
            write_result(&mut caller, text.as_bytes())
        },
    )?;
    Ok(())
}

fn guest_memory(caller: &mut Caller<'_, StoreData>) -> anyhow::Result<Memory> {
    caller
        .get_export(names::EXPORT_MEMORY)
        .and_then(|e| e.into_memory())
        .context("guest has no usable memory export")
}

fn read_argument(
    caller: &mut Caller<'_, StoreData>,
    ptr: i32,
    len: i32,
) -> anyhow::Result<Vec<u8>> {
    let mem = guest_memory(caller)?;
    let bytes = memory::read_bytes(mem.data(&caller), ptr as u32, len as u32)?;
    Ok(bytes)
}

/// Allocate a guest buffer through the exported allocator, copy `bytes`
/// into it, and pack its pointer/length. The guest entry point owns the
/// buffer from here on.
fn write_result(caller: &mut Caller<'_, StoreData>, bytes: &[u8]) -> anyhow::Result<i64> {
    let mem = guest_memory(caller)?;
    let allocate = caller
        .get_export(names::EXPORT_ALLOCATE)
        .and_then(|e| e.into_func())
        .context("guest has no usable allocate export")?
        .typed::<i32, i32>(&*caller)?;

    let len = i32::try_from(bytes.len()).context("result body does not fit in guest memory")?;
    let ptr = allocate.call(&mut *caller, len)?;
    if ptr == 0 && len > 0 {
        anyhow::bail!("guest allocate returned null for {len} bytes");
    }

    // Bounds-checked against the post-allocate memory size; a failed grow
    // inside the guest allocator surfaces here as a trap.
    memory::write_bytes(mem.data_mut(&mut *caller), ptr as u32, bytes)?;
    Ok(pack_ptr_len(ptr as u32, len as u32))
}
