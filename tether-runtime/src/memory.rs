//! Bounds-checked guest memory access.
//!
//! All helpers validate the pointer/length range against the current
//! memory size before touching it. Ranges come from the guest as u32
//! halves of a packed i64, so overflow checks use `checked_add`.

use crate::error::RuntimeError;

/// Read `len` bytes from guest memory at `ptr`.
pub fn read_bytes(data: &[u8], ptr: u32, len: u32) -> Result<Vec<u8>, RuntimeError> {
    let (start, end) = checked_range(data.len(), ptr, len)?;
    Ok(data[start..end].to_vec())
}

/// Write `bytes` into guest memory at `ptr`.
pub fn write_bytes(data: &mut [u8], ptr: u32, bytes: &[u8]) -> Result<(), RuntimeError> {
    let (start, end) = checked_range(data.len(), ptr, bytes.len() as u32)?;
    data[start..end].copy_from_slice(bytes);
    Ok(())
}

/// Validate `[ptr, ptr + len)` against a memory of `size` bytes.
fn checked_range(size: usize, ptr: u32, len: u32) -> Result<(usize, usize), RuntimeError> {
    let start = ptr as usize;
    let end = start
        .checked_add(len as usize)
        .ok_or_else(|| RuntimeError::Memory(format!("range {ptr}+{len} overflows")))?;
    if end > size {
        return Err(RuntimeError::Memory(format!(
            "range {ptr}+{len} exceeds memory size {size}"
        )));
    }
    Ok((start, end))
}
