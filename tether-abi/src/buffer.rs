//! Guest-side buffer management for the allocation handshake.
//!
//! Buffers crossing the boundary are always newly allocated: the embedder
//! obtains guest memory through the exported `allocate`, and the guest hands
//! results back by leaking a `Vec` and packing its pointer/length. Every
//! buffer handed out here has capacity equal to its length, so the other
//! direction (`take_bytes`, `free`) can reclaim without guessing capacity.
//!
//! These helpers compile for any target so they can be unit tested natively;
//! the `i64`-packing return helpers are wasm32-only because they assume
//! pointers fit in 32 bits.

/// Allocate `len` bytes of guest memory and return the pointer.
///
/// A zero-length allocation is valid and returns the `Vec` dangling
/// sentinel; it is non-null but must not be dereferenced.
#[inline]
pub fn alloc(len: usize) -> *mut u8 {
    let mut buf = Vec::<u8>::with_capacity(len);
    let ptr = buf.as_mut_ptr();
    core::mem::forget(buf);
    ptr
}

/// Free a buffer previously produced by [`alloc`] or [`write_bytes`].
///
/// # Safety
///
/// `ptr` must have come from this allocator with the same `len`, and the
/// buffer must not be used afterwards.
#[inline]
pub unsafe fn free(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    // Length zero: only the capacity is reclaimed, contents are never read.
    drop(unsafe { Vec::from_raw_parts(ptr, 0, len) });
}

/// Reclaim a buffer written by the other side, taking ownership of its
/// contents.
///
/// # Safety
///
/// `ptr` must have come from this allocator with the same `len`, fully
/// initialized, and must not be used afterwards. The allocation handshake
/// guarantees capacity equals length for buffers obtained via `allocate`.
#[inline]
pub unsafe fn take_bytes(ptr: *mut u8, len: usize) -> Vec<u8> {
    if ptr.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { Vec::from_raw_parts(ptr, len, len) }
}

/// Copy `bytes` into a freshly allocated guest buffer, returning its
/// pointer and length.
#[inline]
pub fn write_bytes(bytes: &[u8]) -> (*mut u8, usize) {
    let ptr = alloc(bytes.len());
    if !bytes.is_empty() {
        // Safety: `alloc` reserved exactly `bytes.len()` bytes.
        unsafe {
            core::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr, bytes.len());
        }
    }
    (ptr, bytes.len())
}

/// Leak `bytes` and pack its pointer/length for an export return value.
///
/// The buffer is shrunk so capacity equals length, keeping the reclaim
/// contract of [`take_bytes`] and the exported deallocator.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn return_bytes(mut bytes: Vec<u8>) -> i64 {
    bytes.shrink_to_fit();
    let len = bytes.len();
    let ptr = bytes.as_mut_ptr();
    core::mem::forget(bytes);
    crate::wire::pack_ptr_len(ptr as u32, len as u32)
}

/// Leak `text` and pack its pointer/length for an export return value.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn return_string(text: String) -> i64 {
    return_bytes(text.into_bytes())
}
