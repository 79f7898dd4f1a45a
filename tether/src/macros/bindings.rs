#[cfg(target_arch = "wasm32")]
use tether_host::Capabilities;

/// Emit the guest export surface.
///
/// Invoke once in a `cdylib` guest crate. The expansion exports `httpGet`,
/// `httpGetString`, `allocate`, and `deallocate` under their wire names;
/// `memory` is exported by the toolchain for any wasm32 cdylib. Everything
/// emitted is gated to `wasm32`, so the same crate builds natively for
/// tests.
///
/// **Default host capabilities:**
/// ```rust,ignore
/// tether::export_bindings!();
/// ```
///
/// **Custom capabilities** (any `Capabilities + Default` type):
/// ```rust,ignore
/// tether::export_bindings!(MyCaps);
/// ```
#[macro_export]
macro_rules! export_bindings {
    () => {
        $crate::export_bindings!($crate::__private::WasmHost);
    };
    ($capabilities:ty) => {
        const _: () = {
            #[cfg(target_arch = "wasm32")]
            #[unsafe(export_name = "httpGet")]
            extern "C" fn __tether_http_get(ptr: i32, len: i32) -> i64 {
                $crate::__private::export_http_get::<$capabilities>(ptr, len)
            }

            #[cfg(target_arch = "wasm32")]
            #[unsafe(export_name = "httpGetString")]
            extern "C" fn __tether_http_get_string(ptr: i32, len: i32) -> i64 {
                $crate::__private::export_http_get_string::<$capabilities>(ptr, len)
            }

            #[cfg(target_arch = "wasm32")]
            #[unsafe(export_name = "allocate")]
            extern "C" fn __tether_allocate(len: i32) -> i32 {
                $crate::__private::export_allocate(len)
            }

            #[cfg(target_arch = "wasm32")]
            #[unsafe(export_name = "deallocate")]
            extern "C" fn __tether_deallocate(ptr: i32, len: i32) {
                $crate::__private::export_deallocate(ptr, len)
            }
        };
    };
}

/// Take ownership of a URL argument the embedder wrote through `allocate`.
///
/// A non-UTF-8 URL panics, which traps the guest call; there is no value
/// error channel on the wire.
#[cfg(target_arch = "wasm32")]
fn take_url(ptr: i32, len: i32) -> String {
    let bytes = unsafe { tether_abi::buffer::take_bytes(ptr as usize as *mut u8, len as usize) };
    match String::from_utf8(bytes) {
        Ok(url) => url,
        Err(_) => panic!("url argument is not valid utf-8"),
    }
}

/// Template behind the emitted `httpGet` export.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn export_http_get<C: Capabilities + Default>(ptr: i32, len: i32) -> i64 {
    let url = take_url(ptr, len);
    let body = tether_host::http::get_with(&C::default(), &url);
    tether_abi::buffer::return_bytes(body)
}

/// Template behind the emitted `httpGetString` export.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn export_http_get_string<C: Capabilities + Default>(ptr: i32, len: i32) -> i64 {
    let url = take_url(ptr, len);
    let text = tether_host::http::get_string_with(&C::default(), &url);
    tether_abi::buffer::return_string(text)
}

/// Template behind the emitted `allocate` export.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn export_allocate(len: i32) -> i32 {
    tether_abi::buffer::alloc(len as usize) as i32
}

/// Template behind the emitted `deallocate` export.
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn export_deallocate(ptr: i32, len: i32) {
    unsafe { tether_abi::buffer::free(ptr as usize as *mut u8, len as usize) }
}

#[cfg(test)]
mod tests {
    // Attributes take literal strings, so the macro spells the export names
    // out. Keep them pinned to the wire contract.
    #[test]
    fn emitted_export_names_match_the_wire_contract() {
        assert_eq!(tether_abi::names::EXPORT_HTTP_GET, "httpGet");
        assert_eq!(tether_abi::names::EXPORT_HTTP_GET_STRING, "httpGetString");
        assert_eq!(tether_abi::names::EXPORT_ALLOCATE, "allocate");
        assert_eq!(tether_abi::names::EXPORT_DEALLOCATE, "deallocate");
    }
}
