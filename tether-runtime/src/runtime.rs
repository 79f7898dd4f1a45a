//! Module loading and the guest call surface.
//!
//! [`GuestModule`] compiles and validates a guest; [`GuestInstance`] holds
//! one instantiation and drives its entry points through the allocation
//! handshake: write the URL into guest memory via the exported `allocate`,
//! call the typed entry, unpack the returned pointer/length, read the
//! result out, and hand the result buffer back through `deallocate`.

use std::path::Path;
use std::sync::Arc;

use tether_abi::{names, unpack_ptr_len};
use wasmtime::{
    Config, Engine, Instance, Linker, Memory, Module, Store, StoreLimits, StoreLimitsBuilder,
    Trap, WasmParams, WasmResults,
};

use crate::capabilities::HostCapabilities;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::linker::register_capabilities;
use crate::memory;
use crate::validation::validate_module;

/// Per-store state: the embedder's capabilities and the resource limiter.
pub struct StoreData {
    capabilities: Arc<dyn HostCapabilities>,
    limits: StoreLimits,
}

impl StoreData {
    pub(crate) fn capabilities(&self) -> &Arc<dyn HostCapabilities> {
        &self.capabilities
    }
}

/// A compiled, validated guest module.
///
/// Compilation accepts both binary wasm and WAT text. Instantiate as many
/// independent [`GuestInstance`]s from one module as you like.
pub struct GuestModule {
    engine: Engine,
    module: Module,
    config: RuntimeConfig,
}

impl GuestModule {
    /// Compile a guest from wasm bytes or WAT text and validate its
    /// export/import surface.
    pub fn new(bytes: impl AsRef<[u8]>, config: RuntimeConfig) -> Result<Self> {
        let engine = create_engine(&config)?;
        let module = Module::new(&engine, bytes)?;
        validate_module(&module)?;
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Load a guest from a `.wasm` (or `.wat`) file path.
    pub fn from_file(path: &Path, config: RuntimeConfig) -> Result<Self> {
        let engine = create_engine(&config)?;
        let module = Module::from_file(&engine, path)?;
        validate_module(&module)?;
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Instantiate the guest with the given host capabilities.
    pub fn instantiate(
        &self,
        capabilities: Arc<dyn HostCapabilities>,
    ) -> Result<GuestInstance> {
        let limits = StoreLimitsBuilder::new()
            .memory_size(self.config.max_memory_pages as usize * 65536)
            .build();
        let mut store = Store::new(
            &self.engine,
            StoreData {
                capabilities,
                limits,
            },
        );
        store.limiter(|data| &mut data.limits);
        if let Some(fuel) = self.config.fuel_limit {
            store.set_fuel(fuel)?;
        }

        let mut linker = Linker::new(&self.engine);
        register_capabilities(&mut linker)?;

        log::debug!("instantiating guest module");
        let instance = linker.instantiate(&mut store, &self.module)?;
        let memory = instance
            .get_memory(&mut store, names::EXPORT_MEMORY)
            .ok_or(RuntimeError::MissingExport(names::EXPORT_MEMORY))?;

        Ok(GuestInstance {
            store,
            instance,
            memory,
        })
    }
}

/// One instantiation of a guest module.
pub struct GuestInstance {
    store: Store<StoreData>,
    instance: Instance,
    memory: Memory,
}

impl GuestInstance {
    /// Call the guest's `httpGet` entry point: fetch `url` through the
    /// host capability and return the body bytes exactly as the
    /// capability produced them.
    pub fn http_get(&mut self, url: &str) -> Result<Vec<u8>> {
        self.call_entry(names::EXPORT_HTTP_GET, url)
    }

    /// Call the guest's `httpGetString` entry point: fetch `url` and
    /// decode the body through the host's text decoder.
    pub fn http_get_string(&mut self, url: &str) -> Result<String> {
        let bytes = self.call_entry(names::EXPORT_HTTP_GET_STRING, url)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn call_entry(&mut self, name: &'static str, url: &str) -> Result<Vec<u8>> {
        let (arg_ptr, arg_len) = self.write_argument(url.as_bytes())?;
        let entry = self.typed_func::<(i32, i32), i64>(name)?;

        log::debug!("calling guest {name}");
        let packed = entry
            .call(&mut self.store, (arg_ptr, arg_len))
            .map_err(map_call_error)?;

        // The guest consumed the argument buffer; only the result buffer
        // comes back to us.
        let (ptr, len) = unpack_ptr_len(packed);
        let bytes = memory::read_bytes(self.memory.data(&self.store), ptr, len)?;
        self.deallocate(ptr, len)?;
        Ok(bytes)
    }

    /// Allocate a guest buffer through the exported allocator and copy
    /// `bytes` into it. Ownership of the buffer passes to the entry point
    /// that receives it.
    fn write_argument(&mut self, bytes: &[u8]) -> Result<(i32, i32)> {
        let len = i32::try_from(bytes.len())
            .map_err(|_| RuntimeError::Memory("argument does not fit in guest memory".into()))?;
        let allocate = self.typed_func::<i32, i32>(names::EXPORT_ALLOCATE)?;
        let ptr = allocate
            .call(&mut self.store, len)
            .map_err(map_call_error)?;
        if ptr == 0 && len > 0 {
            return Err(RuntimeError::Memory(format!(
                "guest allocate returned null for {len} bytes"
            )));
        }
        memory::write_bytes(self.memory.data_mut(&mut self.store), ptr as u32, bytes)?;
        Ok((ptr, len))
    }

    fn deallocate(&mut self, ptr: u32, len: u32) -> Result<()> {
        let deallocate = self.typed_func::<(i32, i32), ()>(names::EXPORT_DEALLOCATE)?;
        deallocate
            .call(&mut self.store, (ptr as i32, len as i32))
            .map_err(map_call_error)?;
        Ok(())
    }

    fn typed_func<P: WasmParams, R: WasmResults>(
        &mut self,
        name: &'static str,
    ) -> Result<wasmtime::TypedFunc<P, R>> {
        self.instance
            .get_typed_func(&mut self.store, name)
            .map_err(|_| RuntimeError::MissingExport(name))
    }
}

/// Engine configuration: fuel metering only when the config asks for it.
fn create_engine(config: &RuntimeConfig) -> Result<Engine> {
    let mut wasm_config = Config::new();
    wasm_config.consume_fuel(config.fuel_limit.is_some());
    Ok(Engine::new(&wasm_config)?)
}

/// Convert a guest call failure, keeping the capability error (if any)
/// reachable through the trap's source chain.
fn map_call_error(e: anyhow::Error) -> RuntimeError {
    if let Some(trap) = e.downcast_ref::<Trap>() {
        if matches!(trap, Trap::OutOfFuel) {
            return RuntimeError::FuelExhausted;
        }
    }
    RuntimeError::Trap(e)
}
