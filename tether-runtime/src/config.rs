//! Runtime configuration.

/// Configuration for instantiated guest modules.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Maximum linear memory pages (1 page = 64 KiB).
    /// Default: 256 pages = 16 MiB.
    pub max_memory_pages: u32,

    /// Wasmtime fuel limit (instruction metering) per instance, or `None`
    /// to run unmetered.
    pub fuel_limit: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_memory_pages: 256, // 16 MiB
            fuel_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RuntimeConfig::default();
        assert_eq!(config.max_memory_pages, 256);
        assert!(config.fuel_limit.is_none());
    }
}
