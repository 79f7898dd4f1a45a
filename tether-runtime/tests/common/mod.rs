//! Shared capability doubles for the runtime integration tests.

// Each test binary uses its own subset of these.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tether_runtime::HostCapabilities;

/// Serves a fixed body and records every URL it was asked for.
pub struct FixedCapabilities {
    body: Vec<u8>,
    pub urls: Mutex<Vec<String>>,
}

impl FixedCapabilities {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl HostCapabilities for FixedCapabilities {
    fn get(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

/// Fails the first `failures` calls, then serves the fixed body.
pub struct FlakyCapabilities {
    failures: AtomicUsize,
    body: Vec<u8>,
}

impl FlakyCapabilities {
    pub fn new(failures: usize, body: impl Into<Vec<u8>>) -> Self {
        Self {
            failures: AtomicUsize::new(failures),
            body: body.into(),
        }
    }
}

impl HostCapabilities for FlakyCapabilities {
    fn get(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            anyhow::bail!("connection refused: {url}");
        }
        Ok(self.body.clone())
    }
}

/// Always fails with a fixed message.
pub struct FailingCapabilities {
    pub message: &'static str,
}

impl HostCapabilities for FailingCapabilities {
    fn get(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
        anyhow::bail!("{}", self.message)
    }
}

/// Overrides the decoder to replace invalid sequences instead of failing.
pub struct LossyCapabilities {
    body: Vec<u8>,
}

impl LossyCapabilities {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

impl HostCapabilities for LossyCapabilities {
    fn get(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
        Ok(self.body.clone())
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> anyhow::Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
