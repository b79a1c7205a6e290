use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::debug;

use crate::resolver::ProxySettings;
use crate::util::lock_unpoisoned;

/// Name of the process-global property carrying the system proxy host.
pub const HTTP_PROXY_HOST_PROPERTY: &str = "HTTP_PROXY_HOST";
/// Name of the process-global property carrying the system proxy port.
pub const HTTP_PROXY_PORT_PROPERTY: &str = "HTTP_PROXY_PORT";

/// Process-global string properties describing the system proxy.
pub trait SystemProperties: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads system properties from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSystemProperties;

impl SystemProperties for EnvSystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of system properties, mutable after construction. Lets
/// tests model live property changes without touching the process
/// environment.
#[derive(Debug, Default)]
pub struct StaticSystemProperties {
    values: Mutex<HashMap<String, String>>,
}

impl StaticSystemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        lock_unpoisoned(&self.values).insert(name.to_owned(), value.to_owned());
    }

    pub fn clear(&self, name: &str) {
        lock_unpoisoned(&self.values).remove(name);
    }
}

impl SystemProperties for StaticSystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        lock_unpoisoned(&self.values).get(name).cloned()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum CacheState {
    Unset,
    Saved(Option<ProxySettings>),
}

/// Populate-once snapshot of the system proxy, taken before anything in
/// the process can mutate the proxy properties as a side effect.
///
/// A snapshot of "no system proxy" is itself a saved state: once taken
/// it pins that absence, and later live values are ignored until
/// [`reset`](Self::reset).
#[derive(Debug)]
pub struct SystemProxyCache {
    state: Mutex<CacheState>,
}

impl SystemProxyCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::Unset),
        }
    }

    /// The process-wide cache used by
    /// [`ProxyResolver::from_store`](crate::ProxyResolver::from_store).
    pub fn shared() -> Arc<SystemProxyCache> {
        static SHARED: OnceLock<Arc<SystemProxyCache>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(SystemProxyCache::new()))
            .clone()
    }

    /// Stores the value produced by `read` unless a snapshot already
    /// exists; returns whether this call populated the cache. The lock
    /// is held across the check and the read so two racing callers
    /// cannot both observe "unset".
    pub fn save_once<F>(&self, read: F) -> bool
    where
        F: FnOnce() -> Option<ProxySettings>,
    {
        let mut state = lock_unpoisoned(&self.state);
        if matches!(*state, CacheState::Saved(_)) {
            return false;
        }
        let saved = read();
        debug!(saved = ?saved, "saved system proxy snapshot");
        *state = CacheState::Saved(saved);
        true
    }

    /// `None` while no snapshot has been taken; `Some(saved)` after,
    /// where `saved` is the system proxy observed at snapshot time
    /// (possibly absent).
    pub fn snapshot(&self) -> Option<Option<ProxySettings>> {
        match &*lock_unpoisoned(&self.state) {
            CacheState::Unset => None,
            CacheState::Saved(saved) => Some(saved.clone()),
        }
    }

    /// Discards the snapshot so the next save observes live values
    /// again. Test and embedder escape hatch; the resolver never calls
    /// it.
    pub fn reset(&self) {
        *lock_unpoisoned(&self.state) = CacheState::Unset;
    }
}

impl Default for SystemProxyCache {
    fn default() -> Self {
        Self::new()
    }
}
