//! Optional request-level result cache.
//!
//! The engine works without one; callers that replay identical requests can
//! attach a cache at construction. No eviction policy is defined.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::mission::OptimizationResult;

/// Key-value store for completed optimization results.
pub trait WindowCache: Send + Sync {
    fn get(&self, key: &str) -> Option<OptimizationResult>;
    fn put(&self, key: &str, result: OptimizationResult);
}

/// Unbounded in-memory cache.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, OptimizationResult>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, OptimizationResult>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WindowCache for MemoryCache {
    fn get(&self, key: &str) -> Option<OptimizationResult> {
        self.lock().get(key).cloned()
    }

    fn put(&self, key: &str, result: OptimizationResult) {
        self.lock().insert(key.to_string(), result);
    }
}
