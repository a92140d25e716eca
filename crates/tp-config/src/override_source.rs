use std::collections::{BTreeMap, HashMap};

/// A flat key/value source consulted by
/// [`TenantRegistry::bulk_override_from_source`](crate::TenantRegistry::bulk_override_from_source).
///
/// Keys follow the `<PREFIX>_<FIELD>` convention, e.g. `DATABASE_1_URL`.
pub trait OverrideSource {
    fn value(&self, key: &str) -> Option<String>;
}

impl OverrideSource for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl OverrideSource for BTreeMap<String, String> {
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Reads overrides from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn value(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
