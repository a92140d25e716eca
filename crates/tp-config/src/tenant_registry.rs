use crate::{
    ACCESS_KEY_SUFFIX, ConfigErrorResult, ConnectionProfile, DISPLAY_NAME_SUFFIX,
    ENDPOINT_SUFFIX, OverrideSource, ProfileField, ProfileOverride, TenantsConfig,
};

use std::collections::{BTreeMap, HashMap};

use log::{debug, info, warn};

/// Result of [`TenantRegistry::override_profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideOutcome {
    Applied,
    /// The key is not registered. Nothing was changed.
    UnknownTenant,
}

/// The outcome of routing a hostname.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    pub tenant_key: &'a str,
    /// False when the hostname fell through to the default tenant.
    pub matched: bool,
    pub profile: &'a ConnectionProfile,
}

#[derive(Debug, Clone)]
struct TenantSlot {
    key: String,
    hostnames: Vec<String>,
    env_prefix: String,
    profile: ConnectionProfile,
}

/// Maps request hostnames to tenant connection profiles.
///
/// The tenant key set is fixed at construction. Profiles under existing keys
/// can be changed with [`override_profile`](Self::override_profile) and
/// [`bulk_override_from_source`](Self::bulk_override_from_source), which take
/// `&mut self`, so they run while the startup routine still owns the registry.
#[derive(Debug, Clone)]
pub struct TenantRegistry {
    tenants: Vec<TenantSlot>,
    routes: HashMap<String, usize>,
    default_index: usize,
}

impl Default for TenantRegistry {
    /// Registry holding the built-in tenants.
    fn default() -> Self {
        Self::build(TenantsConfig::default())
    }
}

impl TenantRegistry {
    pub fn from_config(config: TenantsConfig) -> ConfigErrorResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    // Callers guarantee `config` passed `TenantsConfig::validate`.
    fn build(config: TenantsConfig) -> Self {
        let mut routes = HashMap::new();
        let mut default_index = 0;

        let tenants: Vec<TenantSlot> = config
            .tenants
            .into_iter()
            .enumerate()
            .map(|(index, definition)| {
                if definition.key == config.default_tenant {
                    default_index = index;
                }
                for hostname in &definition.hostnames {
                    routes.insert(hostname.clone(), index);
                }
                TenantSlot {
                    key: definition.key,
                    hostnames: definition.hostnames,
                    env_prefix: definition.env_prefix,
                    profile: definition.profile,
                }
            })
            .collect();

        Self {
            tenants,
            routes,
            default_index,
        }
    }

    /// Route `hostname` to a tenant.
    ///
    /// Matching is exact and case-sensitive. Anything unknown, including the
    /// empty string and `localhost`, gets the default tenant.
    pub fn resolve_tenant(&self, hostname: &str) -> Resolution<'_> {
        let (index, matched) = match self.routes.get(hostname) {
            Some(index) => (*index, true),
            None => (self.default_index, false),
        };
        let slot = &self.tenants[index];

        if !matched {
            info!(
                "Using default tenant '{}' for hostname '{}'",
                slot.key, hostname
            );
        }

        let invalid = slot.profile.invalid_fields();
        if !invalid.is_empty() {
            let fields: Vec<&str> = invalid.iter().map(|field| field.as_str()).collect();
            warn!(
                "Tenant '{}' is not properly configured (unset: {})",
                slot.key,
                fields.join(", ")
            );
        }

        Resolution {
            tenant_key: &slot.key,
            matched,
            profile: &slot.profile,
        }
    }

    /// The profile for `hostname`. Never fails; the profile may still be
    /// invalid, which callers check with [`validate`](Self::validate).
    pub fn resolve(&self, hostname: &str) -> &ConnectionProfile {
        self.resolve_tenant(hostname).profile
    }

    pub fn validate(profile: &ConnectionProfile) -> bool {
        profile.is_valid()
    }

    /// Merge `partial` into the profile stored under `tenant_key`.
    pub fn override_profile(
        &mut self,
        tenant_key: &str,
        partial: ProfileOverride,
    ) -> OverrideOutcome {
        match self.slot_mut(tenant_key) {
            Some(slot) => {
                slot.profile.merge(partial);
                OverrideOutcome::Applied
            }
            None => {
                debug!("Ignoring override for unknown tenant '{}'", tenant_key);
                OverrideOutcome::UnknownTenant
            }
        }
    }

    /// Overwrite profile fields from `<PREFIX>_URL`, `<PREFIX>_ANON_KEY` and
    /// `<PREFIX>_NAME` entries in `source`.
    ///
    /// Absent or empty entries leave the field as it is. Nothing is validated
    /// here. Returns the number of fields written.
    pub fn bulk_override_from_source<S>(&mut self, source: &S) -> usize
    where
        S: OverrideSource + ?Sized,
    {
        let mut written = 0;

        for slot in &mut self.tenants {
            for field in ProfileField::ALL {
                let key = override_key(&slot.env_prefix, field);
                if let Some(value) = source.value(&key)
                    && !value.is_empty()
                {
                    debug!("Tenant '{}': {} set from {}", slot.key, field, key);
                    slot.profile.set_field(field, value);
                    written += 1;
                }
            }
        }

        written
    }

    /// A copy of every profile, keyed by tenant.
    pub fn list_all(&self) -> BTreeMap<String, ConnectionProfile> {
        self.tenants
            .iter()
            .map(|slot| (slot.key.clone(), slot.profile.clone()))
            .collect()
    }

    pub fn profile(&self, tenant_key: &str) -> Option<&ConnectionProfile> {
        self.slot(tenant_key).map(|slot| &slot.profile)
    }

    pub fn contains(&self, tenant_key: &str) -> bool {
        self.slot(tenant_key).is_some()
    }

    pub fn tenant_keys(&self) -> impl Iterator<Item = &str> {
        self.tenants.iter().map(|slot| slot.key.as_str())
    }

    pub fn default_tenant(&self) -> &str {
        &self.tenants[self.default_index].key
    }

    pub fn hostnames(&self, tenant_key: &str) -> Option<&[String]> {
        self.slot(tenant_key).map(|slot| slot.hostnames.as_slice())
    }

    pub fn env_prefix(&self, tenant_key: &str) -> Option<&str> {
        self.slot(tenant_key).map(|slot| slot.env_prefix.as_str())
    }

    fn slot(&self, tenant_key: &str) -> Option<&TenantSlot> {
        self.tenants.iter().find(|slot| slot.key == tenant_key)
    }

    fn slot_mut(&mut self, tenant_key: &str) -> Option<&mut TenantSlot> {
        self.tenants.iter_mut().find(|slot| slot.key == tenant_key)
    }
}

fn override_key(prefix: &str, field: ProfileField) -> String {
    let suffix = match field {
        ProfileField::Endpoint => ENDPOINT_SUFFIX,
        ProfileField::AccessKey => ACCESS_KEY_SUFFIX,
        ProfileField::DisplayName => DISPLAY_NAME_SUFFIX,
    };
    format!("{prefix}_{suffix}")
}
