use crate::{
    ACCESS_KEY_PLACEHOLDER, DISPLAY_NAME_PLACEHOLDER, ENDPOINT_PLACEHOLDER, TEMPLATE_PROJECT_HOSTS,
};

use std::fmt;

use serde::Deserialize;

/// Everything needed to talk to one tenant's hosted backend.
///
/// `access_key` is the project's anon key. It is passed verbatim to the auth
/// backend and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionProfile {
    pub endpoint: String,
    pub access_key: String,
    pub display_name: String,
}

/// The fields of a [`ConnectionProfile`], used to report validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Endpoint,
    AccessKey,
    DisplayName,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Endpoint,
        ProfileField::AccessKey,
        ProfileField::DisplayName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Endpoint => "endpoint",
            ProfileField::AccessKey => "access_key",
            ProfileField::DisplayName => "display_name",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            ProfileField::Endpoint => ENDPOINT_PLACEHOLDER,
            ProfileField::AccessKey => ACCESS_KEY_PLACEHOLDER,
            ProfileField::DisplayName => DISPLAY_NAME_PLACEHOLDER,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConnectionProfile {
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            display_name: display_name.into(),
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Endpoint => &self.endpoint,
            ProfileField::AccessKey => &self.access_key,
            ProfileField::DisplayName => &self.display_name,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Endpoint => &mut self.endpoint,
            ProfileField::AccessKey => &mut self.access_key,
            ProfileField::DisplayName => &mut self.display_name,
        }
    }

    pub(crate) fn set_field(&mut self, field: ProfileField, value: String) {
        *self.field_mut(field) = value;
    }

    /// Fields that are empty or still hold a template placeholder.
    pub fn invalid_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| is_unset(*field, self.field(*field)))
            .collect()
    }

    /// True when every field is non-empty and none is a placeholder.
    ///
    /// This is configuration hygiene, not a security check: the access key's
    /// content is never inspected.
    pub fn is_valid(&self) -> bool {
        ProfileField::ALL
            .into_iter()
            .all(|field| !is_unset(field, self.field(field)))
    }

    /// Merge the fields present in `partial`, leaving the rest untouched.
    pub fn merge(&mut self, partial: ProfileOverride) {
        if let Some(endpoint) = partial.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(access_key) = partial.access_key {
            self.access_key = access_key;
        }
        if let Some(display_name) = partial.display_name {
            self.display_name = display_name;
        }
    }
}

fn is_unset(field: ProfileField, value: &str) -> bool {
    value.is_empty() || value == field.placeholder() || TEMPLATE_PROJECT_HOSTS.contains(&value)
}

impl fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("endpoint", &self.endpoint)
            .field("access_key", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// A partial profile. `None` fields are left as they are on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverride {
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub display_name: Option<String>,
}

impl ProfileOverride {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}
