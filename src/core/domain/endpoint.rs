//! Endpoint type.
//!
//! A resolved network endpoint. When the template carried the `{key}`
//! placeholder the resolved URL contains secret material, so only the
//! template is ever displayed or serialized.

use serde::{Serialize, Serializer};
use zeroize::Zeroizing;

use crate::core::constants::KEY_PLACEHOLDER;

/// A resolved endpoint URL
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    template: String,
    url: Zeroizing<String>,
}

impl Endpoint {
    pub(crate) fn new(template: String, url: String) -> Self {
        Self {
            template,
            url: Zeroizing::new(url),
        }
    }

    /// The URL to connect to, with the credential substituted.
    pub fn expose(&self) -> &str {
        self.url.as_str()
    }

    /// The template as written in the target file
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether a credential was substituted into the URL
    pub fn has_credential(&self) -> bool {
        self.template.contains(KEY_PLACEHOLDER)
    }

    /// The URL with any substituted credential masked.
    pub fn redacted(&self) -> String {
        self.template.replace(KEY_PLACEHOLDER, "***")
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Endpoint").field(&self.redacted()).finish()
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.redacted())
    }
}
