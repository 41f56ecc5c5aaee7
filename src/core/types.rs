//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A deployment target name (e.g., sepolia, mainnet).
pub type TargetName = String;

/// A reference to a secret (e.g., ALCHEMY_API_KEY).
///
/// Must be a valid environment variable name. Never the secret itself.
pub type SecretRef = String;

/// An endpoint URL that may contain the `{key}` placeholder.
pub type EndpointTemplate = String;
