//! Domain types.

mod endpoint;
mod resolved;
mod secret;
mod target;
mod version;

pub use endpoint::Endpoint;
pub use resolved::ResolvedConfig;
pub use secret::Secret;
pub use target::{CompilerSettings, DeploymentTarget, ExplorerCredential, Optimizer};
pub use version::Version;
