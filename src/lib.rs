//! Quay - deployment-target configuration for smart-contract toolchains.
//!
//! A `.quay.toml` names deployment targets, the compiler version and the
//! block explorer, and refers to every secret by name. At startup the file
//! is resolved against a secret source into an immutable
//! [`ResolvedConfig`](core::domain::ResolvedConfig) for the build/deploy tool.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write a starter .quay.toml
//! │   ├── check         # Resolve and report
//! │   ├── show          # Print the redacted resolved config
//! │   ├── targets       # List targets and their references
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .quay.toml management
//!     ├── domain/       # Secret, Version, Endpoint, ResolvedConfig
//!     ├── resolver      # Raw config -> ResolvedConfig
//!     ├── source/       # Secret sources
//!     │   ├── mod       # SecretSource trait
//!     │   ├── env       # Process environment
//!     │   ├── dotenv    # .env files
//!     │   ├── memory    # In-memory map
//!     │   └── chain     # Ordered fallback
//!     └── validation    # Names, references, endpoints
//! ```
//!
//! # Example
//!
//! ```
//! use quay::core::config::{RawCompiler, RawTarget};
//! use quay::core::resolver::ConfigResolver;
//! use quay::core::source::Memory;
//!
//! let targets = vec![RawTarget {
//!     name: "sepolia".to_string(),
//!     url: "https://host/v2/{key}".to_string(),
//!     credential: Some("ALCHEMY_KEY".to_string()),
//!     accounts: Vec::new(),
//!     chain_id: None,
//!     compiler: None,
//! }];
//! let compiler = RawCompiler { version: "0.8.28".to_string(), optimizer: None };
//! let source = Memory::new().with("ALCHEMY_KEY", "XYZ");
//!
//! let resolved = ConfigResolver::new()
//!     .resolve(&targets, None, &compiler, &source)
//!     .unwrap();
//! assert_eq!(
//!     resolved.target("sepolia").unwrap().endpoint().expose(),
//!     "https://host/v2/XYZ"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
