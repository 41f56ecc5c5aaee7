//! Test fixtures and constants.

/// Every reference used by the fixtures; cleared from child environments.
pub const ALL_REFERENCES: &[&str] = &[
    "ALCHEMY_API_KEY",
    "SEPOLIA_PRIVATE_KEY",
    "ETHERSCAN_API_KEY",
];

/// Secrets satisfying [`SEPOLIA_CONFIG`].
pub const SEPOLIA_SECRETS: &[(&str, &str)] = &[
    ("ALCHEMY_API_KEY", "HEkBF6B8pRZFnRDxiwpMsc8HQe0cHkf"),
    (
        "SEPOLIA_PRIVATE_KEY",
        "2991dc4a0b41ab8233d9299e570a1eae57b79412934677c50b71e36800e68dba",
    ),
    ("ETHERSCAN_API_KEY", "D3F8CM2KFS8X443YVR7T9SXUEA4A6ZM4CT"),
];

/// A target file with a keyed Sepolia endpoint, a local node and an explorer.
pub const SEPOLIA_CONFIG: &str = r#"
[quay]
version = "0.1.0"
default_target = "sepolia"

[compiler]
version = "0.8.28"

[compiler.optimizer]
enabled = true
runs = 200

[[targets]]
name = "sepolia"
url = "https://eth-sepolia.g.alchemy.com/v2/{key}"
credential = "ALCHEMY_API_KEY"
accounts = ["SEPOLIA_PRIVATE_KEY"]
chain_id = 11155111

[[targets]]
name = "local"
url = "http://127.0.0.1:8545"
compiler = "0.8.24"

[explorer]
api_key = "ETHERSCAN_API_KEY"
"#;

/// A target file declaring the same target name twice.
pub const DUPLICATE_CONFIG: &str = r#"
[quay]
version = "0.1.0"

[compiler]
version = "0.8.28"

[[targets]]
name = "local"
url = "http://127.0.0.1:8545"

[[targets]]
name = "local"
url = "http://127.0.0.1:9545"
"#;

/// A target file with a non-semver compiler version.
pub const BAD_VERSION_CONFIG: &str = r#"
[quay]
version = "0.1.0"

[compiler]
version = "abc"
"#;

/// A target file with a literal secret where a reference belongs.
pub const LITERAL_SECRET_CONFIG: &str = r#"
[quay]
version = "0.1.0"

[compiler]
version = "0.8.28"

[explorer]
api_key = "D3F8CM2KFS8X443YVR7T9SXUEA4A6ZM4CT"
"#;
