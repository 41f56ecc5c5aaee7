//! Semantic version type.
//!
//! Compiler versions must be full `MAJOR.MINOR.PATCH` versions with optional
//! pre-release and build metadata.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ResolveError;

/// A parsed semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// Major component
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor component
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch component
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers (empty for a release)
    pub fn pre(&self) -> &[String] {
        &self.pre
    }

    /// Build metadata identifiers
    pub fn build(&self) -> &[String] {
        &self.build
    }
}

impl FromStr for Version {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ResolveError::InvalidVersion {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if s.is_empty() {
            return Err(invalid("version is empty"));
        }

        let (rest, build) = match s.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (s, None),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid("expected MAJOR.MINOR.PATCH"));
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = parse_numeric(part).map_err(|reason| invalid(&reason))?;
        }

        let pre = match pre {
            Some(pre) => parse_identifiers(pre, true).map_err(|reason| invalid(&reason))?,
            None => Vec::new(),
        };
        let build = match build {
            Some(build) => parse_identifiers(build, false).map_err(|reason| invalid(&reason))?,
            None => Vec::new(),
        };

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            pre,
            build,
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_numeric(part: &str) -> Result<u64, String> {
    if part.is_empty() {
        return Err("empty version component".to_string());
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{}' is not a number", part));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(format!("'{}' has a leading zero", part));
    }
    part.parse()
        .map_err(|_| format!("'{}' is out of range", part))
}

fn parse_identifiers(raw: &str, numeric_no_leading_zero: bool) -> Result<Vec<String>, String> {
    raw.split('.')
        .map(|ident| {
            if ident.is_empty() {
                return Err("empty identifier".to_string());
            }
            if !ident.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                return Err(format!("invalid identifier '{}'", ident));
            }
            let numeric = ident.bytes().all(|b| b.is_ascii_digit());
            if numeric_no_leading_zero && numeric && ident.len() > 1 && ident.starts_with('0') {
                return Err(format!("identifier '{}' has a leading zero", ident));
            }
            Ok(ident.to_string())
        })
        .collect()
}
