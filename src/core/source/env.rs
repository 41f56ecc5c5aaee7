//! Process environment source.

use std::env::VarError;

use super::SecretSource;
use crate::core::domain::Secret;
use crate::error::{Result, SourceError};

/// Reads secrets from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl SecretSource for Env {
    fn lookup(&self, reference: &str) -> Result<Option<Secret>> {
        match std::env::var(reference) {
            Ok(value) => Ok(Some(Secret::new(value))),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                Err(SourceError::NotUnicode(reference.to_string()).into())
            }
        }
    }

    fn describe(&self) -> String {
        "environment".to_string()
    }
}
