//! Core library components.
//!
//! This module contains the reusable logic for loading target files,
//! looking up secrets, and resolving them into a validated configuration.

pub mod config;
pub mod constants;
pub mod domain;
pub mod resolver;
pub mod source;
pub mod types;
pub mod validation;
