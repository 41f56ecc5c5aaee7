//! Input validation for quay.
//!
//! Validates target names, secret references and resolved endpoints.

use crate::core::constants::ENDPOINT_SCHEMES;
use crate::error::{ResolveError, Result, ValidationError};

/// References at least this long without an underscore look like pasted keys.
const LITERAL_SECRET_MIN_LEN: usize = 24;

/// Validate a target name.
///
/// Target names must:
/// - Not be empty
/// - Start with an ASCII letter or digit
/// - Contain only ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_target_name(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(ValidationError::EmptyName.into());
    };

    if !first.is_ascii_alphanumeric() {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "must start with a letter or digit".to_string(),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '-' && ch != '_' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!("invalid character '{}' at position {}", ch, i + 1),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a secret reference.
///
/// References must be valid environment variable names:
/// - Only A-Z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// A long reference with no underscore is rejected as well, since that is
/// almost always an API key pasted where its name belongs.
///
/// # Errors
///
/// Returns `ValidationError::InvalidReference` if the reference is invalid.
/// Long references are masked in the error, since they may be secrets.
pub fn validate_reference(reference: &str) -> Result<()> {
    check_reference(reference).map_err(|reason| {
        // Don't echo something that may be the secret itself.
        let shown = if reference.len() >= LITERAL_SECRET_MIN_LEN {
            "***".to_string()
        } else {
            reference.to_string()
        };
        ValidationError::InvalidReference {
            reference: shown,
            reason,
        }
        .into()
    })
}

fn check_reference(reference: &str) -> std::result::Result<(), String> {
    if reference.is_empty() {
        return Err("cannot be empty".to_string());
    }

    if reference.len() >= LITERAL_SECRET_MIN_LEN && !reference.contains('_') {
        return Err(
            "looks like a literal secret; use the name of the variable holding it".to_string(),
        );
    }

    if reference.starts_with(|c: char| c.is_ascii_digit()) {
        return Err("cannot start with a digit".to_string());
    }

    for (i, ch) in reference.chars().enumerate() {
        if !ch.is_ascii_uppercase() && !ch.is_ascii_digit() && ch != '_' {
            return Err(format!(
                "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                ch,
                i + 1
            ));
        }
    }

    Ok(())
}

/// Validate a resolved endpoint URL.
///
/// Checks:
/// - Not empty, no whitespace or control characters
/// - No unresolved `{...}` placeholder
/// - Scheme is http, https, ws or wss
/// - Host is non-empty and well formed, port (if any) is 1-65535
///
/// Error reasons never include the URL itself, since it may carry a
/// substituted credential.
///
/// # Errors
///
/// Returns `ResolveError::InvalidEndpoint` on failure.
pub fn validate_endpoint(target: &str, url: &str) -> Result<()> {
    check_endpoint(url).map_err(|reason| {
        ResolveError::InvalidEndpoint {
            target: target.to_string(),
            reason,
        }
        .into()
    })
}

fn check_endpoint(url: &str) -> std::result::Result<(), String> {
    if url.is_empty() {
        return Err("endpoint is empty".to_string());
    }
    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("endpoint contains whitespace or control characters".to_string());
    }
    if url.contains('{') || url.contains('}') {
        return Err("endpoint contains an unresolved placeholder".to_string());
    }

    let rest = ENDPOINT_SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .ok_or_else(|| "scheme must be one of http, https, ws, wss".to_string())?;

    let authority = rest
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let host_port = match authority.rsplit_once('@') {
        Some((_, host_port)) => host_port,
        None => authority,
    };

    let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
        let (inner, after) = bracketed
            .split_once(']')
            .ok_or_else(|| "unterminated IPv6 literal".to_string())?;
        if inner.is_empty()
            || !inner
                .chars()
                .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
        {
            return Err("invalid IPv6 literal".to_string());
        }
        let port = match after {
            "" => None,
            _ => Some(
                after
                    .strip_prefix(':')
                    .ok_or_else(|| "unexpected characters after IPv6 literal".to_string())?,
            ),
        };
        (None, port)
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (Some(host), Some(port)),
            None => (Some(host_port), None),
        }
    };

    if let Some(host) = host {
        check_host(host)?;
    }

    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(p) if p > 0 => {}
            _ => return Err("port must be a number between 1 and 65535".to_string()),
        }
    }

    Ok(())
}

fn check_host(host: &str) -> std::result::Result<(), String> {
    if host.is_empty() {
        return Err("endpoint has no host".to_string());
    }
    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err("host contains invalid characters".to_string());
    }
    if host.starts_with(['.', '-']) || host.ends_with('-') || host.contains("..") {
        return Err("host is malformed".to_string());
    }
    Ok(())
}
