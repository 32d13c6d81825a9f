use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.backend_timeout, Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));
}

// =============================================================================
// PORT
// =============================================================================

#[test]
fn port_parses_and_trims() {
    let config = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn port_rejects_garbage() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn port_rejects_out_of_range() {
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

// =============================================================================
// BACKEND_URL
// =============================================================================

#[test]
fn backend_url_trailing_slashes_trimmed() {
    let config = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "https://api.school.test//")])).unwrap();
    assert_eq!(config.backend_url, "https://api.school.test");
}

#[test]
fn backend_url_requires_http_scheme() {
    for raw in ["api.school.test", "ftp://api.school.test", "http://", ""] {
        let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBackendUrl(_)), "expected rejection for {raw:?}");
    }
}

// =============================================================================
// BACKEND_TIMEOUT_SECS
// =============================================================================

#[test]
fn timeout_parses() {
    let config = HostConfig::from_lookup(lookup_from(&[("BACKEND_TIMEOUT_SECS", "3")])).unwrap();
    assert_eq!(config.backend_timeout, Duration::from_secs(3));
}

#[test]
fn timeout_rejects_zero_and_garbage() {
    for raw in ["0", "-1", "soon"] {
        let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_TIMEOUT_SECS", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)), "expected rejection for {raw:?}");
    }
}

#[test]
fn config_error_display() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
}
