use std::time::Duration;

/// Get the provider base URL from the environment or use the default.
///
/// Override is mainly useful for pointing the client at a local stub.
pub fn get_provider_base_url() -> String {
    std::env::var("STOCKBOARD_BASE_URL")
        .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string())
}

/// Per-request timeout, overridable via STOCKBOARD_TIMEOUT_SECS.
pub fn get_request_timeout() -> Duration {
    let secs = std::env::var("STOCKBOARD_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}
