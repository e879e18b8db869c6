//! Build-time configuration for the browser client.
//!
//! TRADE-OFFS
//! ==========
//! The API base URL is baked in at compile time (`MENTORHUB_API_URL`) because
//! a static WASM bundle has no process environment to read at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `MENTORHUB_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Base URL every REST call is joined onto.
pub fn api_base_url() -> &'static str {
    resolve_api_url(option_env!("MENTORHUB_API_URL"))
}

fn resolve_api_url(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}
