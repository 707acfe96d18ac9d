//! Application-level constants and environment-derived settings.

/// Crate name, used in the default log filter.
pub const APP_NAME: &str = "medsafe";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default completion endpoint (OpenAI-compatible).
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default completion model.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Output-length cap per completion, to bound cost and latency.
pub const MAX_COMPLETION_TOKENS: u32 = 512;

/// System-role persona for the completion exchange.
pub const SYSTEM_PERSONA: &str = "You are a helpful medical assistant.";

/// Fixed summary text used when the completion call fails outright.
pub const ANALYSIS_UNAVAILABLE_MESSAGE: &str =
    "Could not analyze medication documents. Please try again later.";

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("warn,{APP_NAME}=info")
}

/// Completion endpoint base URL, overridable via `MEDSAFE_OPENAI_BASE_URL`.
pub fn openai_base_url() -> String {
    std::env::var("MEDSAFE_OPENAI_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string())
}

/// API key for the completion endpoint, from `MEDSAFE_OPENAI_API_KEY`.
/// Empty when unset; the endpoint will reject the request and the caller
/// receives the degraded assessment.
pub fn openai_api_key() -> String {
    std::env::var("MEDSAFE_OPENAI_API_KEY").unwrap_or_default()
}
